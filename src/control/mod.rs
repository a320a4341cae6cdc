//! Interactive control layer: move tokens, macros, undo history.
//!
//! Everything here is glue around the engine's public operations. The
//! engine defines no command vocabulary of its own; this module owns
//! the token grammar and the macro table, and holds the undo stack of
//! caller-owned snapshots. Nothing in this module prints - terminal
//! I/O belongs to the `cube` binary.

pub mod command;
pub mod session;

pub use command::{Step, BUILTIN_COMMANDS};
pub use session::{CommandError, Session};
