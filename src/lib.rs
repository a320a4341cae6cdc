//! # rust-cube
//!
//! A Rubik's cube state engine for interactive, move-by-move play.
//!
//! ## Design Principles
//!
//! 1. **One audited primitive**: every named face move is composed as
//!    reorient-to-front, front quarter-turn (once or three times), and
//!    the exact inverse reorientation. There are no per-face
//!    edge-transfer routines, so the chirality-sensitive geometry lives
//!    in a single place.
//!
//! 2. **Closed vocabularies**: faces, colors, axes, and directions are
//!    exhaustive enums. Move dispatch gets compile-time completeness
//!    checking instead of character comparisons.
//!
//! 3. **Value snapshots**: state capture is a true deep copy owned by
//!    the caller. Undo is a stack of snapshots held by the control
//!    layer, never hidden engine state.
//!
//! ## Modules
//!
//! - `core`: faces, colors, directions, deterministic RNG, errors
//! - `grid`: facelet storage, the two geometric primitives, rendering
//! - `engine`: named moves, scrambling, snapshots, the solved check
//! - `control`: move tokens, macro table, session with undo history
//!
//! The library never prints; terminal I/O lives in the `cube` binary.

pub mod control;
pub mod core;
pub mod engine;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{Axis, Color, CubeError, CubeRng, Direction, FaceId, InvalidConfiguration};

pub use crate::grid::{render, FaceletGrid, Strip};

pub use crate::engine::{CubeEngine, Snapshot};

pub use crate::control::{CommandError, Session, Step};
