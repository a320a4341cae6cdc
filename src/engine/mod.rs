//! Cube engine: named moves, scrambling, snapshots, solved check.
//!
//! `CubeEngine` composes every named face move out of the grid's single
//! front quarter-turn primitive: reorient the whole cube so the target
//! face is Front, turn the front once or three times, reorient back with
//! the exact inverse. One audited primitive instead of six hand-written
//! edge-transfer routines.

pub mod cube;
pub mod snapshot;
mod solved;

pub use cube::CubeEngine;
pub use snapshot::Snapshot;
