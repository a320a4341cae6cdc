//! Caller-owned engine state capture.

use serde::{Deserialize, Serialize};

use crate::grid::FaceletGrid;

/// A deep copy of an engine's observable state.
///
/// Snapshots are owned by the caller, not retained by the engine, and
/// share no storage with the live grid; mutating the engine after
/// capture leaves the snapshot untouched. The control layer stacks
/// these to implement undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) grid: FaceletGrid,
    pub(crate) move_count: u32,
}

impl Snapshot {
    /// Build a snapshot from parts.
    ///
    /// Normally snapshots come from `CubeEngine::get_state`; building
    /// one by hand is how a caller restores an engine to an arbitrary
    /// grid (the solved check polices whether that grid is possible).
    #[must_use]
    pub fn new(grid: FaceletGrid, move_count: u32) -> Self {
        Self { grid, move_count }
    }

    /// The captured grid.
    #[must_use]
    pub fn grid(&self) -> &FaceletGrid {
        &self.grid
    }

    /// The move count at capture time.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}
