//! Engine error taxonomy.
//!
//! Three classes of failure:
//!
//! - `InvalidSize` is fatal to construction and not recoverable.
//! - `InvalidColor` occurs only at the parse boundary; inside the engine
//!   the closed `Color` enum makes unknown symbols unrepresentable.
//! - `InvalidConfiguration` is raised by the solved check for cubes that
//!   look uniform but are physically impossible. It is an expected,
//!   catchable condition during interactive play: the caller reports it
//!   and play continues. The check that raises it never mutates state.
//!
//! Grid contract violations (a row index out of range, a strip of the
//! wrong length) are `assert!` panics, not error values. Every grid call
//! site is internally controlled, so those indicate a bug in move
//! composition rather than bad input.

use thiserror::Error;

/// Errors reported by the cube engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Construction with an unsupported cube dimension.
    #[error("cube size must be 2 or 3, got {0}")]
    InvalidSize(usize),

    /// A character outside the six-color alphabet.
    #[error("'{0}' is not one of the six cube colors")]
    InvalidColor(char),

    /// The cube is uniform per face but physically impossible.
    #[error("invalid cube configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
}

/// Why a uniform-looking cube cannot be a legally assembled one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// Fewer than six distinct colors across the six faces.
    #[error("the cube does not show all six colors")]
    MissingColors,

    /// An opposite-face pair does not carry opposite colors.
    #[error("opposite faces do not carry their opposite colors")]
    OppositeMismatch,

    /// The Up/Front/Right corner triple belongs to no real cube.
    #[error("the corner arrangement is a mirror image of a real cube")]
    MirroredCorner,
}
