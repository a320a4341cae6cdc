//! Core engine types: faces, colors, directions, RNG, errors.
//!
//! Everything here is a small closed vocabulary. Faces, axes, and
//! directions are exhaustive enums rather than character tags so that
//! move dispatch gets compile-time completeness checking.

pub mod color;
pub mod error;
pub mod face;
pub mod rng;

pub use color::Color;
pub use error::{CubeError, InvalidConfiguration};
pub use face::{Axis, Direction, FaceId};
pub use rng::{CubeRng, CubeRngState};
