//! Facelet storage and the two geometric primitives.
//!
//! `FaceletGrid` owns the six N-by-N color matrices and exposes exactly
//! two irreducible mutations: rotating one face's own matrix and turning
//! the logical front face a quarter turn (including the four adjacent
//! edge-strip transfers). Every named move in the engine is composed
//! from those plus the whole-cube rotations, so the edge-transfer
//! geometry is audited in one place.
//!
//! `render` flattens a grid into the stable cross-shaped text layout.

pub mod facelets;
pub mod render;

pub use facelets::{FaceletGrid, Strip};
pub use render::render;
