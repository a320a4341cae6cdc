//! Face, axis, and direction vocabulary.
//!
//! ## FaceId
//!
//! The six faces of the cube, named from the solver's point of view.
//! Fixed set - the engine never extends it.
//!
//! ## Axis and Direction
//!
//! Whole-cube reorientations are named by axis:
//! - `X` turns the cube in the direction of an R move
//! - `Y` turns the cube in the direction of a U move
//! - `Z` turns the cube in the direction of an F move
//!
//! Clockwise is the positive direction. A counterclockwise turn is always
//! three clockwise turns; there is no separate counterclockwise algorithm
//! anywhere in the engine.

use serde::{Deserialize, Serialize};

/// One of the six faces of the cube.
///
/// ```
/// use rust_cube::core::FaceId;
///
/// assert_eq!(FaceId::Up.opposite(), FaceId::Down);
/// assert_eq!(FaceId::Front.letter(), 'F');
/// assert_eq!(FaceId::ALL.len(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceId {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl FaceId {
    /// All six faces, in storage order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Down,
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
    ];

    /// Storage index of this face.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face on the opposite side of the cube.
    ///
    /// Opposite pairing is fixed: Up/Down, Front/Back, Left/Right.
    #[must_use]
    pub const fn opposite(self) -> FaceId {
        match self {
            FaceId::Up => FaceId::Down,
            FaceId::Down => FaceId::Up,
            FaceId::Front => FaceId::Back,
            FaceId::Back => FaceId::Front,
            FaceId::Left => FaceId::Right,
            FaceId::Right => FaceId::Left,
        }
    }

    /// Single-letter name used in move notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            FaceId::Up => 'U',
            FaceId::Down => 'D',
            FaceId::Front => 'F',
            FaceId::Back => 'B',
            FaceId::Left => 'L',
            FaceId::Right => 'R',
        }
    }

    /// Check whether two faces share an edge.
    ///
    /// Every pair of faces is adjacent except a face and its opposite.
    #[must_use]
    pub fn is_adjacent(self, other: FaceId) -> bool {
        self != other && self.opposite() != other
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Axis for a whole-cube reorientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Single-letter name used in move notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Turn direction for face moves and reorientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Both directions.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// How many clockwise quarter turns realize a turn in this direction.
    ///
    /// Counterclockwise is three clockwise turns by construction, so the
    /// two directions can never drift apart.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        }
    }
}
