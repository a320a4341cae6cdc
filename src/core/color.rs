//! The six-color sticker alphabet.
//!
//! The color scheme is fixed at construction: Up is white, Down is
//! yellow, Front is red, Back is orange, Left is green, Right is blue.
//! Opposite faces carry opposite colors (white/yellow, red/orange,
//! green/blue), and the validity check in the engine relies on that
//! pairing.
//!
//! `Color` is a closed enum, so a sticker can never hold a symbol
//! outside the alphabet. Unknown symbols are rejected at the parse
//! boundary by [`Color::from_char`].

use serde::{Deserialize, Serialize};

use super::error::CubeError;
use super::face::FaceId;

/// One of the six sticker colors.
///
/// ```
/// use rust_cube::core::{Color, FaceId};
///
/// assert_eq!(Color::home(FaceId::Up), Color::White);
/// assert_eq!(Color::White.opposite(), Color::Yellow);
/// assert_eq!(Color::from_char('g').unwrap(), Color::Green);
/// assert!(Color::from_char('q').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    /// All six colors.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    /// The home color of a face on a freshly built cube.
    #[must_use]
    pub const fn home(face: FaceId) -> Color {
        match face {
            FaceId::Up => Color::White,
            FaceId::Down => Color::Yellow,
            FaceId::Front => Color::Red,
            FaceId::Back => Color::Orange,
            FaceId::Left => Color::Green,
            FaceId::Right => Color::Blue,
        }
    }

    /// The color on the opposite side of a solved cube.
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
        }
    }

    /// Single-character code used in the text rendering.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Red => 'r',
            Color::Orange => 'o',
            Color::Green => 'g',
            Color::Blue => 'b',
        }
    }

    /// Parse a single-character color code.
    ///
    /// Returns `CubeError::InvalidColor` for anything outside the
    /// six-color alphabet.
    pub fn from_char(c: char) -> Result<Color, CubeError> {
        match c {
            'w' => Ok(Color::White),
            'y' => Ok(Color::Yellow),
            'r' => Ok(Color::Red),
            'o' => Ok(Color::Orange),
            'g' => Ok(Color::Green),
            'b' => Ok(Color::Blue),
            other => Err(CubeError::InvalidColor(other)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
