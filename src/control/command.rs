//! Move token grammar and the built-in macro vocabulary.
//!
//! A primitive token is a face letter (u, d, f, b, l, r) or a rotation
//! letter (x, y, z), case-insensitive, with a trailing apostrophe for
//! counterclockwise. Everything else is looked up in the macro table,
//! which expands recursively into primitive tokens.

use crate::core::{Axis, Direction, FaceId};

/// One primitive step: a face move or a whole-cube reorientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Quarter-turn one face.
    Face(FaceId, Direction),
    /// Reorient the whole cube.
    Whole(Axis, Direction),
}

impl Step {
    /// Parse a primitive move token.
    ///
    /// Returns `None` for anything that is not a primitive - the caller
    /// falls through to the macro table.
    ///
    /// ```
    /// use rust_cube::control::Step;
    /// use rust_cube::core::{Axis, Direction, FaceId};
    ///
    /// assert_eq!(Step::parse("u"), Some(Step::Face(FaceId::Up, Direction::Clockwise)));
    /// assert_eq!(Step::parse("R'"), Some(Step::Face(FaceId::Right, Direction::CounterClockwise)));
    /// assert_eq!(Step::parse("x'"), Some(Step::Whole(Axis::X, Direction::CounterClockwise)));
    /// assert_eq!(Step::parse("u2"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Step> {
        let (letter, direction) = match token.strip_suffix('\'') {
            Some(rest) => (rest, Direction::CounterClockwise),
            None => (token, Direction::Clockwise),
        };
        if letter.chars().count() != 1 {
            return None;
        }

        match letter.chars().next()?.to_ascii_lowercase() {
            'u' => Some(Step::Face(FaceId::Up, direction)),
            'd' => Some(Step::Face(FaceId::Down, direction)),
            'f' => Some(Step::Face(FaceId::Front, direction)),
            'b' => Some(Step::Face(FaceId::Back, direction)),
            'l' => Some(Step::Face(FaceId::Left, direction)),
            'r' => Some(Step::Face(FaceId::Right, direction)),
            'x' => Some(Step::Whole(Axis::X, direction)),
            'y' => Some(Step::Whole(Axis::Y, direction)),
            'z' => Some(Step::Whole(Axis::Z, direction)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (letter, direction) = match self {
            Step::Face(face, direction) => (face.letter(), direction),
            Step::Whole(axis, direction) => (axis.letter(), direction),
        };
        let mark = match direction {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
        };
        write!(f, "{}{mark}", letter.to_ascii_lowercase())
    }
}

/// Built-in macro vocabulary: slice moves, double moves, and the layer
/// algorithms. Names expand recursively, so algorithms can reference
/// other macros.
pub const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    // Cube slices.
    ("m", "x' l' r"),
    ("m'", "x l r'"),
    ("e", "y' u d'"),
    ("e'", "y u' d"),
    ("s", "z f' b"),
    ("s'", "z' f b'"),
    // Double moves.
    ("u2", "u u"),
    ("d2", "d d"),
    ("f2", "f f"),
    ("b2", "b b"),
    ("l2", "l l"),
    ("r2", "r r"),
    ("m2", "m m"),
    ("e2", "e e"),
    ("s2", "s s"),
    ("x2", "x x"),
    ("y2", "y y"),
    ("z2", "z z"),
    // Top layer.
    ("df->uf'", "f' u' r u"),
    ("ufr->dfr", "r' d' r d"),
    ("dfr->ufr", "f d f'"),
    ("ufr", "f d f' d' f d f'"),
    ("ufr'", "r' d' r d r' d' r"),
    // Middle layer.
    ("uf->fr", "u r u' r' f r' f' r"),
    ("uf->lf", "u' l' u l f' l f l'"),
    // Last layer.
    ("fur", "f u r u' r' f'"),
    ("fru", "f r u r' u' f'"),
    ("ep", "r u r' u r u2 r' u"),
    ("cyc3", "r' u l u' r u l' u'"),
    ("cyc3'", "u l u' r' u l' u' r"),
    ("rd", "r d r' d' r d r' d'"),
    ("dr", "d r d' r' d r d' r'"),
    ("rot2", "rd u' dr u"),
    ("rot2'", "dr u' rd u"),
    ("rot2d", "rd u2 dr u2"),
    ("rot2d'", "dr u2 rd u2"),
    ("rot3", "rd u' rd u' rd u2"),
    ("rot3'", "dr u' dr u' dr u2"),
];
