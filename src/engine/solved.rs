//! Solved and validity checking.
//!
//! Three outcomes: solved, unsolved (some face not uniform), or invalid
//! (uniform per face but physically impossible). Invalid is an error
//! value rather than a boolean so the caller can report why, and the
//! check is read-only so a bad verdict never corrupts the engine.
//!
//! The chirality test samples only the corner where Up, Front, and
//! Right meet, against the 24 triples a physically assembled cube can
//! show there. That catches mirrored assemblies but not every invalid
//! permutation a hand-edited grid can reach; it is sound for states
//! reachable through legal moves. Kept as-is rather than strengthened
//! to a full parity check, which would reject states the engine has
//! always accepted.

use rustc_hash::FxHashSet;

use crate::core::{Color, CubeError, FaceId, InvalidConfiguration};
use crate::grid::FaceletGrid;

use Color::{Blue, Green, Orange, Red, White, Yellow};

/// The 24 (Up, Front, Right) corner triples of a real cube, one per
/// valid rotation of a physically assembled cube. Read as Up's
/// last-row-last cell, Front's first-row-last cell, Right's
/// first-row-first cell.
const CORNER_TRIPLES: [[Color; 3]; 24] = [
    [White, Green, Red],
    [White, Red, Blue],
    [White, Blue, Orange],
    [White, Orange, Green],
    [Green, Orange, Yellow],
    [Green, Yellow, Red],
    [Green, Red, White],
    [Green, White, Orange],
    [Yellow, Green, Orange],
    [Yellow, Orange, Blue],
    [Yellow, Blue, Red],
    [Yellow, Red, Green],
    [Red, White, Green],
    [Red, Green, Yellow],
    [Red, Yellow, Blue],
    [Red, Blue, White],
    [Blue, White, Red],
    [Blue, Red, Yellow],
    [Blue, Yellow, Orange],
    [Blue, Orange, White],
    [Orange, White, Blue],
    [Orange, Blue, Yellow],
    [Orange, Yellow, Green],
    [Orange, Green, White],
];

/// Decide whether a grid is a legal solved cube.
///
/// Returns `Ok(false)` for "not solved yet" (some face is not a single
/// color) and `Err(InvalidConfiguration)` for colorings no physical
/// cube can show.
pub(crate) fn solved_status(grid: &FaceletGrid) -> Result<bool, CubeError> {
    let mut face_colors = [White; 6];
    for face in FaceId::ALL {
        let cells = grid.get_face(face);
        let first = cells[0][0];
        if cells.iter().flatten().any(|&c| c != first) {
            return Ok(false);
        }
        face_colors[face.index()] = first;
    }

    let distinct: FxHashSet<Color> = face_colors.iter().copied().collect();
    if distinct.len() != 6 {
        return Err(InvalidConfiguration::MissingColors.into());
    }

    for face in [FaceId::Front, FaceId::Up, FaceId::Right] {
        let color = face_colors[face.index()];
        let across = face_colors[face.opposite().index()];
        if color.opposite() != across {
            return Err(InvalidConfiguration::OppositeMismatch.into());
        }
    }

    let n = grid.size();
    let corner = [
        grid.get_row(FaceId::Up, n - 1)[n - 1],
        grid.get_row(FaceId::Front, 0)[n - 1],
        grid.get_row(FaceId::Right, 0)[0],
    ];
    if !CORNER_TRIPLES.contains(&corner) {
        return Err(InvalidConfiguration::MirroredCorner.into());
    }

    Ok(true)
}
