//! Facelet grid: six N-by-N color matrices and the geometric primitives.
//!
//! ## Storage
//!
//! Each face is a flattened row-major matrix indexed by `FaceId`. Every
//! face matrix is always exactly N-by-N and no cell is ever unset; the
//! accessors return copies, never aliases of internal storage.
//!
//! ## Contract checks
//!
//! Index and strip-length violations are `assert!` panics. All call
//! sites above this module are internally controlled, so a panic here
//! means a bug in move composition, not bad user input.
//!
//! ## Chirality
//!
//! `turn_front_clockwise` reverses the strips written to Up and Down but
//! not the ones written to Left and Right. The asymmetry is load-bearing:
//! reversing the wrong strips silently produces a mirror-image cube that
//! can never be solved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, FaceId};

/// One row or column of a face, copied out of the grid.
///
/// Cube sizes are 2 or 3, so strips never spill to the heap.
pub type Strip = SmallVec<[Color; 3]>;

/// The six face matrices of a cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceletGrid {
    size: usize,
    faces: [Vec<Color>; 6],
}

impl FaceletGrid {
    /// Create a grid with every face uniform in its home color.
    ///
    /// This is the only solved configuration the grid manufactures;
    /// the validity check still tolerates other colorings reached by
    /// replaying moves.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "cube size must be positive");
        let faces = FaceId::ALL.map(|face| vec![Color::home(face); size * size]);
        Self { size, faces }
    }

    /// Cube dimension (2 or 3).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Copy of the indicated row.
    ///
    /// Panics if `row` is not in `[0, size)`.
    #[must_use]
    pub fn get_row(&self, face: FaceId, row: usize) -> Strip {
        assert!(row < self.size, "row index out of range");
        let start = row * self.size;
        Strip::from_slice(&self.faces[face.index()][start..start + self.size])
    }

    /// Copy of the indicated column.
    ///
    /// Panics if `col` is not in `[0, size)`.
    #[must_use]
    pub fn get_col(&self, face: FaceId, col: usize) -> Strip {
        assert!(col < self.size, "column index out of range");
        let cells = &self.faces[face.index()];
        (0..self.size).map(|row| cells[row * self.size + col]).collect()
    }

    /// Replace the indicated row.
    ///
    /// Panics if `row` is not in `[0, size)` or `values` is not exactly
    /// `size` long.
    pub fn set_row(&mut self, face: FaceId, row: usize, values: &[Color]) {
        assert!(row < self.size, "row index out of range");
        assert_eq!(values.len(), self.size, "row strip must match cube size");
        let start = row * self.size;
        self.faces[face.index()][start..start + self.size].copy_from_slice(values);
    }

    /// Replace the indicated column.
    ///
    /// Panics if `col` is not in `[0, size)` or `values` is not exactly
    /// `size` long.
    pub fn set_col(&mut self, face: FaceId, col: usize, values: &[Color]) {
        assert!(col < self.size, "column index out of range");
        assert_eq!(values.len(), self.size, "column strip must match cube size");
        let cells = &mut self.faces[face.index()];
        for (row, &value) in values.iter().enumerate() {
            cells[row * self.size + col] = value;
        }
    }

    /// Full copy of a face, as rows top to bottom.
    #[must_use]
    pub fn get_face(&self, face: FaceId) -> Vec<Strip> {
        (0..self.size).map(|row| self.get_row(face, row)).collect()
    }

    // === Geometric primitives ===

    /// Rotate one face's own matrix 90 degrees clockwise in place.
    ///
    /// Takes the N rows in order and reinstalls row `k` as column
    /// `N-1-k`, so the top row becomes the rightmost column.
    pub fn rotate_face_clockwise(&mut self, face: FaceId) {
        let n = self.size;
        let rows: Vec<Strip> = (0..n).map(|row| self.get_row(face, row)).collect();
        for col in 0..n {
            self.set_col(face, col, &rows[n - 1 - col]);
        }
    }

    /// Rotate one face's own matrix 90 degrees counterclockwise.
    ///
    /// Defined as three clockwise rotations, never a separate algorithm.
    pub fn rotate_face_counterclockwise(&mut self, face: FaceId) {
        for _ in 0..3 {
            self.rotate_face_clockwise(face);
        }
    }

    /// Quarter-turn the front face clockwise, edge strips included.
    ///
    /// All four neighbor strips are captured before any write, then:
    /// Up's last row takes Left's last column reversed, Down's first row
    /// takes Right's first column reversed, Right's first column takes
    /// Up's last row, Left's last column takes Down's first row.
    pub fn turn_front_clockwise(&mut self) {
        let n = self.size;
        self.rotate_face_clockwise(FaceId::Front);

        let mut left_col = self.get_col(FaceId::Left, n - 1);
        let mut right_col = self.get_col(FaceId::Right, 0);
        let up_row = self.get_row(FaceId::Up, n - 1);
        let down_row = self.get_row(FaceId::Down, 0);

        left_col.reverse();
        self.set_row(FaceId::Up, n - 1, &left_col);
        right_col.reverse();
        self.set_row(FaceId::Down, 0, &right_col);
        self.set_col(FaceId::Right, 0, &up_row);
        self.set_col(FaceId::Left, n - 1, &down_row);
    }

    // === Whole-cube rotations (positive direction only) ===

    /// Rotate the whole cube a quarter turn around X, in the direction
    /// of an R move.
    ///
    /// Relabeling alone does not preserve sticker orientation, so the
    /// faces that keep their physical identity get compensating
    /// rotations.
    pub fn rotate_x(&mut self) {
        self.cycle_faces([FaceId::Up, FaceId::Back, FaceId::Down, FaceId::Front]);
        self.rotate_face_clockwise(FaceId::Right);
        self.rotate_face_counterclockwise(FaceId::Left);
    }

    /// Rotate the whole cube a quarter turn around Y, in the direction
    /// of a U move.
    pub fn rotate_y(&mut self) {
        self.cycle_faces([FaceId::Front, FaceId::Left, FaceId::Back, FaceId::Right]);
        self.rotate_face_counterclockwise(FaceId::Down);
        self.rotate_face_clockwise(FaceId::Up);
        for _ in 0..2 {
            self.rotate_face_clockwise(FaceId::Right);
            self.rotate_face_clockwise(FaceId::Back);
        }
    }

    /// Rotate the whole cube a quarter turn around Z, in the direction
    /// of an F move.
    pub fn rotate_z(&mut self) {
        self.cycle_faces([FaceId::Right, FaceId::Down, FaceId::Left, FaceId::Up]);
        self.rotate_face_counterclockwise(FaceId::Back);
        for face in [FaceId::Front, FaceId::Left, FaceId::Up, FaceId::Right, FaceId::Down] {
            self.rotate_face_clockwise(face);
        }
    }

    /// Move each face matrix in `order` onto the next one, the last
    /// wrapping around to the first.
    fn cycle_faces(&mut self, order: [FaceId; 4]) {
        let mut carried = std::mem::take(&mut self.faces[order[0].index()]);
        for &face in &order[1..] {
            carried = std::mem::replace(&mut self.faces[face.index()], carried);
        }
        self.faces[order[0].index()] = carried;
    }
}
