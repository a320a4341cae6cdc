//! The cube engine: named moves over one audited primitive.

use crate::core::{Axis, CubeError, CubeRng, Direction, FaceId};
use crate::grid::{render, FaceletGrid};

use super::snapshot::Snapshot;
use super::solved::solved_status;

/// Reorientations applied by a default scramble.
pub const DEFAULT_SCRAMBLE_REORIENTATIONS: usize = 10;
/// Face moves applied by a default scramble.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 50;

/// A playable cube: facelet grid plus a quarter-turn move counter.
///
/// Only face moves count; whole-cube reorientations are free. The
/// engine never mutates the grid's faces directly - every named move is
/// a reorientation sandwich around the front quarter-turn primitive,
/// and a counterclockwise move is the primitive applied three times.
///
/// ```
/// use rust_cube::engine::CubeEngine;
/// use rust_cube::core::{Direction, FaceId};
///
/// let mut cube = CubeEngine::new(3).unwrap();
/// assert_eq!(cube.is_solved(), Ok(true));
///
/// cube.move_face(FaceId::Right, Direction::Clockwise);
/// assert_eq!(cube.is_solved(), Ok(false));
/// assert_eq!(cube.move_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CubeEngine {
    grid: FaceletGrid,
    move_count: u32,
    rng: CubeRng,
}

impl CubeEngine {
    /// Create a solved cube of the given size (2 or 3).
    ///
    /// Fails with `InvalidSize` for any other dimension. The scramble
    /// RNG is seeded from the operating system; use [`with_seed`] for a
    /// reproducible scramble.
    ///
    /// [`with_seed`]: CubeEngine::with_seed
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::build(size, CubeRng::from_entropy())
    }

    /// Create a solved cube whose scrambles are reproducible.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, CubeError> {
        Self::build(size, CubeRng::new(seed))
    }

    fn build(size: usize, rng: CubeRng) -> Result<Self, CubeError> {
        if !matches!(size, 2 | 3) {
            return Err(CubeError::InvalidSize(size));
        }
        Ok(Self {
            grid: FaceletGrid::new(size),
            move_count: 0,
            rng,
        })
    }

    /// Cube dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Face moves made so far, quarter-turn metric.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Read-only view of the facelet grid.
    #[must_use]
    pub fn grid(&self) -> &FaceletGrid {
        &self.grid
    }

    // === Moves ===

    /// Rotate the whole cube around an axis.
    ///
    /// X turns like an R move, Y like a U move, Z like an F move.
    /// Reorientations relabel which physical faces are called Up, Front,
    /// and so on; they never touch the move count.
    pub fn reorient(&mut self, axis: Axis, direction: Direction) {
        for _ in 0..direction.quarter_turns() {
            match axis {
                Axis::X => self.grid.rotate_x(),
                Axis::Y => self.grid.rotate_y(),
                Axis::Z => self.grid.rotate_z(),
            }
        }
    }

    /// Quarter-turn one face of the cube.
    ///
    /// Brings the target face to the front, applies the front
    /// quarter-turn primitive once (clockwise) or three times
    /// (counterclockwise), then undoes the reorientation exactly.
    /// Counts as one move either way.
    pub fn move_face(&mut self, face: FaceId, direction: Direction) {
        use Direction::{Clockwise, CounterClockwise};

        let approach: &[(Axis, Direction)] = match face {
            FaceId::Front => &[],
            FaceId::Up => &[(Axis::X, CounterClockwise)],
            FaceId::Down => &[(Axis::X, Clockwise)],
            FaceId::Back => &[(Axis::X, CounterClockwise), (Axis::X, CounterClockwise)],
            FaceId::Left => &[(Axis::Y, CounterClockwise)],
            FaceId::Right => &[(Axis::Y, Clockwise)],
        };

        for &(axis, dir) in approach {
            self.reorient(axis, dir);
        }
        for _ in 0..direction.quarter_turns() {
            self.grid.turn_front_clockwise();
        }
        for &(axis, dir) in approach.iter().rev() {
            self.reorient(axis, dir.inverse());
        }

        self.move_count += 1;
    }

    // === Scrambling ===

    /// Apply `n` uniformly random whole-cube reorientations.
    pub fn random_reorientations(&mut self, n: usize) {
        for _ in 0..n {
            let axis = Axis::ALL[self.rng.pick(Axis::ALL.len())];
            let direction = Direction::ALL[self.rng.pick(Direction::ALL.len())];
            self.reorient(axis, direction);
        }
    }

    /// Apply `n` uniformly random face moves.
    pub fn random_moves(&mut self, n: usize) {
        for _ in 0..n {
            let face = FaceId::ALL[self.rng.pick(FaceId::ALL.len())];
            let direction = Direction::ALL[self.rng.pick(Direction::ALL.len())];
            self.move_face(face, direction);
        }
    }

    /// Scramble with the default budget (10 reorientations, 50 moves).
    pub fn scramble(&mut self) {
        self.scramble_with(DEFAULT_SCRAMBLE_REORIENTATIONS, DEFAULT_SCRAMBLE_MOVES);
    }

    /// Scramble, then zero the move counter.
    ///
    /// Scrambling moves never count toward the player's score.
    pub fn scramble_with(&mut self, reorientations: usize, moves: usize) {
        self.random_reorientations(reorientations);
        self.random_moves(moves);
        self.move_count = 0;
    }

    // === State capture ===

    /// Deep-copy the observable state.
    #[must_use]
    pub fn get_state(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            move_count: self.move_count,
        }
    }

    /// Replace the engine's state wholesale from a snapshot.
    pub fn put_state(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.move_count = snapshot.move_count;
    }

    // === Inspection ===

    /// Decide whether the cube is a legal solved cube.
    ///
    /// `Ok(false)` means keep playing; `Err(InvalidConfiguration)`
    /// means the coloring is physically impossible. Read-only either
    /// way.
    pub fn is_solved(&self) -> Result<bool, CubeError> {
        solved_status(&self.grid)
    }

    /// Text rendering of the cube in the cross layout.
    #[must_use]
    pub fn display(&self) -> String {
        render(&self.grid)
    }
}
