//! Random maze generation.
//!
//! Every cell other than the start and the objective independently becomes
//! an obstacle with a fixed probability. Nothing guarantees the result is
//! solvable.

use rand::{Rng, RngExt};

use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows x cols` maze with obstacle probability `odds`.
    ///
    /// `odds` must lie within `[0, 1]`: `0` gives an empty maze and `1`
    /// blocks every cell except the two endpoints.
    pub fn generate(
        &mut self,
        rows: i32,
        cols: i32,
        start: Coord,
        objective: Coord,
        odds: f64,
    ) -> Result<Grid, GridError> {
        if !(0.0..=1.0).contains(&odds) {
            return Err(GridError::InvalidProbability(odds));
        }

        let mut obstacles = Vec::new();
        for row in 0..rows.max(0) {
            for col in 0..cols.max(0) {
                let c = Coord::new(row, col);
                if c == start || c == objective {
                    continue;
                }
                let r: f64 = self.rng.random();
                if r < odds {
                    obstacles.push(c);
                }
            }
        }

        log::debug!(
            "generated {rows}x{cols} maze with {} obstacles (odds {odds})",
            obstacles.len()
        );
        Grid::new(rows, cols, start, objective, obstacles)
    }
}

impl Grid {
    /// Generate a random maze using the thread-local RNG.
    ///
    /// See [`MazeGen::generate`]; use a seeded [`MazeGen`] for reproducible
    /// mazes.
    pub fn generate(
        rows: i32,
        cols: i32,
        start: Coord,
        objective: Coord,
        odds: f64,
    ) -> Result<Grid, GridError> {
        MazeGen::new(rand::rng()).generate(rows, cols, start, objective, odds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_odds_is_open() {
        let g = Grid::generate(5, 7, Coord::new(0, 0), Coord::new(4, 6), 0.0).unwrap();
        assert_eq!(g.count(CellKind::Obstacle), 0);
        assert_eq!(g.count(CellKind::Open), 33);
    }

    #[test]
    fn full_odds_blocks_everything_but_endpoints() {
        let g = Grid::generate(4, 4, Coord::new(1, 1), Coord::new(2, 3), 1.0).unwrap();
        assert_eq!(g.count(CellKind::Obstacle), 14);
        assert_eq!(g.kind(Coord::new(1, 1)), Some(CellKind::Start));
        assert_eq!(g.kind(Coord::new(2, 3)), Some(CellKind::Objective));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = MazeGen::new(StdRng::seed_from_u64(7))
            .generate(10, 10, Coord::new(0, 0), Coord::new(9, 9), 0.3)
            .unwrap();
        let b = MazeGen::new(StdRng::seed_from_u64(7))
            .generate(10, 10, Coord::new(0, 0), Coord::new(9, 9), 0.3)
            .unwrap();
        assert_eq!(a, b);
        let n = a.count(CellKind::Obstacle);
        assert!(n > 0 && n < 98);
    }

    #[test]
    fn rejects_bad_odds() {
        assert_eq!(
            Grid::generate(3, 3, Coord::new(0, 0), Coord::new(2, 2), 1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(matches!(
            Grid::generate(3, 3, Coord::new(0, 0), Coord::new(2, 2), f64::NAN),
            Err(GridError::InvalidProbability(_))
        ));
    }

    #[test]
    fn propagates_grid_errors() {
        assert_eq!(
            Grid::generate(3, 3, Coord::new(0, 0), Coord::new(3, 3), 0.2),
            Err(GridError::ObjectiveOutOfBounds(Coord::new(3, 3)))
        );
    }
}
