//! Property-based tests for the breadth-first search.
//!
//! Random mazes are checked against an independent distance flood.
//!
//! Run with: cargo test -p labyr-search -- proptest

use std::collections::VecDeque;

use labyr_core::{CellKind, Coord, Grid};
use labyr_search::{Search, SearchConfig, SearchOutcome, Trace, manhattan, search};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A random maze of up to 8x8 with arbitrary endpoints and obstacles.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1..=8i32, 1..=8i32).prop_flat_map(|(rows, cols)| {
        let cell = (0..rows, 0..cols).prop_map(|(r, c)| Coord::new(r, c));
        let walls = prop::collection::vec(prop::bool::weighted(0.3), (rows * cols) as usize);
        (cell.clone(), cell, walls).prop_map(move |(start, objective, walls)| {
            let obstacles = walls
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w)
                .map(|(i, _)| Coord::new(i as i32 / cols, i as i32 % cols))
                .filter(|&c| c != start && c != objective);
            Grid::new(rows, cols, start, objective, obstacles.collect::<Vec<_>>())
                .expect("generated coordinates are in bounds")
        })
    })
}

/// An obstacle-free maze.
fn arb_open_grid() -> impl Strategy<Value = Grid> {
    (1..=10i32, 1..=10i32).prop_flat_map(|(rows, cols)| {
        let cell = (0..rows, 0..cols).prop_map(|(r, c)| Coord::new(r, c));
        (cell.clone(), cell).prop_map(move |(start, objective)| {
            Grid::new(rows, cols, start, objective, []).expect("in bounds")
        })
    })
}

// =============================================================================
// Reference
// =============================================================================

/// Shortest distance to the objective and the number of cells reachable
/// from the start, computed without the engine.
fn flood(grid: &Grid) -> (Option<u32>, usize) {
    let mut dist = vec![None; (grid.rows() * grid.cols()) as usize];
    let idx = |c: Coord| (c.row * grid.cols() + c.col) as usize;
    let mut queue = VecDeque::new();
    dist[idx(grid.start())] = Some(0u32);
    queue.push_back(grid.start());
    let mut reached = 0;

    while let Some(c) = queue.pop_front() {
        reached += 1;
        let d = dist[idx(c)].unwrap_or_default();
        for n in c.neighbors_4() {
            if grid.is_passable(n) && dist[idx(n)].is_none() {
                dist[idx(n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }

    (dist[idx(grid.objective())], reached)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_open_grid_cost_is_manhattan(grid in arb_open_grid()) {
        let outcome = search(&grid);
        prop_assert_eq!(outcome.cost(), Some(manhattan(grid.start(), grid.objective())));
    }

    #[test]
    fn proptest_path_is_valid(grid in arb_grid()) {
        if let SearchOutcome::Found(sol) = search(&grid) {
            prop_assert_eq!(sol.path.first().copied(), Some(grid.start()));
            prop_assert_eq!(sol.path.last().copied(), Some(grid.objective()));
            prop_assert_eq!(sol.path.len() - 1, sol.cost as usize);
            for w in sol.path.windows(2) {
                prop_assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
            }
            for &c in &sol.path {
                prop_assert_ne!(grid.kind(c), Some(CellKind::Obstacle));
                prop_assert!(grid.contains(c));
            }
        }
    }

    #[test]
    fn proptest_cost_is_minimal(grid in arb_grid()) {
        let (expected, _) = flood(&grid);
        prop_assert_eq!(search(&grid).cost(), expected);
    }

    #[test]
    fn proptest_no_path_visits_every_reachable_cell_once(grid in arb_grid()) {
        let (expected, reachable) = flood(&grid);
        let mut s = Search::new(&grid);
        let outcome = s.run();
        if expected.is_none() {
            prop_assert_eq!(outcome, SearchOutcome::NoPath);
            prop_assert_eq!(s.stats().expanded, reachable);
            let mut visited: Vec<_> = s.progress().visited().collect();
            visited.sort();
            visited.dedup();
            prop_assert_eq!(visited.len(), reachable);
        }
    }

    #[test]
    fn proptest_cost_overwrite_never_fires(grid in arb_grid()) {
        let mut s = Search::new(&grid);
        s.run();
        prop_assert_eq!(s.stats().cost_overwrites, 0);
        prop_assert_eq!(s.stats().stale_discards, 0);
    }

    #[test]
    fn proptest_search_is_idempotent(grid in arb_grid()) {
        prop_assert_eq!(search(&grid), search(&grid));
    }

    #[test]
    fn proptest_observing_does_not_change_result(grid in arb_grid()) {
        let mut trace = Trace::new();
        let observed = Search::new(&grid).run_observed(&mut trace, &SearchConfig::unpaced());
        prop_assert_eq!(&observed, &search(&grid));
        prop_assert_eq!(trace.outcome, Some(observed));
    }
}
