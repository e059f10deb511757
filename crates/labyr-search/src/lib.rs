//! Breadth-first shortest-path search for labyr mazes.
//!
//! The engine, [`Search`], explores a [`SearchSpace`] level by level and
//! ends with either a minimum-cost [`Solution`] or [`SearchOutcome::NoPath`].
//! It can be driven one step at a time, run to completion, run under a
//! step budget, or run with an [`Observer`] that sees the frontier and
//! visited set before every pop.
//!
//! ```
//! use labyr_core::{Coord, Grid};
//!
//! let grid = Grid::new(1, 5, Coord::new(0, 0), Coord::new(0, 4), []).unwrap();
//! let outcome = labyr_search::search(&grid);
//! assert_eq!(outcome.cost(), Some(4));
//! ```

mod bfs;
mod distance;
mod observer;
mod outcome;
mod traits;

pub use bfs::Search;
pub use distance::manhattan;
pub use observer::{Observer, Progress, SearchConfig, Snapshot, Trace};
pub use outcome::{SearchOutcome, SearchState, SearchStats, Solution};
pub use traits::SearchSpace;

/// Run a search over `space` to completion.
pub fn search<S: SearchSpace + ?Sized>(space: &S) -> SearchOutcome {
    Search::new(space).run()
}

/// Run a search over `space`, showing every step to `observer`.
pub fn search_observed<S, O>(space: &S, observer: &mut O, config: &SearchConfig) -> SearchOutcome
where
    S: SearchSpace + ?Sized,
    O: Observer<S> + ?Sized,
{
    Search::new(space).run_observed(observer, config)
}
