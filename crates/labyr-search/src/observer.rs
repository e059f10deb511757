//! Step-wise observation of a running search.
//!
//! An [`Observer`] only ever sees coordinates through a [`Progress`] view;
//! the engine's nodes stay private. Observers can't influence the result.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use labyr_core::Coord;

use crate::bfs::{NodeId, SearchNode};
use crate::outcome::SearchOutcome;

/// Pacing for observed searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Pause after each observed step.
    pub delay: Duration,
}

impl SearchConfig {
    /// Default per-step pause.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(25);

    /// Config that never pauses, for tests and headless runs.
    pub const fn unpaced() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Read-only view of the frontier and visited set.
pub struct Progress<'a> {
    pub(crate) nodes: &'a [SearchNode],
    pub(crate) frontier: &'a VecDeque<NodeId>,
    pub(crate) frontier_counts: &'a HashMap<Coord, usize>,
    pub(crate) visited: &'a HashMap<Coord, NodeId>,
    pub(crate) visit_order: &'a [Coord],
}

impl<'a> Progress<'a> {
    /// Frontier coordinates, front of the queue first.
    pub fn frontier(&self) -> impl Iterator<Item = Coord> + '_ {
        self.frontier.iter().map(|&id| self.nodes[id].coord)
    }

    /// Visited coordinates in the order they were expanded.
    pub fn visited(&self) -> impl Iterator<Item = Coord> + '_ {
        self.visit_order.iter().copied()
    }

    pub fn in_frontier(&self, c: Coord) -> bool {
        self.frontier_counts.contains_key(&c)
    }

    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited.contains_key(&c)
    }

    /// Recorded cost of a visited coordinate.
    pub fn visited_cost(&self, c: Coord) -> Option<u32> {
        self.visited.get(&c).map(|&id| self.nodes[id].cost)
    }

    pub fn visited_len(&self) -> usize {
        self.visit_order.len()
    }
}

/// Receives the search state before every frontier pop and once at the end.
///
/// `S` is the space being searched, typically a [`labyr_core::Grid`].
pub trait Observer<S: ?Sized> {
    /// Called before the front node is removed from the frontier.
    fn on_step(&mut self, space: &S, progress: &Progress<'_>);

    /// Called once the search reaches a terminal state.
    fn on_finish(&mut self, space: &S, progress: &Progress<'_>, outcome: &SearchOutcome);
}

impl<S: ?Sized> Observer<S> for () {
    fn on_step(&mut self, _space: &S, _progress: &Progress<'_>) {}

    fn on_finish(&mut self, _space: &S, _progress: &Progress<'_>, _outcome: &SearchOutcome) {}
}

/// One captured frame of a [`Trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub frontier: Vec<Coord>,
    pub visited: Vec<Coord>,
}

/// Observer that records every step, useful for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub steps: Vec<Snapshot>,
    pub outcome: Option<SearchOutcome>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ?Sized> Observer<S> for Trace {
    fn on_step(&mut self, _space: &S, progress: &Progress<'_>) {
        self.steps.push(Snapshot {
            frontier: progress.frontier().collect(),
            visited: progress.visited().collect(),
        });
    }

    fn on_finish(&mut self, _space: &S, _progress: &Progress<'_>, outcome: &SearchOutcome) {
        self.outcome = Some(outcome.clone());
    }
}
