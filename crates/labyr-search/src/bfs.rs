use std::collections::{HashMap, VecDeque};

use labyr_core::Coord;

use crate::observer::{Observer, Progress, SearchConfig};
use crate::outcome::{SearchOutcome, SearchState, SearchStats, Solution};
use crate::traits::SearchSpace;

/// Index into the engine's node arena.
pub(crate) type NodeId = usize;

/// One frontier or visited entry. Parents always point at earlier nodes,
/// so the parent links form a tree rooted at the start node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) coord: Coord,
    pub(crate) cost: u32,
    pub(crate) parent: Option<NodeId>,
}

/// A breadth-first search in progress.
///
/// The search is a small state machine: it starts [`SearchState::Running`]
/// with the start node queued, and each [`step`](Search::step) pops one node
/// from the front of the frontier until the objective is popped
/// ([`SearchState::Succeeded`]) or the frontier empties
/// ([`SearchState::Exhausted`]).
///
/// Neighbours are queued in the order the space yields them, which fixes
/// the tie-break between equal-cost paths. A coordinate is queued only if
/// it is neither visited nor already somewhere in the frontier; frontier
/// membership is tracked with a per-coordinate counter rather than by
/// scanning the queue.
pub struct Search<'a, S: SearchSpace + ?Sized> {
    space: &'a S,
    state: SearchState,
    outcome: Option<SearchOutcome>,
    nodes: Vec<SearchNode>,
    frontier: VecDeque<NodeId>,
    frontier_counts: HashMap<Coord, usize>,
    visited: HashMap<Coord, NodeId>,
    visit_order: Vec<Coord>,
    stats: SearchStats,
    // scratch buffer for neighbor queries
    nbuf: Vec<Coord>,
}

impl<'a, S: SearchSpace + ?Sized> Search<'a, S> {
    /// Start a search over `space`, seeded with its start coordinate.
    pub fn new(space: &'a S) -> Self {
        let mut search = Self {
            space,
            state: SearchState::Running,
            outcome: None,
            nodes: Vec::new(),
            frontier: VecDeque::new(),
            frontier_counts: HashMap::new(),
            visited: HashMap::new(),
            visit_order: Vec::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        };
        search.enqueue(SearchNode {
            coord: space.start(),
            cost: 0,
            parent: None,
        });
        search
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == SearchState::Running
    }

    /// The terminal result, once the search has finished.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Borrowed view of the current frontier and visited set.
    pub fn progress(&self) -> Progress<'_> {
        Progress {
            nodes: &self.nodes,
            frontier: &self.frontier,
            frontier_counts: &self.frontier_counts,
            visited: &self.visited,
            visit_order: &self.visit_order,
        }
    }

    /// Perform a single state transition and return the resulting state.
    ///
    /// Each call pops at most one node. Calling this on a finished search
    /// does nothing.
    pub fn step(&mut self) -> SearchState {
        if !self.is_running() {
            return self.state;
        }

        let Some(current_id) = self.dequeue() else {
            log::debug!(
                "search exhausted after {} expansions",
                self.stats.expanded
            );
            self.finish(SearchState::Exhausted, SearchOutcome::NoPath);
            return self.state;
        };
        self.stats.steps += 1;
        let current = self.nodes[current_id];

        // Stale duplicate.
        if self.visited.contains_key(&current.coord) {
            self.stats.stale_discards += 1;
            return self.state;
        }

        if self.space.is_goal(current.coord) {
            let solution = Solution {
                cost: current.cost,
                path: self.retrace(current_id),
            };
            log::debug!(
                "search reached {} at cost {} after {} expansions",
                current.coord,
                solution.cost,
                self.stats.expanded
            );
            self.finish(SearchState::Succeeded, SearchOutcome::Found(solution));
            return self.state;
        }

        log::trace!("expand {} (cost {})", current.coord, current.cost);
        self.visited.insert(current.coord, current_id);
        self.visit_order.push(current.coord);
        self.stats.expanded += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.space.neighbors(current.coord, &mut nbuf);

        for &n in nbuf.iter() {
            let candidate = SearchNode {
                coord: n,
                cost: current.cost + 1,
                parent: Some(current_id),
            };

            if let Some(&existing) = self.visited.get(&n) {
                if self.nodes[existing].cost > candidate.cost {
                    log::warn!(
                        "cheaper route to visited {}: {} < {}",
                        n,
                        candidate.cost,
                        self.nodes[existing].cost
                    );
                    let id = self.push_node(candidate);
                    self.visited.insert(n, id);
                    self.stats.cost_overwrites += 1;
                }
                continue;
            }

            if !self.frontier_counts.contains_key(&n) {
                self.enqueue(candidate);
            }
        }

        self.nbuf = nbuf;
        self.state
    }

    /// Step until the search finishes.
    pub fn run(&mut self) -> SearchOutcome {
        while self.is_running() {
            self.step();
        }
        self.terminal_outcome()
    }

    /// Step at most `max_steps` times.
    ///
    /// Returns `None` if the budget ran out before the search finished; the
    /// search can be resumed afterwards.
    pub fn run_bounded(&mut self, max_steps: usize) -> Option<SearchOutcome> {
        for _ in 0..max_steps {
            if !self.is_running() {
                break;
            }
            self.step();
        }
        // A final empty-frontier check doesn't pop anything.
        if self.is_running() && self.frontier.is_empty() {
            self.step();
        }
        self.outcome.clone()
    }

    /// Step until the search finishes, showing every step to `observer`.
    ///
    /// Before each pop the observer gets the current frontier and visited
    /// set, then the thread sleeps for `config.delay`.
    pub fn run_observed<O>(&mut self, observer: &mut O, config: &SearchConfig) -> SearchOutcome
    where
        O: Observer<S> + ?Sized,
    {
        while self.is_running() {
            if !self.frontier.is_empty() {
                observer.on_step(self.space, &self.progress());
                if !config.delay.is_zero() {
                    std::thread::sleep(config.delay);
                }
            }
            self.step();
        }
        let outcome = self.terminal_outcome();
        observer.on_finish(self.space, &self.progress(), &outcome);
        outcome
    }

    fn terminal_outcome(&self) -> SearchOutcome {
        self.outcome.clone().unwrap_or(SearchOutcome::NoPath)
    }

    fn finish(&mut self, state: SearchState, outcome: SearchOutcome) {
        self.state = state;
        self.outcome = Some(outcome);
    }

    fn push_node(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn enqueue(&mut self, node: SearchNode) {
        let id = self.push_node(node);
        self.frontier.push_back(id);
        *self.frontier_counts.entry(node.coord).or_insert(0) += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    fn dequeue(&mut self) -> Option<NodeId> {
        let id = self.frontier.pop_front()?;
        let coord = self.nodes[id].coord;
        if let Some(n) = self.frontier_counts.get_mut(&coord) {
            *n -= 1;
            if *n == 0 {
                self.frontier_counts.remove(&coord);
            }
        }
        Some(id)
    }

    /// Walk parent links back to the root and return the path root-first.
    fn retrace(&self, id: NodeId) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            path.push(self.nodes[i].coord);
            cur = self.nodes[i].parent;
        }
        path.reverse();
        path
    }
}
