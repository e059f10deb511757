use labyr_core::Coord;

/// Where a search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// The frontier is non-empty and the objective hasn't been popped yet.
    Running,
    /// The objective was popped from the frontier.
    Succeeded,
    /// The frontier emptied without reaching the objective.
    Exhausted,
}

/// A minimum-cost route from the start to the objective.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Number of steps; always `path.len() - 1`.
    pub cost: u32,
    /// Every coordinate from the start to the objective, both included.
    pub path: Vec<Coord>,
}

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Solution),
    /// No obstacle-avoiding path exists.
    NoPath,
}

impl SearchOutcome {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(s) => Some(s),
            SearchOutcome::NoPath => None,
        }
    }

    /// Path cost, if a path was found.
    pub fn cost(&self) -> Option<u32> {
        self.solution().map(|s| s.cost)
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier pops, including stale ones and the final goal pop.
    pub steps: usize,
    /// Nodes recorded as visited.
    pub expanded: usize,
    /// Popped nodes dropped because their coordinate was already visited.
    pub stale_discards: usize,
    /// Visited records replaced by a cheaper candidate. Stays zero for
    /// uniform-cost expansion.
    pub cost_overwrites: usize,
    /// Largest frontier length observed.
    pub max_frontier: usize,
}
