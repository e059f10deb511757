use labyr_core::{Coord, Grid};

/// What a breadth-first search needs to know about the space it explores.
pub trait SearchSpace {
    /// Where the search begins.
    fn start(&self) -> Coord;

    /// Whether `c` is the objective. Only called with coordinates that came
    /// from [`start`](SearchSpace::start) or [`neighbors`](SearchSpace::neighbors).
    fn is_goal(&self, c: Coord) -> bool;

    /// Append neighbours of `c` into `buf`, in expansion priority order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl SearchSpace for Grid {
    #[inline]
    fn start(&self) -> Coord {
        self.start()
    }

    #[inline]
    fn is_goal(&self, c: Coord) -> bool {
        self.is_goal(c)
    }

    #[inline]
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        self.neighbors_into(c, buf);
    }
}
