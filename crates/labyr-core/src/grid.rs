//! The maze map: a fixed-size grid of [`CellKind`] values.
//!
//! A [`Grid`] is immutable once built. It answers the two structural queries
//! a search needs (goal test and passable neighbours) and nothing else.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Coord, Direction};

/// What occupies a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Obstacle,
    Start,
    Objective,
}

impl CellKind {
    /// Glyph used by the text maze format and the terminal renderer.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Open => '_',
            CellKind::Obstacle => '|',
            CellKind::Start => '@',
            CellKind::Objective => '$',
        }
    }

    /// Inverse of [`CellKind::glyph`].
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '_' => Some(CellKind::Open),
            '|' => Some(CellKind::Obstacle),
            '@' => Some(CellKind::Start),
            '$' => Some(CellKind::Objective),
            _ => None,
        }
    }
}

/// An immutable 2D maze.
///
/// Exactly one cell is tagged [`CellKind::Start`] and one
/// [`CellKind::Objective`]. When both coincide the cell is tagged
/// `Objective`; [`Grid::start`] still reports it as the start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<CellKind>,
    start: Coord,
    objective: Coord,
}

/// Serialized form of a [`Grid`]. Deserializing goes back through
/// [`Grid::new`], so a decoded grid upholds the same invariants.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    start: Coord,
    objective: Coord,
    #[serde(default)]
    obstacles: Vec<Coord>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        let obstacles = g
            .iter()
            .filter(|&(_, kind)| kind == CellKind::Obstacle)
            .map(|(c, _)| c)
            .collect();
        Self {
            rows: g.rows,
            cols: g.cols,
            start: g.start,
            objective: g.objective,
            obstacles,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        Grid::new(r.rows, r.cols, r.start, r.objective, r.obstacles)
    }
}

impl Grid {
    /// Build a grid from its dimensions, endpoints and obstacle cells.
    ///
    /// Every coordinate must lie within `rows x cols`, and no obstacle may
    /// sit on the start or the objective. Repeated obstacles are harmless.
    pub fn new(
        rows: i32,
        cols: i32,
        start: Coord,
        objective: Coord,
        obstacles: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let mut grid = Self {
            rows,
            cols,
            cells: vec![CellKind::Open; (rows as usize) * (cols as usize)],
            start,
            objective,
        };
        if !grid.contains(start) {
            return Err(GridError::StartOutOfBounds(start));
        }
        if !grid.contains(objective) {
            return Err(GridError::ObjectiveOutOfBounds(objective));
        }

        for obstacle in obstacles {
            if !grid.contains(obstacle) {
                return Err(GridError::ObstacleOutOfBounds(obstacle));
            }
            if obstacle == start || obstacle == objective {
                return Err(GridError::ObstacleOnEndpoint(obstacle));
            }
            let i = grid.index(obstacle);
            grid.cells[i] = CellKind::Obstacle;
        }

        let si = grid.index(start);
        grid.cells[si] = CellKind::Start;
        let oi = grid.index(objective);
        grid.cells[oi] = CellKind::Objective;

        Ok(grid)
    }

    /// Parse a maze drawn with [`CellKind::glyph`] characters, one line per row.
    ///
    /// Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let len = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..len];

        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut start = None;
        let mut objective = None;
        let mut obstacles = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row as i32, col as i32);
                match CellKind::from_glyph(ch) {
                    Some(CellKind::Open) => {}
                    Some(CellKind::Obstacle) => obstacles.push(at),
                    Some(CellKind::Start) => {
                        if start.replace(at).is_some() {
                            return Err(GridError::DuplicateStart(at));
                        }
                    }
                    Some(CellKind::Objective) => {
                        if objective.replace(at).is_some() {
                            return Err(GridError::DuplicateObjective(at));
                        }
                    }
                    None => return Err(GridError::InvalidGlyph { ch, at }),
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let objective = objective.ok_or(GridError::MissingObjective)?;
        Self::new(lines.len() as i32, width as i32, start, objective, obstacles)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn objective(&self) -> Coord {
        self.objective
    }

    /// Whether `c` lies within the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Cell kind at `c`, or `None` if out of bounds.
    pub fn kind(&self, c: Coord) -> Option<CellKind> {
        self.contains(c).then(|| self.cells[self.index(c)])
    }

    /// Whether the cell at `c` is the objective.
    ///
    /// `c` must be in bounds.
    #[inline]
    pub fn is_goal(&self, c: Coord) -> bool {
        self.cells[self.index(c)] == CellKind::Objective
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        matches!(self.kind(c), Some(k) if k != CellKind::Obstacle)
    }

    /// Append the passable orthogonal neighbours of `c` to `buf`, in
    /// [`Direction::ALL`] order. The caller clears `buf` first.
    pub fn neighbors_into(&self, c: Coord, buf: &mut Vec<Coord>) {
        for dir in Direction::ALL {
            let n = c.step(dir);
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// Passable orthogonal neighbours of `c`, ordered up, left, down, right.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(c, &mut buf);
        buf
    }

    /// Count how many cells hold the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Iterate over `(Coord, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(i, &k)| {
            (Coord::new((i / cols) as i32, (i % cols) as i32), k)
        })
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        (c.row * self.cols + c.col) as usize
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for k in row {
                write!(f, "{}", k.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn new_tags_cells() {
        let g = Grid::new(3, 4, c(0, 0), c(2, 3), [c(1, 1), c(1, 2)]).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.kind(c(0, 0)), Some(CellKind::Start));
        assert_eq!(g.kind(c(2, 3)), Some(CellKind::Objective));
        assert_eq!(g.kind(c(1, 1)), Some(CellKind::Obstacle));
        assert_eq!(g.kind(c(0, 1)), Some(CellKind::Open));
        assert_eq!(g.kind(c(3, 0)), None);
        assert_eq!(g.count(CellKind::Obstacle), 2);
        assert_eq!(g.count(CellKind::Open), 8);
    }

    #[test]
    fn goal_test() {
        let g = Grid::new(2, 2, c(0, 0), c(1, 1), []).unwrap();
        assert!(g.is_goal(c(1, 1)));
        assert!(!g.is_goal(c(0, 0)));
        assert!(!g.is_goal(c(0, 1)));
    }

    #[test]
    fn coincident_endpoints_are_goal() {
        let g = Grid::new(2, 2, c(1, 0), c(1, 0), []).unwrap();
        assert_eq!(g.start(), c(1, 0));
        assert!(g.is_goal(c(1, 0)));
    }

    #[test]
    fn neighbors_are_ordered_up_left_down_right() {
        let g = Grid::new(3, 3, c(0, 0), c(2, 2), []).unwrap();
        assert_eq!(
            g.neighbors(c(1, 1)),
            vec![c(0, 1), c(1, 0), c(2, 1), c(1, 2)]
        );
    }

    #[test]
    fn neighbors_skip_bounds_and_obstacles() {
        let g = Grid::new(3, 3, c(0, 0), c(2, 2), [c(1, 0)]).unwrap();
        assert_eq!(g.neighbors(c(0, 0)), vec![c(0, 1)]);
        assert_eq!(g.neighbors(c(2, 2)), vec![c(1, 2), c(2, 1)]);
        // Endpoints are passable.
        assert_eq!(g.neighbors(c(2, 1)), vec![c(1, 1), c(2, 0), c(2, 2)]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Grid::new(0, 3, c(0, 0), c(0, 1), []),
            Err(GridError::EmptyDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Grid::new(2, -1, c(0, 0), c(0, 1), []),
            Err(GridError::EmptyDimensions { rows: 2, cols: -1 })
        );
        assert_eq!(
            Grid::new(2, 2, c(2, 0), c(0, 1), []),
            Err(GridError::StartOutOfBounds(c(2, 0)))
        );
        assert_eq!(
            Grid::new(2, 2, c(0, 0), c(0, -1), []),
            Err(GridError::ObjectiveOutOfBounds(c(0, -1)))
        );
        assert_eq!(
            Grid::new(2, 2, c(0, 0), c(1, 1), [c(5, 5)]),
            Err(GridError::ObstacleOutOfBounds(c(5, 5)))
        );
        assert_eq!(
            Grid::new(2, 2, c(0, 0), c(1, 1), [c(1, 1)]),
            Err(GridError::ObstacleOnEndpoint(c(1, 1)))
        );
    }

    const MAZE: &str = "
@_|_
_||_
___$
";

    #[test]
    fn parse_and_display() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.start(), c(0, 0));
        assert_eq!(g.objective(), c(2, 3));
        assert_eq!(g.count(CellKind::Obstacle), 3);
        assert_eq!(g.to_string(), MAZE.trim_start());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("@_\n_$_"),
            Err(GridError::InconsistentWidth {
                line: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse("@x\n_$"),
            Err(GridError::InvalidGlyph { ch: 'x', at: c(0, 1) })
        );
        assert_eq!(Grid::parse("__\n_$"), Err(GridError::MissingStart));
        assert_eq!(Grid::parse("@_\n__"), Err(GridError::MissingObjective));
        assert_eq!(
            Grid::parse("@@\n_$"),
            Err(GridError::DuplicateStart(c(0, 1)))
        );
        assert_eq!(
            Grid::parse("$@\n_$"),
            Err(GridError::DuplicateObjective(c(1, 1)))
        );
        assert_eq!(
            Grid::parse(""),
            Err(GridError::MissingStart)
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::new(2, 3, c(0, 0), c(1, 2), [c(0, 2)]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[2], (c(0, 2), CellKind::Obstacle));
        assert_eq!(items[3], (c(1, 0), CellKind::Open));
        assert_eq!(items[5], (c(1, 2), CellKind::Objective));
    }
}
