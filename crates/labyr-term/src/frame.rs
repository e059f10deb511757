//! Plain-text frames of a search.
//!
//! A frame shows two panels side by side: the static maze on the left and
//! the search on the right. While the search runs the right panel marks
//! visited (`#`) and frontier (`?`) cells; once a path is found it shows
//! the path (`.`) instead.

use std::collections::HashSet;
use std::fmt;

use labyr_core::{CellKind, Coord, Grid};
use labyr_search::{Progress, SearchOutcome};

/// What a single frame position shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Cell(CellKind),
    Visited,
    Frontier,
    Path,
    /// Gap between the two panels.
    Gap,
}

impl Mark {
    pub const fn glyph(self) -> char {
        match self {
            Mark::Cell(k) => k.glyph(),
            Mark::Visited => '#',
            Mark::Frontier => '?',
            Mark::Path => '.',
            Mark::Gap => ' ',
        }
    }
}

/// One rendered picture of a grid and its search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: String,
    pub rows: Vec<Vec<Mark>>,
}

impl Frame {
    /// Build a frame. `outcome` is `None` while the search is running.
    pub fn render(grid: &Grid, progress: &Progress<'_>, outcome: Option<&SearchOutcome>) -> Self {
        let width = grid.cols() as usize + 1;
        let header = match outcome {
            Some(SearchOutcome::NoPath) => "NO SOLUTION".to_string(),
            Some(SearchOutcome::Found(sol)) => format!(
                "{:<width$}{:<width$}",
                "INPUT:",
                format!("OUTPUT (cost = {}):", sol.cost)
            ),
            None => format!("{:<width$}{:<width$}", "INPUT:", "OUTPUT:"),
        };

        let path: HashSet<Coord> = outcome
            .and_then(SearchOutcome::solution)
            .map(|s| s.path.iter().copied().collect())
            .unwrap_or_default();
        // Exploration marks are shown until a path replaces them.
        let show_progress = !matches!(outcome, Some(SearchOutcome::Found(_)));

        let mut rows = Vec::with_capacity(grid.rows() as usize);
        for row in 0..grid.rows() {
            let mut line = Vec::with_capacity(2 * width);
            for col in 0..grid.cols() {
                line.push(Mark::Cell(cell_kind(grid, Coord::new(row, col))));
            }
            line.push(Mark::Gap);
            for col in 0..grid.cols() {
                let c = Coord::new(row, col);
                let kind = cell_kind(grid, c);
                let mark = if kind != CellKind::Open {
                    Mark::Cell(kind)
                } else if show_progress && progress.is_visited(c) {
                    Mark::Visited
                } else if show_progress && progress.in_frontier(c) {
                    Mark::Frontier
                } else if path.contains(&c) {
                    Mark::Path
                } else {
                    Mark::Cell(kind)
                };
                line.push(mark);
            }
            rows.push(line);
        }

        Self { header, rows }
    }
}

/// Cell kind for display; the start glyph wins over the objective when
/// both share a cell.
fn cell_kind(grid: &Grid, c: Coord) -> CellKind {
    if c == grid.start() {
        CellKind::Start
    } else {
        grid.kind(c).unwrap_or_default()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.trim_end())?;
        writeln!(f)?;
        for row in &self.rows {
            for m in row {
                write!(f, "{}", m.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
