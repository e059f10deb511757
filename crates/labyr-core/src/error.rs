use crate::geom::Coord;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: i32, cols: i32 },
    #[error("start {0} lies outside the grid")]
    StartOutOfBounds(Coord),
    #[error("objective {0} lies outside the grid")]
    ObjectiveOutOfBounds(Coord),
    #[error("obstacle {0} lies outside the grid")]
    ObstacleOutOfBounds(Coord),
    #[error("obstacle {0} overlaps the start or the objective")]
    ObstacleOnEndpoint(Coord),
    #[error("obstacle probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("maze line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("maze contains invalid glyph \u{201c}{ch}\u{201d} at {at}")]
    InvalidGlyph { ch: char, at: Coord },
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no objective cell")]
    MissingObjective,
    #[error("maze has a second start cell at {0}")]
    DuplicateStart(Coord),
    #[error("maze has a second objective cell at {0}")]
    DuplicateObjective(Coord),
}
