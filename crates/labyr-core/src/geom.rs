//! Geometry primitives: [`Coord`] and [`Direction`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, so "up" means `row - 1`.

use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The four orthogonal neighbours in [`Direction::ALL`] order.
    ///
    /// No bounds checking is done here.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let d = other - self;
        d.row.abs() + d.col.abs() == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Error returned when a `"row,col"` string can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("coordinate {0:?} is not of the form \"row,col\"")]
    Format(String),
    #[error("coordinate {input:?}: {source}")]
    Int {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let Some((r, c)) = trimmed.split_once(',') else {
            return Err(ParseCoordError::Format(s.to_string()));
        };
        let int = |part: &str| {
            part.trim().parse::<i32>().map_err(|source| ParseCoordError::Int {
                input: s.to_string(),
                source,
            })
        };
        Ok(Coord::new(int(r)?, int(c)?))
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One orthogonal move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Every direction, in expansion priority order.
    ///
    /// This order decides which of several equal-cost paths a search finds.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit offset of this direction.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Direction::Up => Coord::new(-1, 0),
            Direction::Left => Coord::new(0, -1),
            Direction::Down => Coord::new(1, 0),
            Direction::Right => Coord::new(0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_priority_order() {
        let c = Coord::new(3, 3);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(4, 3),
                Coord::new(3, 4),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
    }

    #[test]
    fn parse_coord() {
        assert_eq!("2,5".parse::<Coord>(), Ok(Coord::new(2, 5)));
        assert_eq!(" (0, 4) ".parse::<Coord>(), Ok(Coord::new(0, 4)));
        assert!(matches!(
            "7".parse::<Coord>(),
            Err(ParseCoordError::Format(_))
        ));
        assert!(matches!(
            "a,1".parse::<Coord>(),
            Err(ParseCoordError::Int { .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(0, 4).to_string(), "(0, 4)");
    }
}
