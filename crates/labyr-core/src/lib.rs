//! **labyr-core**: the maze model used across the *labyr* crates.
//!
//! This crate provides grid coordinates and directions, the immutable
//! [`Grid`] of cell kinds with its adjacency and goal queries, a text maze
//! format, and random maze generation.

pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use error::GridError;
pub use geom::{Coord, Direction, ParseCoordError};
pub use grid::{CellKind, Grid};
pub use mapgen::MazeGen;
