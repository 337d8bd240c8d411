//! **coinpath-core** — weighted-cell maze grids (core types).
//!
//! This crate provides the types shared by the *coinpath* workspace:
//! the [`Coord`] geometry primitive, the [`Tile`] cell symbols, the
//! immutable [`Maze`] grid and the text loader that produces a
//! [`Puzzle`] (maze plus start and goal).

pub mod geom;
pub mod loader;
pub mod maze;
pub mod tile;

pub use geom::{Coord, DIRECTIONS, chebyshev};
pub use loader::{MazeError, Puzzle, load_maze, parse_maze};
pub use maze::Maze;
pub use tile::Tile;
