//! Geometry primitive: [`Coord`], a (row, column) cell address.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid coordinate. Rows grow downwards, columns grow to the right.
///
/// Ordering is row-major: by `row`, then by `col`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// The eight movement offsets: up, down, left, right, then the diagonals.
pub const DIRECTIONS: [Coord; 8] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, -1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(1, 1),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// All eight neighbours, in [`DIRECTIONS`] order. Bounds are not checked.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Whether `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && chebyshev(self, other) == 1
    }
}

/// Chebyshev (L∞) distance between two coordinates.
///
/// With unit-cost diagonal moves this is the step count on an open grid,
/// and a lower bound on it otherwise.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
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

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
