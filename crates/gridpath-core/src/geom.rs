//! Geometry primitives: the [`Point`] grid coordinate.
//!
//! Coordinates are `(row, col)` pairs. Row 0 is the first row of the grid,
//! rows grow downwards and columns grow to the right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate, addressed as `(row, col)`.
///
/// Equality, hashing and ordering are by value (row-major order).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// The eight king-move offsets in neighbour enumeration order:
    /// left, right, up, down, up-left, up-right, down-left, down-right.
    ///
    /// Search results depend on this order through the open-list tie-break,
    /// so it must not be reshuffled.
    pub const KING_MOVES: [Point; 8] = [
        Point::new(0, -1),
        Point::new(0, 1),
        Point::new(-1, 0),
        Point::new(1, 0),
        Point::new(-1, -1),
        Point::new(-1, 1),
        Point::new(1, -1),
        Point::new(1, 1),
    ];

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is exactly one king move away from `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = other - self;
        d != Point::ZERO && d.row.abs() <= 1 && d.col.abs() <= 1
    }

    /// The eight king-move neighbours, in [`KING_MOVES`](Self::KING_MOVES) order.
    #[inline]
    pub fn king_neighbors(self) -> [Point; 8] {
        Self::KING_MOVES.map(|d| self + d)
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.row, p.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Point = serde_json::from_str("[4,2]").unwrap();
        assert_eq!(back, Point::new(4, 2));
    }
}
