use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;
use thiserror::Error;

// Distances are computed in i64 and clamped, so far-off points give
// i32::MAX instead of overflowing.

/// Absolute row and column differences.
#[inline]
fn deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(a.row) - i64::from(b.row)).abs(),
        (i64::from(a.col) - i64::from(b.col)).abs(),
    )
}

#[inline]
fn clamp(d: i64) -> i32 {
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dr, dc) = deltas(a, b);
    clamp(dr + dc)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let (dr, dc) = deltas(a, b);
    clamp(dr.max(dc))
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> i32 {
    let (dr, dc) = deltas(a, b);
    clamp(dr.saturating_mul(dr).saturating_add(dc.saturating_mul(dc)))
}

/// Estimate of the remaining cost from a cell to the goal.
///
/// The default, [`SquaredEuclidean`](Heuristic::SquaredEuclidean), is not
/// admissible for king moves at unit cost: it overestimates, which makes the
/// search greedier and can return paths longer than the true minimum around
/// obstacles. [`Chebyshev`](Heuristic::Chebyshev) is exact on open ground and
/// admissible everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Heuristic {
    #[default]
    SquaredEuclidean,
    Chebyshev,
    Manhattan,
}

impl Heuristic {
    /// All variants, in declaration order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::SquaredEuclidean,
        Heuristic::Chebyshev,
        Heuristic::Manhattan,
    ];

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::SquaredEuclidean => squared_euclidean(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
            Heuristic::Manhattan => manhattan(from, to),
        }
    }

    /// The name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::SquaredEuclidean => "squared-euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a heuristic name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic \u{201c}{0}\u{201d} (expected squared-euclidean, chebyshev or manhattan)")]
pub struct ParseHeuristicError(pub String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(7, 6);
        assert_eq!(manhattan(a, b), 13);
        assert_eq!(chebyshev(a, b), 7);
        assert_eq!(squared_euclidean(a, b), 85);
        assert_eq!(squared_euclidean(b, a), 85);
    }

    #[test]
    fn far_points_saturate() {
        let a = Point::new(0, 0);
        let b = Point::new(100_000, 100_000);
        assert_eq!(squared_euclidean(a, b), i32::MAX);
        assert_eq!(chebyshev(a, b), 100_000);
        assert_eq!(manhattan(a, b), 200_000);
        let c = Point::new(i32::MIN, i32::MAX);
        for h in Heuristic::ALL {
            assert_eq!(h.estimate(Point::new(1, -1), c), i32::MAX, "{h}");
        }
    }

    #[test]
    fn default_is_squared_euclidean() {
        let h = Heuristic::default();
        assert_eq!(h, Heuristic::SquaredEuclidean);
        assert_eq!(h.estimate(Point::new(1, 2), Point::new(4, 6)), 25);
    }

    #[test]
    fn names_round_trip() {
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!("Chebyshev".parse::<Heuristic>(), Ok(Heuristic::Chebyshev));
        assert!("euclid".parse::<Heuristic>().is_err());
    }
}
