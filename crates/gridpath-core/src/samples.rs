//! Bundled sample mazes.

use crate::geom::Point;
use crate::grid::Grid;

/// Text form of the 10x10 reference maze: a wall down column 4, open at
/// rows 5 and 9, with a few more walls just right of it.
pub const MAZE10: &str = "\
....#.....
....#.....
....#.....
....#.....
....#.##..
.....#....
....##....
....#.....
....##....
.....#....
";

/// Start cell used with [`MAZE10`].
pub const MAZE10_START: Point = Point::new(0, 0);
/// Goal cell used with [`MAZE10`].
pub const MAZE10_GOAL: Point = Point::new(7, 6);

/// The 10x10 reference maze as a [`Grid`].
pub fn maze10() -> Grid {
    Grid::from_rows(vec![
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_rows_agree() {
        assert_eq!(Grid::parse_rectangular(MAZE10).unwrap(), maze10());
    }

    #[test]
    fn endpoints_are_free() {
        let g = maze10();
        assert!(g.is_free(MAZE10_START));
        assert!(g.is_free(MAZE10_GOAL));
    }
}
