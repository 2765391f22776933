//! The traversability grid searched by the path finder.
//!
//! A [`Grid`] is a list of rows of integer flags: `0` is a free (walkable)
//! cell, any other value is blocked. Grids are immutable once handed to a
//! search; [`Grid::set`] needs `&mut` and exists for construction only.
//!
//! # Bounds
//!
//! [`Grid::height`] is the number of rows and [`Grid::width`] is the length
//! of the **last** row. On a rectangular grid these are simply the
//! dimensions. Ragged grids are accepted but not supported for searching:
//! a cell that lies inside the nominal bounds but past the end of a shorter
//! row reads as `None` and is treated as blocked.

use std::fmt;

use thiserror::Error;

use crate::geom::Point;

/// Flag value of a free cell.
pub const FREE: i32 = 0;
/// Default flag value of a blocked cell.
pub const BLOCKED: i32 = 1;

/// A 2D grid of traversability flags, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Grid {
    rows: Vec<Vec<i32>>,
}

impl Grid {
    /// Create a `rows` x `cols` grid with every cell free.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![FREE; cols]; rows],
        }
    }

    /// Build a grid from explicit rows of flags.
    ///
    /// Rows are taken as given; no rectangularity check is made.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// Parse a grid from text.
    ///
    /// Each line is a row. `.` and `0` are free cells, `#` and `1` are
    /// blocked, digits `2`-`9` are blocked cells carrying that flag value.
    /// Spaces and tabs inside a line are ignored, so both `..#` and
    /// `0 0 1` are valid rows. Blank lines before the first and after the
    /// last row are dropped.
    ///
    /// Rows may have different lengths; use
    /// [`parse_rectangular`](Self::parse_rectangular) to reject that.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(GridError::Empty);
        };

        let mut rows = Vec::with_capacity(last - first + 1);
        for (i, line) in lines[first..=last].iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (j, ch) in line.chars().enumerate() {
                let flag = match ch {
                    ' ' | '\t' | '\r' => continue,
                    '.' => FREE,
                    '#' => BLOCKED,
                    '0'..='9' => ch as i32 - '0' as i32,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            line: first + i + 1,
                            column: j + 1,
                        });
                    }
                };
                row.push(flag);
            }
            rows.push(row);
        }
        log::debug!("parsed grid with {} rows", rows.len());
        Ok(Self { rows })
    }

    /// Parse a grid from text like [`parse`](Self::parse), additionally
    /// requiring every row to have the same length as the first.
    pub fn parse_rectangular(s: &str) -> Result<Self, GridError> {
        let grid = Self::parse(s)?;
        grid.check_rectangular()?;
        Ok(grid)
    }

    /// Return an error naming the first row whose length differs from the
    /// first row's.
    pub fn check_rectangular(&self) -> Result<(), GridError> {
        let Some(expected) = self.rows.first().map(Vec::len) else {
            return Err(GridError::Empty);
        };
        match self.rows.iter().position(|r| r.len() != expected) {
            Some(row) => Err(GridError::Ragged {
                row,
                len: self.rows[row].len(),
                expected,
            }),
            None => Ok(()),
        }
    }

    /// Whether all rows have the same length.
    pub fn is_rectangular(&self) -> bool {
        self.check_rectangular().is_ok()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the last row, used as the column bound.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.last().map_or(0, Vec::len)
    }

    /// Whether `p` lies in `[0, height) x [0, width)`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.row >= 0
            && p.col >= 0
            && (p.row as usize) < self.height()
            && (p.col as usize) < self.width()
    }

    /// The flag at `p`, or `None` if `p` does not address a stored cell.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.rows
            .get(p.row as usize)
            .and_then(|r| r.get(p.col as usize))
            .copied()
    }

    /// Whether `p` is a stored cell with a zero flag.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(FREE)
    }

    /// Set the flag at `p`. Does nothing if `p` is not a stored cell.
    pub fn set(&mut self, p: Point, flag: i32) {
        if p.row < 0 || p.col < 0 {
            return;
        }
        if let Some(cell) = self
            .rows
            .get_mut(p.row as usize)
            .and_then(|r| r.get_mut(p.col as usize))
        {
            *cell = flag;
        }
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Count the blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&f| f != FREE).count()
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the text format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &flag in row {
                let ch = match flag {
                    FREE => '.',
                    BLOCKED => '#',
                    2..=9 => char::from(b'0' + flag as u8),
                    _ => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when building a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contained no rows.
    #[error("grid: no rows")]
    Empty,
    /// A character outside the grid alphabet was found.
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at line {line}, column {column}")]
    InvalidChar { ch: char, line: usize, column: usize },
    /// A row's length differs from the first row's.
    #[error("grid: row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
..#.
..#.
....
";

    #[test]
    fn parse_symbols() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.at(Point::new(0, 2)), Some(BLOCKED));
        assert!(g.is_free(Point::new(2, 2)));
        assert_eq!(g.blocked_count(), 2);
    }

    #[test]
    fn parse_digits_with_spaces() {
        let g = Grid::parse("0 0 1\n0 3 0").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.at(Point::new(1, 1)), Some(3));
        assert!(!g.is_free(Point::new(1, 1)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Grid::parse("\n  \n"), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("..\n.x"),
            Err(GridError::InvalidChar {
                ch: 'x',
                line: 2,
                column: 2
            })
        );
        assert_eq!(
            Grid::parse_rectangular("...\n..\n..."),
            Err(GridError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn bounds_use_last_row_width() {
        let g = Grid::from_rows(vec![vec![0, 0], vec![0, 0, 0, 0]]);
        assert!(!g.is_rectangular());
        assert_eq!(g.width(), 4);
        // Inside the nominal bounds but past the end of row 0.
        let p = Point::new(0, 3);
        assert!(g.in_bounds(p));
        assert_eq!(g.at(p), None);
        assert!(!g.is_free(p));
        assert!(!g.in_bounds(Point::new(2, 0)));
        assert!(!g.in_bounds(Point::new(0, -1)));
    }

    #[test]
    fn set_ignores_missing_cells() {
        let mut g = Grid::new(2, 2);
        g.set(Point::new(1, 1), BLOCKED);
        g.set(Point::new(5, 5), BLOCKED);
        g.set(Point::new(-1, 0), BLOCKED);
        assert_eq!(g.blocked_count(), 1);
        assert_eq!(g.rows().count(), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_nested_rows() {
        let g = Grid::from_rows(vec![vec![0, 1], vec![0, 0]]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,1],[0,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
