//! Shortest-path search on blocked/free grids.
//!
//! [`PathFinder`] runs a best-first (A\*-style) search from a start cell to a
//! goal cell, moving in the eight king-move directions at unit cost. On
//! success it returns a [`Route`]: the path itself plus the `(g, position)`
//! records of every node still open and every node expanded when the goal
//! was reached.
//!
//! The search is fully deterministic. Among open nodes with equal `f`, the
//! one inserted first is expanded first, so repeated runs on the same input
//! give the same path and the same diagnostics.
//!
//! ```
//! use gridpath_core::{Grid, Point};
//! use gridpath_paths::search;
//!
//! let grid = Grid::parse("..#\n..#\n...").unwrap();
//! let route = search(&grid, Point::new(0, 0), Point::new(0, 2));
//! assert!(route.is_err()); // (0, 2) is blocked
//!
//! let route = search(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(route.steps(), 2);
//! ```

mod distance;
mod error;
mod finder;
mod neighbors;
mod node;

pub use distance::{Heuristic, ParseHeuristicError, chebyshev, manhattan, squared_euclidean};
pub use error::SearchError;
pub use finder::{PathFinder, Route, SearchConfig, search};
pub use neighbors::Neighbors;
pub use node::{PathNode, SearchNode};
