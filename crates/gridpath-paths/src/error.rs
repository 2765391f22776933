use gridpath_core::Point;
use thiserror::Error;

/// Failure of a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The open list ran dry before the goal was expanded.
    #[error("no path from {start} to {goal}")]
    NotFound { start: Point, goal: Point },
}
