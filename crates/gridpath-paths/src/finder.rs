use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::node::{NodeRef, PathNode, SearchNode};

/// Marks a cell no open node has reached yet.
const UNSEEN: i32 = i32::MAX;

/// Tunables for a [`PathFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Estimate of the remaining cost used for the `h` term.
    pub heuristic: Heuristic,
}

/// A successful search: the path and the final state of the open and
/// closed lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal, both included.
    pub path: Vec<Point>,
    /// Nodes still open when the goal was expanded, in insertion order.
    pub open: Vec<PathNode>,
    /// Expanded nodes in expansion order; the goal is last.
    pub closed: Vec<PathNode>,
}

impl Route {
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Number of expanded nodes, goal included.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }
}

/// Best-first grid search with king moves at unit cost.
///
/// A `PathFinder` owns its node arena and open/closed bookkeeping so that
/// repeated searches reuse allocations. Every call to
/// [`search`](Self::search) starts from a clean state; nothing carries over
/// between calls. Independent finders may search the same `&Grid` from
/// different threads.
pub struct PathFinder {
    config: SearchConfig,
    height: usize,
    width: usize,
    // per-run arena; parents are indices into it
    nodes: Vec<SearchNode>,
    open: BinaryHeap<NodeRef>,
    closed: Vec<usize>,
    // flat per-cell lookups, row * width + col
    closed_mask: Vec<bool>,
    best_open_g: Vec<i32>,
    nbuf: Neighbors,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl PathFinder {
    /// Create a finder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            height: 0,
            width: 0,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            closed: Vec::new(),
            closed_mask: Vec::new(),
            best_open_g: Vec::new(),
            nbuf: Neighbors::new(),
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Find a path from `start` to `goal` on `grid`.
    ///
    /// Candidates are expanded in order of lowest `f = g + h`; among equal
    /// `f` the earliest inserted node wins. Neighbours are generated in
    /// [`Point::KING_MOVES`] order, must lie within the grid bounds and be
    /// free, and are skipped if their cell was already expanded. A new open
    /// node is added unless an open node for the same cell already has a
    /// strictly smaller `g`, so the open list may hold several nodes for one
    /// cell. Once a cell is expanded, any of its remaining open nodes is
    /// dropped when popped, so each cell appears in the closed list at most
    /// once. Nodes still waiting in the open list when the goal is reached
    /// are reported as they are, duplicates included.
    ///
    /// # Preconditions
    ///
    /// `start` and `goal` should lie inside the grid and the grid should be
    /// rectangular. This is not validated. The start cell's own flag is
    /// never checked. A goal outside the grid or on a blocked cell is simply
    /// never reached and yields [`SearchError::NotFound`].
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Route, SearchError> {
        self.reset(grid);
        log::debug!(
            "search {start} -> {goal} on {}x{} grid, heuristic {}",
            self.height,
            self.width,
            self.config.heuristic
        );

        self.push(SearchNode::start(start));

        let heuristic = self.config.heuristic;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };

            let ci = current.idx;
            let node = self.nodes[ci];
            let cell = self.idx(node.pos);
            // Leftover duplicate of a cell that was already expanded.
            if cell.is_some_and(|i| self.closed_mask[i]) {
                log::trace!("drop stale {} g={}", node.pos, node.g);
                continue;
            }
            self.closed.push(ci);
            if let Some(i) = cell {
                self.closed_mask[i] = true;
            }

            if node.pos == goal {
                break 'search Some(ci);
            }
            log::trace!("expand {} g={} f={}", node.pos, node.g, node.f);

            let g = node.g + 1;
            for &np in nbuf.king(node.pos, |p| grid.in_bounds(p) && grid.is_free(p)) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.closed_mask[ni] {
                    continue;
                }
                // Nodes only leave the open list when their cell is
                // expanded, so for an unexpanded cell the smallest g pushed
                // is the smallest g open.
                if self.best_open_g[ni] < g {
                    continue;
                }
                self.push(SearchNode::child(np, ci, g, heuristic.estimate(np, goal)));
            }
        };

        self.nbuf = nbuf;

        let Some(goal_idx) = found else {
            log::debug!(
                "no path {start} -> {goal} after {} expansions",
                self.closed.len()
            );
            return Err(SearchError::NotFound { start, goal });
        };

        let route = Route {
            path: self.unwind(goal_idx),
            open: self.open_records(),
            closed: self.closed.iter().map(|&i| self.nodes[i].record()).collect(),
        };
        log::debug!(
            "found {} step path {start} -> {goal}: {} expanded, {} open",
            route.steps(),
            route.closed.len(),
            route.open.len()
        );
        Ok(route)
    }

    fn reset(&mut self, grid: &Grid) {
        self.height = grid.height();
        self.width = grid.width();
        let len = self.height * self.width;

        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.closed_mask.clear();
        self.closed_mask.resize(len, false);
        self.best_open_g.clear();
        self.best_open_g.resize(len, UNSEEN);
    }

    /// Add `node` to the arena and the open list.
    fn push(&mut self, node: SearchNode) {
        let idx = self.nodes.len();
        if let Some(i) = self.idx(node.pos) {
            self.best_open_g[i] = self.best_open_g[i].min(node.g);
        }
        self.nodes.push(node);
        self.open.push(NodeRef { idx, f: node.f });
    }

    /// Follow parent links from `idx` back to the start, returning the
    /// positions in start-to-`idx` order.
    fn unwind(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }

    /// Remaining open nodes in insertion (arena) order.
    fn open_records(&self) -> Vec<PathNode> {
        let mut idxs: Vec<usize> = self.open.iter().map(|r| r.idx).collect();
        idxs.sort_unstable();
        idxs.into_iter().map(|i| self.nodes[i].record()).collect()
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.col as usize);
        (r < self.height && c < self.width).then(|| r * self.width + c)
    }
}

/// Run a single search with the default configuration.
pub fn search(grid: &Grid, start: Point, goal: Point) -> Result<Route, SearchError> {
    PathFinder::default().search(grid, start, goal)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let grid = Grid::new(2, 2);
        let route = search(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn config_defaults_missing_fields() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        let cfg: SearchConfig = serde_json::from_str(r#"{"heuristic":"manhattan"}"#).unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
    }
}
