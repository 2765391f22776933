use gridpath_core::Point;

/// A `(g, position)` diagnostic record of a node that was open or closed
/// when the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Accumulated step cost from the start.
    pub cost: i32,
    pub pos: Point,
}

/// One visited or pending cell of a single search run.
///
/// Nodes live in a per-run arena; `parent` is the arena index of the node
/// that generated this one, or `None` for the start node. Parent links are
/// only followed to rebuild the path once the goal is reached.
///
/// Two nodes compare equal when their positions are equal, whatever their
/// costs.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub pos: Point,
    pub parent: Option<usize>,
    /// Cost from the start.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// Priority key, `g + h`, saturating at `i32::MAX`.
    pub f: i32,
}

impl SearchNode {
    /// The seed node: zero costs, no parent.
    pub fn start(pos: Point) -> Self {
        Self {
            pos,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    /// A node reached from arena entry `parent`.
    pub fn child(pos: Point, parent: usize, g: i32, h: i32) -> Self {
        Self {
            pos,
            parent: Some(parent),
            g,
            h,
            f: g.saturating_add(h),
        }
    }

    /// The diagnostic record of this node.
    #[inline]
    pub fn record(&self) -> PathNode {
        PathNode {
            cost: self.g,
            pos: self.pos,
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smaller `f` pops first; equal `f` pops the lower arena index first.
/// Arena indices grow with insertion, so this is exactly "first minimum in
/// insertion order".
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, idx) first.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn nodes_compare_by_position_only() {
        let p = Point::new(2, 3);
        let a = SearchNode::start(p);
        let b = SearchNode::child(p, 4, 9, 16);
        assert_eq!(a, b);
        assert_eq!(b.f, 25);
        assert_ne!(a, SearchNode::start(Point::new(3, 2)));
    }

    #[test]
    fn priority_saturates() {
        let n = SearchNode::child(Point::ZERO, 0, 5, i32::MAX);
        assert_eq!(n.f, i32::MAX);
    }

    #[test]
    fn heap_pops_lowest_f_then_earliest_insert() {
        let mut heap = BinaryHeap::new();
        for (idx, f) in [(0, 5), (1, 3), (2, 3), (3, 1), (4, 3)] {
            heap.push(NodeRef { idx, f });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 4, 0]);
    }
}
