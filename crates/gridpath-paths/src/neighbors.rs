use gridpath_core::Point;

/// Cached neighbour computation helper.
///
/// Enumerates the eight king-move neighbours of a cell in
/// [`Point::KING_MOVES`] order, filtered by a predicate, into a reusable
/// buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the king-move neighbours of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn king(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.king_neighbors() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
