//! Random obstacle generation.
//!
//! [`scatter`] fills a grid with independently placed blocked cells. It is
//! used to build test terrain and by the `generate` command of the CLI.

use rand::Rng;

use crate::geom::Point;
use crate::grid::{BLOCKED, Grid};

/// Generate a `rows` x `cols` grid where each cell is blocked with
/// probability `density` (clamped to `0.0..=1.0`, NaN counts as zero).
///
/// Cells listed in `keep_free` are always left free, which is handy for
/// keeping a start and goal open.
pub fn scatter(
    rows: usize,
    cols: usize,
    density: f64,
    keep_free: &[Point],
    rng: &mut impl Rng,
) -> Grid {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            let p = Point::new(r as i32, c as i32);
            if keep_free.contains(&p) {
                continue;
            }
            if rng.random_bool(density) {
                grid.set(p, BLOCKED);
            }
        }
    }
    log::debug!(
        "scattered {} blocked cells over {rows}x{cols} (density {density})",
        grid.blocked_count()
    );
    grid
}
