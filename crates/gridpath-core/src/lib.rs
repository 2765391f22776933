//! **gridpath-core** — coordinates and traversability grids.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! the [`Point`] coordinate, the immutable [`Grid`] of blocked/free flags,
//! and the collaborators that build grids (text parsing, random scatter,
//! bundled sample mazes).

pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod samples;

pub use geom::Point;
pub use grid::{Grid, GridError};
pub use mapgen::scatter;
