//! Library half of the `gridpath` binary: scenario loading, terminal
//! rendering, report formatting and log setup. Kept separate from
//! `main.rs` so the pieces can be unit tested.

pub mod logging;
pub mod render;
pub mod report;
pub mod scenario;

pub use logging::init_tracing;
pub use render::{RenderOptions, render};
pub use report::{write_json, write_text};
pub use scenario::{Scenario, parse_point};
