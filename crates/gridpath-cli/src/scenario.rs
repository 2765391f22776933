//! Loading a grid plus endpoints from disk.
//!
//! Two formats are accepted:
//!
//! - **JSON scenario** (`*.json`): `{"grid": [[0, 1], ...], "start": [r, c],
//!   "goal": [r, c], "search": {"heuristic": "chebyshev"}}`. Everything but
//!   `grid` is optional.
//! - **Text maze** (anything else): the [`Grid::parse`] format.
//!
//! Missing endpoints default to the top-left and bottom-right cells.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gridpath_core::samples::{self, MAZE10_GOAL, MAZE10_START};
use gridpath_core::{Grid, Point};
use gridpath_paths::SearchConfig;
use serde::{Deserialize, Serialize};

/// On-disk form of a JSON scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub grid: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Point>,
    #[serde(default)]
    pub search: SearchConfig,
}

/// A grid with resolved endpoints and search settings.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
    pub config: SearchConfig,
}

impl Scenario {
    /// The bundled 10x10 maze from (0, 0) to (7, 6).
    pub fn sample() -> Self {
        Self {
            grid: samples::maze10(),
            start: MAZE10_START,
            goal: MAZE10_GOAL,
            config: SearchConfig::default(),
        }
    }

    /// A scenario running corner to corner across `grid`.
    pub fn corners(grid: Grid) -> Self {
        let goal = Point::new(
            grid.height().saturating_sub(1) as i32,
            grid.width().saturating_sub(1) as i32,
        );
        Self {
            grid,
            start: Point::ZERO,
            goal,
            config: SearchConfig::default(),
        }
    }

    /// Read a scenario from `path`, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let scenario = if is_json {
            Self::from_json(&text)
        } else {
            Self::from_text(&text)
        };
        scenario.with_context(|| format!("failed to load maze from {}", path.display()))
    }

    /// Parse a JSON scenario.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(text).context("invalid scenario JSON")?;
        if file.grid.height() == 0 || file.grid.width() == 0 {
            bail!("scenario grid has no cells");
        }
        let mut scenario = Self::corners(file.grid);
        scenario.start = file.start.unwrap_or(scenario.start);
        scenario.goal = file.goal.unwrap_or(scenario.goal);
        scenario.config = file.search;
        Ok(scenario)
    }

    /// Parse a text maze.
    pub fn from_text(text: &str) -> Result<Self> {
        let grid = Grid::parse(text)?;
        Ok(Self::corners(grid))
    }

    /// Warn about inputs the search does not check for itself.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Err(e) = self.grid.check_rectangular() {
            out.push(e.to_string());
        }
        for (name, p) in [("start", self.start), ("goal", self.goal)] {
            if !self.grid.in_bounds(p) {
                out.push(format!("{name} {p} lies outside the grid"));
            } else if !self.grid.is_free(p) {
                out.push(format!("{name} {p} is a blocked cell"));
            }
        }
        out
    }
}

/// Parse a `row,col` pair as typed on the command line.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = r
        .trim()
        .parse()
        .map_err(|e| format!("bad row \u{201c}{r}\u{201d}: {e}"))?;
    let col = c
        .trim()
        .parse()
        .map_err(|e| format!("bad column \u{201c}{c}\u{201d}: {e}"))?;
    Ok(Point::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::Heuristic;

    #[test]
    fn points_from_cli() {
        assert_eq!(parse_point("7,6"), Ok(Point::new(7, 6)));
        assert_eq!(parse_point(" 2 , -1 "), Ok(Point::new(2, -1)));
        assert!(parse_point("7").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn text_maze_uses_corners() {
        let s = Scenario::from_text("...\n.#.\n...\n...#").unwrap();
        assert_eq!(s.start, Point::ZERO);
        assert_eq!(s.goal, Point::new(3, 3));
        // Ragged, and the goal sits on a wall.
        assert_eq!(s.warnings().len(), 2);
    }

    #[test]
    fn json_scenario_with_overrides() {
        let s = Scenario::from_json(
            r#"{"grid": [[0, 0], [1, 0]], "goal": [0, 1], "search": {"heuristic": "chebyshev"}}"#,
        )
        .unwrap();
        assert_eq!(s.start, Point::ZERO);
        assert_eq!(s.goal, Point::new(0, 1));
        assert_eq!(s.config.heuristic, Heuristic::Chebyshev);
        assert!(s.warnings().is_empty());
    }

    #[test]
    fn json_scenario_rejects_empty_grid() {
        assert!(Scenario::from_json(r#"{"grid": []}"#).is_err());
        assert!(Scenario::from_json(r#"{"grid": [[0]], "start": "x"}"#).is_err());
    }

    #[test]
    fn sample_has_no_warnings() {
        assert!(Scenario::sample().warnings().is_empty());
    }
}
