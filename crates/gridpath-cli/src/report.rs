//! Printing a finished search.

use std::io::{self, Write};

use gridpath_core::Point;
use gridpath_paths::{Heuristic, PathNode, Route};
use serde::Serialize;

use crate::scenario::Scenario;

/// Write the open list, closed list and path, one per line, as
/// `Open List: [(g, (row, col)), ...]` and so on.
pub fn write_text<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    writeln!(out, "Open List: {}", records(&route.open))?;
    writeln!(out, "Closed List: {}", records(&route.closed))?;
    writeln!(out, "Path: {}", points(&route.path))?;
    writeln!(
        out,
        "Steps: {}, expanded: {}, still open: {}",
        route.steps(),
        route.expanded(),
        route.open.len()
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: Point,
    goal: Point,
    heuristic: Heuristic,
    steps: usize,
    #[serde(flatten)]
    route: &'a Route,
}

/// Write the search result as a pretty-printed JSON object.
pub fn write_json<W: Write>(out: &mut W, scenario: &Scenario, route: &Route) -> io::Result<()> {
    let report = JsonReport {
        start: scenario.start,
        goal: scenario.goal,
        heuristic: scenario.config.heuristic,
        steps: route.steps(),
        route,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn records(nodes: &[PathNode]) -> String {
    let items: Vec<String> = nodes
        .iter()
        .map(|n| format!("({}, {})", n.cost, n.pos))
        .collect();
    format!("[{}]", items.join(", "))
}

fn points(path: &[Point]) -> String {
    let items: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", items.join(", "))
}
