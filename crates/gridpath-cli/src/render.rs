//! Terminal rendering of a grid with a search overlaid.
//!
//! One character per cell: `#` blocked, `.` free, `o` open, `x` expanded,
//! `*` on the path, `S` and `G` for the endpoints. With colour enabled the
//! path is red, open cells blue and expanded cells green.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, PrintStyledContent, StyledContent, Stylize, style};
use gridpath_core::{Grid, Point};
use gridpath_paths::Route;

/// How to draw the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the last row first, as on a Cartesian plot with row 0 at the
    /// bottom.
    pub bottom_up: bool,
    /// Emit ANSI colours.
    pub color: bool,
}

/// What a cell shows. Later variants win when several apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Mark {
    Free,
    Blocked,
    Open,
    Closed,
    Path,
    Start,
    Goal,
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Free => '.',
            Mark::Blocked => '#',
            Mark::Open => 'o',
            Mark::Closed => 'x',
            Mark::Path => '*',
            Mark::Start => 'S',
            Mark::Goal => 'G',
        }
    }

    fn styled(self) -> StyledContent<char> {
        let s = style(self.glyph());
        match self {
            Mark::Free => s.with(Color::DarkGrey),
            Mark::Blocked => s,
            Mark::Open => s.with(Color::Blue),
            Mark::Closed => s.with(Color::Green),
            Mark::Path => s.with(Color::Red).bold(),
            Mark::Start | Mark::Goal => s.with(Color::Yellow).bold(),
        }
    }
}

/// Draw `grid` to `out`, overlaying `route` if the search succeeded.
pub fn render<W: Write>(
    out: &mut W,
    grid: &Grid,
    start: Point,
    goal: Point,
    route: Option<&Route>,
    opts: RenderOptions,
) -> io::Result<()> {
    let mut marks: Vec<Vec<Mark>> = grid
        .rows()
        .map(|r| {
            r.iter()
                .map(|&f| if f == 0 { Mark::Free } else { Mark::Blocked })
                .collect()
        })
        .collect();

    if let Some(route) = route {
        for n in &route.open {
            overlay(&mut marks, n.pos, Mark::Open);
        }
        for n in &route.closed {
            overlay(&mut marks, n.pos, Mark::Closed);
        }
        for &p in &route.path {
            overlay(&mut marks, p, Mark::Path);
        }
    }
    overlay(&mut marks, start, Mark::Start);
    overlay(&mut marks, goal, Mark::Goal);

    if opts.bottom_up {
        marks.reverse();
    }
    for row in &marks {
        for &m in row {
            if opts.color {
                queue!(out, PrintStyledContent(m.styled()))?;
            } else {
                write!(out, "{}", m.glyph())?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

fn overlay(marks: &mut [Vec<Mark>], p: Point, m: Mark) {
    if p.row < 0 || p.col < 0 {
        return;
    }
    if let Some(cell) = marks
        .get_mut(p.row as usize)
        .and_then(|r| r.get_mut(p.col as usize))
    {
        *cell = (*cell).max(m);
    }
}
