use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridpath_core::{Point, scatter};
use gridpath_paths::{Heuristic, PathFinder};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_cli::{
    RenderOptions, Scenario, init_tracing, parse_point, render, write_json, write_text,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths across blocked/free grids")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a maze and print the path with the open and closed lists.
    Solve(SolveArgs),
    /// Print a random text maze.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Maze file: a `.json` scenario or a text grid. Defaults to the
    /// bundled 10x10 maze.
    maze: Option<PathBuf>,
    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    start: Option<Point>,
    /// Goal cell as ROW,COL.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    goal: Option<Point>,
    /// Heuristic: squared-euclidean, chebyshev or manhattan.
    #[arg(long)]
    heuristic: Option<Heuristic>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Draw row 0 at the bottom.
    #[arg(long)]
    bottom_up: bool,
    /// Never emit ANSI colours.
    #[arg(long)]
    no_color: bool,
    /// Skip the rendered map in text output.
    #[arg(long)]
    no_map: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,
    /// Probability of each cell being blocked.
    #[arg(long, default_value_t = 0.3)]
    density: f64,
    /// Seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("warning: {e:#}; continuing without log output");
    }

    match cli.command {
        Command::Solve(args) => handle_solve(args),
        Command::Generate(args) => handle_generate(args),
    }
}

fn handle_solve(args: SolveArgs) -> Result<()> {
    let mut scenario = match &args.maze {
        Some(path) => Scenario::load(path)?,
        None => Scenario::sample(),
    };
    if let Some(start) = args.start {
        scenario.start = start;
    }
    if let Some(goal) = args.goal {
        scenario.goal = goal;
    }
    if let Some(heuristic) = args.heuristic {
        scenario.config.heuristic = heuristic;
    }
    for warning in scenario.warnings() {
        tracing::warn!("{warning}");
    }

    let mut finder = PathFinder::new(scenario.config);
    let route = finder
        .search(&scenario.grid, scenario.start, scenario.goal)
        .context("search failed")?;
    tracing::info!(
        steps = route.steps(),
        expanded = route.expanded(),
        "path found"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let color = !args.no_color && out.is_terminal();
    match args.format {
        Format::Json => write_json(&mut out, &scenario, &route)?,
        Format::Text => {
            write_text(&mut out, &route)?;
            if !args.no_map {
                writeln!(out)?;
                let opts = RenderOptions {
                    bottom_up: args.bottom_up,
                    color,
                };
                render(
                    &mut out,
                    &scenario.grid,
                    scenario.start,
                    scenario.goal,
                    Some(&route),
                    opts,
                )?;
            }
        }
    }
    Ok(())
}

fn handle_generate(args: GenerateArgs) -> Result<()> {
    let rows = usize::from(args.rows);
    let cols = usize::from(args.cols);
    let keep = [Point::ZERO, Point::new(rows as i32 - 1, cols as i32 - 1)];
    let grid = match args.seed {
        Some(seed) => scatter(rows, cols, args.density, &keep, &mut StdRng::seed_from_u64(seed)),
        None => scatter(rows, cols, args.density, &keep, &mut rand::rng()),
    };
    tracing::debug!(blocked = grid.blocked_count(), "generated maze");
    print!("{grid}");
    Ok(())
}
