//! Command-line maze solver shared by the `labyr` binary.
//!
//! Builds a maze (from a text file or at random), runs a breadth-first
//! search over it, and prints or animates the result.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use labyr_core::{Coord, Grid, MazeGen};
use labyr_search::{Search, SearchConfig, SearchOutcome};
use labyr_term::{Frame, TermConfig, TermRenderer};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Solve a grid maze with breadth-first search
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Maze file drawn with `@` start, `$` objective, `|` wall, `_` open
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Rows of a generated maze
    #[arg(long, default_value_t = 10)]
    pub rows: i32,

    /// Columns of a generated maze
    #[arg(long, default_value_t = 20)]
    pub cols: i32,

    /// Start cell of a generated maze, as "row,col"
    #[arg(long, default_value = "0,0")]
    pub start: Coord,

    /// Objective cell of a generated maze (defaults to the far corner)
    #[arg(long)]
    pub objective: Option<Coord>,

    /// Probability that a generated cell is a wall
    #[arg(long, default_value_t = 0.3)]
    pub odds: f64,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Animate the frontier as the search runs
    #[arg(short, long)]
    pub animate: bool,

    /// Pause between animation frames, in milliseconds
    #[arg(long, default_value_t = 25)]
    pub delay_ms: u64,

    /// Give up after this many frontier pops
    #[arg(long, conflicts_with = "animate")]
    pub max_steps: Option<usize>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_delay(Duration::from_millis(self.delay_ms))
    }

    pub fn term_config(&self) -> TermConfig {
        TermConfig {
            color: !self.no_color,
            ..TermConfig::default()
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Finished(SearchOutcome),
    /// The step budget ran out first.
    OutOfSteps(usize),
}

impl Report {
    /// Process exit status: 0 solved, 2 no path, 3 out of steps.
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Finished(SearchOutcome::Found(_)) => 0,
            Report::Finished(SearchOutcome::NoPath) => 2,
            Report::OutOfSteps(_) => 3,
        }
    }
}

/// Build the maze described by `args`.
pub fn build_grid(args: &Args) -> Result<Grid, Box<dyn Error>> {
    if let Some(path) = &args.map {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {e}", path.display()))?;
        return Ok(Grid::parse(&text)?);
    }

    let objective = args.objective.unwrap_or(Coord::new(
        args.rows.saturating_sub(1),
        args.cols.saturating_sub(1),
    ));
    let grid = match args.seed {
        Some(seed) => MazeGen::new(StdRng::seed_from_u64(seed)).generate(
            args.rows,
            args.cols,
            args.start,
            objective,
            args.odds,
        )?,
        None => Grid::generate(args.rows, args.cols, args.start, objective, args.odds)?,
    };
    Ok(grid)
}

/// Solve the maze described by `args`, writing frames to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<Report, Box<dyn Error>> {
    let grid = build_grid(args)?;
    log::info!(
        "solving {}x{} maze from {} to {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.objective()
    );

    let mut search = Search::new(&grid);

    if args.animate {
        let mut renderer = TermRenderer::new(&mut *out).with_config(args.term_config());
        let outcome = search.run_observed(&mut renderer, &args.search_config());
        log::info!("search finished: {:?}", search.stats());
        return Ok(Report::Finished(outcome));
    }

    let report = match args.max_steps {
        Some(budget) => match search.run_bounded(budget) {
            Some(outcome) => Report::Finished(outcome),
            None => Report::OutOfSteps(budget),
        },
        None => Report::Finished(search.run()),
    };
    log::info!("search finished: {:?}", search.stats());

    match &report {
        Report::Finished(outcome) => {
            write!(out, "{}", Frame::render(&grid, &search.progress(), Some(outcome)))?;
        }
        Report::OutOfSteps(budget) => {
            write!(out, "{}", Frame::render(&grid, &search.progress(), None))?;
            writeln!(out, "gave up after {budget} steps")?;
        }
    }
    Ok(report)
}
