//! Terminal maze solver.
//!
//! Run: cargo run --bin labyr -- --animate

use std::io;
use std::process::ExitCode;

use clap::Parser;
use labyr_demos::{Args, run};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args, &mut io::stdout()) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
