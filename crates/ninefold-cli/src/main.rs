//! Command-line front end for the ninefold Sudoku solver.
//!
//! Reads a puzzle file (9 lines of 9 whitespace-separated integers, 0 for
//! an empty cell), prints the initial grid, runs the backtracking search,
//! and prints the result with a status message. The puzzle path can be
//! given as an argument or entered at an interactive prompt.

use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use ninefold_core::{ConfigError, PuzzleState};
use ninefold_solver::BacktrackingSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file. Prompts on stdin when omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("error accessing puzzle file: {_0}")]
    Io(io::Error),
    #[display("invalid puzzle configuration: {_0}")]
    Config(ConfigError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let path = match args.puzzle {
        Some(path) => path,
        None => PathBuf::from(prompt_for_path()?),
    };

    let text = fs::read_to_string(&path)?;
    let mut state: PuzzleState = text.parse()?;
    log::debug!("loaded {} clues from {}", state.clue_count(), path.display());

    println!();
    println!("Here is the initial puzzle:");
    print!("{state}");
    println!();

    let solver = BacktrackingSolver::new();
    if solver.solve(&mut state) {
        println!("Here is the solution:");
    } else {
        println!("No solution could be found.");
        println!("Here is the current state of the puzzle:");
    }
    print!("{state}");

    Ok(())
}

fn prompt_for_path() -> Result<String, CliError> {
    print!("Enter the name of the puzzle file: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
