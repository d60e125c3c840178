use std::env;
use std::io;
use std::process;

use chrono::Local;

use npuzzle_astar::traits::DebugPrintable;
use npuzzle_astar::util;
use npuzzle_astar::{Mode, PuzzleError, PuzzleState, Search};

const USAGE: &str = "npuzzle-astar <heuristic> [--pretty] [--progress]\n  \
                     heuristic: 0=zero 1=displaced 2=manhattan 3=custom";

fn run() -> Result<(), PuzzleError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let pretty = args.iter().any(|arg| arg == "--pretty");
    let progress = args.iter().any(|arg| arg == "--progress");
    let mode = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .ok_or_else(|| PuzzleError::Usage(USAGE.into()))?;
    let mode = Mode::from_arg(mode.parse().unwrap_or(0));

    let board = util::read_board(io::stdin())?;
    let root = PuzzleState::new(board, mode);

    let started = Local::now();
    if progress {
        eprintln!("[{}] searching with {:?}", started.format("%H:%M:%S"), mode);
    }

    let mut search = Search::new();
    let solution = search.solve(root, progress).ok_or_else(|| {
        PuzzleError::UnsolvableBoard("frontier exhausted before reaching the goal".into())
    })?;

    if progress {
        let elapsed = Local::now().signed_duration_since(started);
        eprintln!(
            "[{}] done in {}ms",
            Local::now().format("%H:%M:%S"),
            elapsed.num_milliseconds()
        );
    }

    println!("V={}", solution.stats.visited);
    println!("N={}", solution.stats.generated);
    println!("d={}", solution.stats.depth);
    println!("b={}", solution.stats.branching);
    println!();

    for board in &solution.path {
        if pretty {
            board.debug_print();
        } else {
            print!("{}", board);
        }
        println!();
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
