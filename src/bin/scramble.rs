use std::env;
use std::io;
use std::process;

use npuzzle_astar::util;
use npuzzle_astar::PuzzleError;

const USAGE: &str = "scramble <seed> <iterations>  (reads the board from stdin)";

fn run() -> Result<(), PuzzleError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (seed, iterations) = match (args.first(), args.get(1)) {
        (Some(seed), Some(iterations)) => (
            seed.parse::<u64>().unwrap_or(0),
            iterations.parse::<u32>().unwrap_or(0),
        ),
        _ => return Err(PuzzleError::Usage(USAGE.into())),
    };

    let mut board = util::read_board(io::stdin())?;
    let mut blank = board.blank().unwrap_or_default();
    board.shuffle(&mut blank, seed, iterations);

    print!("{}", board);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
