pub mod board;
pub mod heuristic;
pub mod search;
pub mod state;
pub mod traits;
pub mod util;

mod test;

pub use board::{Board, Coord, Direction, Tile};
pub use heuristic::Mode;
pub use search::{PuzzleError, Search, SearchStats, Solution};
pub use state::{PuzzleState, StateId};
