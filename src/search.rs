use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;

use indicatif::ProgressBar;

use crate::board::{Board, Direction};
use crate::state::{PuzzleState, StateId};

#[derive(Debug)]
pub enum PuzzleError {
    Usage(String),
    UnsolvableBoard(String),
    Io(io::Error),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::Usage(msg) => write!(f, "usage: {}", msg),
            PuzzleError::UnsolvableBoard(msg) => {
                write!(f, "board is in an unsolvable configuration: {}", msg)
            }
            PuzzleError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<io::Error> for PuzzleError {
    fn from(err: io::Error) -> Self {
        PuzzleError::Io(err)
    }
}

/// Counters reported once a run terminates.
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    /// States that became current, the root included.
    pub visited: usize,
    /// Closed plus frontier sizes at termination.
    pub generated: usize,
    pub depth: u32,
    /// Effective branching factor, `generated^(1/depth)`.
    pub branching: f64,
}

pub struct Solution {
    pub stats: SearchStats,
    /// Boards from the initial configuration to the goal.
    pub path: Vec<Board>,
}

/// Best-first A* over an arena of states.
///
/// Every retained state lives in `arena`; the closed set and the frontier
/// only key boards, so membership and pop-min both run in `O(log n)` over
/// the grid-lexicographic order.
pub struct Search {
    arena: Vec<PuzzleState>,
    closed: BTreeSet<Board>,
    frontier: BTreeMap<(u32, Board), StateId>,
    visited: usize,
}

const PROGRESS_EVERY: usize = 1024;

impl Search {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            closed: BTreeSet::new(),
            frontier: BTreeMap::new(),
            visited: 0,
        }
    }

    /// Run from `root` until the goal becomes current. Returns `None` if the
    /// frontier drains first, which only happens when the reachable component
    /// holds no goal; there is no solvability pre-check, so a bad board will
    /// grind through its whole component before reporting that.
    pub fn solve(&mut self, root: PuzzleState, progress: bool) -> Option<Solution> {
        let spinner = progress.then(ProgressBar::new_spinner);

        self.arena.push(root);
        let mut current: StateId = 0;
        self.visited = 1;

        while !self.arena[current].is_goal() {
            self.closed.insert(self.arena[current].board().clone());
            self.expand(current);

            current = match self.frontier.pop_first() {
                Some((_, id)) => id,
                None => {
                    if let Some(pb) = &spinner {
                        pb.finish_and_clear();
                    }
                    return None;
                }
            };
            self.visited += 1;

            if let Some(pb) = &spinner {
                if self.visited % PROGRESS_EVERY == 0 {
                    pb.set_message(format!(
                        "visited {} states, frontier {}",
                        self.visited,
                        self.frontier.len()
                    ));
                    pb.tick();
                }
            }
        }

        if let Some(pb) = &spinner {
            pb.finish_and_clear();
        }

        Some(self.summarize(current))
    }

    /// Clone the current state once per direction; a clone whose move fails
    /// or whose board was already expanded is dropped on the spot. Survivors
    /// get the parent link and enter the frontier.
    fn expand(&mut self, current: StateId) {
        let parent_depth = self.arena[current].depth();

        for dir in Direction::ALL {
            let mut child = self.arena[current].clone();
            if !child.slide(dir) {
                continue;
            }
            if self.closed.contains(child.board()) {
                continue;
            }
            child.attach_parent(current, parent_depth);

            // Frontier keys are (f, grid); an equal pair already queued wins.
            let key = (child.f(), child.board().clone());
            if !self.frontier.contains_key(&key) {
                self.frontier.insert(key, self.arena.len());
                self.arena.push(child);
            }
        }
    }

    fn summarize(&self, goal: StateId) -> Solution {
        let generated = self.closed.len() + self.frontier.len();
        let depth = self.arena[goal].depth();
        let branching = (generated as f64).powf(1.0 / f64::from(depth));

        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            path.push(self.arena[id].board().clone());
            cursor = self.arena[id].parent();
        }
        path.reverse();

        Solution {
            stats: SearchStats {
                visited: self.visited,
                generated,
                depth,
                branching,
            },
            path,
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}
