use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Tile = u32;

/// Row/column position of a cell; every board tracks one for its blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UP,
    DOWN,
    LEFT,
    RIGHT,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
    ];
}

/// A square sliding-tile board: side length plus a flat row-major cell
/// buffer. Cells hold a permutation of `0..side*side`, with `0` as the blank.
///
/// The derived ordering compares cells row-major, which is the
/// lexicographic order the search sets rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Board {
    side: usize,
    cells: Vec<Tile>,
}

impl Board {
    pub fn from_cells(side: usize, cells: Vec<Tile>) -> Self {
        assert_eq!(side * side, cells.len(), "board must hold side * side cells");
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn at(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Locate the blank, scanning row-major.
    pub fn blank(&self) -> Option<Coord> {
        self.cells.iter().position(|&tile| tile == 0).map(|idx| Coord {
            row: idx / self.side,
            col: idx % self.side,
        })
    }

    /// The four primitives below are the only grid mutators. Each swaps the
    /// blank with one neighbour and updates `blank`, or reports `false` with
    /// no effect when the blank sits on the corresponding edge.
    pub fn move_up(&mut self, blank: &mut Coord) -> bool {
        if blank.row == 0 {
            return false;
        }
        let from = self.index(blank.row, blank.col);
        let to = self.index(blank.row - 1, blank.col);
        self.cells.swap(from, to);
        blank.row -= 1;
        true
    }

    pub fn move_down(&mut self, blank: &mut Coord) -> bool {
        if blank.row == self.side - 1 {
            return false;
        }
        let from = self.index(blank.row, blank.col);
        let to = self.index(blank.row + 1, blank.col);
        self.cells.swap(from, to);
        blank.row += 1;
        true
    }

    pub fn move_left(&mut self, blank: &mut Coord) -> bool {
        if blank.col == 0 {
            return false;
        }
        let from = self.index(blank.row, blank.col);
        let to = self.index(blank.row, blank.col - 1);
        self.cells.swap(from, to);
        blank.col -= 1;
        true
    }

    pub fn move_right(&mut self, blank: &mut Coord) -> bool {
        if blank.col == self.side - 1 {
            return false;
        }
        let from = self.index(blank.row, blank.col);
        let to = self.index(blank.row, blank.col + 1);
        self.cells.swap(from, to);
        blank.col += 1;
        true
    }

    pub fn slide(&mut self, blank: &mut Coord, dir: Direction) -> bool {
        match dir {
            Direction::UP => self.move_up(blank),
            Direction::DOWN => self.move_down(blank),
            Direction::LEFT => self.move_left(blank),
            Direction::RIGHT => self.move_right(blank),
        }
    }

    /// Random walk of `iterations` legal moves from the current position.
    /// A draw that hits a boundary costs nothing and is redrawn, so the walk
    /// always performs the full move count and the result stays reachable
    /// from the input board.
    pub fn shuffle(&mut self, blank: &mut Coord, seed: u64, iterations: u32) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut remaining = iterations;

        while remaining > 0 {
            let dir = Direction::ALL[rng.gen_range(0..4)];
            if self.slide(blank, dir) {
                remaining -= 1;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                write!(f, "{} ", self.at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
