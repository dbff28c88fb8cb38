use itertools::iproduct;
use rand::Rng;

use crate::basic::Cell;

/// After this many rejected samples the free cell is found
/// by scanning the board instead
pub const MAX_SAMPLES: usize = 64;

/// The square playing field, cells range over `[0, cell_count - 1]`
/// on both axes
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pub cell_count: i32,
}

impl Board {
    pub const fn new(cell_count: i32) -> Self {
        Self { cell_count }
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.cell_count).contains(&cell.x) && (0..self.cell_count).contains(&cell.y)
    }

    /// Row-major iterator over every cell of the board
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.cell_count, 0..self.cell_count).map(|(y, x)| Cell { x, y })
    }
}

/// Whether `point` is one of `cells`
pub fn contains<'a>(point: Cell, cells: impl IntoIterator<Item = &'a Cell>) -> bool {
    cells.into_iter().any(|cell| *cell == point)
}

fn random_cell(board: Board, rng: &mut impl Rng) -> Cell {
    Cell {
        x: rng.gen_range(0..board.cell_count),
        y: rng.gen_range(0..board.cell_count),
    }
}

/// Uniformly sample a cell not in `occupied`, `None` only if the
/// board is full
pub fn random_free_cell<'a, I>(occupied: I, board: Board, rng: &mut impl Rng) -> Option<Cell>
where
    I: IntoIterator<Item = &'a Cell>,
    I::IntoIter: Clone,
{
    let occupied = occupied.into_iter();
    for _ in 0..MAX_SAMPLES {
        let candidate = random_cell(board, rng);
        if !contains(candidate, occupied.clone()) {
            return Some(candidate);
        }
    }

    board.cells().find(|cell| !contains(*cell, occupied.clone()))
}
