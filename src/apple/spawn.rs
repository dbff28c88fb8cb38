use log::warn;
use rand::Rng;

use crate::apple::Apple;
use crate::basic::board::random_free_cell;
use crate::basic::{Board, Cell, Outcome};

impl Apple {
    /// Move to a random free cell, the apple stays where it is
    /// if the board is full
    pub fn relocate<'a, I>(&mut self, occupied: I, board: Board, rng: &mut impl Rng) -> Outcome
    where
        I: IntoIterator<Item = &'a Cell>,
        I::IntoIter: Clone,
    {
        match random_free_cell(occupied, board, rng) {
            Some(pos) => {
                self.pos = pos;
                Outcome::Applied
            }
            None => {
                warn!("no space left for the apple, leaving it at {:?}", self.pos);
                Outcome::Ignored
            }
        }
    }
}
