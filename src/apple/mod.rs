use crate::basic::Cell;

pub mod spawn;

/// The food the snake is chasing
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Apple {
    pub pos: Cell,
}
