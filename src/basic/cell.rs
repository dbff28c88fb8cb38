use std::ops::{Add, AddAssign};

use crate::basic::Dir;

/// A single cell of the grid, may lie outside of the board
/// (right after the snake has moved through a wall)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Add, AddAssign)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Dir> for Cell {
    fn from(dir: Dir) -> Self {
        let (x, y) = dir.vector();
        Self { x, y }
    }
}

// translate by one step
impl Add<Dir> for Cell {
    type Output = Self;

    fn add(self, rhs: Dir) -> Self::Output {
        self + Cell::from(rhs)
    }
}

impl AddAssign<Dir> for Cell {
    fn add_assign(&mut self, rhs: Dir) {
        *self = *self + rhs;
    }
}

#[test]
fn test_translate() {
    use Dir::*;
    let start = Cell::new(6, 9);
    for (dir, expect) in [(U, (6, 8)), (D, (6, 10)), (L, (5, 9)), (R, (7, 9))] {
        assert_eq!(start + dir, Cell::from(expect), "{:?}", dir);
    }

    let mut cell = Cell::new(0, 0);
    cell += L;
    cell += U;
    assert_eq!(cell, Cell::new(-1, -1));
}
