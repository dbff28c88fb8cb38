use std::ops::Neg;

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in grid coordinates, y grows downwards
    pub fn vector(self) -> (i32, i32) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }
}

#[test]
fn test_neg() {
    for (dir, opposite) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_opposite_vectors_cancel() {
    for dir in Dir::iter() {
        let (x1, y1) = dir.vector();
        let (x2, y2) = (-dir).vector();
        assert_eq!((x1 + x2, y1 + y2), (0, 0), "{:?}", dir);
        assert_eq!(x1.abs() + y1.abs(), 1);
    }
}
