pub use board::{contains, Board};
pub use cell::Cell;
pub use dir::Dir;
pub use point::Point;

pub mod board;
mod cell;
mod dir;
mod point;

/// Result of a guarded state transition, requests that arrive
/// at the wrong moment are ignored rather than reported
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}
