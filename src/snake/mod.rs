use std::collections::VecDeque;

use crate::basic::{board, Cell, Dir, Outcome};

/// Layout of a freshly spawned snake, head first
pub const INITIAL_SEGMENTS: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];
pub const INITIAL_DIR: Dir = Dir::R;

pub struct Body {
    /// Occupied cells, the head is at index 0
    segments: VecDeque<Cell>,

    /// Direction the snake will move in on the next advance
    dir: Dir,

    /// Direction of the last advance, a turn is only valid if it
    /// doesn't lead back into the segment behind the head
    moved: Dir,

    /// The next advance keeps the tail
    grow: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(INITIAL_SEGMENTS, INITIAL_DIR)
    }
}

impl Body {
    /// `segments` lists the cells head first and must not be empty,
    /// an empty layout panics
    pub fn new(segments: impl IntoIterator<Item = Cell>, dir: Dir) -> Self {
        let segments: VecDeque<_> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Self { segments, dir, moved: dir, grow: false }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    #[cfg(test)]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Keep the tail on the next advance, growing the snake by
    /// exactly one segment no matter how often this is called
    pub fn grow(&mut self) {
        self.grow = true;
    }

    pub fn advance(&mut self) {
        let new_head = self.head() + self.dir;
        self.segments.push_front(new_head);
        self.moved = self.dir;

        if self.grow {
            self.grow = false;
        } else {
            self.segments.pop_back();
        }
    }

    /// Turning around on the spot is ignored, as is a turn that
    /// would reverse the last move (two quick turns within one tick).
    /// `moved` is the direction of the previous tick, so the head never
    /// steps back onto the segment right behind it
    pub fn set_dir(&mut self, dir: Dir) -> Outcome {
        if dir == -self.dir || dir == -self.moved {
            return Outcome::Ignored;
        }
        self.dir = dir;
        Outcome::Applied
    }

    pub fn reset_to(&mut self, segments: impl IntoIterator<Item = Cell>, dir: Dir) {
        *self = Self::new(segments, dir);
    }

    /// Whether the head occupies the same cell as another segment
    pub fn bit_itself(&self) -> bool {
        board::contains(self.head(), self.segments.iter().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    fn cells(cells: &[(i32, i32)]) -> Vec<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn segments(body: &Body) -> Vec<Cell> {
        body.segments().iter().copied().collect()
    }

    #[test]
    fn test_advance_moves_every_segment() {
        let mut body = Body::default();
        body.advance();
        assert_eq!(segments(&body), cells(&[(7, 9), (6, 9), (5, 9)]));
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut body = Body::default();
        for dir in [D, D, L, U, U, R] {
            let _ = body.set_dir(dir);
            body.advance();
            assert_eq!(body.len(), 3);
        }
    }

    #[test]
    fn test_growth_is_consumed_once() {
        let mut body = Body::default();
        body.grow();
        body.grow();
        assert!(body.is_growing());

        body.advance();
        assert_eq!(body.len(), 4);
        assert!(!body.is_growing());
        assert_eq!(segments(&body), cells(&[(7, 9), (6, 9), (5, 9), (4, 9)]));

        body.advance();
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_advance_is_not_bounded() {
        let mut body = Body::new(cells(&[(0, 0)]), L);
        body.advance();
        assert_eq!(body.head(), Cell::new(-1, 0));
    }

    #[test]
    fn test_set_dir_rejects_reversal() {
        let mut body = Body::default();
        assert_eq!(body.set_dir(L), Outcome::Ignored);
        assert_eq!(body.dir(), R);

        assert_eq!(body.set_dir(R), Outcome::Applied);
        assert_eq!(body.set_dir(U), Outcome::Applied);
        assert_eq!(body.dir(), U);
    }

    #[test]
    fn test_set_dir_never_reverses_current_dir() {
        let mut body = Body::default();
        for dir in [U, D, L, R, D, U, L, L, R, U] {
            let before = body.dir();
            let _ = body.set_dir(dir);
            assert_ne!(body.dir(), -before);
            body.advance();
        }
    }

    #[test]
    fn test_set_dir_guards_last_move() {
        // moving right, a quick up then left would turn into the neck
        let mut body = Body::default();
        assert_eq!(body.set_dir(U), Outcome::Applied);
        assert_eq!(body.set_dir(L), Outcome::Ignored);
        assert_eq!(body.dir(), U);

        body.advance();
        assert_eq!(body.set_dir(L), Outcome::Applied);
    }

    #[test]
    fn test_reset_to() {
        let mut body = Body::default();
        let _ = body.set_dir(D);
        body.grow();
        body.advance();
        body.grow();

        body.reset_to(INITIAL_SEGMENTS, INITIAL_DIR);
        assert_eq!(segments(&body), INITIAL_SEGMENTS.to_vec());
        assert_eq!(body.dir(), R);
        assert!(!body.is_growing());
        // the direction of the discarded body no longer restricts turns
        assert_eq!(body.set_dir(U), Outcome::Applied);
    }

    #[test]
    #[should_panic(expected = "at least a head")]
    fn test_new_without_segments() {
        let _ = Body::new(vec![], R);
    }

    #[test]
    fn test_bit_itself() {
        let body = Body::new(cells(&[(5, 5), (4, 5), (5, 5)]), R);
        assert!(body.bit_itself());
        assert!(!Body::default().bit_itself());
    }
}
