use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;

use crate::apple::Apple;
use crate::basic::{Board, Cell, Dir, Outcome};
use crate::snake::{Body, INITIAL_DIR, INITIAL_SEGMENTS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Running,
    Terminated,
}

/// Signals for the sound/UX side of the game, each one is
/// handed out exactly once by [`Round::drain_events`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    Ate,
    Terminated,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    Wall,
    Itself,
}

/// One snake, one apple and the score, advanced one tick at a time
pub struct Round<R: Rng = ThreadRng> {
    board: Board,
    body: Body,
    apple: Apple,
    state: State,
    score: u32,
    rng: R,
    events: Vec<Event>,
}

impl<R: Rng> Round<R> {
    pub fn new(board: Board, mut rng: R) -> Self {
        let body = Body::default();
        let mut apple = Apple { pos: Cell::new(0, 0) };
        let _ = apple.relocate(body.segments(), board, &mut rng);

        Self {
            board,
            body,
            apple,
            state: State::Running,
            score: 0,
            rng,
            events: vec![],
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        self.body.segments()
    }

    pub fn dir(&self) -> Dir {
        self.body.dir()
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_dir(&mut self, dir: Dir) -> Outcome {
        self.body.set_dir(dir)
    }

    /// Leave the terminated state, the snake stays in its starting
    /// position until the next tick
    pub fn resume(&mut self) -> Outcome {
        match self.state {
            State::Running => Outcome::Ignored,
            State::Terminated => {
                self.state = State::Running;
                Outcome::Applied
            }
        }
    }

    /// Perform one tick: move, eat, then check for a crash
    pub fn update(&mut self) -> Outcome {
        if self.state != State::Running {
            return Outcome::Ignored;
        }

        self.body.advance();

        if self.body.head() == self.apple.pos {
            self.body.grow();
            self.score += 1;
            let _ = self.apple.relocate(self.body.segments(), self.board, &mut self.rng);
            debug!("ate, score {}, apple moved to {:?}", self.score, self.apple.pos);
            self.events.push(Event::Ate);
        }

        if let Some(collision) = self.find_collision() {
            self.terminate(collision);
        }

        Outcome::Applied
    }

    fn find_collision(&self) -> Option<Collision> {
        if !self.board.contains(self.body.head()) {
            Some(Collision::Wall)
        } else if self.body.bit_itself() {
            Some(Collision::Itself)
        } else {
            None
        }
    }

    fn terminate(&mut self, collision: Collision) {
        info!(
            "game over: {:?} collision at {:?}, score {}",
            collision,
            self.body.head(),
            self.score,
        );

        self.body.reset_to(INITIAL_SEGMENTS, INITIAL_DIR);
        let _ = self.apple.relocate(self.body.segments(), self.board, &mut self.rng);
        self.state = State::Terminated;
        self.score = 0;
        self.events.push(Event::Terminated);
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::board::contains;
    use rand::{rngs::StdRng, SeedableRng};
    use Dir::*;

    fn round() -> Round<StdRng> {
        Round::new(Board::new(25), StdRng::seed_from_u64(25))
    }

    fn cells(cells: &[(i32, i32)]) -> Vec<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn segments<R: Rng>(round: &Round<R>) -> Vec<Cell> {
        round.segments().iter().copied().collect()
    }

    /// Park the apple somewhere it won't be eaten by accident
    fn park_apple<R: Rng>(round: &mut Round<R>) {
        round.apple.pos = Cell::new(0, 24);
    }

    fn assert_reset<R: Rng>(round: &Round<R>) {
        assert_eq!(round.state(), State::Terminated);
        assert_eq!(round.score(), 0);
        assert_eq!(segments(round), INITIAL_SEGMENTS.to_vec());
        assert_eq!(round.dir(), INITIAL_DIR);
        assert!(!contains(round.apple().pos, round.segments()));
    }

    #[test]
    fn test_new_round() {
        let round = round();
        assert_eq!(round.state(), State::Running);
        assert_eq!(round.score(), 0);
        assert_eq!(segments(&round), INITIAL_SEGMENTS.to_vec());
        assert!(round.board().contains(round.apple().pos));
        assert!(!contains(round.apple().pos, round.segments()));
    }

    #[test]
    fn test_update_moves_snake() {
        let mut round = round();
        park_apple(&mut round);
        assert_eq!(round.update(), Outcome::Applied);
        assert_eq!(segments(&round), cells(&[(7, 9), (6, 9), (5, 9)]));
        assert_eq!(round.drain_events().count(), 0);
    }

    #[test]
    fn test_wall_collision() {
        let mut round = round();
        park_apple(&mut round);
        round.body = Body::new(cells(&[(24, 9), (23, 9), (22, 9)]), R);
        round.score = 5;

        let _ = round.update();
        assert_reset(&round);
        assert_eq!(round.drain_events().collect::<Vec<_>>(), vec![Event::Terminated]);
    }

    #[test]
    fn test_wall_collision_every_side() {
        for (head, dir) in [((0, 5), L), ((24, 5), R), ((5, 0), U), ((5, 24), D)] {
            let mut round = round();
            park_apple(&mut round);
            round.body = Body::new(cells(&[head]), dir);
            let _ = round.update();
            assert_reset(&round);
        }
    }

    #[test]
    fn test_eat() {
        let mut round = round();
        round.apple.pos = Cell::new(7, 9);

        let _ = round.update();
        assert_eq!(round.score(), 1);
        assert!(round.body.is_growing());
        assert_eq!(round.drain_events().collect::<Vec<_>>(), vec![Event::Ate]);
        assert!(!contains(round.apple().pos, round.segments()));
        assert_eq!(round.segments().len(), 3);

        let _ = round.update();
        assert_eq!(round.segments().len(), 4);
        assert_eq!(round.state(), State::Running);
    }

    #[test]
    fn test_events_are_drained_once() {
        let mut round = round();
        round.apple.pos = Cell::new(7, 9);
        let _ = round.update();
        assert_eq!(round.drain_events().count(), 1);
        assert_eq!(round.drain_events().count(), 0);
    }

    #[test]
    fn test_self_collision() {
        let mut round = round();
        park_apple(&mut round);
        // a hook, moving up puts the head on (5, 5)
        round.body = Body::new(cells(&[(5, 6), (6, 6), (6, 5), (5, 5), (4, 5)]), U);
        let _ = round.update();
        assert_reset(&round);
    }

    #[test]
    fn test_self_collision_with_duplicate_segment() {
        let mut round = round();
        park_apple(&mut round);
        // head re-entered (5, 5) which is also the last segment
        round.body = Body::new(cells(&[(5, 5), (4, 5), (5, 5)]), D);
        assert_eq!(round.find_collision(), Some(Collision::Itself));

        round.body = Body::new(cells(&[(5, 5), (4, 5), (3, 5)]), D);
        assert_eq!(round.find_collision(), None);
    }

    #[test]
    fn test_wall_is_checked_first() {
        let mut round = round();
        round.body = Body::new(cells(&[(25, 9), (24, 9), (25, 9)]), R);
        assert_eq!(round.find_collision(), Some(Collision::Wall));
    }

    #[test]
    fn test_following_own_tail_is_fine() {
        // a 2x2 loop, the tail moves out of the way as the head moves in
        let mut round = round();
        park_apple(&mut round);
        round.body = Body::new(cells(&[(5, 5), (5, 6), (6, 6), (6, 5)]), R);
        for dir in [R, D, L, U, R, D] {
            let _ = round.set_dir(dir);
            let _ = round.update();
        }
        assert_eq!(round.state(), State::Running);
    }

    #[test]
    fn test_update_while_terminated() {
        let mut round = round();
        park_apple(&mut round);
        round.body = Body::new(cells(&[(24, 9)]), R);
        let _ = round.update();
        let _ = round.drain_events().count();

        assert_eq!(round.update(), Outcome::Ignored);
        assert_eq!(segments(&round), INITIAL_SEGMENTS.to_vec());
        assert_eq!(round.drain_events().count(), 0);
    }

    #[test]
    fn test_resume() {
        let mut round = round();
        assert_eq!(round.resume(), Outcome::Ignored);
        assert_eq!(round.state(), State::Running);

        park_apple(&mut round);
        round.body = Body::new(cells(&[(24, 9)]), R);
        let _ = round.update();
        let apple = *round.apple();

        assert_eq!(round.resume(), Outcome::Applied);
        assert_eq!(round.state(), State::Running);
        assert_eq!(segments(&round), INITIAL_SEGMENTS.to_vec());
        assert_eq!(*round.apple(), apple);
        assert_eq!(round.resume(), Outcome::Ignored);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5000 {
            let dir = Dir::from(rng.gen_range(0..4u8));
            let _ = round.set_dir(dir);
            let _ = round.update();

            assert!(!contains(round.apple().pos, round.segments()));
            let events: Vec<_> = round.drain_events().collect();
            for event in events {
                if event == Event::Terminated {
                    assert_reset(&round);
                    let _ = round.resume();
                }
            }
            if round.state() == State::Running {
                assert!(round.board().contains(round.segments()[0]));
            }
        }
    }
}
