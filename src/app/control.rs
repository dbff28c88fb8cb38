use std::{
    cmp::max,
    collections::VecDeque,
    time::{Duration, Instant},
};
#[cfg(test)]
use std::{cell::Cell, rc::Rc};

/// Source of monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to, clones share the same time
#[cfg(test)]
#[derive(Clone)]
pub struct ManualClock(Rc<Cell<Instant>>);

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

/// Lets through at most one game update per interval, no matter
/// how often it is asked (once per graphics frame)
#[derive(Default)]
pub struct TickGate {
    last_tick: Option<Instant>,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The very first call always ticks
    pub fn should_tick(&mut self, now: Instant, interval: Duration) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }
}

/// Stores an instant along with the number of frames it represents
struct NFrameInstant(usize, Instant);

/// Objective measurement of framerate based on periodic calls
/// to [`FpsCounter::register_frames`], completely detached from any
/// framerate-regulation mechanism
struct FpsCounter {
    /// An `Instant` is stored every `step` frames
    step: usize,
    /// Counts down from `step` to 0 to tell when the next
    /// `Instant` should be stored
    n: usize,
    buffer: VecDeque<NFrameInstant>,
}

impl FpsCounter {
    /// Number of `Instant`s to store in `buffer`
    const LEN: usize = 10;

    fn new(expected_fps: f64) -> Self {
        Self {
            // store an instant about every second, but at most every frame
            step: max(1, expected_fps as usize),
            n: 0,
            buffer: VecDeque::with_capacity(Self::LEN),
        }
    }

    fn register_frames(&mut self, num_frames: usize, now: Instant) {
        if self.n < num_frames {
            if self.buffer.len() >= Self::LEN {
                self.buffer.pop_front();
            }
            self.buffer.push_back(NFrameInstant(self.step - self.n + num_frames - 1, now));
            self.n = self.step - 1;
        } else {
            self.n -= num_frames;
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.n = 0;
    }

    /// The framerate is calculated as the inverse of the
    /// average frame duration
    fn fps(&self) -> f64 {
        if self.buffer.len() < 2 {
            return 0.;
        }
        let first_frame = self.buffer[0].1;
        let last_frame = self.buffer[self.buffer.len() - 1].1;
        let total_buffer_duration = (last_frame - first_frame).as_secs_f64();
        if total_buffer_duration == 0. {
            return 0.;
        }
        let num_frames = self.buffer.iter().skip(1).map(|nfi| nfi.0).sum::<usize>() as f64;
        num_frames / total_buffer_duration
    }
}

/// Decides when the game updates and keeps track of how fast
/// updates and draws are actually happening
pub struct Control {
    clock: Box<dyn Clock>,
    tick_interval: Duration,
    gate: TickGate,

    measured_game_fps: FpsCounter,
    measured_graphics_fps: FpsCounter,
}

impl Control {
    pub fn new(clock: Box<dyn Clock>, tick_interval: Duration, graphics_fps: u32) -> Self {
        Self {
            clock,
            tick_interval,
            gate: TickGate::new(),
            measured_game_fps: FpsCounter::new(1. / tick_interval.as_secs_f64()),
            measured_graphics_fps: FpsCounter::new(graphics_fps as f64),
        }
    }

    /// Call once per frame, true if the game should update this frame
    pub fn can_update(&mut self) -> bool {
        let now = self.clock.now();
        if self.gate.should_tick(now, self.tick_interval) {
            self.measured_game_fps.register_frames(1, now);
            true
        } else {
            false
        }
    }

    // call in draw()
    pub fn graphics_frame(&mut self) {
        let now = self.clock.now();
        self.measured_graphics_fps.register_frames(1, now);
    }

    /// Forget measurements taken while the game was not updating
    pub fn reset_measurements(&mut self) {
        self.measured_game_fps.reset();
    }

    pub fn measured_game_fps(&self) -> f64 {
        self.measured_game_fps.fps()
    }

    pub fn measured_graphics_fps(&self) -> f64 {
        self.measured_graphics_fps.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn test_should_tick() {
        let mut gate = TickGate::new();
        let start = Instant::now();

        assert!(gate.should_tick(start, INTERVAL));
        assert!(!gate.should_tick(start + Duration::from_millis(150), INTERVAL));
        assert!(gate.should_tick(start + Duration::from_millis(250), INTERVAL));
        // measured from the last accepted tick, not the last call
        assert!(!gate.should_tick(start + Duration::from_millis(400), INTERVAL));
        assert!(gate.should_tick(start + Duration::from_millis(450), INTERVAL));
    }

    #[test]
    fn test_should_tick_exact_interval() {
        let mut gate = TickGate::new();
        let start = Instant::now();
        assert!(gate.should_tick(start, INTERVAL));
        assert!(gate.should_tick(start + INTERVAL, INTERVAL));
    }

    #[test]
    fn test_should_tick_does_not_catch_up() {
        // a long stall produces a single tick, not one per missed interval
        let mut gate = TickGate::new();
        let start = Instant::now();
        assert!(gate.should_tick(start, INTERVAL));
        assert!(gate.should_tick(start + INTERVAL * 10, INTERVAL));
        assert!(!gate.should_tick(start + INTERVAL * 10, INTERVAL));
    }

    #[test]
    fn test_control_with_manual_clock() {
        let clock = ManualClock::new();
        let mut control = Control::new(Box::new(clock.clone()), INTERVAL, 30);

        let mut updates = 0;
        // 3 seconds at 30 fps
        for _ in 0..90 {
            if control.can_update() {
                updates += 1;
            }
            control.graphics_frame();
            clock.advance(Duration::from_micros(33_334));
        }
        assert_eq!(updates, 15);
    }

    #[test]
    fn test_measured_fps() {
        let clock = ManualClock::new();
        let mut control = Control::new(Box::new(clock.clone()), INTERVAL, 10);
        for _ in 0..100 {
            let _ = control.can_update();
            control.graphics_frame();
            clock.advance(Duration::from_millis(100));
        }
        assert!((control.measured_graphics_fps() - 10.).abs() < 0.5);
        assert!((control.measured_game_fps() - 5.).abs() < 0.5);
    }
}
