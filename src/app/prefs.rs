use log::LevelFilter;
use static_assertions::const_assert;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use crate::app::palette::SnakeStyle;
use crate::snake::INITIAL_SEGMENTS;

const DEFAULT_CELL_COUNT: i32 = 25;
/// Larger boards don't fit on any screen at a usable cell size
pub const MAX_CELL_COUNT: i32 = 200;
const DEFAULT_TICK_MILLIS: u64 = 200;

// the starting snake has to fit on the default board
const_assert!(DEFAULT_CELL_COUNT > INITIAL_SEGMENTS[0].x && DEFAULT_CELL_COUNT > INITIAL_SEGMENTS[0].y);
const_assert!(DEFAULT_CELL_COUNT <= MAX_CELL_COUNT);

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Width and height of the board in cells
    pub cell_count: i32,
    /// Side of a cell in pixels
    pub cell_size: f32,
    /// Space around the board in pixels
    pub margin: f32,

    /// Time between two game updates
    pub tick_interval: Duration,

    pub snake_style: SnakeStyle,
    pub display_fps: bool,
    pub volume: f32,
    pub log_level: LevelFilter,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            cell_size: 30.,
            margin: 75.,

            tick_interval: Duration::from_millis(DEFAULT_TICK_MILLIS),

            snake_style: SnakeStyle::Solid,
            display_fps: false,
            volume: 0.2,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrefsError {
    BoardTooSmall { cell_count: i32 },
    BoardTooLarge { cell_count: i32 },
    ZeroTickInterval,
    InvalidVolume(f32),
    UnknownSnakeStyle(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::BoardTooSmall { cell_count } => {
                write!(f, "a {0}x{0} board can't fit the starting snake", cell_count)
            }
            PrefsError::BoardTooLarge { cell_count } => {
                write!(f, "a {0}x{0} board is larger than {1}x{1}", cell_count, MAX_CELL_COUNT)
            }
            PrefsError::ZeroTickInterval => write!(f, "tick interval must be positive"),
            PrefsError::InvalidVolume(volume) => write!(f, "volume {} is outside of [0, 1]", volume),
            PrefsError::UnknownSnakeStyle(name) => {
                write!(f, "unknown snake style '{}', expected solid, gradient or rainbow", name)
            }
        }
    }
}

// builder
impl Prefs {
    #[cfg(test)]
    pub fn cell_count(mut self, cell_count: i32) -> Self {
        self.cell_count = cell_count;
        self
    }

    #[cfg(test)]
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn snake_style(mut self, snake_style: SnakeStyle) -> Self {
        self.snake_style = snake_style;
        self
    }

    pub fn display_fps(mut self, display_fps: bool) -> Self {
        self.display_fps = display_fps;
        self
    }

    #[cfg(test)]
    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }
}

impl Prefs {
    pub fn validate(self) -> Result<Self, PrefsError> {
        if self.cell_count > MAX_CELL_COUNT {
            return Err(PrefsError::BoardTooLarge { cell_count: self.cell_count });
        }
        let fits = INITIAL_SEGMENTS
            .iter()
            .all(|cell| cell.x < self.cell_count && cell.y < self.cell_count);
        // one free cell for the apple beyond the starting snake
        let area = self.cell_count.checked_mul(self.cell_count).unwrap_or(0);
        if !fits || area as usize <= INITIAL_SEGMENTS.len() {
            return Err(PrefsError::BoardTooSmall { cell_count: self.cell_count });
        }
        if self.tick_interval.is_zero() {
            return Err(PrefsError::ZeroTickInterval);
        }
        if !(0. ..=1.).contains(&self.volume) {
            return Err(PrefsError::InvalidVolume(self.volume));
        }
        Ok(self)
    }

    /// The window is a square with the board in the middle
    pub fn window_side(&self) -> f32 {
        2. * self.margin + self.cell_size * self.cell_count as f32
    }
}

#[test]
fn test_default_prefs_are_valid() {
    let prefs = Prefs::default().validate().unwrap();
    assert_eq!(prefs.window_side(), 900.);
}

#[test]
fn test_invalid_prefs() {
    assert_eq!(
        Prefs::default().cell_count(6).validate().unwrap_err(),
        PrefsError::BoardTooSmall { cell_count: 6 }
    );
    assert_eq!(
        Prefs::default().tick_interval(Duration::ZERO).validate().unwrap_err(),
        PrefsError::ZeroTickInterval
    );
    assert_eq!(
        Prefs::default().volume(1.5).validate().unwrap_err(),
        PrefsError::InvalidVolume(1.5)
    );
    assert!(Prefs::default().cell_count(10).validate().is_ok());
}

#[test]
fn test_huge_board_is_rejected() {
    assert_eq!(
        Prefs::default().cell_count(50_000).validate().unwrap_err(),
        PrefsError::BoardTooLarge { cell_count: 50_000 }
    );
    assert_eq!(
        Prefs::default().cell_count(i32::MAX).validate().unwrap_err(),
        PrefsError::BoardTooLarge { cell_count: i32::MAX }
    );
    assert!(Prefs::default().cell_count(MAX_CELL_COUNT).validate().is_ok());
}
