use crate::basic::Dir;
use ggez::input::keyboard::{KeyCode, KeyCode::*};

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };
    pub const WASD: Self = Self { u: W, d: S, l: A, r: D };

    pub fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }
}

pub const RESUME_KEY: KeyCode = Space;

/// The direction asked for this frame, if several keys were pressed
/// at once only the first one (in `U`, `D`, `L`, `R` order) counts
pub fn requested_dir(controls: &[Controls], is_pressed: impl Fn(KeyCode) -> bool) -> Option<Dir> {
    controls
        .iter()
        .flat_map(|c| [c.u, c.d, c.l, c.r])
        .filter(|key| is_pressed(*key))
        .find_map(|key| controls.iter().find_map(|c| c.dir(key)))
}

#[test]
fn test_controls_dir() {
    assert_eq!(Controls::ARROWS.dir(Up), Some(Dir::U));
    assert_eq!(Controls::ARROWS.dir(Right), Some(Dir::R));
    assert_eq!(Controls::WASD.dir(A), Some(Dir::L));
    assert_eq!(Controls::WASD.dir(Up), None);
}

#[test]
fn test_requested_dir() {
    let controls = [Controls::ARROWS, Controls::WASD];
    assert_eq!(requested_dir(&controls, |_| false), None);
    assert_eq!(requested_dir(&controls, |k| k == S), Some(Dir::D));
    assert_eq!(requested_dir(&controls, |k| k == Left || k == Up), Some(Dir::U));
    assert_eq!(requested_dir(&controls, |k| k == Space), None);
}
