use ggez::conf::{FullscreenType, WindowMode, WindowSetup};
use std::path::PathBuf;

pub use game::Game;
pub use prefs::Prefs;

pub mod app_error;
pub mod control;
mod game;
mod keyboard_control;
mod message;
pub mod palette;
pub mod prefs;
mod rendering;
mod sounds;

pub fn window_mode(prefs: &Prefs) -> WindowMode {
    let side = prefs.window_side();
    WindowMode::default()
        .dimensions(side, side)
        .fullscreen_type(FullscreenType::Windowed)
        .resizable(false)
}

pub fn window_setup() -> WindowSetup {
    WindowSetup::default().title("Retro Snake").vsync(true)
}

/// Sounds are looked up in `resources/` next to the manifest when
/// run through cargo, or next to the working directory otherwise
pub fn resource_dir() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir).join("resources"),
        Err(_) => PathBuf::from("./resources"),
    }
}
