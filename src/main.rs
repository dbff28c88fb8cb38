#[macro_use]
extern crate derive_more;

use ggez::{event, ContextBuilder};
use log::info;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::app::{
    app_error::{AppError, AppErrorConversion, AppResult, GameResultExtension},
    control::SystemClock,
    palette::SnakeStyle,
    Game, Prefs,
};

/// Environment variable selecting the snake colors (solid, gradient or rainbow)
const SNAKE_STYLE_VAR: &str = "RETRO_SNAKE_STYLE";

mod app;
mod apple;
mod basic;
mod round;
mod snake;

fn main() -> AppResult {
    let snake_style = match std::env::var(SNAKE_STYLE_VAR) {
        Ok(name) => name.parse::<SnakeStyle>().map_err(AppError::from).with_trace_step(SNAKE_STYLE_VAR)?,
        Err(_) => SnakeStyle::Solid,
    };
    let prefs = Prefs::default()
        .snake_style(snake_style)
        .display_fps(cfg!(debug_assertions))
        .validate()?;

    let config = ConfigBuilder::new()
        // ggez and its graphics backend are very chatty
        .add_filter_ignore_str("wgpu")
        .add_filter_ignore_str("naga")
        .build();
    if TermLogger::init(prefs.log_level, config, TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("warning: a logger was already set");
    }

    let (ctx, event_loop) = ContextBuilder::new("retro_snake", "retro_snake")
        .window_mode(app::window_mode(&prefs))
        .window_setup(app::window_setup())
        .add_resource_path(app::resource_dir())
        .build()
        .into_with_trace("ContextBuilder::build")
        .with_trace_step("main")?;

    info!("window ready");
    let game = Game::new(prefs, Box::new(SystemClock), &ctx);
    event::run(ctx, event_loop, game)
}
