use ggez::{
    event::EventHandler,
    graphics::{Canvas, DrawParam, Mesh},
    Context,
};
use log::{debug, info};

use crate::{
    app::{
        app_error::{AppError, AppResult, GameResultExtension},
        control::{Clock, Control},
        keyboard_control::{requested_dir, Controls, RESUME_KEY},
        message::{Message, Position},
        palette::Palette,
        prefs::Prefs,
        rendering::{apple_mesh, border_mesh, snake_mesh},
        sounds::Sounds,
    },
    basic::Board,
    round::{Event, Round, State},
};

const TITLE: &str = "Retro Snake";
/// Draws are paced by vsync, this is only a hint for measuring them
const EXPECTED_FPS: u32 = 60;

pub struct Game {
    prefs: Prefs,
    control: Control,
    round: Round,

    palette: Palette,
    controls: [Controls; 2],
    sounds: Sounds,

    /// The border never changes, its mesh is built once
    border_mesh: Option<Mesh>,
}

impl Game {
    pub fn new(prefs: Prefs, clock: Box<dyn Clock>, ctx: &Context) -> Self {
        let round = Round::new(Board::new(prefs.cell_count), rand::thread_rng());
        info!(
            "starting a {0}x{0} board with {2:?} snake, one move every {1:?}",
            round.board().cell_count, prefs.tick_interval, prefs.snake_style,
        );

        Self {
            control: Control::new(clock, prefs.tick_interval, EXPECTED_FPS),
            round,

            palette: Palette::retro(prefs.snake_style),
            controls: [Controls::ARROWS, Controls::WASD],
            sounds: Sounds::load(ctx, prefs.volume),

            border_mesh: None,
            prefs,
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        let keyboard = &ctx.keyboard;

        if let Some(dir) = requested_dir(&self.controls, |key| keyboard.is_key_just_pressed(key)) {
            if !self.round.set_dir(dir).is_applied() {
                debug!("ignored turn {:?} while heading {:?}", dir, self.round.dir());
            }
        }

        if keyboard.is_key_just_pressed(RESUME_KEY) && self.round.resume().is_applied() {
            info!("resumed");
            self.control.reset_measurements();
        }
    }

    fn messages(&self) -> Vec<Message> {
        let color = self.palette.foreground_color;
        let mut messages = vec![
            Message::new(TITLE.to_string(), Position::AboveBoard, color),
            Message::new(format!("Score: {}", self.round.score()), Position::BelowBoard, color),
        ];

        if self.round.state() == State::Terminated {
            messages.push(Message::new("Press Space to play".to_string(), Position::Center, color));
        }

        if self.prefs.display_fps {
            let text = format!(
                "moves/s: {:.1}\nfps: {:.1}",
                self.control.measured_game_fps(),
                self.control.measured_graphics_fps(),
            );
            messages.push(Message::new(text, Position::TopRight, color).font_size(Message::SMALL_FONT_SIZE));
        }

        messages
    }
}

impl EventHandler<AppError> for Game {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        self.handle_input(ctx);

        if self.control.can_update() {
            let _ = self.round.update();
        }

        for event in self.round.drain_events() {
            if event == Event::Terminated {
                info!("game over, press Space to play again");
            }
            self.sounds.play(event, ctx);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        self.control.graphics_frame();

        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        if self.border_mesh.is_none() {
            self.border_mesh = Some(border_mesh(&self.prefs, &self.palette, ctx).into_with_trace("border_mesh")?);
        }
        if let Some(mesh) = &self.border_mesh {
            canvas.draw(mesh, DrawParam::default());
        }

        let apple = apple_mesh(self.round.apple(), &self.prefs, &self.palette, ctx)
            .into_with_trace("apple_mesh")?;
        canvas.draw(&apple, DrawParam::default());

        let snake = snake_mesh(self.round.segments().iter(), &self.prefs, &self.palette, ctx)
            .into_with_trace("snake_mesh")?;
        canvas.draw(&snake, DrawParam::default());

        for message in self.messages() {
            message.draw(&mut canvas, &self.prefs);
        }

        canvas.finish(ctx).into_with_trace("Game::draw")
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> AppResult<bool> {
        let mode = if cfg!(debug_assertions) { "debug" } else { "release" };
        info!("quitting ({} build)", mode);
        Ok(false)
    }
}
