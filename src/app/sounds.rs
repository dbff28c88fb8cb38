use ggez::{
    audio::{SoundSource, Source},
    Context,
};
use log::warn;

use crate::round::Event;

const EAT_SOUND: &str = "/eat.ogg";
const WALL_SOUND: &str = "/wall.ogg";

/// Sound effects for round events, a sound whose file can't be
/// loaded is skipped
pub struct Sounds {
    eat: Option<Source>,
    wall: Option<Source>,
}

fn load(ctx: &Context, path: &str, volume: f32) -> Option<Source> {
    match Source::new(ctx, path) {
        Ok(mut source) => {
            source.set_volume(volume);
            Some(source)
        }
        Err(e) => {
            warn!("failed to load sound {}: {}", path, e);
            None
        }
    }
}

impl Sounds {
    pub fn load(ctx: &Context, volume: f32) -> Self {
        Self {
            eat: load(ctx, EAT_SOUND, volume),
            wall: load(ctx, WALL_SOUND, volume),
        }
    }

    pub fn play(&mut self, event: Event, ctx: &Context) {
        let source = match event {
            Event::Ate => &mut self.eat,
            Event::Terminated => &mut self.wall,
        };
        if let Some(source) = source {
            if let Err(e) = source.play_detached(ctx) {
                warn!("failed to play sound for {:?}: {}", event, e);
            }
        }
    }
}
