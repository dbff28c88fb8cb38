use ggez::{
    graphics::{DrawMode, Mesh, MeshBuilder},
    Context, GameResult,
};

use crate::app::{
    palette::Palette,
    prefs::Prefs,
    rendering::{cell_rect, segment_radius},
};
use crate::basic::Cell;

/// Segments are drawn tail first so the head ends up on top
pub fn snake_mesh<'a>(
    segments: impl DoubleEndedIterator<Item = &'a Cell> + ExactSizeIterator,
    prefs: &Prefs,
    palette: &Palette,
    ctx: &Context,
) -> GameResult<Mesh> {
    let len = segments.len();
    let radius = segment_radius(prefs);

    let mut builder = MeshBuilder::new();
    for (seg, cell) in segments.enumerate().rev() {
        let color = (palette.snake.segment_color)(seg, len);
        builder.rounded_rectangle(DrawMode::fill(), cell_rect(*cell, prefs), radius, color)?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}
