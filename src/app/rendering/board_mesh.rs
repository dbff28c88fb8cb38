use ggez::{
    graphics::{DrawMode, Mesh, MeshBuilder},
    Context, GameResult,
};

use crate::app::{palette::Palette, prefs::Prefs, rendering::border_rect};

pub fn border_mesh(prefs: &Prefs, palette: &Palette, ctx: &Context) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();
    builder.rectangle(
        DrawMode::stroke(palette.border_thickness),
        border_rect(prefs, palette.border_thickness),
        palette.foreground_color,
    )?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
