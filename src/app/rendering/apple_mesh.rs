use ggez::{
    graphics::{DrawMode, Mesh, MeshBuilder},
    Context, GameResult,
};

use crate::{
    app::{palette::Palette, prefs::Prefs, rendering::cell_center},
    apple::Apple,
};

pub fn apple_mesh(apple: &Apple, prefs: &Prefs, palette: &Palette, ctx: &Context) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();
    builder.circle(
        DrawMode::fill(),
        cell_center(apple.pos, prefs),
        prefs.cell_size * 0.4,
        0.1,
        palette.apple_color,
    )?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
