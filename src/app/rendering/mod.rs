use ggez::graphics::Rect;

use crate::app::prefs::Prefs;
use crate::basic::{Cell, Point};

mod apple_mesh;
mod board_mesh;
mod snake_mesh;

pub use apple_mesh::apple_mesh;
pub use board_mesh::border_mesh;
pub use snake_mesh::snake_mesh;

/// Corner radius of a segment as a fraction of half its side
const ROUNDNESS: f32 = 0.5;

/// Top left corner of a cell in window coordinates
pub fn cell_origin(cell: Cell, prefs: &Prefs) -> Point {
    Point {
        x: prefs.margin + cell.x as f32 * prefs.cell_size,
        y: prefs.margin + cell.y as f32 * prefs.cell_size,
    }
}

pub fn cell_rect(cell: Cell, prefs: &Prefs) -> Rect {
    let Point { x, y } = cell_origin(cell, prefs);
    Rect::new(x, y, prefs.cell_size, prefs.cell_size)
}

pub fn cell_center(cell: Cell, prefs: &Prefs) -> Point {
    cell_origin(cell, prefs) + Point::square(prefs.cell_size / 2.)
}

pub fn segment_radius(prefs: &Prefs) -> f32 {
    ROUNDNESS * prefs.cell_size / 2.
}

/// Path of the border line, a stroke of `thickness` centered on this
/// rectangle lies just outside of the board
pub fn border_rect(prefs: &Prefs, thickness: f32) -> Rect {
    let board_side = prefs.cell_size * prefs.cell_count as f32;
    let inset = thickness / 2.;
    Rect::new(
        prefs.margin - inset,
        prefs.margin - inset,
        board_side + thickness,
        board_side + thickness,
    )
}
