use crate::app::prefs::Prefs;
use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Position {
    /// Left-aligned in the margin above the board
    AboveBoard,
    /// Left-aligned in the margin below the board
    BelowBoard,
    /// Centered on the board
    Center,
    /// Right-aligned in the margin above the board
    TopRight,
}

pub struct Message {
    pub text: String,
    pub position: Position,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_FONT_SIZE: f32 = 40.;
    pub const SMALL_FONT_SIZE: f32 = 20.;

    pub fn new(text: String, position: Position, color: Color) -> Self {
        Self {
            text,
            position,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Where the text is anchored and how it is aligned to that anchor
    pub fn anchor(&self, prefs: &Prefs) -> (Point, TextLayout) {
        // text lines up with the outer edge of the border
        let left = prefs.margin - 5.;
        let side = prefs.window_side();
        match self.position {
            Position::AboveBoard => (Point { x: left, y: 20. }, TextLayout::top_left()),
            Position::BelowBoard => (
                Point { x: left, y: side - prefs.margin + 5. },
                TextLayout::top_left(),
            ),
            Position::Center => (Point::square(side / 2.), TextLayout::center()),
            Position::TopRight => (
                Point { x: side - left, y: 20. },
                TextLayout { h_align: TextAlign::End, v_align: TextAlign::Begin },
            ),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, prefs: &Prefs) {
        let (dest, layout) = self.anchor(prefs);

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        canvas.draw(&text, DrawParam::default().dest(dest).color(self.color));
    }
}

#[test]
fn test_anchor() {
    let prefs = Prefs::default();
    let message = Message::new("Score: 0".to_string(), Position::BelowBoard, Color::BLACK);
    let (dest, _) = message.anchor(&prefs);
    assert_eq!(dest, Point { x: 70., y: 830. });

    let message = Message::new("Press Space".to_string(), Position::Center, Color::BLACK);
    let (dest, layout) = message.anchor(&prefs);
    assert_eq!(dest, Point { x: 450., y: 450. });
    assert_eq!(layout.h_align, TextAlign::Middle);
}
