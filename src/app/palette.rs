use ggez::graphics::Color;
use hsl::HSL;
use std::str::FromStr;

use crate::app::prefs::PrefsError;

const GREEN: Color = Color { r: 173. / 255., g: 204. / 255., b: 96. / 255., a: 1. };
const DARK_GREEN: Color = Color { r: 43. / 255., g: 51. / 255., b: 24. / 255., a: 1. };
const APPLE_RED: Color = Color { r: 200. / 255., g: 40. / 255., b: 32. / 255., a: 1. };

/// How the segments of the snake are colored
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SnakeStyle {
    Solid,
    Gradient,
    Rainbow,
}

impl FromStr for SnakeStyle {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(SnakeStyle::Solid),
            "gradient" => Ok(SnakeStyle::Gradient),
            "rainbow" => Ok(SnakeStyle::Rainbow),
            _ => Err(PrefsError::UnknownSnakeStyle(s.to_string())),
        }
    }
}

type SnakePaletteClosure = dyn Fn(usize, usize) -> Color;

pub struct SnakePalette {
    /// Color of segment `seg` (0 is the head) of a snake of length `len`
    pub segment_color: Box<SnakePaletteClosure>,
}

impl SnakePalette {
    pub fn solid(color: Color) -> Self {
        Self { segment_color: Box::new(move |_, _| color) }
    }

    pub fn gradient(head: Color, tail: Color) -> Self {
        Self {
            segment_color: Box::new(move |seg, len| {
                let head_ratio = if len > 1 { 1. - seg as f32 / (len - 1) as f32 } else { 1. };
                let tail_ratio = 1. - head_ratio;
                Color {
                    r: head_ratio * head.r + tail_ratio * tail.r,
                    g: head_ratio * head.g + tail_ratio * tail.g,
                    b: head_ratio * head.b + tail_ratio * tail.b,
                    a: 1.,
                }
            }),
        }
    }

    pub fn rainbow() -> Self {
        Self {
            segment_color: Box::new(|seg, len| {
                let hue = 273. * seg as f64 / len as f64;
                let hsl = HSL { h: hue, s: 1., l: 0.3 };
                Color::from(hsl.to_rgb())
            }),
        }
    }
}

pub struct Palette {
    pub border_thickness: f32,

    pub background_color: Color,
    pub foreground_color: Color,
    pub apple_color: Color,

    pub snake: SnakePalette,
}

impl Palette {
    /// Dark green on light green, like an old handheld
    pub fn retro(snake_style: SnakeStyle) -> Self {
        let snake = match snake_style {
            SnakeStyle::Solid => SnakePalette::solid(DARK_GREEN),
            SnakeStyle::Gradient => SnakePalette::gradient(DARK_GREEN, Color::from_rgb(92, 110, 50)),
            SnakeStyle::Rainbow => SnakePalette::rainbow(),
        };

        Self {
            border_thickness: 5.,

            background_color: GREEN,
            foreground_color: DARK_GREEN,
            apple_color: APPLE_RED,

            snake,
        }
    }
}

#[test]
fn test_gradient_ends() {
    let palette = SnakePalette::gradient(Color::BLACK, Color::WHITE);
    let head = (palette.segment_color)(0, 5);
    let tail = (palette.segment_color)(4, 5);
    assert_eq!((head.r, head.g, head.b), (0., 0., 0.));
    assert_eq!((tail.r, tail.g, tail.b), (1., 1., 1.));

    // a single segment is all head
    let only = (palette.segment_color)(0, 1);
    assert_eq!(only.r, 0.);
}

#[test]
fn test_rainbow() {
    let palette = SnakePalette::rainbow();
    let head = (palette.segment_color)(0, 10);
    // hue 0 is red
    assert!(head.r > head.g && head.r > head.b);
    assert_eq!(head.a, 1.);

    let colors: Vec<_> = (0..10).map(|seg| (palette.segment_color)(seg, 10)).collect();
    assert!(colors.windows(2).all(|pair| pair[0] != pair[1]));
}

#[test]
fn test_snake_style_from_str() {
    assert_eq!("rainbow".parse::<SnakeStyle>(), Ok(SnakeStyle::Rainbow));
    assert_eq!(" Gradient\n".parse::<SnakeStyle>(), Ok(SnakeStyle::Gradient));
    assert_eq!("solid".parse::<SnakeStyle>(), Ok(SnakeStyle::Solid));
    assert_eq!(
        "plaid".parse::<SnakeStyle>(),
        Err(PrefsError::UnknownSnakeStyle("plaid".to_string()))
    );
}
