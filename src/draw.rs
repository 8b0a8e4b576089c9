//! Draw primitives shared by the render step and the display adapter.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Axis-aligned rectangle in pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow by `dw`/`dh` in total while keeping the same center.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self {
            x: self.x - dw / 2.0,
            y: self.y - dh / 2.0,
            width: self.width + dw,
            height: self.height + dh,
        }
    }
}

/// Which point of the text's bounds `position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub size: u16,
    pub position: (f32, f32),
    pub anchor: Anchor,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Circle { center: (f32, f32), radius: f32, color: Rgb },
    Rect { rect: Rect, color: Rgb },
    Text(Text),
}

/// Fixed glyph metrics so text layout stays a pure function of the string.
pub mod metrics {
    /// Horizontal advance per character, as a fraction of the font size.
    pub const ADVANCE: f32 = 0.5;
    /// Line height as a fraction of the font size.
    pub const LINE_HEIGHT: f32 = 0.7;

    pub fn text_size(content: &str, size: u16) -> (f32, f32) {
        let size = f32::from(size);
        (
            content.chars().count() as f32 * size * ADVANCE,
            size * LINE_HEIGHT,
        )
    }
}
