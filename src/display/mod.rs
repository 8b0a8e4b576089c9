//! The window, text and input capability the game runs against.

pub mod clock;
pub mod terminal;

use std::io;

use crate::draw::{DrawCommand, Rect, Rgb, Text};
use crate::event::{Event, HeldKeys};

pub use clock::FrameClock;
pub use terminal::TerminalDisplay;

pub trait Display {
    fn set_title(&mut self, title: &str) -> io::Result<()>;

    /// Drains every pending event without blocking.
    fn poll_events(&mut self) -> io::Result<Vec<Event>>;

    fn held_keys(&self) -> HeldKeys;

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb);
    fn draw_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_text(&mut self, text: &Text);
    /// Starts a new frame filled with `color`.
    fn clear(&mut self, color: Rgb);

    /// Shows everything drawn since the last present.
    fn present(&mut self) -> io::Result<()>;

    /// Sleeps so that calls happen at most `ticks_per_second` times a second.
    fn limit_rate(&mut self, ticks_per_second: u32);

    fn toggle_fullscreen(&mut self) -> io::Result<()>;

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear(color) => self.clear(*color),
            DrawCommand::Circle { center, radius, color } => self.draw_circle(*center, *radius, *color),
            DrawCommand::Rect { rect, color } => self.draw_rect(*rect, *color),
            DrawCommand::Text(text) => self.draw_text(text),
        }
    }

    fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}
