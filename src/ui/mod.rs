pub mod layout;

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};

use crate::draw::{Anchor, DrawCommand, Rect as PixelRect, Rgb, Text};

/// Text at or above this size is drawn bold; terminals cannot scale glyphs.
const HEADLINE_SIZE: u16 = 50;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Pixel space of the game window mapped onto a canvas area, y flipped.
struct Surface {
    width: f64,
    height: f64,
    /// Canvas units covered by one terminal cell.
    cell: (f64, f64),
}

impl Surface {
    fn new(window: (f32, f32), area: Rect) -> Self {
        let width = f64::from(window.0);
        let height = f64::from(window.1);
        Self {
            width,
            height,
            cell: (
                width / f64::from(area.width.max(1)),
                height / f64::from(area.height.max(1)),
            ),
        }
    }

    fn flip(&self, y: f32) -> f64 {
        self.height - f64::from(y)
    }

    /// Canvas units between two scanlines of a fill.
    fn scanline(&self) -> f64 {
        // Braille cells are four dots tall
        (self.cell.1 / 4.0).max(0.5)
    }

    fn fill_circle(&self, ctx: &mut Context, center: (f32, f32), radius: f32, rgb: Rgb) {
        let (cx, cy) = (f64::from(center.0), self.flip(center.1));
        let radius = f64::from(radius);
        let step = self.scanline();
        let mut dy = -radius;
        while dy <= radius {
            let half = (radius * radius - dy * dy).max(0.0).sqrt();
            ctx.draw(&CanvasLine {
                x1: cx - half,
                y1: cy + dy,
                x2: cx + half,
                y2: cy + dy,
                color: color(rgb),
            });
            dy += step;
        }
        ctx.draw(&Circle { x: cx, y: cy, radius, color: color(rgb) });
    }

    fn fill_rect(&self, ctx: &mut Context, rect: PixelRect, rgb: Rgb) {
        let step = self.scanline();
        let top = f64::from(rect.y);
        let bottom = f64::from(rect.bottom());
        let (x1, x2) = (f64::from(rect.x), f64::from(rect.right()));
        let mut y = top;
        while y <= bottom {
            let flipped = self.height - y;
            ctx.draw(&CanvasLine { x1, y1: flipped, x2, y2: flipped, color: color(rgb) });
            y += step;
        }
    }

    fn print(&self, ctx: &mut Context, text: &Text) {
        let mut style = Style::default().fg(color(text.color));
        if text.size >= HEADLINE_SIZE {
            style = style.add_modifier(Modifier::BOLD);
        }
        let (x, y) = match text.anchor {
            Anchor::TopLeft => (f64::from(text.position.0), self.flip(text.position.1)),
            Anchor::Center => {
                let cells = text.content.chars().count() as f64;
                (
                    f64::from(text.position.0) - cells * self.cell.0 / 2.0,
                    self.flip(text.position.1),
                )
            }
        };
        ctx.print(x, y, Span::styled(text.content.clone(), style));
    }
}

/// Paints one accumulated frame of draw commands into `area`.
pub fn render(frame: &mut Frame, area: Rect, window: (f32, f32), commands: &[DrawCommand]) {
    let surface = Surface::new(window, area);
    let background = commands
        .iter()
        .rev()
        .find_map(|c| match c {
            DrawCommand::Clear(rgb) => Some(*rgb),
            _ => None,
        })
        .unwrap_or(Rgb::BLACK);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(color(background))
        .x_bounds([0.0, surface.width])
        .y_bounds([0.0, surface.height])
        .paint(|ctx| {
            for command in commands {
                match command {
                    DrawCommand::Clear(_) => {}
                    DrawCommand::Circle { center, radius, color: rgb } => {
                        surface.fill_circle(ctx, *center, *radius, *rgb)
                    }
                    DrawCommand::Rect { rect, color: rgb } => surface.fill_rect(ctx, *rect, *rgb),
                    DrawCommand::Text(text) => surface.print(ctx, text),
                }
            }
        });
    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::screen::{self, Screen};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn painted(commands: &[DrawCommand]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, (800.0, 700.0), commands);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_message_text_is_printed() {
        let text = painted(&screen::message(Screen::Start, &Config::default()));
        assert!(text.contains("Bouncing Ball Game"));
        assert!(text.contains("Press any key to start..."));
    }

    #[test]
    fn test_flip_and_cells() {
        let surface = Surface::new((800.0, 700.0), Rect::new(0, 0, 80, 35));
        assert_eq!(surface.flip(0.0), 700.0);
        assert_eq!(surface.flip(700.0), 0.0);
        assert_eq!(surface.cell, (10.0, 20.0));
        assert_eq!(surface.scanline(), 5.0);
    }
}
