//! Which screen is showing, and what the static message screens say.

use std::io;

use crate::config::Config;
use crate::display::Display;
use crate::draw::{Anchor, DrawCommand, Rgb, Text};
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    /// Passed through for one step after a life is lost, then back to Playing.
    LifeLost,
    GameOver { final_score: u32 },
    Victory { final_score: u32 },
    Exit,
}

impl Screen {
    /// Message screens block until a key is pressed.
    pub fn waits_for_key(&self) -> bool {
        matches!(
            self,
            Screen::Start | Screen::GameOver { .. } | Screen::Victory { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::LifeLost => "life lost",
            Screen::GameOver { .. } => "game over",
            Screen::Victory { .. } => "victory",
            Screen::Exit => "exit",
        }
    }
}

struct Line {
    text: String,
    size: u16,
    /// Fraction of the play field height.
    at: f32,
}

impl Line {
    fn new(text: impl Into<String>, size: u16, at: f32) -> Self {
        Self {
            text: text.into(),
            size,
            at,
        }
    }
}

fn lines(screen: Screen) -> Vec<Line> {
    match screen {
        Screen::Start => vec![
            Line::new("Bouncing Ball Game", 50, 1.0 / 4.0),
            Line::new("Press any key to start...", 30, 1.0 / 3.0),
            Line::new("Move the platform with arrow keys...", 30, 1.0 / 2.0),
        ],
        Screen::GameOver { final_score } => vec![
            Line::new("Game Over", 50, 1.0 / 3.0),
            Line::new(format!("Your final score: {}", final_score), 30, 1.0 / 2.0),
            Line::new("Press any key to restart...", 20, 2.0 / 3.0),
        ],
        Screen::Victory { final_score } => vec![
            Line::new("Congratulations!", 50, 1.0 / 3.0),
            Line::new(format!("You've won with a score of {}", final_score), 30, 1.0 / 2.0),
            Line::new("Press any key to exit...", 20, 2.0 / 3.0),
        ],
        Screen::Playing | Screen::LifeLost | Screen::Exit => Vec::new(),
    }
}

/// Draw list for a message screen; empty for screens that have none.
pub fn message(screen: Screen, config: &Config) -> Vec<DrawCommand> {
    let lines = lines(screen);
    if lines.is_empty() {
        return Vec::new();
    }

    let center_x = (config.field_width / 2.0).trunc();
    let mut commands = vec![DrawCommand::Clear(Rgb::BLACK)];
    commands.extend(lines.into_iter().map(|line| {
        DrawCommand::Text(Text {
            content: line.text,
            size: line.size,
            position: (center_x, (config.field_height * line.at).trunc()),
            anchor: Anchor::Center,
            color: Rgb::WHITE,
        })
    }));
    commands
}

/// How a message screen was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    Key,
    Quit,
}

/// Blocks until any key is pressed or quit is requested, polling at `rate`
/// times a second.
pub fn wait_for_key<D: Display + ?Sized>(display: &mut D, rate: u32) -> io::Result<Wait> {
    loop {
        let events = display.poll_events()?;
        // A quit anywhere in the batch wins over an earlier key
        if events.contains(&Event::Quit) {
            return Ok(Wait::Quit);
        }
        if !events.is_empty() {
            return Ok(Wait::Key);
        }
        display.limit_rate(rate);
    }
}
