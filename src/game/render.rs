use super::state::GameState;
use crate::config::Config;
use crate::draw::{metrics, Anchor, DrawCommand, Rect, Rgb, Text};

const BADGE_TEXT_SIZE: u16 = 36;
const BADGE_ORIGIN: (f32, f32) = (10.0, 10.0);
/// Gap between one badge's text and the next.
const BADGE_SPACING: f32 = 75.0;
const BADGE_PADDING: (f32, f32) = (10.0, 5.0);

/// Draw list for one playing frame. Does not touch the state.
pub fn render(state: &GameState, config: &Config) -> Vec<DrawCommand> {
    let (bx, by) = state.ball_position;
    let mut commands = vec![
        DrawCommand::Clear(Rgb::BLACK),
        DrawCommand::Circle {
            center: (bx.trunc(), by.trunc()),
            radius: config.ball_radius,
            color: Rgb::WHITE,
        },
        DrawCommand::Rect {
            rect: platform_rect(state, config),
            color: state.platform_color,
        },
    ];

    let badges = [
        (format!("Score: {}", state.score), Rgb::ORANGE),
        (format!("Level: {}", state.level), Rgb::LIGHT_BLUE),
        (format!("Lives: {}", state.lives), Rgb::RED),
    ];
    let mut x = BADGE_ORIGIN.0;
    for (content, background) in badges {
        let bounds = badge(&mut commands, content, background, (x, BADGE_ORIGIN.1));
        x = bounds.right() + BADGE_SPACING;
    }

    commands
}

fn platform_rect(state: &GameState, config: &Config) -> Rect {
    let rect = state.platform_rect(config);
    Rect::new(rect.x.trunc(), rect.y.trunc(), rect.width, rect.height)
}

/// Pushes a filled background and its label, returns the label's bounds.
fn badge(
    commands: &mut Vec<DrawCommand>,
    content: String,
    background: Rgb,
    top_left: (f32, f32),
) -> Rect {
    let (width, height) = metrics::text_size(&content, BADGE_TEXT_SIZE);
    let bounds = Rect::new(top_left.0, top_left.1, width, height);
    commands.push(DrawCommand::Rect {
        rect: bounds.inflate(BADGE_PADDING.0, BADGE_PADDING.1),
        color: background,
    });
    commands.push(DrawCommand::Text(Text {
        content,
        size: BADGE_TEXT_SIZE,
        position: top_left,
        anchor: Anchor::TopLeft,
        color: Rgb::WHITE,
    }));
    bounds
}
