use rand::Rng;

use super::state::GameState;
use crate::config::Config;
use crate::draw::Rgb;
use crate::event::HeldKeys;

/// Directional keys held during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl From<HeldKeys> for TickInput {
    fn from(held: HeldKeys) -> Self {
        Self {
            left: held.left,
            right: held.right,
        }
    }
}

impl TickInput {
    fn direction(&self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }
}

/// What happened during a tick, for the screen flow to react to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub scored: bool,
    pub level_up: bool,
    pub life_lost: bool,
    pub game_over: bool,
}

/// Advance the game by one tick.
pub fn update<R: Rng + ?Sized>(
    state: &mut GameState,
    input: TickInput,
    config: &Config,
    rng: &mut R,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    move_platform(state, input, config);
    move_ball(state, config);

    if hits_platform(state, config) {
        state.ball_velocity.1 = -state.ball_velocity.1;
        state.score += 1;
        outcome.scored = true;
        log::debug!("Platform hit, score {}", state.score);
    }

    if state.score >= state.next_level_at(config) {
        state.level += 1;
        state.respawn_scattered(config, rng);
        state.platform_color = Rgb::random(rng);
        outcome.level_up = true;
        log::info!("Level {} reached with score {}", state.level, state.score);
    }

    if state.ball_position.1 >= config.field_height {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            outcome.game_over = true;
            log::info!("Last life lost, final score {}", state.score);
        } else {
            state.respawn_centered(config, rng);
            outcome.life_lost = true;
            log::info!("Life lost, {} remaining", state.lives);
        }
    }

    outcome
}

fn move_platform(state: &mut GameState, input: TickInput, config: &Config) {
    let (x, y) = state.platform_position;
    let x = x + input.direction() * config.platform_speed;
    state.platform_position = (
        x.clamp(0.0, config.field_width - config.platform_width),
        y.clamp(0.0, config.field_height - config.platform_height),
    );
}

fn move_ball(state: &mut GameState, config: &Config) {
    let (vx, vy) = state.ball_velocity;
    state.ball_position.0 += vx;
    state.ball_position.1 += vy;

    let (x, y) = state.ball_position;
    if x <= 0.0 || x >= config.field_width {
        state.ball_velocity.0 = -state.ball_velocity.0;
    }
    // The bottom edge costs a life instead of bouncing.
    if y <= 0.0 {
        state.ball_velocity.1 = -state.ball_velocity.1;
    }
}

/// Ball center inside the platform's span, from one radius above its top
/// edge down to its bottom edge.
fn hits_platform(state: &GameState, config: &Config) -> bool {
    let (x, y) = state.ball_position;
    let platform = state.platform_rect(config);
    (platform.x..=platform.right()).contains(&x)
        && (platform.y - config.ball_radius..=platform.bottom()).contains(&y)
}
