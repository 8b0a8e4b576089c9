use rand::Rng;

use crate::config::Config;
use crate::draw::{Rect, Rgb};

/// Everything that changes during a playthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Ball center.
    pub ball_position: (f32, f32),
    /// Displacement per tick.
    pub ball_velocity: (f32, f32),
    /// Platform top-left corner.
    pub platform_position: (f32, f32),
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub platform_color: Rgb,
}

impl GameState {
    /// Fresh playthrough: ball in the middle, platform centered near the bottom.
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        Self {
            ball_position: config.field_center(),
            ball_velocity: random_velocity(config, rng),
            platform_position: config.platform_start(),
            score: 0,
            lives: config.starting_lives,
            level: 1,
            platform_color: Rgb::ORANGE,
        }
    }

    pub fn platform_rect(&self, config: &Config) -> Rect {
        Rect::new(
            self.platform_position.0,
            self.platform_position.1,
            config.platform_width,
            config.platform_height,
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Score at which the current level ends.
    pub fn next_level_at(&self, config: &Config) -> u32 {
        self.level * config.level_score_threshold
    }

    /// Back to the center with a new velocity. Score, lives and level stay.
    pub(crate) fn respawn_centered<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        self.ball_position = config.field_center();
        self.ball_velocity = random_velocity(config, rng);
    }

    /// Somewhere inside the field, away from the edges, with a new velocity.
    pub(crate) fn respawn_scattered<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        let margin = config.respawn_margin as i32;
        let max_x = (config.field_width as i32 - margin).max(margin);
        let max_y = (config.field_height as i32 - margin).max(margin);
        self.ball_position = (
            rng.gen_range(margin..=max_x) as f32,
            rng.gen_range(margin..=max_y) as f32,
        );
        self.ball_velocity = random_velocity(config, rng);
    }
}

/// Both components positive. Only bounces ever make them negative.
pub fn random_velocity<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> (f32, f32) {
    let range = config.ball_speed_min..=config.ball_speed_max;
    (rng.gen_range(range.clone()), rng.gen_range(range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_state_defaults() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::new(&config, &mut rng);

        assert_eq!(state.ball_position, (400.0, 300.0));
        assert_eq!(state.platform_position, (350.0, 580.0));
        assert_eq!((state.score, state.lives, state.level), (0, 3, 1));
        assert_eq!(state.platform_color, Rgb::ORANGE);
        assert!(!state.is_game_over());
        assert_eq!(state.next_level_at(&config), 10);
    }

    #[test]
    fn test_velocity_is_positive_and_bounded() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (vx, vy) = random_velocity(&config, &mut rng);
            assert!((2.0..=4.0).contains(&vx), "vx = {}", vx);
            assert!((2.0..=4.0).contains(&vy), "vy = {}", vy);
        }
    }

    #[test]
    fn test_scattered_respawn_stays_inside_margin() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::new(&config, &mut rng);
        for _ in 0..200 {
            state.respawn_scattered(&config, &mut rng);
            let (x, y) = state.ball_position;
            assert!((100.0..=700.0).contains(&x));
            assert!((100.0..=500.0).contains(&y));
            assert_eq!(x.fract(), 0.0);
            assert_eq!(y.fract(), 0.0);
        }
    }
}
