//! Game tuning. The defaults are the reference values; the tick rate can be
//! overridden from the environment.

use std::env;

/// Environment variable overriding [`Config::tick_rate`].
pub const TICK_RATE_ENV: &str = "BOUNCING_BALL_TICK_RATE";

/// Reference constants.
pub struct Params;

impl Params {
    // Play field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Extra strip below the play field that is part of the window.
    pub const BOTTOM_STRIP: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED_MIN: f32 = 2.0;
    pub const BALL_SPEED_MAX: f32 = 4.0;
    /// Level-up respawns keep at least this far from every edge.
    pub const RESPAWN_MARGIN: f32 = 100.0;

    // Platform
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const PLATFORM_SPEED: f32 = 10.0;
    /// Gap between the platform's bottom and the play field's bottom.
    pub const PLATFORM_LIFT: f32 = 10.0;

    // Rules
    pub const STARTING_LIVES: u32 = 3;
    pub const LEVEL_SCORE_THRESHOLD: u32 = 10;

    pub const TICK_RATE: u32 = 60;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub bottom_strip: f32,
    pub ball_radius: f32,
    pub ball_speed_min: f32,
    pub ball_speed_max: f32,
    pub respawn_margin: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_speed: f32,
    pub platform_lift: f32,
    pub starting_lives: u32,
    pub level_score_threshold: u32,
    /// Ticks per second.
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            bottom_strip: Params::BOTTOM_STRIP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_min: Params::BALL_SPEED_MIN,
            ball_speed_max: Params::BALL_SPEED_MAX,
            respawn_margin: Params::RESPAWN_MARGIN,
            platform_width: Params::PLATFORM_WIDTH,
            platform_height: Params::PLATFORM_HEIGHT,
            platform_speed: Params::PLATFORM_SPEED,
            platform_lift: Params::PLATFORM_LIFT,
            starting_lives: Params::STARTING_LIVES,
            level_score_threshold: Params::LEVEL_SCORE_THRESHOLD,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_tick_rate(env::var(TICK_RATE_ENV).ok().as_deref());
        config
    }

    fn apply_tick_rate(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else { return };
        match raw.trim().parse::<u32>() {
            Ok(rate) if rate > 0 => {
                log::info!("Tick rate overridden to {} per second", rate);
                self.tick_rate = rate;
            }
            _ => log::warn!("Ignoring invalid {}={:?}", TICK_RATE_ENV, raw),
        }
    }

    /// Full window size: the play field plus the strip under it.
    pub fn window_size(&self) -> (f32, f32) {
        (self.field_width, self.field_height + self.bottom_strip)
    }

    pub fn platform_start(&self) -> (f32, f32) {
        (
            self.field_width / 2.0 - self.platform_width / 2.0,
            self.field_height - self.platform_height - self.platform_lift,
        )
    }

    pub fn field_center(&self) -> (f32, f32) {
        (self.field_width / 2.0, self.field_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let config = Config::default();
        assert_eq!(config.window_size(), (800.0, 700.0));
        assert_eq!(config.platform_start(), (350.0, 580.0));
        assert_eq!(config.field_center(), (400.0, 300.0));
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_tick_rate_override() {
        let mut config = Config::default();
        config.apply_tick_rate(Some(" 30 "));
        assert_eq!(config.tick_rate, 30);

        // Rejected values leave the previous rate in place
        config.apply_tick_rate(Some("0"));
        config.apply_tick_rate(Some("fast"));
        config.apply_tick_rate(None);
        assert_eq!(config.tick_rate, 30);
    }
}
