use std::io;

use crossterm::event::KeyCode;
use rand::Rng;

use crate::config::Config;
use crate::display::Display;
use crate::draw::DrawCommand;
use crate::event::Event;
use crate::game::{self, GameState, TickInput, TickOutcome};
use crate::screen::{self, Screen, Wait};

pub const TITLE: &str = "Bouncing Ball Game";

/// Owns the one game state and moves it between screens.
pub struct App<R: Rng> {
    pub config: Config,
    pub state: GameState,
    screen: Screen,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(config: Config, mut rng: R) -> Self {
        let state = GameState::new(&config, &mut rng);
        Self {
            config,
            state,
            screen: Screen::Start,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.screen == Screen::Exit
    }

    /// A key was pressed while a message screen was showing.
    pub fn acknowledge(&mut self) {
        let next = match self.screen {
            Screen::Start => Screen::Playing,
            Screen::GameOver { .. } => {
                self.state = GameState::new(&self.config, &mut self.rng);
                Screen::Start
            }
            Screen::Victory { .. } => Screen::Exit,
            other => other,
        };
        self.set_screen(next);
    }

    /// One playing tick. Does nothing on message screens.
    pub fn on_tick(&mut self, input: TickInput) -> TickOutcome {
        if self.screen == Screen::LifeLost {
            self.set_screen(Screen::Playing);
        }
        if self.screen != Screen::Playing {
            return TickOutcome::default();
        }

        let outcome = game::update(&mut self.state, input, &self.config, &mut self.rng);
        if self.state.is_game_over() {
            self.set_screen(Screen::GameOver {
                final_score: self.state.score,
            });
        } else if outcome.life_lost {
            self.set_screen(Screen::LifeLost);
        }
        outcome
    }

    /// Ends the playthrough as won. The main loop never calls this on its
    /// own; no score or level counts as a win.
    pub fn declare_victory(&mut self) {
        self.set_screen(Screen::Victory {
            final_score: self.state.score,
        });
    }

    pub fn quit(&mut self) {
        self.set_screen(Screen::Exit);
    }

    /// What the current screen looks like.
    pub fn frame(&self) -> Vec<DrawCommand> {
        if self.screen.waits_for_key() {
            screen::message(self.screen, &self.config)
        } else {
            game::render(&self.state, &self.config)
        }
    }

    fn set_screen(&mut self, next: Screen) {
        if next != self.screen {
            log::info!("Screen {} -> {}", self.screen.name(), next.name());
            self.screen = next;
        }
    }
}

/// Runs screens and ticks until the player quits.
pub fn run<D: Display, R: Rng>(display: &mut D, app: &mut App<R>) -> io::Result<()> {
    display.set_title(TITLE)?;

    while !app.should_quit() {
        if app.screen().waits_for_key() {
            display.draw_all(&app.frame());
            display.present()?;
            match screen::wait_for_key(display, app.config.tick_rate)? {
                Wait::Key => app.acknowledge(),
                Wait::Quit => app.quit(),
            }
            continue;
        }

        for event in display.poll_events()? {
            match event {
                Event::Quit => app.quit(),
                Event::KeyDown(KeyCode::F(11)) => display.toggle_fullscreen()?,
                Event::KeyDown(_) => {}
            }
        }
        if app.should_quit() {
            break;
        }

        app.on_tick(display.held_keys().into());
        if app.screen().waits_for_key() {
            continue;
        }
        display.draw_all(&app.frame());
        display.present()?;
        display.limit_rate(app.config.tick_rate);
    }

    log::info!("Quit with score {}", app.state.score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app() -> App<StdRng> {
        App::new(Config::default(), StdRng::seed_from_u64(9))
    }

    /// Puts the ball just above the bottom edge, clear of the platform.
    fn drop_ball(app: &mut App<StdRng>) {
        app.state.ball_position = (100.0, app.config.field_height);
        app.state.ball_velocity = (2.0, 3.0);
    }

    #[test]
    fn test_start_then_play() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Start);
        assert_eq!(app.on_tick(TickInput::default()), TickOutcome::default());

        app.acknowledge();
        assert_eq!(app.screen(), Screen::Playing);
        let before = app.state.ball_position;
        app.on_tick(TickInput::default());
        assert_ne!(app.state.ball_position, before);
    }

    #[test]
    fn test_life_lost_passes_back_to_playing() {
        let mut app = app();
        app.acknowledge();
        drop_ball(&mut app);

        let outcome = app.on_tick(TickInput::default());
        assert!(outcome.life_lost);
        assert_eq!(app.screen(), Screen::LifeLost);
        assert_eq!(app.state.lives, 2);

        app.on_tick(TickInput::default());
        assert_eq!(app.screen(), Screen::Playing);
    }

    #[test]
    fn test_game_over_resets_after_acknowledge() {
        let mut app = app();
        app.acknowledge();
        app.state.lives = 1;
        app.state.score = 5;
        app.state.level = 1;
        drop_ball(&mut app);

        let outcome = app.on_tick(TickInput::default());
        assert!(outcome.game_over);
        assert!(app.state.is_game_over());
        assert_eq!(app.screen(), Screen::GameOver { final_score: 5 });

        app.acknowledge();
        assert_eq!(app.screen(), Screen::Start);
        assert_eq!((app.state.score, app.state.lives, app.state.level), (0, 3, 1));
        assert_eq!(app.state.ball_position, (400.0, 300.0));

        app.acknowledge();
        assert_eq!(app.screen(), Screen::Playing);
    }

    #[test]
    fn test_victory_exits_on_key() {
        let mut app = app();
        app.acknowledge();
        app.state.score = 3;
        app.declare_victory();
        assert_eq!(app.screen(), Screen::Victory { final_score: 3 });

        app.acknowledge();
        assert!(app.should_quit());
    }

    #[test]
    fn test_frame_follows_screen() {
        let mut app = app();
        assert_eq!(app.frame(), screen::message(Screen::Start, &app.config));

        app.acknowledge();
        assert_eq!(app.frame(), game::render(&app.state, &app.config));
    }
}
