//! Bouncing Ball - a single-screen arcade game in the terminal
//!
//! - `game`: state, per-tick update and the playing frame's draw list
//! - `screen`: start / game over / victory screens and the key wait
//! - `app`: owns the state, moves between screens, runs the loop
//! - `display`: the window/input capability and its terminal implementation
//! - `ui`: ratatui painting of draw lists

pub mod app;
pub mod config;
pub mod display;
pub mod draw;
pub mod event;
pub mod game;
pub mod screen;
pub mod ui;

pub use app::App;
pub use config::Config;
