use std::fs::File;
use std::io;
use std::path::PathBuf;

use env_logger::{Env, Target, WriteStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bouncing_ball::display::TerminalDisplay;
use bouncing_ball::{app, App, Config};

const LOG_ENV: &str = "BOUNCING_BALL_LOG";

fn log_path() -> PathBuf {
    // Store next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join("bouncing-ball.log");
        }
    }
    PathBuf::from("bouncing-ball.log")
}

/// The terminal belongs to the game, so records go to a file.
fn init_logging() {
    let Ok(file) = File::create(log_path()) else { return };
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    log::info!("Bouncing Ball starting...");

    let config = Config::from_env();
    let (width, height) = config.window_size();
    let mut display = TerminalDisplay::open(width, height)?;
    let mut app = App::new(config, StdRng::from_entropy());

    let result = app::run(&mut display, &mut app);
    // Restore the terminal before any error is printed
    drop(display);
    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    result
}
