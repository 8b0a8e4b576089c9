use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event as TermEvent, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::{Display, FrameClock};
use crate::draw::{DrawCommand, Rect, Rgb, Text};
use crate::event::{Event, HeldKeys, KeyTracker};
use crate::ui;

/// A game window drawn in the terminal. Restores the terminal when dropped.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    window: (f32, f32),
    /// Commands drawn since the last present.
    pending: Vec<DrawCommand>,
    /// Last presented frame, repainted on resize.
    shown: Vec<DrawCommand>,
    keys: KeyTracker,
    clock: FrameClock,
    fullscreen: bool,
    enhanced_keys: bool,
}

impl TerminalDisplay {
    /// Takes over the terminal for a `width` x `height` pixel window.
    pub fn open(width: f32, height: f32) -> io::Result<Self> {
        let enhanced_keys = matches!(supports_keyboard_enhancement(), Ok(true));
        match Self::setup(enhanced_keys) {
            Ok(terminal) => {
                if let Ok(size) = terminal.size() {
                    log::info!(
                        "Terminal {}x{} opened, release events {}",
                        size.width,
                        size.height,
                        if enhanced_keys { "on" } else { "off" }
                    );
                }
                Ok(Self {
                    terminal,
                    window: (width, height),
                    pending: Vec::new(),
                    shown: Vec::new(),
                    keys: KeyTracker::new(enhanced_keys),
                    clock: FrameClock::new(),
                    fullscreen: false,
                    enhanced_keys,
                })
            }
            Err(e) => {
                let _ = restore(&mut io::stdout(), enhanced_keys);
                Err(e)
            }
        }
    }

    fn setup(enhanced_keys: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        if enhanced_keys {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(terminal)
    }

    fn repaint(&mut self) -> io::Result<()> {
        let window = self.window;
        let fullscreen = self.fullscreen;
        let commands = &self.shown;
        self.terminal.draw(|frame| {
            let area = ui::layout::fit(frame.area(), window, fullscreen);
            ui::render(frame, area, window, commands);
        })?;
        Ok(())
    }
}

fn restore<W: Write>(out: &mut W, enhanced_keys: bool) -> io::Result<()> {
    if enhanced_keys {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

impl Display for TerminalDisplay {
    fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), SetTitle(title))
    }

    fn poll_events(&mut self) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key) => {
                    if let Some(event) = self.keys.record(key, Instant::now()) {
                        events.push(event);
                    }
                }
                TermEvent::Resize(width, height) => {
                    log::debug!("Terminal resized to {}x{}", width, height);
                    self.repaint()?;
                }
                _ => {}
            }
        }
        Ok(events)
    }

    fn held_keys(&self) -> HeldKeys {
        self.keys.held(Instant::now())
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        self.pending.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.pending.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &Text) {
        self.pending.push(DrawCommand::Text(text.clone()));
    }

    fn clear(&mut self, color: Rgb) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn present(&mut self) -> io::Result<()> {
        self.shown = std::mem::take(&mut self.pending);
        self.repaint()
    }

    fn limit_rate(&mut self, ticks_per_second: u32) {
        self.clock.tick(ticks_per_second);
    }

    fn toggle_fullscreen(&mut self) -> io::Result<()> {
        self.fullscreen = !self.fullscreen;
        log::info!("Fullscreen {}", if self.fullscreen { "on" } else { "off" });
        self.terminal.clear()?;
        self.repaint()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = restore(self.terminal.backend_mut(), self.enhanced_keys);
    }
}
