use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(KeyCode),
}

/// Directional keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Without release events a key counts as held this long after its last
/// press or repeat.
pub const HOLD_WINDOW: Duration = Duration::from_millis(120);

/// Turns raw key events into game events and keeps track of held arrows.
pub struct KeyTracker {
    reports_release: bool,
    left: Option<Instant>,
    right: Option<Instant>,
}

impl KeyTracker {
    /// `reports_release` is true when the terminal sends release events.
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            left: None,
            right: None,
        }
    }

    pub fn record(&mut self, key: KeyEvent, now: Instant) -> Option<Event> {
        let previous = match key.code {
            KeyCode::Left => self.left,
            KeyCode::Right => self.right,
            _ => None,
        };
        // Without release events autorepeat arrives as more presses
        let repeated = !self.reports_release && self.is_held(previous, now);

        let slot = match key.code {
            KeyCode::Left => Some(&mut self.left),
            KeyCode::Right => Some(&mut self.right),
            _ => None,
        };
        if let Some(slot) = slot {
            *slot = match key.kind {
                KeyEventKind::Release => None,
                KeyEventKind::Press | KeyEventKind::Repeat => Some(now),
            };
        }

        if key.kind != KeyEventKind::Press || repeated {
            return None;
        }
        // Ctrl+C always quits
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Esc {
            return Some(Event::Quit);
        }
        Some(Event::KeyDown(key.code))
    }

    pub fn held(&self, now: Instant) -> HeldKeys {
        HeldKeys {
            left: self.is_held(self.left, now),
            right: self.is_held(self.right, now),
        }
    }

    fn is_held(&self, last: Option<Instant>, now: Instant) -> bool {
        match last {
            Some(_) if self.reports_release => true,
            Some(at) => now.saturating_duration_since(at) <= HOLD_WINDOW,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_release_events_drive_held_state() {
        let mut tracker = KeyTracker::new(true);
        let t0 = Instant::now();

        let event = tracker.record(key(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(matches!(event, Some(Event::KeyDown(KeyCode::Left))));
        let later = t0 + Duration::from_secs(2);
        assert_eq!(tracker.held(later), HeldKeys { left: true, right: false });

        assert!(tracker.record(key(KeyCode::Left, KeyEventKind::Release), later).is_none());
        assert_eq!(tracker.held(later), HeldKeys::default());
    }

    #[test]
    fn test_hold_window_without_release_events() {
        let mut tracker = KeyTracker::new(false);
        let t0 = Instant::now();

        tracker.record(key(KeyCode::Right, KeyEventKind::Press), t0);
        assert!(tracker.held(t0 + Duration::from_millis(50)).right);
        assert!(!tracker.held(t0 + Duration::from_millis(500)).right);
    }

    #[test]
    fn test_repeat_keeps_key_held_but_is_not_a_key_down() {
        let mut tracker = KeyTracker::new(false);
        let t0 = Instant::now();
        tracker.record(key(KeyCode::Right, KeyEventKind::Press), t0);

        let t1 = t0 + Duration::from_millis(100);
        assert!(tracker.record(key(KeyCode::Right, KeyEventKind::Repeat), t1).is_none());
        assert!(tracker.held(t1 + Duration::from_millis(100)).right);
    }

    #[test]
    fn test_autorepeat_presses_are_not_key_downs() {
        let mut tracker = KeyTracker::new(false);
        let t0 = Instant::now();

        let first = tracker.record(key(KeyCode::Right, KeyEventKind::Press), t0);
        assert!(matches!(first, Some(Event::KeyDown(KeyCode::Right))));

        let t1 = t0 + Duration::from_millis(33);
        assert!(tracker.record(key(KeyCode::Right, KeyEventKind::Press), t1).is_none());
        assert!(tracker.held(t1 + Duration::from_millis(100)).right);

        // Once the hold has lapsed the next press counts again
        let t2 = t1 + Duration::from_millis(500);
        let fresh = tracker.record(key(KeyCode::Right, KeyEventKind::Press), t2);
        assert!(matches!(fresh, Some(Event::KeyDown(KeyCode::Right))));
    }

    #[test]
    fn test_presses_after_release_count_with_release_events() {
        let mut tracker = KeyTracker::new(true);
        let t0 = Instant::now();
        tracker.record(key(KeyCode::Left, KeyEventKind::Press), t0);
        tracker.record(key(KeyCode::Left, KeyEventKind::Release), t0);

        let again = tracker.record(key(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(matches!(again, Some(Event::KeyDown(KeyCode::Left))));
    }

    #[test]
    fn test_quit_keys() {
        let mut tracker = KeyTracker::new(false);
        let now = Instant::now();

        let mut ctrl_c = key(KeyCode::Char('c'), KeyEventKind::Press);
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert!(matches!(tracker.record(ctrl_c, now), Some(Event::Quit)));
        assert!(matches!(
            tracker.record(key(KeyCode::Esc, KeyEventKind::Press), now),
            Some(Event::Quit)
        ));
        assert!(matches!(
            tracker.record(key(KeyCode::Char('c'), KeyEventKind::Press), now),
            Some(Event::KeyDown(KeyCode::Char('c')))
        ));
    }
}
