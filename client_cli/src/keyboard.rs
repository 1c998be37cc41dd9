//! Keyboard input from the terminal in raw mode.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use game_core::{KeySource, KeyState};

/// Most terminals never report key releases. A direction counts as held
/// until this long after its last press or auto-repeat.
const HOLD: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Up,
    Down,
    Escape,
    Space,
    Quit,
}

fn map_key(key: &KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        _ => None,
    }
}

/// Held directions plus presses collected since the last poll
#[derive(Debug, Default)]
struct KeyTracker {
    up_until: Option<Instant>,
    down_until: Option<Instant>,
    pressed: KeyState,
}

impl KeyTracker {
    fn apply(&mut self, event: &Event, now: Instant) {
        let Event::Key(key) = event else {
            return;
        };
        let Some(mapped) = map_key(key) else {
            return;
        };
        let is_press = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        match (mapped, is_press) {
            (Key::Up, true) => self.up_until = Some(now + HOLD),
            (Key::Up, false) => self.up_until = None,
            (Key::Down, true) => self.down_until = Some(now + HOLD),
            (Key::Down, false) => self.down_until = None,
            (Key::Escape, true) => self.pressed.escape = true,
            (Key::Space, true) => self.pressed.space = true,
            (Key::Quit, true) => self.pressed.quit = true,
            _ => {}
        }
    }

    /// Snapshot for this tick; one-shot presses are consumed.
    fn take(&mut self, now: Instant) -> KeyState {
        let held = |until: Option<Instant>| until.is_some_and(|t| now < t);
        let pressed = std::mem::take(&mut self.pressed);
        KeyState {
            up: held(self.up_until),
            down: held(self.down_until),
            ..pressed
        }
    }
}

/// Reads the keyboard from the controlling terminal. Raw mode is on for the
/// lifetime of the value.
pub struct TerminalKeys {
    tracker: KeyTracker,
}

impl TerminalKeys {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self {
            tracker: KeyTracker::default(),
        })
    }

    fn drain(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.tracker.apply(&event, Instant::now());
        }
        Ok(())
    }
}

impl KeySource for TerminalKeys {
    fn poll_keys(&mut self) -> KeyState {
        if let Err(err) = self.drain() {
            tracing::warn!(%err, "keyboard read failed, quitting");
            self.tracker.pressed.quit = true;
        }
        self.tracker.take(Instant::now())
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "could not leave raw mode");
        }
    }
}
