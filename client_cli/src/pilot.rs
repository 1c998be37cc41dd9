//! Stand-in for the keyboard when running unattended, and a tick limit that
//! wraps any key source.

use game_core::{KeySource, KeyState};

/// Sweeps the player paddle up and down, `sweep_ticks` polls each way.
#[derive(Debug, Clone)]
pub struct DemoPilot {
    tick: u64,
    sweep_ticks: u64,
}

impl DemoPilot {
    pub fn new(sweep_ticks: u64) -> Self {
        Self {
            tick: 0,
            sweep_ticks: sweep_ticks.max(1),
        }
    }
}

impl KeySource for DemoPilot {
    fn poll_keys(&mut self) -> KeyState {
        let phase = self.tick % (2 * self.sweep_ticks);
        self.tick += 1;

        KeyState {
            up: phase < self.sweep_ticks,
            down: phase >= self.sweep_ticks,
            ..KeyState::default()
        }
    }
}

/// Raises the quit signal once `max_ticks` polls have gone through.
pub struct TickLimit<K: ?Sized> {
    polled: u64,
    max_ticks: Option<u64>,
    inner: Box<K>,
}

impl<K: KeySource + ?Sized> TickLimit<K> {
    pub fn new(inner: Box<K>, max_ticks: Option<u64>) -> Self {
        Self {
            polled: 0,
            max_ticks,
            inner,
        }
    }
}

impl<K: KeySource + ?Sized> KeySource for TickLimit<K> {
    fn poll_keys(&mut self) -> KeyState {
        let mut keys = self.inner.poll_keys();
        if self.max_ticks.is_some_and(|max| self.polled >= max) {
            keys.quit = true;
        }
        self.polled += 1;
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quits_after_max_ticks() {
        let mut keys = TickLimit::new(Box::new(DemoPilot::new(10)), Some(3));
        for _ in 0..3 {
            assert!(!keys.poll_keys().quit);
        }
        assert!(keys.poll_keys().quit);
    }

    #[test]
    fn test_never_quits_without_limit() {
        let mut keys = TickLimit::new(Box::new(DemoPilot::new(10)), None);
        assert!((0..1000).all(|_| !keys.poll_keys().quit));
    }

    #[test]
    fn test_limit_passes_keys_through() {
        let mut keys = TickLimit::new(Box::new(DemoPilot::new(10)), Some(5));
        let polled = keys.poll_keys();
        assert!(polled.up && !polled.down);
    }

    #[test]
    fn test_sweeps_up_then_down() {
        let mut pilot = DemoPilot::new(2);
        let dirs: Vec<_> = (0..6)
            .map(|_| {
                let keys = pilot.poll_keys();
                (keys.up, keys.down)
            })
            .collect();
        assert_eq!(
            dirs,
            vec![
                (true, false),
                (true, false),
                (false, true),
                (false, true),
                (true, false),
                (true, false),
            ]
        );
    }
}
