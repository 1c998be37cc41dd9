use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use game_core::FrameClock;

const FPS_WINDOW: usize = 10;

/// Wall-clock frame limiter: sleeps off whatever is left of the tick period.
pub struct SystemClock {
    last: Instant,
    recent: VecDeque<f64>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            recent: VecDeque::with_capacity(FPS_WINDOW),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn tick(&mut self, max_rate: f64) -> f64 {
        let period = Duration::from_secs_f64(1.0 / max_rate);
        let busy = self.last.elapsed();
        if busy < period {
            thread::sleep(period - busy);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64() * 1000.0;
        self.last = now;

        if self.recent.len() == FPS_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(dt);
        dt
    }

    fn fps(&self) -> f64 {
        let total: f64 = self.recent.iter().sum();
        if total > 0.0 {
            1000.0 * self.recent.len() as f64 / total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_never_runs_faster_than_rate() {
        let mut clock = SystemClock::new();
        for _ in 0..3 {
            let dt = clock.tick(200.0);
            assert!(dt >= 4.99, "tick took {dt} ms, expected at least 5");
        }
    }

    #[test]
    fn test_fps_is_zero_before_first_tick() {
        assert_eq!(SystemClock::new().fps(), 0.0);
    }

    #[test]
    fn test_fps_bounded_by_rate() {
        let mut clock = SystemClock::new();
        for _ in 0..4 {
            clock.tick(100.0);
        }
        let fps = clock.fps();
        assert!(fps > 0.0 && fps <= 100.5, "fps {fps}");
    }
}
