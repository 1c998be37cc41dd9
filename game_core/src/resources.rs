use glam::DVec2;
use rand::distributions::Open01;
use rand::Rng;

use crate::params::Params;
use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f64,  // Milliseconds covered by the last tick
    pub now: f64, // Total elapsed playtime in seconds
}

impl Time {
    pub fn new(dt: f64, now: f64) -> Self {
        Self { dt, now }
    }

    pub fn advance(&mut self, dt: f64) {
        self.dt = dt;
        self.now += dt / 1000.0;
    }
}

/// Cumulative wins, kept across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Random number generator used for serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Signed serve angle measured from the downward vertical. The magnitude
    /// lies strictly inside `(5π/16, 5π/16 + 5π/8)` and the sign picks the
    /// horizontal direction.
    pub fn serve_angle(&mut self) -> f64 {
        let sign = if self.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let t: f64 = self.0.sample(Open01);
        sign * (Params::SERVE_ANGLE_MIN + t * Params::SERVE_ANGLE_SPAN)
    }

    pub fn serve_velocity(&mut self, speed: f64) -> DVec2 {
        let angle = self.serve_angle();
        DVec2::new(speed * angle.sin(), speed * angle.cos())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: Option<Side>,
    pub round_started: bool,
    pub reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}
