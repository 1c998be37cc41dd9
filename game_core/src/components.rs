use glam::DVec2;

use crate::error::{invalid, Result};
use crate::map::{Aabb, Field};
use crate::params::Params;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Kinematic body shared by paddles and the ball. `pos` is the top-left corner
/// of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    size: DVec2,
}

impl Body {
    fn new(pos: DVec2, vel: DVec2, size: DVec2) -> Result<Self> {
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(invalid(format!("body extent must be positive, got {size}")));
        }
        Ok(Self { pos, vel, size })
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    pub fn center(&self) -> DVec2 {
        self.pos + self.size * 0.5
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    fn integrate(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }
}

/// Paddle component - a rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub body: Body,
    pub speed: f64, // px per ms
}

impl Paddle {
    /// `x` is the fixed left edge, `y_center` the initial vertical centre.
    pub fn new(x: f64, y_center: f64, width: f64, height: f64, speed: f64) -> Result<Self> {
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(invalid(format!("paddle speed must be non-negative, got {speed}")));
        }
        let body = Body::new(
            DVec2::new(x, y_center - height / 2.0),
            DVec2::ZERO,
            DVec2::new(width, height),
        )?;
        Ok(Self { body, speed })
    }

    /// Move by `speed * dt * dir` and keep the paddle on the field.
    pub fn update(&mut self, dt: f64, field: &Field, dir: i8) {
        let dir = f64::from(dir.signum());
        self.body.vel = DVec2::new(0.0, self.speed * dir);
        self.body.integrate(dt);
        self.body.pos.y = field.clamp_top(self.body.pos.y, self.body.size().y);
    }

    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

/// What happened to the ball during one update. Wall bounces are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    None,
    ExitLeft,
    ExitRight,
    BounceLeftPaddle,
    BounceRightPaddle,
}

impl BallEvent {
    /// The side that wins the point, if the ball left the field
    pub fn scorer(self) -> Option<Side> {
        match self {
            BallEvent::ExitLeft => Some(Side::Right),
            BallEvent::ExitRight => Some(Side::Left),
            _ => None,
        }
    }
}

/// Ball component - the pong ball, collided as its bounding square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
    radius: f64,
}

impl Ball {
    pub fn new(x_center: f64, y_center: f64, v_x: f64, v_y: f64, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(invalid(format!("ball radius must be positive, got {radius}")));
        }
        let body = Body::new(
            DVec2::new(x_center - radius, y_center - radius),
            DVec2::new(v_x, v_y),
            DVec2::splat(2.0 * radius),
        )?;
        Ok(Self { body, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }

    /// Advance one tick and resolve walls, paddles and exits.
    ///
    /// Exits short-circuit. A wall bounce does not, so the paddle check still
    /// runs in the same tick.
    pub fn update(&mut self, dt: f64, field: &Field, left: &Paddle, right: &Paddle) -> BallEvent {
        self.body.integrate(dt);
        let size = self.body.size;

        if self.body.pos.x < 0.0 {
            return BallEvent::ExitLeft;
        } else if self.body.pos.x > field.width - size.x {
            return BallEvent::ExitRight;
        }

        if self.body.pos.y < 0.0 {
            self.body.pos.y = 0.0;
            self.body.vel.y = -self.body.vel.y;
        } else if self.body.pos.y > field.height - size.y {
            self.body.pos.y = field.height - size.y;
            self.body.vel.y = -self.body.vel.y;
        }

        let aabb = self.aabb();
        if aabb.intersects(&left.aabb()) {
            self.bounce_x();
            BallEvent::BounceLeftPaddle
        } else if aabb.intersects(&right.aabb()) {
            self.bounce_x();
            BallEvent::BounceRightPaddle
        } else {
            BallEvent::None
        }
    }

    fn bounce_x(&mut self) {
        self.body.vel.x = -self.body.vel.x * Params::BALL_SPEED_INCREASE;
    }
}

/// Movement intent for paddle, rewritten by input every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
