use std::f64::consts::PI;

/// Game tuning parameters for Pong. Distances are pixels, time is milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f64 = 960.0;
    pub const FIELD_HEIGHT: f64 = 540.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_MARGIN: f64 = 10.0; // gap between paddle and side edge
    pub const PLAYER_SPEED: f64 = 0.5; // px per ms
    pub const CPU_SPEED: f64 = 0.5;

    // Ball
    pub const BALL_RADIUS: f64 = 20.0;
    pub const BALL_SPEED: f64 = 0.4;
    pub const BALL_SPEED_INCREASE: f64 = 1.1; // Multiply v_x on paddle hit, no cap

    // Serve angle, measured from vertical
    pub const SERVE_ANGLE_MIN: f64 = 5.0 * PI / 16.0;
    pub const SERVE_ANGLE_SPAN: f64 = 5.0 * PI / 8.0;

    // Clock
    pub const TICK_RATE: f64 = 30.0; // max ticks per second
    pub const MIN_TICK_RATE: f64 = 1.0;
    pub const MAX_TICK_RATE: f64 = 1000.0;
    pub const COUNTDOWN_SECONDS: f64 = 3.0;
    pub const MAX_COUNTDOWN_SECONDS: f64 = 60.0;
}
