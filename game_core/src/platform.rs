//! Seams to the host platform: keyboard, frame clock and drawing surface.

use glam::DVec2;

use crate::map::Aabb;

/// Keyboard snapshot for one tick. `up` and `down` are held keys, the rest
/// are presses that happened since the previous poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub escape: bool,
    pub space: bool,
    pub quit: bool,
}

pub trait KeySource {
    fn poll_keys(&mut self) -> KeyState;
}

/// Monotonic frame timer
pub trait FrameClock {
    /// Wait as needed to keep the loop at or below `max_rate` ticks per
    /// second and return the milliseconds since the previous tick.
    fn tick(&mut self, max_rate: f64) -> f64;

    /// Measured ticks per second
    fn fps(&self) -> f64;
}

/// Clock that never sleeps and reports exactly one tick period every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    rate: f64,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, max_rate: f64) -> f64 {
        self.rate = max_rate;
        1000.0 / max_rate
    }

    fn fps(&self) -> f64 {
        self.rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Drawing surface. Coordinates are field pixels, origin top-left.
pub trait Renderer {
    fn clear(&mut self, color: Color);

    /// Window title or status line; hosts without one can ignore it.
    fn set_caption(&mut self, _text: &str) {}

    fn draw_rect(&mut self, rect: Aabb, color: Color);

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color);

    /// Draw `text` centred on `center` with a font `size` pixels tall.
    fn draw_text(&mut self, text: &str, center: DVec2, size: f64, color: Color);

    fn present(&mut self);
}
