use glam::DVec2;

use crate::platform::{Color, Renderer};
use crate::{Match, Side};

pub const SCORE_FONT_SIZE: f64 = 30.0;
pub const SCORE_TOP: f64 = 20.0;

pub const BALL_COLOR: Color = Color::BLUE;
pub const LEFT_PADDLE_COLOR: Color = Color::RED;
pub const RIGHT_PADDLE_COLOR: Color = Color::GREEN;
pub const TEXT_COLOR: Color = Color::WHITE;

/// Draw one frame of the match and present it.
pub fn draw<R: Renderer + ?Sized>(game: &Match, renderer: &mut R, fps: f64) {
    renderer.clear(Color::BLACK);
    renderer.set_caption(&format!(
        "FPS: {fps:.2}   Playtime: {:.2}",
        game.elapsed_playtime()
    ));

    let mid_x = game.field.width / 2.0;
    let title_y = SCORE_TOP + SCORE_FONT_SIZE / 2.0;
    renderer.draw_text(
        " SCORE ",
        DVec2::new(mid_x, title_y),
        SCORE_FONT_SIZE,
        TEXT_COLOR,
    );
    renderer.draw_text(
        &format!("{}  {}", game.left_wins(), game.right_wins()),
        DVec2::new(mid_x, title_y + SCORE_FONT_SIZE),
        SCORE_FONT_SIZE,
        TEXT_COLOR,
    );

    if let Some(ball) = game.ball() {
        renderer.draw_circle(ball.body.center(), ball.radius(), BALL_COLOR);
    }
    if let Some(paddle) = game.paddle(Side::Left) {
        renderer.draw_rect(paddle.aabb(), LEFT_PADDLE_COLOR);
    }
    if let Some(paddle) = game.paddle(Side::Right) {
        renderer.draw_rect(paddle.aabb(), RIGHT_PADDLE_COLOR);
    }

    if let Some((digit, scale)) = game.countdown_display() {
        let full = 1.5 * game.field.width.min(game.field.height);
        renderer.draw_text(
            &digit.to_string(),
            game.field.center(),
            (full * scale).floor(),
            TEXT_COLOR,
        );
    }

    renderer.present();
}
