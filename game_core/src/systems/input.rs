use hecs::World;

use crate::components::*;
use crate::platform::KeyState;

/// Player direction from held keys. Down wins when both are held.
pub fn player_dir(keys: &KeyState) -> i8 {
    if keys.down {
        1
    } else if keys.up {
        -1
    } else {
        0
    }
}

/// CPU heuristic: chase the ball until it overlaps the paddle vertically.
pub fn track_ball(ball: &Ball, paddle: &Paddle) -> i8 {
    if ball.body.bottom() < paddle.body.top() {
        -1
    } else if ball.body.top() > paddle.body.bottom() {
        1
    } else {
        0
    }
}

/// Rewrite both paddle intents for this tick
pub fn apply_intents(world: &mut World, keys: &KeyState) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);

    for (_entity, (paddle, side, intent)) in
        world.query_mut::<(&Paddle, &Side, &mut PaddleIntent)>()
    {
        intent.dir = match side {
            Side::Left => player_dir(keys),
            Side::Right => ball.map_or(0, |ball| track_ball(&ball, paddle)),
        };
    }
}

/// Intents only last one tick
pub fn clear_intents(world: &mut World) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = 0;
    }
}
