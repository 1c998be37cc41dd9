use crate::{Ball, BallEvent, Field, Paddle, PaddleIntent, Side, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, field: &Field) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.update(time.dt, field, intent.dir);
        }
    }
}

/// Move the ball against the current paddle positions
pub fn move_ball(world: &mut World, time: &Time, field: &Field) -> BallEvent {
    // Copy the paddles out first; the ball only gets to look at them
    let mut left = None;
    let mut right = None;
    for (_entity, (paddle, side)) in world.query::<(&Paddle, &Side)>().iter() {
        match side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    let (Some(left), Some(right)) = (left, right) else {
        return BallEvent::None;
    };

    world
        .query_mut::<&mut Ball>()
        .into_iter()
        .next()
        .map_or(BallEvent::None, |(_entity, ball)| {
            ball.update(time.dt, field, &left, &right)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_world() -> (World, Field) {
        let mut world = World::new();
        world.spawn((
            Paddle::new(10.0, 270.0, 20.0, 100.0, 0.5).unwrap(),
            Side::Left,
            PaddleIntent { dir: 1 },
        ));
        world.spawn((
            Paddle::new(930.0, 270.0, 20.0, 100.0, 0.5).unwrap(),
            Side::Right,
            PaddleIntent { dir: 0 },
        ));
        (world, Field::new(960.0, 540.0))
    }

    #[test]
    fn test_move_paddles_follows_intent() {
        let (mut world, field) = setup_world();
        move_paddles(&mut world, &Time::new(40.0, 0.0), &field);

        for (_e, (paddle, side)) in world.query::<(&Paddle, &Side)>().iter() {
            match side {
                Side::Left => assert_eq!(paddle.body.pos.y, 240.0),
                Side::Right => assert_eq!(paddle.body.pos.y, 220.0),
            }
        }
    }

    #[test]
    fn test_move_ball_moves_ball() {
        let (mut world, field) = setup_world();
        world.spawn((Ball::new(480.0, 270.0, 0.4, 0.2, 20.0).unwrap(),));

        let event = move_ball(&mut world, &Time::new(10.0, 0.0), &field);

        assert_eq!(event, BallEvent::None);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.body.center().x, 484.0);
            assert_eq!(ball.body.center().y, 272.0);
        }
    }

    #[test]
    fn test_move_ball_reports_paddle_bounce() {
        let (mut world, field) = setup_world();
        world.spawn((Ball::new(50.0, 270.0, -0.4, 0.0, 20.0).unwrap(),));

        let event = move_ball(&mut world, &Time::new(10.0, 0.0), &field);
        assert_eq!(event, BallEvent::BounceLeftPaddle);
    }

    #[test]
    fn test_no_event_without_ball() {
        let (mut world, field) = setup_world();
        let event = move_ball(&mut world, &Time::new(10.0, 0.0), &field);
        assert_eq!(event, BallEvent::None);
    }
}
