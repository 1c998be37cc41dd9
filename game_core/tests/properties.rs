use game_core::*;
use glam::DVec2;
use proptest::prelude::*;

const FIELD: Field = Field {
    width: 960.0,
    height: 540.0,
};

fn paddles() -> (Paddle, Paddle) {
    (
        Paddle::new(10.0, 270.0, 20.0, 100.0, 0.5).unwrap(),
        Paddle::new(930.0, 270.0, 20.0, 100.0, 0.5).unwrap(),
    )
}

proptest! {
    /// Property: a paddle never leaves the field, whatever it is told to do
    #[test]
    fn prop_paddle_stays_on_field(
        y_center in -1000.0f64..1500.0,
        dt in 0.0f64..5000.0,
        dir in -1i8..=1,
    ) {
        let mut paddle = Paddle::new(10.0, y_center, 20.0, 100.0, 0.5).unwrap();
        paddle.update(dt, &FIELD, dir);
        prop_assert!(paddle.body.pos.y >= 0.0);
        prop_assert!(paddle.body.pos.y <= FIELD.height - 100.0);
    }

    /// Property: a ball that lands inside the horizontal bounds never exits
    #[test]
    fn prop_ball_in_bounds_never_exits(
        x in 0.001f64..919.999,
        y in -100.0f64..640.0,
        v_x in -1.0f64..1.0,
        v_y in -1.0f64..1.0,
    ) {
        let (left, right) = paddles();
        let dt = 10.0;
        // Start one tick back so integration lands on (x, y)
        let start = DVec2::new(x, y) - DVec2::new(v_x, v_y) * dt;
        let mut ball = Ball::new(480.0, 270.0, v_x, v_y, 20.0).unwrap();
        ball.body.pos = start;
        let event = ball.update(dt, &FIELD, &left, &right);
        prop_assert_ne!(event, BallEvent::ExitLeft);
        prop_assert_ne!(event, BallEvent::ExitRight);
    }

    /// Property: wall contact flips v_y, keeps v_x and leaves no overshoot
    #[test]
    fn prop_wall_bounce_is_exact(
        x in 200.0f64..700.0,
        overshoot in 0.001f64..50.0,
        v_x in -0.5f64..0.5,
        speed in 0.01f64..2.0,
    ) {
        let (left, right) = paddles();
        let mut ball = Ball::new(x + 20.0, 20.0, v_x, -speed, 20.0).unwrap();
        ball.body.pos.y = -overshoot + speed;
        ball.update(1.0, &FIELD, &left, &right);
        prop_assert_eq!(ball.body.pos.y, 0.0);
        prop_assert_eq!(ball.body.vel.y, speed);
        prop_assert_eq!(ball.body.vel.x, v_x);
    }

    /// Property: serves always come out at the configured speed
    #[test]
    fn prop_serve_speed(seed in any::<u64>(), speed in 0.01f64..5.0) {
        let mut rng = GameRng::new(seed);
        let vel = rng.serve_velocity(speed);
        prop_assert!((vel.length() - speed).abs() < 1e-9 * speed.max(1.0));
    }
}
