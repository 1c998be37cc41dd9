//! Match lifecycle: countdown, play, scoring and the two kinds of reset.

use hecs::World;

use crate::error::Result;
use crate::platform::{FrameClock, KeyState};
use crate::systems::*;
use crate::{Ball, Config, Events, Field, GameRng, Paddle, PaddleIntent, Score, Side, Time};

/// Where the match is in its round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Frozen before a serve; holds the ticks left to wait
    Countdown(i64),
    Playing,
}

/// What the host loop should do after input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Bodies as they stand at the start of a round, built once from a
/// validated config.
#[derive(Debug, Clone, Copy)]
struct Layout {
    ball: Ball,
    left: Paddle,
    right: Paddle,
}

impl Layout {
    fn new(config: &Config, field: &Field) -> Result<Self> {
        let center = field.center();
        let paddle = |side| {
            Paddle::new(
                config.paddle_x(side),
                center.y,
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed(side),
            )
        };
        Ok(Self {
            ball: Ball::new(center.x, center.y, 0.0, 0.0, config.ball_radius)?,
            left: paddle(Side::Left)?,
            right: paddle(Side::Right)?,
        })
    }
}

/// One human-vs-CPU match. Owns every piece of simulation state.
pub struct Match {
    pub world: World,
    pub time: Time,
    pub field: Field,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub pause_ticks_remaining: i64,
    layout: Layout,
    /// Raised outside `advance`; reported by the next one
    pending: Events,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let field = Field::from(&config);
        let layout = Layout::new(&config, &field)?;

        let mut game = Self {
            world: World::new(),
            time: Time::default(),
            field,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            pause_ticks_remaining: 0,
            config,
            layout,
            pending: Events::new(),
        };
        game.new_round();
        game.pending.round_started = true;
        Ok(game)
    }

    /// Fresh ball and paddles with a new serve, countdown restarted.
    /// Wins and playtime carry over. Flags `round_started` on the current
    /// events record.
    pub fn new_round(&mut self) {
        self.world.clear();

        let mut ball = self.layout.ball;
        ball.body.vel = self.rng.serve_velocity(self.config.ball_speed);
        self.world.spawn((ball,));
        self.world
            .spawn((self.layout.left, Side::Left, PaddleIntent::new()));
        self.world
            .spawn((self.layout.right, Side::Right, PaddleIntent::new()));

        self.pause_ticks_remaining = self.config.countdown_ticks();
        self.events.round_started = true;
        tracing::debug!(vel = %ball.body.vel, "new round");
    }

    /// Start over as if freshly constructed: wins and playtime are cleared.
    pub fn reset(&mut self) {
        self.score = Score::new();
        self.time = Time::default();
        self.new_round();
        self.pending.reset = true;
        self.pending.round_started = true;
        tracing::info!("match reset");
    }

    pub fn state(&self) -> MatchState {
        if self.pause_ticks_remaining > 0 {
            MatchState::Countdown(self.pause_ticks_remaining)
        } else {
            MatchState::Playing
        }
    }

    /// Turn this tick's keys into paddle intents and handle reset/quit.
    pub fn input_move(&mut self, keys: &KeyState) -> Control {
        if keys.quit || keys.escape {
            return Control::Quit;
        }
        if keys.space {
            self.reset();
        }
        apply_intents(&mut self.world, keys);
        Control::Continue
    }

    /// Advance by whatever time `clock` says has passed.
    pub fn update<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> &Events {
        let dt = clock.tick(self.config.tick_rate);
        self.advance(dt)
    }

    /// Advance by `dt` milliseconds. Paddle intents are used up by the
    /// tick, so call `input_move` before each one.
    pub fn advance(&mut self, dt: f64) -> &Events {
        self.events = std::mem::take(&mut self.pending);
        self.time.advance(dt);
        move_paddles(&mut self.world, &self.time, &self.field);
        clear_intents(&mut self.world);

        if self.pause_ticks_remaining > 0 {
            self.pause_ticks_remaining -= 1;
            return &self.events;
        }

        let event = move_ball(&mut self.world, &self.time, &self.field);
        if check_scoring(event, &mut self.score, &mut self.events).is_some() {
            self.new_round();
        }
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<(&Paddle, &Side)>()
            .iter()
            .find(|(_e, (_p, s))| **s == side)
            .map(|(_e, (paddle, _s))| *paddle)
    }

    pub fn left_wins(&self) -> u32 {
        self.score.left
    }

    pub fn right_wins(&self) -> u32 {
        self.score.right
    }

    /// Seconds of play since construction or the last reset
    pub fn elapsed_playtime(&self) -> f64 {
        self.time.now
    }

    /// Countdown digit and its size as a fraction of the full size. The size
    /// shrinks over each second and jumps back when the digit changes.
    pub fn countdown_display(&self) -> Option<(i64, f64)> {
        let remaining = u64::try_from(self.pause_ticks_remaining)
            .ok()
            .filter(|&p| p > 0)?;
        let rate = (self.config.tick_rate.round() as u64).max(1);
        let digit = remaining.div_ceil(rate) as i64;
        let scale = ((remaining - 1) % rate + 1) as f64 / rate as f64;
        Some((digit, scale))
    }
}
