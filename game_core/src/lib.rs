pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod platform;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::GameError;
pub use game::*;
pub use map::*;
pub use params::*;
pub use platform::*;
pub use resources::*;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub score: Score,
    pub playtime: f64,
}

/// Run the input -> update -> draw loop until the keys ask to quit.
pub fn run<K, C, R>(game: &mut Match, keys: &mut K, clock: &mut C, renderer: &mut R) -> RunSummary
where
    K: KeySource + ?Sized,
    C: FrameClock + ?Sized,
    R: Renderer + ?Sized,
{
    let mut ticks = 0;
    loop {
        let input = keys.poll_keys();
        if game.input_move(&input) == Control::Quit {
            break;
        }
        game.update(clock);
        render::draw(game, renderer, clock.fps());
        ticks += 1;
    }

    let summary = RunSummary {
        ticks,
        score: game.score,
        playtime: game.elapsed_playtime(),
    };
    tracing::info!(
        ticks,
        left = summary.score.left,
        right = summary.score.right,
        playtime = summary.playtime,
        "match finished"
    );
    summary
}
