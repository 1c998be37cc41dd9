//! Terminal host for the Pong core.
//!
//! Supplies a frame clock, a key source and a renderer, then hands them to
//! `game_core::run`.

mod ascii;
mod clock;
mod keyboard;
mod pilot;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{run, Config, FixedClock, FrameClock, KeySource, Match, Renderer};

use crate::ascii::{AsciiRenderer, NullRenderer};
use crate::clock::SystemClock;
use crate::keyboard::TerminalKeys;
use crate::pilot::{DemoPilot, TickLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderMode {
    /// Draw the field as text on stdout
    Ascii,
    /// Draw nothing; only logs
    None,
}

#[derive(Debug, Parser)]
#[command(name = "pong")]
#[command(about = "Pong against a tracking CPU paddle", long_about = None)]
struct Cli {
    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serve angles (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Quit after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Let the demo pilot play instead of reading the keyboard
    #[arg(long, default_value = "false")]
    demo: bool,

    /// Step with a fixed tick period instead of sleeping on the wall clock
    #[arg(long, default_value = "false")]
    fast: bool,

    #[arg(long, value_enum, default_value_t = RenderMode::Ascii)]
    render: RenderMode,

    /// Terminal columns used for the field
    #[arg(long, default_value_t = 96)]
    cols: usize,

    /// Terminal rows used for the field
    #[arg(long, default_value_t = 27)]
    rows: usize,

    /// Ticks the demo pilot holds each direction
    #[arg(long, default_value_t = 45)]
    sweep_ticks: u64,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the renderer
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut game = Match::new(config, seed).context("building match")?;
    tracing::info!(
        seed,
        demo = cli.demo,
        fast = cli.fast,
        render = ?cli.render,
        "starting match"
    );

    let source: Box<dyn KeySource> = if cli.demo {
        Box::new(DemoPilot::new(cli.sweep_ticks))
    } else {
        Box::new(TerminalKeys::new().context("entering raw mode")?)
    };
    let mut keys = TickLimit::new(source, cli.max_ticks);
    let mut clock: Box<dyn FrameClock> = if cli.fast {
        Box::new(FixedClock::new())
    } else {
        Box::new(SystemClock::new())
    };
    let mut renderer: Box<dyn Renderer> = match cli.render {
        RenderMode::Ascii => Box::new(AsciiRenderer::new(
            game.field,
            cli.cols,
            cli.rows,
            io::stdout(),
        )),
        RenderMode::None => Box::new(NullRenderer),
    };

    let summary = run(&mut game, &mut keys, clock.as_mut(), renderer.as_mut());
    // leave raw mode before the last log line
    drop(keys);
    tracing::info!(
        ticks = summary.ticks,
        left = summary.score.left,
        right = summary.score.right,
        "bye"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pong"]);
        assert_eq!(cli.render, RenderMode::Ascii);
        assert!(!cli.fast);
        assert!(!cli.demo);
        assert_eq!((cli.cols, cli.rows), (96, 27));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "pong",
            "--demo",
            "--fast",
            "--render",
            "none",
            "--seed",
            "9",
            "--max-ticks",
            "100",
        ]);
        assert!(cli.fast);
        assert!(cli.demo);
        assert_eq!(cli.render, RenderMode::None);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.max_ticks, Some(100));
    }

    #[test]
    fn test_default_config_without_file() {
        assert_eq!(load_config(None).unwrap(), Config::new());
    }

    #[test]
    fn test_partial_toml_overrides_named_fields() {
        let config: Config = toml::from_str("tick_rate = 60.0\nball_speed = 0.6\n").unwrap();
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.ball_speed, 0.6);
        assert_eq!(config.field_width, Config::new().field_width);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/pong.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn test_headless_run_to_max_ticks() {
        let mut game = Match::new(Config::new(), 3).unwrap();
        let mut keys = TickLimit::new(Box::new(DemoPilot::new(20)), Some(200));
        let summary = run(&mut game, &mut keys, &mut FixedClock::new(), &mut NullRenderer);
        assert_eq!(summary.ticks, 200);
    }
}
