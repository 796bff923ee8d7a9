//! WOPR terminal entry point: Global Thermonuclear War on stdin/stdout.
//!
//! Logs go to stderr so animation frames on stdout stay clean.
//! `RUST_LOG=wopr=debug` shows wave and sound detail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wopr_app::io::{LogSound, StdinSource, StdoutSink, ThreadPacer};
use wopr_app::GtwController;
use wopr_core::config::GameConfig;
use wopr_core::enums::DisplaySurface;
use wopr_core::state::GameResult;

/// Shall we play a game?
#[derive(Parser, Debug)]
#[command(name = "wopr")]
#[command(about = "Play Global Thermonuclear War against the WOPR")]
struct Args {
    /// Random seed for strike rolls (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip all frame delays
    #[arg(long)]
    fast: bool,

    /// Escape output for a markup-interpreting display
    #[arg(long)]
    markup: bool,

    /// Print the game result as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,wopr=info")),
        )
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(seed = config.seed, "WOPR starting");

    let mut controller = GtwController::new(config, StdoutSink::new(), StdinSource)
        .with_sound(LogSound)
        .with_pacer(ThreadPacer);
    let result = controller.play();

    if args.json {
        if let Err(e) = print_json(&result) {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    }
    if result.trigger_follow_on {
        tracing::info!("follow-on sequence requested");
    }
    ExitCode::SUCCESS
}

fn load_config(args: &Args) -> wopr_core::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.markup {
        config.display.surface = DisplaySurface::Markup;
    }
    if args.fast {
        config = config.without_delays();
    }
    config.validate()?;
    Ok(config)
}

fn print_json(result: &GameResult) -> wopr_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
