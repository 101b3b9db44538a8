use std::path::PathBuf;

use blockfall_engine::{GameSession, ShapeSeed};
use tracing_subscriber::filter::LevelFilter;

use crate::{
    command::{DEFAULT_GRAVITY_MS, gravity_period},
    logging,
    tui::{GravityClock, Runtime},
};

use self::app::PlayApp;

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the shape sequence (32 hex digits); random if omitted
    #[clap(long)]
    pub(super) seed: Option<ShapeSeed>,
    /// Milliseconds between gravity ticks
    #[clap(long, default_value_t = DEFAULT_GRAVITY_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub(super) gravity_ms: u64,
    /// Write logs to this file; nothing is logged without it
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Minimum level of log messages
    #[clap(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: DEFAULT_GRAVITY_MS,
            log_file: None,
            log_level: LevelFilter::INFO,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        gravity_ms,
        log_file,
        log_level,
    } = arg;

    if let Some(path) = log_file {
        logging::init_file(*log_level, path)?;
    }

    let session = match seed {
        Some(seed) => GameSession::with_seed(*seed),
        None => GameSession::new(),
    };
    tracing::info!(
        seed = %session.field().shape_source().seed(),
        gravity_ms,
        "starting play session"
    );

    let mut app = PlayApp::new(session);
    Runtime::new(GravityClock::new(gravity_period(*gravity_ms))).run(&mut app)?;

    let stats = app.session().stats();
    tracing::info!(
        score = stats.score(),
        lines = stats.total_cleared_lines(),
        elapsed_seconds = stats.elapsed_seconds(),
        "play session ended"
    );
    Ok(())
}
