use std::time::Duration;

use blockfall_engine::{
    GameSession, GameStats, InputAction, SequenceShapes, SessionState, ShapeSeed, ShapeSource,
    TickEvent,
};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;

use crate::{
    command::{DEFAULT_GRAVITY_MS, gravity_period},
    logging,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Seed for shapes and inputs (32 hex digits); random if omitted
    #[clap(long)]
    pub(super) seed: Option<ShapeSeed>,
    /// Replay these shape letters (e.g. `IJOST`) instead of random shapes
    #[clap(long)]
    pub(super) shapes: Option<SequenceShapes>,
    /// Maximum number of gravity ticks to run
    #[clap(long, default_value_t = 10_000)]
    pub(super) ticks: u64,
    /// Print the summary as JSON
    #[clap(long)]
    pub(super) json: bool,
    /// Minimum level of log messages written to stderr
    #[clap(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SimulationSummary {
    seed: ShapeSeed,
    #[serde(skip_serializing_if = "Option::is_none")]
    shapes: Option<String>,
    ticks: u64,
    state: SessionState,
    stats: GameStats,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        seed,
        shapes,
        ticks,
        json,
        log_level,
    } = arg;

    logging::init_stderr(*log_level)?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(%seed, ticks, "starting simulation");
    let summary = simulate(
        seed,
        shapes.clone(),
        *ticks,
        gravity_period(DEFAULT_GRAVITY_MS),
    );

    if *json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let stats = &summary.stats;
        println!("seed:    {}", summary.seed);
        if let Some(shapes) = &summary.shapes {
            println!("shapes:  {shapes}");
        }
        println!("ticks:   {}", summary.ticks);
        println!("state:   {:?}", summary.state);
        println!("score:   {}", stats.score());
        println!("lines:   {}", stats.total_cleared_lines());
        println!("pieces:  {}", stats.completed_pieces());
        println!("time:    {}s", stats.elapsed_seconds());
    }
    Ok(())
}

/// Plays random inputs against a seeded session.
///
/// Shapes come from `shapes` when given and from `seed` otherwise. The input
/// stream is always drawn from `seed`. Before every tick up to two random
/// actions are tried. Each tick is credited with one gravity `period` of play
/// time. Stops early on game over.
pub(crate) fn simulate(
    seed: ShapeSeed,
    shapes: Option<SequenceShapes>,
    max_ticks: u64,
    period: Duration,
) -> SimulationSummary {
    let rng = Pcg32::from_seed(seed.to_bytes());
    let (label, (ticks, state, stats)) = match shapes {
        Some(shapes) => (
            Some(shapes.to_string()),
            play_random(GameSession::with_shape_source(shapes), rng, max_ticks, period),
        ),
        None => (
            None,
            play_random(GameSession::with_seed(seed), rng, max_ticks, period),
        ),
    };

    SimulationSummary {
        seed,
        shapes: label,
        ticks,
        state,
        stats,
    }
}

fn play_random<S>(
    mut session: GameSession<S>,
    mut rng: Pcg32,
    max_ticks: u64,
    period: Duration,
) -> (u64, SessionState, GameStats)
where
    S: ShapeSource,
{
    let mut ticks = 0;
    while ticks < max_ticks {
        for _ in 0..rng.random_range(0..=2) {
            let action = InputAction::ALL[rng.random_range(0..InputAction::ALL.len())];
            session.handle_input(action);
        }
        let event = session.tick();
        session.advance_time(period);
        ticks += 1;
        if event == Some(TickEvent::GameOver) {
            break;
        }
    }
    (ticks, session.session_state(), session.stats().clone())
}
