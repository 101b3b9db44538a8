use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Sends log output to stderr.
pub(crate) fn init_stderr(level: LevelFilter) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(level)
        .try_init()?;
    Ok(())
}

/// Sends log output to a freshly truncated file.
///
/// Used while the terminal UI owns the screen, where stderr output would
/// corrupt the display.
pub(crate) fn init_file(level: LevelFilter, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level)
        .try_init()?;
    Ok(())
}
