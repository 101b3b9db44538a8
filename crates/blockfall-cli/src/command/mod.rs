use std::time::Duration;

use clap::{Parser, Subcommand};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

/// Gravity period used when none is given.
const DEFAULT_GRAVITY_MS: u64 = 300;

const fn gravity_period(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Play random inputs without a terminal UI and print a summary
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_play_options() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "play",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
            "--gravity-ms",
            "150",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(arg.gravity_ms, 150);
        assert_eq!(
            arg.seed.unwrap().to_string(),
            "000102030405060708090a0b0c0d0e0f"
        );
    }

    #[test]
    fn test_reject_bad_seed() {
        let result = CommandArgs::try_parse_from(["blockfall", "simulate", "--seed", "xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let args = CommandArgs::try_parse_from(["blockfall", "simulate"]).unwrap();
        let Some(Mode::Simulate(arg)) = args.mode else {
            panic!("expected simulate mode");
        };
        assert_eq!(arg.ticks, 10_000);
        assert!(!arg.json);
        assert!(arg.seed.is_none());
        assert!(arg.shapes.is_none());
    }

    #[test]
    fn test_parse_simulate_shapes() {
        let args =
            CommandArgs::try_parse_from(["blockfall", "simulate", "--shapes", "IJost"]).unwrap();
        let Some(Mode::Simulate(arg)) = args.mode else {
            panic!("expected simulate mode");
        };
        assert_eq!(arg.shapes.unwrap().to_string(), "IJOST");

        let result = CommandArgs::try_parse_from(["blockfall", "simulate", "--shapes", "IZ"]);
        assert!(result.is_err());
    }
}
