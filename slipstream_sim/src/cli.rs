// slipstream_sim/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Slipstream: a headless kart-handling simulation harness.
///
/// This struct defines the command-line arguments for any binary that runs
/// the slipstream simulation library.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/00_time_trial.toml")]
    pub scenario: PathBuf,

    /// The prefab catalog directory (tracks, kart tuning tables).
    #[arg(long, default_value = "assets/catalog")]
    pub catalog: PathBuf,
}
