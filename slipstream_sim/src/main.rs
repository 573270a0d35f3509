// slipstream_sim/src/main.rs

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use slipstream_sim::cli::Cli;
use slipstream_sim::config::{load_scenario, PrefabCatalog};
use slipstream_sim::runner::run_scenario;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match PrefabCatalog::load_from_dir(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!(prefabs = catalog.len(), "catalog ready");

    let config = match load_scenario(&cli.scenario) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_scenario(&config, &catalog) {
        error!("{e}");
        std::process::exit(1);
    }
}
