//! Command-line entry point: render one star-system file to a PNG map.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p conquest-mapper -- systems/sol.ron --day 30`.

use std::path::{Path, PathBuf};

use clap::Parser;
use conquest_config::{CliArgs, Config, ConfigError, default_config_dir};
use conquest_map::{MapError, MapRenderer, RenderOptions};
use conquest_system::{StarSystem, SystemError};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    System(#[from] SystemError),
    #[error(transparent)]
    Map(#[from] MapError),
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let config = match load_config(&config_dir, &args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    conquest_log::init_logging(
        Some(&config_dir.join("logs")),
        config.debug.file_logging,
        Some(&config),
    );

    match run(&args, &config) {
        Ok(path) => info!("Map written to {}", path.display()),
        Err(e) => {
            error!("{e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}

fn load_config(config_dir: &Path, args: &CliArgs) -> Result<Config, ConfigError> {
    let mut config = Config::load_or_create(config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

fn run(args: &CliArgs, config: &Config) -> Result<PathBuf, AppError> {
    let renderer = MapRenderer::from_config(&config.map)?;
    if args.init_template {
        renderer.write_blank_template()?;
    }

    let system = StarSystem::load(&args.system)?;
    let options = RenderOptions {
        day: args.day,
        show_stations: args.show_stations,
        show_types: args.show_types,
    };
    info!(
        "Rendering {:?} at day {} ({} planets, {} belts)",
        system.name(),
        options.day,
        system.planets().len(),
        system.belts().len()
    );

    Ok(renderer.create_system_map(&args.output_file_name(), &system, &options)?)
}
