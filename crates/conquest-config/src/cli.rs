//! Command-line argument parsing for the system mapper.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render a star-system map to PNG.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "conquest-mapper", about = "Render a star-system map to PNG")]
pub struct CliArgs {
    /// RON file describing the star system.
    pub system: PathBuf,

    /// Output file name, written inside the data directory.
    #[arg(long, short)]
    pub output: Option<String>,

    /// Simulated days since the start of the campaign.
    #[arg(long, default_value_t = 0)]
    pub day: u32,

    /// Label stations instead of belts.
    #[arg(long)]
    pub show_stations: bool,

    /// Color bodies by subtype instead of by controlling team.
    #[arg(long)]
    pub show_types: bool,

    /// Write a blank canvas template to the data directory if none exists.
    #[arg(long)]
    pub init_template: bool,

    /// Data directory holding the template and rendered maps.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Canvas side length in pixels.
    #[arg(long)]
    pub canvas_length: Option<u32>,

    /// Map scale in pixels per AU.
    #[arg(long)]
    pub pixels_per_au: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Output file name: `--output`, else the system file's stem with `.png`.
    pub fn output_file_name(&self) -> String {
        if let Some(ref name) = self.output {
            return name.clone();
        }
        let stem = self
            .system
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "system".to_string());
        format!("{stem}.png")
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.data_dir {
            self.map.data_dir = dir.clone();
        }
        if let Some(length) = args.canvas_length {
            self.map.canvas_length = length;
        }
        if let Some(scale) = args.pixels_per_au {
            self.map.pixels_per_au = scale;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
