//! Configuration for the conquest system mapper.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MapConfig, default_config_dir};
pub use error::ConfigError;
