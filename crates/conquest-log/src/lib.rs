//! Logging setup for the system mapper.
//!
//! Library crates emit records through the `log` facade; this crate installs a
//! `tracing-subscriber` registry that picks them up, prints them to the console
//! and optionally mirrors them as JSON into a log file.

use std::path::{Path, PathBuf};

use conquest_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "mapper.log";

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over the config's `debug.log_level`. When
/// `file_logging` is set and `log_dir` is usable, records are also written as
/// JSON to `mapper.log` inside it.
///
/// # Examples
///
/// ```no_run
/// use conquest_config::Config;
/// use conquest_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, file_logging: bool, config: Option<&Config>) {
    let filter_str = filter_string(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if file_logging
        && let Some(log_file) = log_dir.and_then(open_log_file)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!("JSON logging enabled");
        return;
    }

    subscriber.init();
}

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE)
}

fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

fn open_log_file(log_dir: &Path) -> Option<std::fs::File> {
    std::fs::create_dir_all(log_dir).ok()?;
    std::fs::File::create(log_file_path(log_dir)).ok()
}
