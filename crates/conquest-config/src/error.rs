//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while locating, loading or persisting `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The OS exposes no configuration directory and none was given.
    #[error("no configuration directory available; pass --config")]
    NoConfigDir,

    /// Reading the config file failed.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file (or creating its directory) failed.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Serializing the config to RON failed.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
