//! Errors raised while building, loading or saving star systems.

use std::path::PathBuf;

/// Errors produced by the star-system data model.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// A belt whose near edge is not strictly inside its far edge.
    #[error("belt {name:?} has near edge {near} AU not inside far edge {far} AU")]
    InvalidBelt { name: String, near: f32, far: f32 },

    /// Two bodies in one system share a name.
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),

    /// Reading a system file failed.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a system file failed.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid RON system description.
    #[error("failed to parse system file: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Serializing a system to RON failed.
    #[error("failed to serialize system: {0}")]
    SerializeError(#[source] ron::Error),
}
