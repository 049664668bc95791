//! Errors surfaced by a render call.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a render. No output file is written when one occurs.
#[derive(Debug, Error)]
pub enum MapError {
    /// Canvas length or scale of zero.
    #[error("invalid map layout: {0}")]
    InvalidLayout(String),

    /// The canvas template could not be read or decoded.
    #[error("failed to load canvas template {}: {source}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The template is not the configured square size.
    #[error("canvas template is {width}x{height}, expected {expected}x{expected}")]
    TemplateSize {
        expected: u32,
        width: u32,
        height: u32,
    },

    /// The rendered map could not be encoded or written.
    #[error("failed to save map {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The data folder could not be created.
    #[error("failed to create data folder {}: {source}", path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
