//! # UI Error Types
//!
//! Everything here comes from configuration or host misuse. Event handling
//! itself never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the UI crate.
#[derive(Error, Debug)]
pub enum UiError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds values that cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Element preset name is not registered.
    #[error("unknown element preset: {0}")]
    UnknownPreset(String),

    /// Showcase was created without faces.
    #[error("showcase needs at least one face")]
    NoFaces,

    /// Showcase face index out of range.
    #[error("face {index} out of range: showcase has {faces} faces")]
    FaceOutOfRange {
        /// Requested face.
        index: usize,
        /// Number of faces.
        faces: usize,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
