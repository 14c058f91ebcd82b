//! # Effects Error Types
//!
//! Only configuration can fail. Once an emitter exists, emitting and
//! advancing are infallible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the effects crate.
#[derive(Error, Debug)]
pub enum EffectsError {
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

    /// Built-in presets could not be laid out as TOML for merging.
    #[error("failed to prepare default presets: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// A burst must spawn at least one particle.
    #[error("burst {preset}: particle count must be non-zero")]
    EmptyBurst {
        /// Preset name.
        preset: String,
    },

    /// A `min`/`max` pair is inverted.
    #[error("burst {preset}: {field} range is inverted ({min} > {max})")]
    InvertedRange {
        /// Preset name.
        preset: String,
        /// Range name.
        field: &'static str,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// A value exceeds what a burst can sensibly use.
    #[error("burst {preset}: {field} must be at most {max}, got {value}")]
    OutOfBounds {
        /// Preset name.
        preset: String,
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f32,
        /// Upper bound.
        max: f32,
    },

    /// A value is negative, NaN or infinite.
    #[error("burst {preset}: {field} must be finite and non-negative, got {value}")]
    InvalidValue {
        /// Preset name.
        preset: String,
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}

/// Result type for effects operations.
pub type EffectsResult<T> = Result<T, EffectsError>;
