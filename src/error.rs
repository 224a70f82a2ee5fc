//! Error types for telemetry conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing or converting telemetry
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{stream} stream has {got} samples, need at least {needed}")]
    TooFewSamples {
        stream: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("degenerate timing: {0}")]
    DegenerateTiming(String),
}
