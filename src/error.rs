//! Crate error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by checked evaluation, settings loading and trace sampling
#[derive(Debug, Error)]
pub enum PuckError {
    /// Checked position evaluated with `omega == 0`; the closed form divides by it
    #[error("omega must be nonzero (the solution divides by the rotation rate)")]
    ZeroOmega,

    /// Settings failed validation; the message names the offending field
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings text is not valid JSON for [`crate::Settings`]
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
