//! Error handling types for the lexsentry core and its collaborators.
//!
//! Per spec §7, classification anomalies are never errors — they are data,
//! recorded as categories. `LexError` exists only for the catastrophic,
//! non-classification failure modes: I/O and malformed configuration that
//! cannot be clamped away.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// Reading the input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was structurally invalid and could not be
    /// clamped or ignored (out-of-range numeric knobs are handled via
    /// `Config::build`'s warnings, not this variant).
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Writing the final report failed.
    #[error("failed to write report: {message}")]
    Report { message: String },
}

pub type LexResult<T> = Result<T, LexError>;

impl LexError {
    pub fn config(message: impl Into<String>) -> Self {
        LexError::Config {
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        LexError::Report {
            message: message.into(),
        }
    }
}
