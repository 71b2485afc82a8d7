//! Error handling for stconv
//!
//! Fatal errors stop the run; everything else is reported against a single
//! file and the batch carries on.

use thiserror::Error;

/// Result type alias for stconv operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    // Usage Errors
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Invalid sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    // Per-file Errors
    #[error("Failed to read {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: hound::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::InputNotFound { .. } => "INPUT_NOT_FOUND",
            ConvertError::NotADirectory { .. } => "NOT_A_DIRECTORY",
            ConvertError::InvalidSampleRate { .. } => "INVALID_SAMPLE_RATE",
            ConvertError::ReadFailed { .. } => "READ_FAILED",
            ConvertError::WriteFailed { .. } => "WRITE_FAILED",
            ConvertError::Io(_) => "IO_ERROR",
            ConvertError::Wav(_) => "WAV_ERROR",
            ConvertError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Usage errors end the run. Anything else only skips the file at hand.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConvertError::InputNotFound { .. }
                | ConvertError::NotADirectory { .. }
                | ConvertError::InvalidSampleRate { .. }
        )
    }
}
