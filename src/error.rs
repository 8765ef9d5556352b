//! Error types for pronostico
//!
//! Provides a unified error type for all operations.
//!
//! Per-message errors (insufficient/invalid data, JSON parse failures,
//! transport failures) are local to one request/response cycle; only
//! configuration errors are fatal to the session.

use thiserror::Error;

/// Result type alias using PronosticoError
pub type Result<T> = std::result::Result<T, PronosticoError>;

/// Unified error type for pronostico operations
#[derive(Debug, Error)]
pub enum PronosticoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Read timeout expired before the server sent anything
    #[error("No response from server within {0} ms")]
    NoResponse(u64),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// Response shorter than the record's minimum size
    #[error("Insufficient data: expected at least {needed} bytes, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Structurally complete but semantically unusable response
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Legacy JSON flavor parse failure
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PronosticoError {
    /// Whether this error ends the session or only the current request
    pub fn is_fatal(&self) -> bool {
        matches!(self, PronosticoError::Config(_))
    }
}
