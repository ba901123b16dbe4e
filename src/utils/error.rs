//! Error types for playerkit
//!
//! Two kinds of error live here. [`ErrorRecord`] is the plain
//! domain/code/message value that player components hand to their callers,
//! built with [`make_error`]. [`PlayerError`] is this crate's own failure
//! type, used with thiserror for definitions and anyhow in the binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain used when a [`PlayerError`] is reported as an [`ErrorRecord`]
pub const PLAYERKIT_DOMAIN: &str = "playerkit";

/// A domain-scoped error value
///
/// The domain names the subsystem that raised the error so that codes from
/// different subsystems do not collide. No combination of fields is
/// rejected: the record stores what it is given.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{domain} error {code}: {message}")]
pub struct ErrorRecord {
    domain: String,
    code: i64,
    message: String,
}

impl ErrorRecord {
    /// Subsystem namespace, e.g. `"net.example"`
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Numeric code, meaningful only within [`ErrorRecord::domain`]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build an error record from its three fields
pub fn make_error<D, M>(domain: D, code: i64, message: M) -> ErrorRecord
where
    D: Into<String>,
    M: Into<String>,
{
    ErrorRecord {
        domain: domain.into(),
        code,
        message: message.into(),
    }
}

/// Return `Err` carrying a freshly built [`ErrorRecord`]
pub fn fail<T, D, M>(domain: D, code: i64, message: M) -> std::result::Result<T, ErrorRecord>
where
    D: Into<String>,
    M: Into<String>,
{
    Err(make_error(domain, code, message))
}

/// Main error type for playerkit
#[derive(Error, Debug)]
pub enum PlayerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Locale negotiation and resource loading errors
    #[error("Locale error: {0}")]
    Locale(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

impl PlayerError {
    /// Create an invalid input error from string
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        PlayerError::InvalidInput(msg.into())
    }

    /// Stable code of this variant within [`PLAYERKIT_DOMAIN`]
    pub fn code(&self) -> i64 {
        match self {
            PlayerError::Config(_) => 1,
            PlayerError::Locale(_) => 2,
            PlayerError::InvalidInput(_) => 3,
            PlayerError::NotFound(_) => 4,
            PlayerError::FileIO(_) => 5,
        }
    }

    /// Report this error as a plain record
    pub fn to_record(&self) -> ErrorRecord {
        make_error(PLAYERKIT_DOMAIN, self.code(), self.to_string())
    }
}

impl From<PlayerError> for ErrorRecord {
    fn from(err: PlayerError) -> Self {
        err.to_record()
    }
}

/// Convenience type alias for Results in playerkit
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Extension trait for converting other errors to PlayerError
pub trait IntoPlayerError<T> {
    /// Convert this error into a PlayerError with the given context
    fn config_err(self, context: &str) -> Result<T>;
    fn locale_err(self, context: &str) -> Result<T>;
    fn input_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Config(format!("{}: {}", context, e)))
    }

    fn locale_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Locale(format!("{}: {}", context, e)))
    }

    fn input_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::InvalidInput(format!("{}: {}", context, e)))
    }
}
