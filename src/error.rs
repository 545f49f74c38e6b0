//! Error types for the Litsieve library.
//!
//! All errors are represented by the [`LitsieveError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use litsieve::error::{LitsieveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LitsieveError::configuration("at least one keyword group is required"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Litsieve operations.
///
/// This enum represents all possible errors that can occur in the Litsieve
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum LitsieveError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Keyword-group configuration errors. Fatal: no splits can be
    /// generated until the configuration is fixed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Search provider failures that are fatal for the run. Note that a
    /// provider rejecting a single query as over-broad is NOT fatal and
    /// never surfaces as this variant.
    #[error("Provider error: {0}")]
    Provider(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LitsieveError.
pub type Result<T> = std::result::Result<T, LitsieveError>;

impl LitsieveError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        LitsieveError::Configuration(msg.into())
    }

    /// Create a new provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        LitsieveError::Provider(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LitsieveError::Other(msg.into())
    }
}
