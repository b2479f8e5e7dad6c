//! Error types for the client card domain.
//!
//! The card itself never fails: missing or malformed data renders as a
//! placeholder. These errors only surface when loading or checking client
//! records before they reach the view.
//!
//! - [`ClientError`] - client record and category errors

use thiserror::Error;

// =============================================================================
// Client Errors
// =============================================================================

/// Errors while reading or checking client records.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Category string is not one of `building`, `deposit`, `built`.
    #[error("Unknown client category: '{0}'")]
    UnknownCategory(String),

    /// Total amount is negative or not a finite number.
    #[error("Invalid total amount for client '{client}': {amount}")]
    InvalidAmount { client: String, amount: f64 },

    /// Client JSON could not be decoded.
    #[error("Invalid client JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
