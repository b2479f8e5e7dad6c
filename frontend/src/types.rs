//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **List Types** - Rows rendered by the client lists
//! - **Error Types** - Frontend error handling

use clientcard::{Client, ClientCategory, ClientError};
use std::fmt;

// =============================================================================
// List Types
// =============================================================================

/// One client as placed in a category list.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    /// Client record
    pub client: Client,
    /// List the client belongs to
    pub category: ClientCategory,
}

impl ClientRow {
    /// Key for keyed list rendering. Covers the whole record, so any change
    /// to the client re-creates its card.
    pub fn render_key(&self) -> (String, String) {
        let snapshot = serde_json::to_string(&self.client).unwrap_or_default();
        (self.client.id.clone(), snapshot)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Client data could not be read.
    Data(String),
    /// Client data was read but breaks an invariant.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Data(msg) => write!(f, "Data error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidAmount { .. } => AppError::Validation(err.to_string()),
            _ => AppError::Data(err.to_string()),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
