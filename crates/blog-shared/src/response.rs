//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of what went wrong.
    pub error: String,

    /// The HTTP status code.
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(400, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(404, error)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(405, "Method not allowed")
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal server error")
    }
}
