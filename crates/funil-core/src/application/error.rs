//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the port
//! boundaries, not business logic. Business logic errors are `DomainError`
//! from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The network layer failed before a response was produced.
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    /// The backend answered with a non-success status.
    #[error("API request failed ({status}): {message}")]
    ApiFailure { status: u16, message: String },

    /// The requested record does not exist.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The backend's response could not be decoded.
    #[error("Malformed response from backend: {reason}")]
    MalformedResponse { reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Transport { reason } => vec![
                format!("Network failure: {}", reason),
                "Check your connection and the configured API URL".into(),
                "Try again in a moment".into(),
            ],
            Self::ApiFailure { status, .. } => vec![
                format!("The backend answered with status {}", status),
                "Check the request details and your access token".into(),
            ],
            Self::NotFound { resource, id } => vec![
                format!("No {} with id {} exists", resource, id),
                "List the resource to see valid ids".into(),
            ],
            Self::MalformedResponse { .. } => vec![
                "The backend returned an unexpected payload".into(),
                "Check that the configured URL points at a Funil API".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } => ErrorCategory::Unavailable,
            Self::ApiFailure { .. } => ErrorCategory::Internal,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::MalformedResponse { .. } => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
