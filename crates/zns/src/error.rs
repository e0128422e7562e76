//! ZNS Error Types
//!
//! This module provides ZNS-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::DomainId;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// ZNS-specific result type alias
pub type ZnsResult<T> = Result<T, ZnsError>;

/// ZNS-specific error variants
///
/// Metadata fetching has no variant here: it is fail-soft and surfaces as
/// "no metadata" instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZnsError {
    /// Caller supplied a malformed name, identifier or pattern
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider has no record for the identifier
    #[error("Domain not found: {0}")]
    DomainNotFound(DomainId),

    /// Naming provider failed (listing, lookup or search)
    #[error("Naming provider error: {0}")]
    Provider(String),

    /// Configuration value is malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ZnsError {
    /// Wrap any provider-side failure
    pub fn provider(err: impl std::fmt::Display) -> Self {
        ZnsError::Provider(err.to_string())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZnsError::InvalidInput(_) => ErrorKind::InvalidInput,
            ZnsError::DomainNotFound(_) => ErrorKind::NotFound,
            ZnsError::Provider(_) => ErrorKind::Provider,
            ZnsError::Config(_) => ErrorKind::Configuration,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ZnsError::Provider(msg) => {
                tracing::error!(message = %msg, "Naming provider error");
            }
            ZnsError::InvalidInput(msg) | ZnsError::Config(msg) => {
                tracing::warn!(message = %msg, "ZNS rejected input");
            }
            ZnsError::DomainNotFound(id) => {
                tracing::debug!(domain_id = %id, "Domain not found");
            }
        }
    }
}

impl From<ZnsError> for AppError {
    fn from(err: ZnsError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}

impl From<kernel::DomainIdError> for ZnsError {
    fn from(err: kernel::DomainIdError) -> Self {
        ZnsError::InvalidInput(err.to_string())
    }
}
