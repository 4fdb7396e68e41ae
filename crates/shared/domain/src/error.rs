//! Domain-level errors.
//!
//! A lookup miss and a credential mismatch are the only ways a domain
//! operation can fail. They are independent of infrastructure concerns.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials did not match
    #[error("Unauthorized")]
    Unauthorized,
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }
}
