//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
///
/// Creation-time validation is not represented here: it is reported as a
/// [`crate::validate::ValidationReport`] value, never raised as an error.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}
