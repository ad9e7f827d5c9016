//! Shared primitives for all Rust crates in Coursegate.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;
/// Identifier canonicalization for the mixed-typed record store.
pub mod id;

use thiserror::Error;

pub use auth::UserIdentity;
pub use id::{CanonicalKey, ResourceId};

/// Result type used across Coursegate crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// Every error is recoverable at the screen level; none is process-fatal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested course or lesson does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Role check failed for the current user.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Instructor roster already contains the candidate.
    #[error("duplicate instructor: {0}")]
    DuplicateInstructor(String),

    /// Round-trip to the record store failed; no local mutation was applied.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl AppError {
    /// Returns whether the error is terminal for the current screen.
    ///
    /// A missing record is treated the same as a failed role check: the
    /// screen navigates away instead of rendering.
    #[must_use]
    pub fn is_screen_fatal(&self) -> bool {
        matches!(self, Self::AccessDenied(_) | Self::NotFound(_))
    }
}
