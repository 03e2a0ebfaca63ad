//! Error types for the Gestio service layer.

use gestio_core::UserId;
use gestio_perms::PermsError;
use gestio_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage error outside a batch save.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Permission record error (invariant violation in a loaded document).
    #[error("permission error: {0}")]
    Permission(#[from] PermsError),

    /// A batch save failed while flushing one user's record.
    ///
    /// Users flushed before the failure stay saved; the failing and
    /// remaining users stay dirty for retry. Surfaced to the caller as a
    /// single pass/fail result.
    #[error("persistence failure while saving user {user}: {source}")]
    Persistence {
        user: UserId,
        #[source]
        source: StoreError,
    },
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
