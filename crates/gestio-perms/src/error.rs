//! Error types for the permissions module.

use thiserror::Error;

/// Errors that can occur while applying records to the matrix.
///
/// In-memory reads and toggles never fail; only record ingestion can, when
/// a document violates the `(user, module)` uniqueness invariant.
#[derive(Debug, Error)]
pub enum PermsError {
    /// A record carried the same module twice.
    #[error("core error: {0}")]
    Core(#[from] gestio_core::CoreError),
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
