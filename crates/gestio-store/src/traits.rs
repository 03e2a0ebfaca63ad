//! DocumentStore trait: the abstract interface for record persistence.
//!
//! This trait allows the permission service to be storage-agnostic.
//! Implementations include SQLite (durable) and in-memory (for tests).

use async_trait::async_trait;
use gestio_core::{PermissionRecord, UserId};

use crate::error::Result;

/// The DocumentStore trait: async interface for per-user permission records.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the
/// runtime.
///
/// # Design Notes
///
/// - **Whole-document writes**: `put_record` replaces the user's document;
///   last write wins.
/// - **Absence is meaningful**: a missing record means all capabilities
///   denied, so `get_record` returns `Ok(None)` rather than an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the permission record for a user, if one was ever saved.
    async fn get_record(&self, user: &UserId) -> Result<Option<PermissionRecord>>;

    /// Write a user's permission record, replacing any previous document.
    async fn put_record(&self, record: &PermissionRecord) -> Result<()>;

    /// Enumerate all users with a stored record, for bulk administration.
    async fn list_users(&self) -> Result<Vec<UserId>>;
}

/// Extension trait for common store patterns.
pub trait StoreExt: DocumentStore {
    /// Write several records as a best-effort batch.
    ///
    /// Stops at the first failure and returns it; records already written
    /// stay written. The store's own atomicity (or lack of it) determines
    /// the outcome, so callers treat a batch as pass/fail only.
    fn put_records<'a>(
        &'a self,
        records: &'a [PermissionRecord],
    ) -> impl std::future::Future<Output = Result<()>> + Send + 'a;
}

impl<S: DocumentStore + ?Sized> StoreExt for S {
    async fn put_records<'a>(&'a self, records: &'a [PermissionRecord]) -> Result<()> {
        for record in records {
            self.put_record(record).await?;
        }
        Ok(())
    }
}
