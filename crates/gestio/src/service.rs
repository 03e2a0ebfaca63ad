//! The permission service: an owned matrix with explicit load/save
//! boundaries.
//!
//! The original application kept permission flags in component-local state
//! synced ad-hoc to the database. The service replaces that with one
//! repository object: reads and toggles are in-memory and cannot fail,
//! persistence happens only on explicit `load`/`save` calls.

use std::collections::HashMap;
use std::sync::Arc;

use gestio_core::{Capability, CapabilitySet, ModuleId, PermissionRecord, UserId};
use gestio_perms::{AccessPolicy, AdminOverride, PermissionMatrix};
use gestio_store::DocumentStore;

use crate::error::{Result, ServiceError};

/// Configuration for the permission service.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Whether loading rejects documents that carry the same module twice.
    ///
    /// When false, duplicates are resolved last-wins, matching how the
    /// external store behaves on concurrent writes.
    pub strict_records: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            strict_records: true,
        }
    }
}

/// The main service struct.
///
/// Owns the in-memory [`PermissionMatrix`] for the current administrative
/// session and a handle to the external document store. Which users need
/// flushing is tracked by the matrix's dirty set.
pub struct PermissionService<S: DocumentStore> {
    /// The storage backend.
    store: Arc<S>,
    /// The in-memory matrix being edited.
    matrix: PermissionMatrix,
    /// Configuration.
    options: ServiceOptions,
}

impl<S: DocumentStore> PermissionService<S> {
    /// Create a service with default options.
    pub fn new(store: S) -> Self {
        Self::with_options(store, ServiceOptions::default())
    }

    /// Create a service with explicit options.
    pub fn with_options(store: S, options: ServiceOptions) -> Self {
        Self {
            store: Arc::new(store),
            matrix: PermissionMatrix::new(),
            options,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The in-memory matrix.
    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load boundary
    // ─────────────────────────────────────────────────────────────────────────

    /// Load one user's record from the store into the matrix.
    ///
    /// A missing record means all capabilities denied. Discards any unsaved
    /// changes for that user.
    pub async fn load_user(&mut self, user: &UserId) -> Result<()> {
        match self.store.get_record(user).await? {
            Some(record) => self.apply(record)?,
            None => self.matrix.apply_missing(user),
        }
        Ok(())
    }

    /// Load every known user's record, for bulk administration views.
    ///
    /// Returns the number of users loaded.
    pub async fn load_all(&mut self) -> Result<usize> {
        let users = self.store.list_users().await?;
        let count = users.len();
        for user in &users {
            self.load_user(user).await?;
        }
        tracing::info!(count, "loaded permission records");
        Ok(count)
    }

    fn apply(&mut self, record: PermissionRecord) -> Result<()> {
        let record = if self.options.strict_records {
            record
        } else {
            dedupe_last_wins(record)
        };
        self.matrix.apply_record(&record)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save boundary
    // ─────────────────────────────────────────────────────────────────────────

    /// Flush one user's record to the store, whether dirty or not.
    pub async fn save_user(&mut self, user: &UserId) -> Result<()> {
        let record = self.matrix.record_for(user);
        self.store.put_record(&record).await?;
        self.matrix.mark_clean(user);
        Ok(())
    }

    /// Flush all dirty users as a best-effort batch.
    ///
    /// Returns the number of records written. The first store failure
    /// aborts the batch: users already flushed stay clean, the failing and
    /// remaining users stay dirty so a retry saves exactly them.
    pub async fn save(&mut self) -> Result<usize> {
        let dirty: Vec<UserId> = self.matrix.dirty_users().cloned().collect();
        let mut written = 0;

        for user in dirty {
            let record = self.matrix.record_for(&user);
            if let Err(source) = self.store.put_record(&record).await {
                tracing::warn!(user = %user, error = %source, "batch save aborted");
                return Err(ServiceError::Persistence { user, source });
            }
            self.matrix.mark_clean(&user);
            written += 1;
        }

        tracing::info!(written, "saved permission records");
        Ok(written)
    }

    /// Whether any user has unsaved changes.
    pub fn has_unsaved_changes(&self) -> bool {
        self.matrix.dirty_users().next().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-memory reads and mutations (cannot fail)
    // ─────────────────────────────────────────────────────────────────────────

    /// The capabilities a user holds on a module.
    pub fn capabilities(&self, user: &UserId, module: &ModuleId) -> CapabilitySet {
        self.matrix.get(user, module)
    }

    /// Convenience single-capability read.
    pub fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool {
        self.matrix.is_granted(user, module, cap)
    }

    /// Toggle exactly one capability.
    pub fn set_capability(&mut self, user: &UserId, module: &ModuleId, cap: Capability, value: bool) {
        self.matrix.set_capability(user, module, cap, value);
    }

    /// Set the four standard capabilities at once.
    pub fn set_all(&mut self, user: &UserId, module: &ModuleId, value: bool) {
        self.matrix.set_all(user, module, value);
    }

    /// An access policy over the matrix with an administrator override.
    ///
    /// The predicate is externally owned; when it returns true every check
    /// passes regardless of stored entries.
    pub fn policy_with_admin<F>(&self, is_admin: F) -> AdminOverride<&PermissionMatrix, F>
    where
        F: Fn(&UserId) -> bool,
    {
        AdminOverride::new(&self.matrix, is_admin)
    }
}

/// Resolve duplicate modules in a record, last entry winning.
fn dedupe_last_wins(record: PermissionRecord) -> PermissionRecord {
    let mut by_module: HashMap<ModuleId, usize> = HashMap::new();
    let mut grants = Vec::new();

    for grant in record.grants {
        match by_module.get(&grant.module_id) {
            Some(&i) => grants[i] = grant,
            None => {
                by_module.insert(grant.module_id.clone(), grants.len());
                grants.push(grant);
            }
        }
    }

    PermissionRecord {
        user_id: record.user_id,
        grants,
    }
}
