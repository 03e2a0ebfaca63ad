//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;

use gestio_core::{Capability, CapabilitySet, ModuleId, PermissionRecord, UserId};
use gestio_perms::PermissionMatrix;
use gestio_store::{DocumentStore, MemoryDocumentStore, StoreError};

/// A test fixture with a matrix and a memory store.
pub struct TestFixture {
    pub matrix: PermissionMatrix,
    pub store: MemoryDocumentStore,
}

impl TestFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            matrix: PermissionMatrix::new(),
            store: MemoryDocumentStore::new(),
        }
    }

    /// Grant the four standard capabilities in the matrix.
    pub fn grant_standard(&mut self, user: &str, module: &str) {
        self.matrix
            .set_all(&UserId::from(user), &ModuleId::from(module), true);
    }

    /// Grant a single capability in the matrix.
    pub fn grant(&mut self, user: &str, module: &str, cap: Capability) {
        self.matrix
            .set_capability(&UserId::from(user), &ModuleId::from(module), cap, true);
    }

    /// Build a persisted-style record without touching the matrix.
    pub fn make_record(user: &str, modules: &[(&str, CapabilitySet)]) -> PermissionRecord {
        let mut record = PermissionRecord::new(user);
        for (module, caps) in modules {
            record = record.with_grant(*module, *caps);
        }
        record
    }

    /// Seed the store with records for the given users, all-standard on
    /// one module each.
    pub async fn seed_store(&self, users: &[&str], module: &str) {
        for user in users {
            let record =
                Self::make_record(user, &[(module, CapabilitySet::all_standard())]);
            self.store
                .put_record(&record)
                .await
                .expect("memory store never fails");
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random user identifier, for tests that need many users.
pub fn random_user_id() -> UserId {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    UserId::new(format!("user-{}", suffix.to_lowercase()))
}

/// Store whose reads work but whose writes always fail.
///
/// Useful for exercising the single pass/fail semantics of batch saves.
pub struct FailingStore {
    inner: MemoryDocumentStore,
}

impl FailingStore {
    /// Create a failing store, optionally pre-seeded.
    pub fn new() -> Self {
        Self {
            inner: MemoryDocumentStore::new(),
        }
    }

    /// The wrapped memory store, for seeding reads.
    pub fn inner(&self) -> &MemoryDocumentStore {
        &self.inner
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get_record(&self, user: &UserId) -> Result<Option<PermissionRecord>, StoreError> {
        self.inner.get_record(user).await
    }

    async fn put_record(&self, _record: &PermissionRecord) -> Result<(), StoreError> {
        Err(StoreError::WriteRejected("failing store".into()))
    }

    async fn list_users(&self) -> Result<Vec<UserId>, StoreError> {
        self.inner.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestio::{PermissionService, ServiceError};

    #[test]
    fn test_fixture_grants() {
        let mut fixture = TestFixture::new();
        fixture.grant_standard("alice", "employees");
        fixture.grant("bob", "freight", Capability::View);

        assert!(fixture.matrix.is_granted(
            &UserId::from("alice"),
            &ModuleId::from("employees"),
            Capability::Delete
        ));
        assert!(!fixture.matrix.is_granted(
            &UserId::from("bob"),
            &ModuleId::from("freight"),
            Capability::Edit
        ));
    }

    #[tokio::test]
    async fn test_seed_store() {
        let fixture = TestFixture::new();
        fixture.seed_store(&["ada", "zoe"], "employees").await;
        assert_eq!(fixture.store.len(), 2);
    }

    #[tokio::test]
    async fn test_failing_store_fails_saves_only() {
        let mut service = PermissionService::new(FailingStore::new());
        let user = UserId::from("u1");
        let module = ModuleId::from("employees");

        service.load_user(&user).await.unwrap();
        service.set_all(&user, &module, true);

        let err = service.save().await.unwrap_err();
        assert!(matches!(err, ServiceError::Persistence { .. }));
        assert!(service.matrix().is_dirty(&user));
    }

    #[test]
    fn test_random_user_ids_differ() {
        assert_ne!(random_user_id(), random_user_id());
    }
}
