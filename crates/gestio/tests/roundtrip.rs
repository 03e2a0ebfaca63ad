//! End-to-end tests: edit sessions against real store backends.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use gestio::store::{DocumentStore, StoreError};
use gestio::{
    estimate, AccessPolicy, Capability, CapabilitySet, ExpeditionType, MemoryDocumentStore,
    ModuleGrant, ModuleId, PermissionRecord, PermissionService, RateRequest, ServiceError,
    ServiceOptions, SqliteDocumentStore, TransportType, UserId,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[tokio::test]
async fn edit_session_roundtrips_through_sqlite() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perms.db");

    let alice = UserId::from("alice");
    let bob = UserId::from("bob");
    let employees = ModuleId::from("employees");
    let freight = ModuleId::from("freight");

    // first session: grant and save
    {
        let store = SqliteDocumentStore::open(&path).unwrap();
        let mut service = PermissionService::new(store);

        service.set_all(&alice, &employees, true);
        service.set_capability(&alice, &freight, Capability::View, true);
        service.set_capability(&bob, &freight, Capability::Edit, true);

        let written = service.save().await.unwrap();
        assert_eq!(written, 2);
    }

    // second session: reload from disk
    {
        let store = SqliteDocumentStore::open(&path).unwrap();
        let mut service = PermissionService::new(store);
        let loaded = service.load_all().await.unwrap();
        assert_eq!(loaded, 2);

        assert!(service.is_granted(&alice, &employees, Capability::Delete));
        assert!(service.is_granted(&alice, &freight, Capability::View));
        assert!(!service.is_granted(&alice, &freight, Capability::Edit));

        // edit without view, stored as entered
        assert!(service.is_granted(&bob, &freight, Capability::Edit));
        assert!(!service.is_granted(&bob, &freight, Capability::View));
    }
}

#[tokio::test]
async fn lenient_load_resolves_legacy_duplicates_from_sqlite() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perms.db");

    let user = UserId::from("u1");
    let employees = ModuleId::from("employees");

    // documents written by older tooling may carry a module twice; the
    // store hands them back as-is
    let legacy = PermissionRecord {
        user_id: user.clone(),
        grants: vec![
            ModuleGrant::new("employees", CapabilitySet::all_standard()),
            ModuleGrant::new("employees", CapabilitySet::from_iter([Capability::View])),
        ],
    };
    {
        let store = SqliteDocumentStore::open(&path).unwrap();
        store.put_record(&legacy).await.unwrap();
    }

    // a strict session rejects the document
    let store = SqliteDocumentStore::open(&path).unwrap();
    let mut strict = PermissionService::new(store);
    let err = strict.load_user(&user).await.unwrap_err();
    assert!(matches!(err, ServiceError::Permission(_)));

    // a lenient session keeps the last entry for the module
    let store = SqliteDocumentStore::open(&path).unwrap();
    let mut service = PermissionService::with_options(
        store,
        ServiceOptions {
            strict_records: false,
        },
    );
    service.load_user(&user).await.unwrap();
    assert!(service.is_granted(&user, &employees, Capability::View));
    assert!(!service.is_granted(&user, &employees, Capability::Delete));
}

#[tokio::test]
async fn admin_override_spans_every_module() {
    let mut service = PermissionService::new(MemoryDocumentStore::new());
    let root = UserId::from("root");
    let intern = UserId::from("intern");

    let policy = service.policy_with_admin(|u: &UserId| u.as_str() == "root");

    for module in ["employees", "salaries", "garage", "health", "rentals"] {
        let module = ModuleId::from(module);
        assert!(policy.is_granted(&root, &module, Capability::Delete));
        assert!(!policy.is_granted(&intern, &module, Capability::View));
    }

    drop(policy);
    service.set_capability(&intern, &ModuleId::from("garage"), Capability::View, true);
    let policy = service.policy_with_admin(|_: &UserId| false);
    assert!(policy.is_granted(&intern, &ModuleId::from("garage"), Capability::View));
}

/// Store that starts failing writes after a given count.
struct FlakyStore {
    inner: MemoryDocumentStore,
    writes_before_failure: usize,
    writes: AtomicUsize,
}

impl FlakyStore {
    fn new(writes_before_failure: usize) -> Self {
        Self {
            inner: MemoryDocumentStore::new(),
            writes_before_failure,
            writes: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn get_record(
        &self,
        user: &UserId,
    ) -> Result<Option<PermissionRecord>, StoreError> {
        self.inner.get_record(user).await
    }

    async fn put_record(&self, record: &PermissionRecord) -> Result<(), StoreError> {
        if self.writes.fetch_add(1, Ordering::SeqCst) >= self.writes_before_failure {
            return Err(StoreError::WriteRejected("store unavailable".into()));
        }
        self.inner.put_record(record).await
    }

    async fn list_users(&self) -> Result<Vec<UserId>, StoreError> {
        self.inner.list_users().await
    }
}

#[tokio::test]
async fn batch_save_failure_is_single_result_and_retryable() {
    let mut service = PermissionService::new(FlakyStore::new(1));
    let module = ModuleId::from("employees");
    let ada = UserId::from("ada");
    let zoe = UserId::from("zoe");

    service.set_all(&ada, &module, true);
    service.set_all(&zoe, &module, true);

    // first write succeeds (ada), second is rejected (zoe)
    let err = service.save().await.unwrap_err();
    match err {
        ServiceError::Persistence { user, .. } => assert_eq!(user, zoe),
        other => panic!("unexpected error: {other}"),
    }

    // ada was flushed and is clean; zoe stays dirty for retry
    assert!(!service.matrix().is_dirty(&ada));
    assert!(service.matrix().is_dirty(&zoe));
    assert_eq!(
        service.store().list_users().await.unwrap(),
        vec![ada.clone()]
    );
}

#[test]
fn rate_examples_match_the_rate_form() {
    let request = RateRequest {
        base_price: 300.0,
        distance_km: 100.0,
        weight_kg: 1000.0,
        volume_m3: 10.0,
        expedition_type: ExpeditionType::Standard,
        transport_type: TransportType::Road,
    };
    assert_eq!(estimate(&request).total, 390.0);

    let by_air = RateRequest {
        transport_type: TransportType::Air,
        ..request
    };
    assert_eq!(estimate(&by_air).total, 1170.0);

    let express_air = RateRequest {
        expedition_type: ExpeditionType::Express,
        ..by_air
    };
    assert_eq!(estimate(&express_air).total, 1755.0);
}
