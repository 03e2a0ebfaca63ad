//! In-memory implementation of the DocumentStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite but
//! keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use gestio_core::{PermissionRecord, UserId};

use crate::error::Result;
use crate::traits::DocumentStore;

/// In-memory document store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryDocumentStore {
    records: RwLock<HashMap<UserId, PermissionRecord>>,
}

impl MemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_record(&self, user: &UserId) -> Result<Option<PermissionRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.get(user).cloned())
    }

    async fn put_record(&self, record: &PermissionRecord) -> Result<()> {
        let mut records = self.records.write().unwrap();
        records.insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserId>> {
        let records = self.records.read().unwrap();
        let mut users: Vec<UserId> = records.keys().cloned().collect();
        users.sort();
        Ok(users)
    }
}
