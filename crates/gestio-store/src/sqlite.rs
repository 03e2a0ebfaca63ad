//! SQLite implementation of the DocumentStore trait.
//!
//! The durable stand-in for the cloud document database. Uses rusqlite with
//! bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use gestio_core::{PermissionRecord, UserId};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::DocumentStore;

/// SQLite-based document store.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking to
/// avoid blocking the async runtime.
pub struct SqliteDocumentStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDocumentStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn lock_conn(conn: &Arc<Mutex<Connection>>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock().map_err(|e| {
        StoreError::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
            Some(format!("mutex poisoned: {}", e)),
        ))
    })
}

fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

// Record invariants (module uniqueness) are the matrix's concern; the store
// hands back whatever document is there so lenient loading stays possible.
fn decode_document(document: &str) -> Result<PermissionRecord> {
    Ok(serde_json::from_str(document)?)
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get_record(&self, user: &UserId) -> Result<Option<PermissionRecord>> {
        let user = user.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let document: Option<String> = conn
                .query_row(
                    "SELECT document FROM permission_records WHERE user_id = ?1",
                    params![user.as_str()],
                    |row| row.get(0),
                )
                .optional()?;

            document.map(|doc| decode_document(&doc)).transpose()
        })
        .await
        .map_err(join_error)?
    }

    async fn put_record(&self, record: &PermissionRecord) -> Result<()> {
        let record = record.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let document = serde_json::to_string(&record)?;
            let conn = lock_conn(&conn)?;

            conn.execute(
                "INSERT INTO permission_records (user_id, document, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(user_id) DO UPDATE SET
                    document = excluded.document,
                    updated_at = excluded.updated_at",
                params![record.user_id.as_str(), document, now_millis()],
            )?;

            tracing::debug!(user = %record.user_id, "stored permission record");
            Ok(())
        })
        .await
        .map_err(join_error)?
    }

    async fn list_users(&self) -> Result<Vec<UserId>> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let mut stmt =
                conn.prepare("SELECT user_id FROM permission_records ORDER BY user_id")?;

            let users: Vec<UserId> = stmt
                .query_map([], |row| {
                    let id: String = row.get(0)?;
                    Ok(UserId::from(id))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(users)
        })
        .await
        .map_err(join_error)?
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
