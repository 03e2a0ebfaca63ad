//! # Gestio Store
//!
//! Storage abstraction for Gestio permission records. Provides a trait-based
//! interface over an external document store, with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The external collaborator the permission core requires is small: durable
//! get/put of one document per user, plus enumeration of all known users for
//! bulk administration views. The [`DocumentStore`] trait captures exactly
//! that; everything else (retry, timeout, multi-admin coordination) belongs
//! to the surrounding application and its store client.
//!
//! ## Key Types
//!
//! - [`DocumentStore`] - The async trait for record persistence
//! - [`SqliteDocumentStore`] - SQLite-backed durable storage
//! - [`MemoryDocumentStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gestio_core::{CapabilitySet, PermissionRecord, UserId};
//! use gestio_store::{DocumentStore, SqliteDocumentStore};
//!
//! async fn example() {
//!     let store = SqliteDocumentStore::open("permissions.db").unwrap();
//!
//!     let record = PermissionRecord::new("u1")
//!         .with_grant("employees", CapabilitySet::all_standard());
//!     store.put_record(&record).await.unwrap();
//!
//!     let loaded = store.get_record(&UserId::from("u1")).await.unwrap();
//!     assert!(loaded.is_some());
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Documents, not rows**: each record is stored as one JSON document
//!   keyed by user, mirroring the cloud document database it stands in for.
//! - **Last write wins**: `put_record` replaces the whole document. The
//!   store offers no merging or conflict detection.
//! - **Best-effort batches**: [`StoreExt::put_records`] stops at the first
//!   failure; records already written stay written.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;
pub use traits::{DocumentStore, StoreExt};
