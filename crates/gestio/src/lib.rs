//! # Gestio
//!
//! The unified API for the Gestio back-office core: the permission matrix
//! with explicit load/save boundaries, and freight rate estimation.
//!
//! ## Overview
//!
//! Gestio formalizes the two reusable components of a multi-module
//! business-management application:
//!
//! - **Permissions**: per-user, per-module capability flags, owned by a
//!   [`PermissionService`] that loads from and saves to an external
//!   document store only when told to.
//! - **Rates**: a pure freight price estimator invoked per UI interaction.
//!
//! ## Key Concepts
//!
//! - **Capability**: one independent boolean flag (view, create, edit,
//!   delete, plus module-specific extras). No transition rules.
//! - **Explicit boundaries**: nothing syncs behind your back. `load_*`
//!   pulls records into memory, `save` flushes dirty users, and everything
//!   in between is in-memory mutation that cannot fail.
//! - **Best-effort saves**: a batch save is a single pass/fail result; the
//!   store's own atomicity determines what a failure leaves behind.
//! - **Admin override**: layered over the check as a decorator, never
//!   encoded inside the stored matrix.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gestio::{Capability, ModuleId, PermissionService, UserId};
//! use gestio::store::SqliteDocumentStore;
//!
//! async fn example() {
//!     let store = SqliteDocumentStore::open("permissions.db").unwrap();
//!     let mut service = PermissionService::new(store);
//!
//!     let user = UserId::from("u1");
//!     let module = ModuleId::from("employees");
//!
//!     service.load_user(&user).await.unwrap();
//!     service.set_all(&user, &module, true);
//!     service.set_capability(&user, &module, Capability::Delete, false);
//!     service.save().await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `gestio::core` - Core primitives (identifiers, capabilities, records)
//! - `gestio::perms` - The permission matrix and access policies
//! - `gestio::rates` - The rate estimator
//! - `gestio::store` - Document-store backends

pub mod error;
pub mod service;

// Re-export component crates
pub use gestio_core as core;
pub use gestio_perms as perms;
pub use gestio_rates as rates;
pub use gestio_store as store;

// Re-export main types for convenience
pub use error::{Result, ServiceError};
pub use service::{PermissionService, ServiceOptions};

// Re-export commonly used component types
pub use gestio_core::{Capability, CapabilitySet, ModuleGrant, ModuleId, PermissionRecord, UserId};
pub use gestio_perms::{AccessPolicy, AdminOverride, PermissionMatrix};
pub use gestio_rates::{estimate, ExpeditionType, RateBreakdown, RateRequest, TransportType};
pub use gestio_store::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore};
