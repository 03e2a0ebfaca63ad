//! # Gestio Permissions
//!
//! The permission matrix: per-user, per-module capability flags with bulk-set
//! and single-toggle operations.
//!
//! ## Overview
//!
//! The matrix is a purely in-memory keyed collection. It never touches the
//! external document store itself; the `gestio` facade loads records into it
//! and flushes its dirty users back out at explicit save boundaries. This
//! replaces the ad-hoc component-local flag state of the original
//! application with one owned object.
//!
//! ## Key Concepts
//!
//! - **Entry**: a `(user, module)` pair mapped to a [`CapabilitySet`].
//!   Absent entries are equivalent to an empty set (everything denied).
//! - **Dirty tracking**: every mutation marks its user dirty so the facade
//!   knows which records need flushing.
//! - **Admin override**: a decorator over the [`AccessPolicy`] trait, not a
//!   branch inside matrix storage. The administrator flag is externally
//!   owned.
//!
//! ## Usage
//!
//! ```rust
//! use gestio_core::{Capability, ModuleId, UserId};
//! use gestio_perms::{AccessPolicy, AdminOverride, PermissionMatrix};
//!
//! let mut matrix = PermissionMatrix::new();
//! let user = UserId::from("u1");
//! let module = ModuleId::from("employees");
//!
//! matrix.set_all(&user, &module, true);
//! assert!(matrix.is_granted(&user, &module, Capability::Delete));
//!
//! let policy = AdminOverride::new(&matrix, |u: &UserId| u.as_str() == "root");
//! assert!(policy.is_granted(&UserId::from("root"), &module, Capability::Edit));
//! ```

pub mod error;
pub mod matrix;
pub mod policy;

pub use error::{PermsError, Result};
pub use matrix::PermissionMatrix;
pub use policy::{AccessPolicy, AdminOverride};

pub use gestio_core::{Capability, CapabilitySet, ModuleId, PermissionRecord, UserId};
