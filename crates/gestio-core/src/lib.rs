//! # Gestio Core
//!
//! Pure primitives for the Gestio back-office core: identifiers, capabilities,
//! and permission records.
//!
//! This crate contains no I/O, no storage, no async. It is plain data and
//! conversions shared by every other Gestio crate.
//!
//! ## Key Types
//!
//! - [`UserId`] / [`ModuleId`] - Opaque, externally-owned identifiers
//! - [`Capability`] - One independent permission flag (view, create, ...)
//! - [`CapabilitySet`] - The set of capabilities a user holds on a module
//! - [`PermissionRecord`] - The per-user document shape persisted externally
//!
//! ## Capability Model
//!
//! Capabilities are independent booleans with no transition rules between
//! them: `edit` without `view` is accepted and stored as-is. An absent entry
//! is equivalent to an empty [`CapabilitySet`].

pub mod capability;
pub mod error;
pub mod record;
pub mod types;

pub use capability::{Capability, CapabilitySet};
pub use error::CoreError;
pub use record::{ModuleGrant, PermissionRecord};
pub use types::{ModuleId, UserId};
