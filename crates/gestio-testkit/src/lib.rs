//! # Gestio Testkit
//!
//! Testing utilities for Gestio.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known rate requests with expected breakdowns, so
//!   every port of the pricing formula can be checked against the same table
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: helper structs for setting up permission scenarios
//! - **FailingStore**: a store whose writes always fail, for exercising
//!   batch-save error paths
//!
//! ## Golden Vectors
//!
//! ```rust
//! use gestio_rates::estimate;
//! use gestio_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let breakdown = estimate(&vector.request);
//!     assert_eq!(breakdown.total, vector.total);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gestio_rates::estimate;
//! use gestio_testkit::generators::rate_request;
//!
//! proptest! {
//!     #[test]
//!     fn estimate_is_deterministic(r in rate_request()) {
//!         prop_assert_eq!(estimate(&r), estimate(&r));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use gestio_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.grant_standard("alice", "employees");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{FailingStore, TestFixture};
pub use generators::{capability_set, rate_request};
pub use vectors::{all_vectors, verify_all_vectors, RateVector};
