//! # Gestio Rates
//!
//! Freight rate estimation: a pure mapping from a shipment's physical and
//! service attributes to a price breakdown.
//!
//! ## Overview
//!
//! The estimator is invoked per UI interaction and its result discarded.
//! It is deterministic, has no side effects, and never fails: numeric inputs
//! are expected to be non-negative, and rejecting anything else is the
//! caller's job via [`RateRequest::validate`].
//!
//! ## Pricing Model
//!
//! Linear per-unit prices for distance, weight, and volume are added to a
//! flat base price, then the subtotal is scaled by two multipliers: one for
//! the service-speed tier ([`ExpeditionType`]) and one for the carriage mode
//! ([`TransportType`]).
//!
//! ## Usage
//!
//! ```rust
//! use gestio_rates::{estimate, ExpeditionType, RateRequest, TransportType};
//!
//! let request = RateRequest {
//!     base_price: 300.0,
//!     distance_km: 100.0,
//!     weight_kg: 1000.0,
//!     volume_m3: 10.0,
//!     expedition_type: ExpeditionType::Standard,
//!     transport_type: TransportType::Road,
//! };
//!
//! let breakdown = estimate(&request);
//! assert_eq!(breakdown.total, 390.0);
//! ```

pub mod breakdown;
pub mod error;
pub mod estimator;
pub mod request;
pub mod tariff;

pub use breakdown::RateBreakdown;
pub use error::RateError;
pub use estimator::{estimate, estimate_with};
pub use request::{ExpeditionType, RateRequest, TransportType};
pub use tariff::Tariff;
