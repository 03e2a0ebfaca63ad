//! The tariff schedule: per-unit prices applied by the estimator.

use serde::{Deserialize, Serialize};

/// Per-unit prices for the linear part of the rate formula.
///
/// The default schedule is the one the application ships with. A custom
/// tariff may be supplied via [`crate::estimate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Price per kilometer of distance.
    pub per_km: f64,

    /// Price per kilogram of weight.
    pub per_kg: f64,

    /// Price per cubic meter of volume.
    pub per_m3: f64,
}

impl Tariff {
    /// The standard tariff schedule.
    pub const STANDARD: Self = Self {
        per_km: 0.5,
        per_kg: 0.02,
        per_m3: 2.0,
    };
}

impl Default for Tariff {
    fn default() -> Self {
        Self::STANDARD
    }
}
