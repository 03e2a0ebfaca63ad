//! Rate request: the estimator's input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RateError;

/// Service-speed tier of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpeditionType {
    /// No speed guarantee.
    Standard,
    /// Fastest tier.
    Express,
    /// Between standard and express.
    Priority,
}

impl ExpeditionType {
    /// Price multiplier applied to the subtotal.
    pub fn multiplier(&self) -> f64 {
        match self {
            ExpeditionType::Standard => 1.0,
            ExpeditionType::Priority => 1.3,
            ExpeditionType::Express => 1.5,
        }
    }
}

impl fmt::Display for ExpeditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpeditionType::Standard => "standard",
            ExpeditionType::Express => "express",
            ExpeditionType::Priority => "priority",
        };
        write!(f, "{}", name)
    }
}

/// Physical carriage mode of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Road,
    Rail,
    Sea,
    Air,
}

impl TransportType {
    /// Price multiplier applied to the subtotal.
    pub fn multiplier(&self) -> f64 {
        match self {
            TransportType::Road => 1.0,
            TransportType::Sea => 0.8,
            TransportType::Rail => 1.2,
            TransportType::Air => 3.0,
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportType::Road => "road",
            TransportType::Rail => "rail",
            TransportType::Sea => "sea",
            TransportType::Air => "air",
        };
        write!(f, "{}", name)
    }
}

/// A shipment's attributes, as entered in the rate form.
///
/// All numeric fields are expected to be non-negative. The estimator does
/// not check this; call [`RateRequest::validate`] at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Flat starting fee.
    pub base_price: f64,

    /// Distance to carry the shipment, in kilometers.
    pub distance_km: f64,

    /// Shipment weight, in kilograms.
    pub weight_kg: f64,

    /// Shipment volume, in cubic meters.
    pub volume_m3: f64,

    /// Service-speed tier.
    pub expedition_type: ExpeditionType,

    /// Carriage mode.
    pub transport_type: TransportType,
}

impl RateRequest {
    /// Reject negative or non-finite numeric inputs.
    ///
    /// Input validation belongs to the caller, not the estimator; this is
    /// the helper callers use before invoking [`crate::estimate`].
    pub fn validate(&self) -> Result<(), RateError> {
        for (field, value) in [
            ("base_price", self.base_price),
            ("distance_km", self.distance_km),
            ("weight_kg", self.weight_kg),
            ("volume_m3", self.volume_m3),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RateError::InvalidInput {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(ExpeditionType::Standard.multiplier(), 1.0);
        assert_eq!(ExpeditionType::Priority.multiplier(), 1.3);
        assert_eq!(ExpeditionType::Express.multiplier(), 1.5);

        assert_eq!(TransportType::Road.multiplier(), 1.0);
        assert_eq!(TransportType::Sea.multiplier(), 0.8);
        assert_eq!(TransportType::Rail.multiplier(), 1.2);
        assert_eq!(TransportType::Air.multiplier(), 3.0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut request = RateRequest {
            base_price: 100.0,
            distance_km: 10.0,
            weight_kg: 5.0,
            volume_m3: 1.0,
            expedition_type: ExpeditionType::Standard,
            transport_type: TransportType::Road,
        };
        assert!(request.validate().is_ok());

        request.weight_kg = -1.0;
        let err = request.validate().unwrap_err();
        assert!(matches!(err, RateError::InvalidInput { ref field, .. } if field == "weight_kg"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let request = RateRequest {
            base_price: f64::NAN,
            distance_km: 0.0,
            weight_kg: 0.0,
            volume_m3: 0.0,
            expedition_type: ExpeditionType::Standard,
            transport_type: TransportType::Road,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_enum_serde_names() {
        let json = serde_json::to_string(&TransportType::Air).unwrap();
        assert_eq!(json, "\"air\"");
        let back: ExpeditionType = serde_json::from_str("\"express\"").unwrap();
        assert_eq!(back, ExpeditionType::Express);
    }
}
