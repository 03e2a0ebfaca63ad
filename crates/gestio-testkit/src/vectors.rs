//! Golden rate vectors.
//!
//! Known requests with expected breakdowns, taken from the rate form's
//! worked examples. Any port of the pricing formula must reproduce these
//! exactly (before display rounding).

use serde::{Deserialize, Serialize};

use gestio_rates::{estimate, ExpeditionType, RateBreakdown, RateRequest, TransportType};

/// A single golden rate vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateVector {
    pub name: String,
    pub description: String,

    // Input
    pub request: RateRequest,

    // Expected outputs (unrounded)
    pub distance_price: f64,
    pub weight_price: f64,
    pub volume_price: f64,
    pub total: f64,
}

fn vector(
    name: &str,
    description: &str,
    request: RateRequest,
    distance_price: f64,
    weight_price: f64,
    volume_price: f64,
    total: f64,
) -> RateVector {
    RateVector {
        name: name.to_string(),
        description: description.to_string(),
        request,
        distance_price,
        weight_price,
        volume_price,
        total,
    }
}

/// The reference shipment used across the worked examples.
fn reference_request() -> RateRequest {
    RateRequest {
        base_price: 300.0,
        distance_km: 100.0,
        weight_kg: 1000.0,
        volume_m3: 10.0,
        expedition_type: ExpeditionType::Standard,
        transport_type: TransportType::Road,
    }
}

/// All golden vectors.
pub fn all_vectors() -> Vec<RateVector> {
    vec![
        vector(
            "standard_road",
            "Both multipliers 1.0: total is the plain sum",
            reference_request(),
            50.0,
            20.0,
            20.0,
            390.0,
        ),
        vector(
            "standard_air",
            "Air triples the subtotal",
            RateRequest {
                transport_type: TransportType::Air,
                ..reference_request()
            },
            50.0,
            20.0,
            20.0,
            1170.0,
        ),
        vector(
            "express_air",
            "Express and Air compound multiplicatively",
            RateRequest {
                expedition_type: ExpeditionType::Express,
                transport_type: TransportType::Air,
                ..reference_request()
            },
            50.0,
            20.0,
            20.0,
            1755.0,
        ),
        vector(
            "priority_sea",
            "Priority up, Sea down: 390 * 1.3 * 0.8",
            RateRequest {
                expedition_type: ExpeditionType::Priority,
                transport_type: TransportType::Sea,
                ..reference_request()
            },
            50.0,
            20.0,
            20.0,
            390.0 * 1.3 * 0.8,
        ),
        vector(
            "empty_shipment",
            "All-zero inputs price to zero under any multipliers",
            RateRequest {
                base_price: 0.0,
                distance_km: 0.0,
                weight_kg: 0.0,
                volume_m3: 0.0,
                expedition_type: ExpeditionType::Express,
                transport_type: TransportType::Rail,
            },
            0.0,
            0.0,
            0.0,
            0.0,
        ),
        vector(
            "base_fee_only",
            "Multipliers scale the base fee even with no freight",
            RateRequest {
                base_price: 100.0,
                distance_km: 0.0,
                weight_kg: 0.0,
                volume_m3: 0.0,
                expedition_type: ExpeditionType::Standard,
                transport_type: TransportType::Rail,
            },
            0.0,
            0.0,
            0.0,
            120.0,
        ),
    ]
}

/// Check a breakdown against a vector.
pub fn verify_vector(vector: &RateVector, breakdown: &RateBreakdown) -> bool {
    breakdown.distance_price == vector.distance_price
        && breakdown.weight_price == vector.weight_price
        && breakdown.volume_price == vector.volume_price
        && breakdown.total == vector.total
}

/// Run the estimator over every vector, returning the names that failed.
pub fn verify_all_vectors() -> Vec<String> {
    all_vectors()
        .iter()
        .filter(|v| !verify_vector(v, &estimate(&v.request)))
        .map(|v| v.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let failed = verify_all_vectors();
        assert!(failed.is_empty(), "failed vectors: {:?}", failed);
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string_pretty(&all_vectors()).unwrap();
        let back: Vec<RateVector> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), all_vectors().len());
    }
}
