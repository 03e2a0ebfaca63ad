//! The rate estimator: pure, total, deterministic.

use crate::breakdown::RateBreakdown;
use crate::request::RateRequest;
use crate::tariff::Tariff;

/// Estimate a shipment's price with the standard tariff.
///
/// Pure and total: no side effects, no error cases. Negative inputs are the
/// caller's responsibility to reject beforehand (see
/// [`RateRequest::validate`]).
pub fn estimate(request: &RateRequest) -> RateBreakdown {
    estimate_with(&Tariff::STANDARD, request)
}

/// Estimate a shipment's price against an explicit tariff schedule.
pub fn estimate_with(tariff: &Tariff, request: &RateRequest) -> RateBreakdown {
    let distance_price = request.distance_km * tariff.per_km;
    let weight_price = request.weight_kg * tariff.per_kg;
    let volume_price = request.volume_m3 * tariff.per_m3;

    let variable = distance_price + weight_price + volume_price;
    let subtotal = request.base_price + variable;

    let expedition_multiplier = request.expedition_type.multiplier();
    let transport_multiplier = request.transport_type.multiplier();

    let total = subtotal * expedition_multiplier * transport_multiplier;

    // Surcharges are a display approximation: each multiplier is applied to
    // the variable subtotal alone, so they do not sum back to `total` when
    // both multipliers are non-1.0. Preserved as the application has always
    // shown them.
    let expedition_surcharge = variable * (expedition_multiplier - 1.0);
    let transport_surcharge = variable * (transport_multiplier - 1.0);

    RateBreakdown {
        base_price: request.base_price,
        distance_price,
        weight_price,
        volume_price,
        expedition_surcharge,
        transport_surcharge,
        total,
    }
}
