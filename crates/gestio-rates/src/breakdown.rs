//! Rate breakdown: the estimator's output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An itemized price estimate, currency-agnostic.
///
/// All amounts are unrounded; rounding happens only at display formatting,
/// never mid-calculation. Use [`RateBreakdown::rounded`] for UI output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// The flat starting fee, echoed from the request.
    pub base_price: f64,

    /// Distance component of the subtotal.
    pub distance_price: f64,

    /// Weight component of the subtotal.
    pub weight_price: f64,

    /// Volume component of the subtotal.
    pub volume_price: f64,

    /// Display-only expedition surcharge.
    ///
    /// Computed against the unscaled variable subtotal, so it does NOT sum
    /// back to `total` when both multipliers are non-1.0. The application
    /// has always shown it this way; keep it until invoice-display
    /// semantics are decided otherwise.
    pub expedition_surcharge: f64,

    /// Display-only transport surcharge. Same caveat as above.
    pub transport_surcharge: f64,

    /// The final price: subtotal scaled by both multipliers.
    pub total: f64,
}

impl RateBreakdown {
    /// A copy with every amount rounded to two decimal places, for display.
    pub fn rounded(&self) -> Self {
        Self {
            base_price: round2(self.base_price),
            distance_price: round2(self.distance_price),
            weight_price: round2(self.weight_price),
            volume_price: round2(self.volume_price),
            expedition_surcharge: round2(self.expedition_surcharge),
            transport_surcharge: round2(self.transport_surcharge),
            total: round2(self.total),
        }
    }
}

impl fmt::Display for RateBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base {:.2} + distance {:.2} + weight {:.2} + volume {:.2} \
             (expedition {:.2}, transport {:.2}) = {:.2}",
            self.base_price,
            self.distance_price,
            self.weight_price,
            self.volume_price,
            self.expedition_surcharge,
            self.transport_surcharge,
            self.total,
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_two_decimals() {
        let breakdown = RateBreakdown {
            base_price: 10.005,
            distance_price: 1.234,
            weight_price: 0.0,
            volume_price: 0.0,
            expedition_surcharge: 0.0,
            transport_surcharge: 0.0,
            total: 11.239,
        };
        let rounded = breakdown.rounded();
        assert_eq!(rounded.distance_price, 1.23);
        assert_eq!(rounded.total, 11.24);
    }

    #[test]
    fn test_display_formats_two_decimals() {
        let breakdown = RateBreakdown {
            base_price: 300.0,
            distance_price: 50.0,
            weight_price: 20.0,
            volume_price: 20.0,
            expedition_surcharge: 0.0,
            transport_surcharge: 0.0,
            total: 390.0,
        };
        let text = format!("{}", breakdown);
        assert!(text.contains("= 390.00"));
    }
}
