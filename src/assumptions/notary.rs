//! Notary fee estimation for existing-property purchases

use serde::{Deserialize, Serialize};

/// Flat notary fee rate applied by the calculator
pub const NOTARY_FEE_RATE: f64 = 0.075;

/// Rate used by the detailed breakdown only
pub const NOTARY_FEE_RATE_DETAILED: f64 = 0.0793;

/// Notary fee rates
///
/// `rate` is the single rate used for every calculation mode. The
/// `detailed_rate` feeds `breakdown` and never enters `calculate`, so a
/// breakdown total will not match `CalculationResult::notary_fees`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotaryFees {
    pub rate: f64,
    pub detailed_rate: f64,
}

impl Default for NotaryFees {
    fn default() -> Self {
        Self {
            rate: NOTARY_FEE_RATE,
            detailed_rate: NOTARY_FEE_RATE_DETAILED,
        }
    }
}

/// Approximate split of the detailed notary fees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaryFeesBreakdown {
    /// Notary's own emoluments (~15%)
    pub notary_emoluments: f64,
    /// Registration duties (~73%)
    pub registration_fees: f64,
    /// Various taxes (~12%)
    pub various_taxes: f64,
    pub total: f64,
}

impl NotaryFees {
    /// Fees on a purchase at the calculation rate
    pub fn fees(&self, property_price: f64) -> f64 {
        property_price * self.rate
    }

    /// Component breakdown at the detailed rate
    pub fn breakdown(&self, property_price: f64) -> NotaryFeesBreakdown {
        let total = property_price * self.detailed_rate;

        NotaryFeesBreakdown {
            notary_emoluments: total * 0.15,
            registration_fees: total * 0.73,
            various_taxes: total * 0.12,
            total,
        }
    }
}
