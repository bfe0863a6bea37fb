//! Projection output rows and summary

use serde::{Deserialize, Serialize};

/// Cash flows for a single project year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Project year (1-indexed)
    pub year: u32,

    /// Tariff after compounding inflation (COP/kWh)
    pub energy_tariff: f64,
    /// Annual consumption valued at this year's tariff
    pub energy_revenue: f64,
    /// Flat deduction while inside the deduction window, else 0
    pub tax_deduction: f64,
    pub om_cost: f64,

    /// energy_revenue + tax_deduction - om_cost
    pub net_cash_flow: f64,
    /// net_cash_flow / (1 + discount_rate)^year
    pub discounted_cash_flow: f64,

    // Running totals through this year
    pub cumulative_net: f64,
    pub cumulative_discounted: f64,
}

/// Headline indicators derived from the yearly records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryIndicators {
    /// Discounted cash flows minus the investment, rounded to cents
    pub net_present_value: f64,

    /// Simplified IRR in percent (see [`crate::projection::approximate_irr`]);
    /// `None` when the total net flow is negative
    pub internal_rate_of_return: Option<f64>,

    /// First year the undiscounted cumulative flow covers the investment
    pub simple_payback_year: Option<u32>,

    /// First year the discounted cumulative flow covers the investment
    pub discounted_payback_year: Option<u32>,
}

/// Complete projection for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<YearRecord>,
    pub summary: SummaryIndicators,
}

impl ProjectionResult {
    /// Number of projected years
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a given project year, if inside the horizon
    pub fn year(&self, year: u32) -> Option<&YearRecord> {
        if year == 0 {
            return None;
        }
        self.records.get((year - 1) as usize)
    }

    /// Undiscounted total of all yearly net flows
    pub fn total_net_cash_flow(&self) -> f64 {
        self.records.last().map(|r| r.cumulative_net).unwrap_or(0.0)
    }

    /// Discounted total of all yearly net flows
    pub fn total_discounted_cash_flow(&self) -> f64 {
        self.records.last().map(|r| r.cumulative_discounted).unwrap_or(0.0)
    }
}
