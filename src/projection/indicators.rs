//! Summary indicator calculations (NPV, simplified IRR, payback)

use super::{YearRecord, IRR_DECIMALS, NPV_DECIMALS};

/// Round half away from zero to a number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Net present value from the total of discounted flows, rounded to cents
pub fn net_present_value(total_discounted: f64, initial_investment: f64) -> f64 {
    round_to(-initial_investment + total_discounted, NPV_DECIMALS)
}

/// Simplified internal rate of return, in percent.
///
/// Computed as `(total_net / investment)^(1/years) - 1`, rounded to four
/// decimals and then multiplied by 100. This is the average growth multiple
/// of the undiscounted flows, not a root of the NPV equation; published
/// figures depend on this exact formula.
///
/// Returns `None` when the total net flow is negative, since the fractional
/// power of a negative ratio has no real value.
pub fn approximate_irr(total_net: f64, initial_investment: f64, lifetime_years: u32) -> Option<f64> {
    let ratio = total_net / initial_investment;
    if !ratio.is_finite() || ratio < 0.0 || lifetime_years == 0 {
        return None;
    }
    let rate = ratio.powf(1.0 / lifetime_years as f64) - 1.0;
    Some(round_to(rate, IRR_DECIMALS) * 100.0)
}

/// First year whose cumulative value reaches the investment
pub fn payback_year<'a, I, F>(records: I, cumulative: F, initial_investment: f64) -> Option<u32>
where
    I: IntoIterator<Item = &'a YearRecord>,
    F: Fn(&YearRecord) -> f64,
{
    records
        .into_iter()
        .find(|r| cumulative(r) >= initial_investment)
        .map(|r| r.year)
}
