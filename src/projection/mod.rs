//! Projection engine for yearly project cash flows

mod engine;
mod cashflows;
mod indicators;

pub use engine::{compute, ProjectionEngine};
pub use cashflows::{ProjectionResult, SummaryIndicators, YearRecord};
pub use indicators::{approximate_irr, net_present_value, payback_year, round_to};

// ============================================================================
// Indicator Rounding
// ============================================================================
// Reported indicators are rounded the same way the reference dashboard
// rounds them, so published figures can be reproduced exactly.

/// Decimal places kept on the IRR fraction before conversion to percent
pub const IRR_DECIMALS: i32 = 4;

/// Decimal places kept on the NPV
pub const NPV_DECIMALS: i32 = 2;
