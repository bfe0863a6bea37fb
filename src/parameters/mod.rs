//! Project parameter set, overrides and JSON loading

mod project;
pub mod adjuster;
pub mod loader;

pub use project::{tax_deduction_for, ProjectParameters};
pub use adjuster::ParameterOverrides;
pub use loader::{load_overrides, load_overrides_from_reader, load_parameters};

// ============================================================================
// Default Project Parameters
// ============================================================================
// Values of the reference project (Solar Del Norte S.A.S.). Monetary amounts
// are in COP, consumption in kWh.

/// Project horizon in years
pub const DEFAULT_LIFETIME_YEARS: u32 = 25;

/// Longest horizon accepted for a single project
pub const MAX_LIFETIME_YEARS: u32 = 100;

/// Up-front capital expenditure
pub const DEFAULT_INITIAL_INVESTMENT: f64 = 349_900_000.0;

/// Operation and maintenance cost per year
pub const DEFAULT_ANNUAL_OM_COST: f64 = 3_000_000.0;

/// Energy tariff in year 1 (COP/kWh)
pub const DEFAULT_INITIAL_ENERGY_TARIFF: f64 = 1_000.0;

/// Yearly compounding growth of the energy tariff (10%)
pub const DEFAULT_TARIFF_INFLATION_RATE: f64 = 0.10;

/// Share of the investment recovered as tax deduction (50%)
pub const TAX_DEDUCTION_FRACTION: f64 = 0.5;

/// Years over which the tax deduction is spread
pub const DEFAULT_DEDUCTION_YEARS: u32 = 15;

/// Client consumption per month (kWh)
pub const DEFAULT_MONTHLY_CLIENT_CONSUMPTION: f64 = 12_837.0;

/// Discount rate for present values (8%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Name shown in dashboard titles
pub const DEFAULT_PROJECT_NAME: &str = "Solar Del Norte S.A.S.";
