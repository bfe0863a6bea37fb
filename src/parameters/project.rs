//! Immutable parameter record for a single solar project

use super::{
    DEFAULT_ANNUAL_OM_COST, DEFAULT_DEDUCTION_YEARS, DEFAULT_DISCOUNT_RATE,
    DEFAULT_INITIAL_ENERGY_TARIFF, DEFAULT_INITIAL_INVESTMENT, DEFAULT_LIFETIME_YEARS,
    DEFAULT_MONTHLY_CLIENT_CONSUMPTION, DEFAULT_TARIFF_INFLATION_RATE, MAX_LIFETIME_YEARS,
    TAX_DEDUCTION_FRACTION,
};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Tax deduction granted for a given investment
pub fn tax_deduction_for(initial_investment: f64) -> f64 {
    TAX_DEDUCTION_FRACTION * initial_investment
}

/// Inputs of the cash-flow projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Project horizon in years (must be >= 1)
    #[serde(default = "default_lifetime_years")]
    pub lifetime_years: u32,

    /// Up-front capital expenditure (must be > 0)
    #[serde(default = "default_initial_investment")]
    pub initial_investment: f64,

    /// Constant operation and maintenance cost per year
    #[serde(default = "default_annual_om_cost")]
    pub annual_om_cost: f64,

    /// Energy tariff applied in year 1
    #[serde(default = "default_initial_energy_tariff")]
    pub initial_energy_tariff: f64,

    /// Yearly compounding growth of the tariff (0.10 = 10%)
    #[serde(default = "default_tariff_inflation_rate")]
    pub tariff_inflation_rate: f64,

    /// Total deduction, normally TAX_DEDUCTION_FRACTION of the investment
    #[serde(default = "default_total_tax_deduction")]
    pub total_tax_deduction: f64,

    /// Number of years the deduction is spread over
    #[serde(default = "default_deduction_years")]
    pub deduction_years: u32,

    /// Client consumption per month
    #[serde(default = "default_monthly_client_consumption")]
    pub monthly_client_consumption: f64,

    /// Discount rate for present values (0.08 = 8%)
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

fn default_lifetime_years() -> u32 { DEFAULT_LIFETIME_YEARS }
fn default_initial_investment() -> f64 { DEFAULT_INITIAL_INVESTMENT }
fn default_annual_om_cost() -> f64 { DEFAULT_ANNUAL_OM_COST }
fn default_initial_energy_tariff() -> f64 { DEFAULT_INITIAL_ENERGY_TARIFF }
fn default_tariff_inflation_rate() -> f64 { DEFAULT_TARIFF_INFLATION_RATE }
fn default_total_tax_deduction() -> f64 { tax_deduction_for(DEFAULT_INITIAL_INVESTMENT) }
fn default_deduction_years() -> u32 { DEFAULT_DEDUCTION_YEARS }
fn default_monthly_client_consumption() -> f64 { DEFAULT_MONTHLY_CLIENT_CONSUMPTION }
fn default_discount_rate() -> f64 { DEFAULT_DISCOUNT_RATE }

impl Default for ProjectParameters {
    fn default() -> Self {
        Self {
            lifetime_years: DEFAULT_LIFETIME_YEARS,
            initial_investment: DEFAULT_INITIAL_INVESTMENT,
            annual_om_cost: DEFAULT_ANNUAL_OM_COST,
            initial_energy_tariff: DEFAULT_INITIAL_ENERGY_TARIFF,
            tariff_inflation_rate: DEFAULT_TARIFF_INFLATION_RATE,
            total_tax_deduction: tax_deduction_for(DEFAULT_INITIAL_INVESTMENT),
            deduction_years: DEFAULT_DEDUCTION_YEARS,
            monthly_client_consumption: DEFAULT_MONTHLY_CLIENT_CONSUMPTION,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl ProjectParameters {
    /// Deduction granted each year while `year <= deduction_years`
    pub fn annual_deduction(&self) -> f64 {
        if self.deduction_years == 0 {
            return 0.0;
        }
        self.total_tax_deduction / self.deduction_years as f64
    }

    /// Client consumption over a full year
    pub fn annual_consumption(&self) -> f64 {
        self.monthly_client_consumption * 12.0
    }

    /// Check every precondition of the projection engine
    pub fn validate(&self) -> Result<()> {
        if self.lifetime_years == 0 {
            return Err(ProjectionError::invalid("lifetime_years", "horizon must be at least 1 year"));
        }
        if self.lifetime_years > MAX_LIFETIME_YEARS {
            return Err(ProjectionError::invalid(
                "lifetime_years",
                format!("horizon must not exceed {} years, got {}", MAX_LIFETIME_YEARS, self.lifetime_years),
            ));
        }

        require_finite("initial_investment", self.initial_investment)?;
        if self.initial_investment <= 0.0 {
            return Err(ProjectionError::invalid(
                "initial_investment",
                format!("must be positive, got {}", self.initial_investment),
            ));
        }

        require_finite("annual_om_cost", self.annual_om_cost)?;
        if self.annual_om_cost < 0.0 {
            return Err(ProjectionError::invalid(
                "annual_om_cost",
                format!("must not be negative, got {}", self.annual_om_cost),
            ));
        }

        require_finite("initial_energy_tariff", self.initial_energy_tariff)?;
        if self.initial_energy_tariff <= 0.0 {
            return Err(ProjectionError::invalid(
                "initial_energy_tariff",
                format!("must be positive, got {}", self.initial_energy_tariff),
            ));
        }

        require_finite("tariff_inflation_rate", self.tariff_inflation_rate)?;
        if self.tariff_inflation_rate <= -1.0 {
            return Err(ProjectionError::invalid(
                "tariff_inflation_rate",
                format!("must be greater than -1, got {}", self.tariff_inflation_rate),
            ));
        }

        require_finite("total_tax_deduction", self.total_tax_deduction)?;
        if self.total_tax_deduction < 0.0 {
            return Err(ProjectionError::invalid(
                "total_tax_deduction",
                format!("must not be negative, got {}", self.total_tax_deduction),
            ));
        }

        require_finite("monthly_client_consumption", self.monthly_client_consumption)?;
        if self.monthly_client_consumption <= 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_client_consumption",
                format!("must be positive, got {}", self.monthly_client_consumption),
            ));
        }

        require_finite("discount_rate", self.discount_rate)?;
        if self.discount_rate <= -1.0 {
            return Err(ProjectionError::invalid(
                "discount_rate",
                format!("must be greater than -1, got {}", self.discount_rate),
            ));
        }

        Ok(())
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(name, format!("must be a finite number, got {}", value)))
    }
}
