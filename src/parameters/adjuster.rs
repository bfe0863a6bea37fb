//! Apply partial overrides on top of a parameter set
//!
//! Overrides come from a JSON parameter file, command line flags or an HTTP
//! request body. Every field is optional; missing fields keep the base value.

use super::{tax_deduction_for, ProjectParameters};
use clap::Args;
use log::debug;
use serde::{Deserialize, Serialize};

/// Optional replacement for each project parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterOverrides {
    /// Project horizon in years
    #[arg(long)]
    pub lifetime_years: Option<u32>,

    /// Up-front investment (COP)
    #[arg(long)]
    pub initial_investment: Option<f64>,

    /// Yearly operation and maintenance cost (COP)
    #[arg(long)]
    pub annual_om_cost: Option<f64>,

    /// Energy tariff in year 1 (COP/kWh)
    #[arg(long)]
    pub initial_energy_tariff: Option<f64>,

    /// Yearly tariff growth as a fraction (0.10 = 10%)
    #[arg(long)]
    pub tariff_inflation_rate: Option<f64>,

    /// Total tax deduction (COP); defaults to half the investment
    #[arg(long)]
    pub total_tax_deduction: Option<f64>,

    /// Years the tax deduction is spread over
    #[arg(long)]
    pub deduction_years: Option<u32>,

    /// Client consumption per month (kWh)
    #[arg(long)]
    pub monthly_client_consumption: Option<f64>,

    /// Discount rate as a fraction (0.08 = 8%)
    #[arg(long)]
    pub discount_rate: Option<f64>,
}

impl ParameterOverrides {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine two override sets; fields set in `self` win over `lower`
    pub fn layered_over(self, lower: ParameterOverrides) -> ParameterOverrides {
        ParameterOverrides {
            lifetime_years: self.lifetime_years.or(lower.lifetime_years),
            initial_investment: self.initial_investment.or(lower.initial_investment),
            annual_om_cost: self.annual_om_cost.or(lower.annual_om_cost),
            initial_energy_tariff: self.initial_energy_tariff.or(lower.initial_energy_tariff),
            tariff_inflation_rate: self.tariff_inflation_rate.or(lower.tariff_inflation_rate),
            total_tax_deduction: self.total_tax_deduction.or(lower.total_tax_deduction),
            deduction_years: self.deduction_years.or(lower.deduction_years),
            monthly_client_consumption: self
                .monthly_client_consumption
                .or(lower.monthly_client_consumption),
            discount_rate: self.discount_rate.or(lower.discount_rate),
        }
    }

    /// Produce a new parameter set from `base` with these overrides applied.
    ///
    /// When the investment changes but no explicit deduction is given, the
    /// deduction is re-derived from the new investment so it stays at the
    /// fixed fraction.
    pub fn apply(&self, base: &ProjectParameters) -> ProjectParameters {
        if self.is_empty() {
            return base.clone();
        }

        let initial_investment = self.initial_investment.unwrap_or(base.initial_investment);
        let total_tax_deduction = match (self.total_tax_deduction, self.initial_investment) {
            (Some(deduction), _) => deduction,
            (None, Some(investment)) => tax_deduction_for(investment),
            (None, None) => base.total_tax_deduction,
        };

        let params = ProjectParameters {
            lifetime_years: self.lifetime_years.unwrap_or(base.lifetime_years),
            initial_investment,
            annual_om_cost: self.annual_om_cost.unwrap_or(base.annual_om_cost),
            initial_energy_tariff: self.initial_energy_tariff.unwrap_or(base.initial_energy_tariff),
            tariff_inflation_rate: self.tariff_inflation_rate.unwrap_or(base.tariff_inflation_rate),
            total_tax_deduction,
            deduction_years: self.deduction_years.unwrap_or(base.deduction_years),
            monthly_client_consumption: self
                .monthly_client_consumption
                .unwrap_or(base.monthly_client_consumption),
            discount_rate: self.discount_rate.unwrap_or(base.discount_rate),
        };
        debug!("applied overrides {:?}", self);
        params
    }
}
