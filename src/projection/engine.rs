//! Core projection engine

use super::cashflows::{ProjectionResult, SummaryIndicators, YearRecord};
use super::indicators::{approximate_irr, net_present_value, payback_year};
use crate::error::{ProjectionError, Result};
use crate::parameters::ProjectParameters;
use log::{debug, trace};

/// Validate `params` and project the yearly cash flows.
///
/// Fails with `InvalidParameter` when a precondition is broken or a figure
/// overflows; callers never see a partial or non-finite series.
pub fn compute(params: &ProjectParameters) -> Result<ProjectionResult> {
    let engine = ProjectionEngine::new(params.clone())?;
    engine.project()
}

/// Projection engine bound to a validated parameter set
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ProjectParameters,
}

impl ProjectionEngine {
    /// Create an engine, rejecting parameters that break a precondition
    pub fn new(params: ProjectParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ProjectParameters {
        &self.params
    }

    /// Run the projection over the full horizon
    pub fn project(&self) -> Result<ProjectionResult> {
        let records = self.project_years();
        let summary = self.summarize(&records);
        ensure_finite(&records, &summary)?;

        debug!(
            "Projected {} years: NPV={:.2}, IRR={:?}%, payback={:?}/{:?}",
            records.len(),
            summary.net_present_value,
            summary.internal_rate_of_return,
            summary.simple_payback_year,
            summary.discounted_payback_year,
        );

        Ok(ProjectionResult { records, summary })
    }

    /// Yearly records with running totals, computed in a single pass
    fn project_years(&self) -> Vec<YearRecord> {
        let p = &self.params;
        let annual_consumption = p.annual_consumption();
        let annual_deduction = p.annual_deduction();

        let mut records = Vec::with_capacity(p.lifetime_years as usize);
        let mut cumulative_net = 0.0;
        let mut cumulative_discounted = 0.0;

        for year in 1..=p.lifetime_years {
            let energy_tariff = self.tariff_for_year(year);
            let energy_revenue = annual_consumption * energy_tariff;
            let tax_deduction = if year <= p.deduction_years { annual_deduction } else { 0.0 };
            let om_cost = p.annual_om_cost;

            let net_cash_flow = energy_revenue + tax_deduction - om_cost;
            let discounted_cash_flow = net_cash_flow / self.discount_factor(year);

            cumulative_net += net_cash_flow;
            cumulative_discounted += discounted_cash_flow;

            trace!(
                "year {:2}: tariff={:.2} revenue={:.2} net={:.2} discounted={:.2}",
                year, energy_tariff, energy_revenue, net_cash_flow, discounted_cash_flow
            );

            records.push(YearRecord {
                year,
                energy_tariff,
                energy_revenue,
                tax_deduction,
                om_cost,
                net_cash_flow,
                discounted_cash_flow,
                cumulative_net,
                cumulative_discounted,
            });
        }

        records
    }

    fn summarize(&self, records: &[YearRecord]) -> SummaryIndicators {
        let p = &self.params;
        let total_net = records.last().map(|r| r.cumulative_net).unwrap_or(0.0);
        let total_discounted = records.last().map(|r| r.cumulative_discounted).unwrap_or(0.0);

        SummaryIndicators {
            net_present_value: net_present_value(total_discounted, p.initial_investment),
            internal_rate_of_return: approximate_irr(total_net, p.initial_investment, p.lifetime_years),
            simple_payback_year: payback_year(records, |r| r.cumulative_net, p.initial_investment),
            discounted_payback_year: payback_year(
                records,
                |r| r.cumulative_discounted,
                p.initial_investment,
            ),
        }
    }

    /// Tariff after `year - 1` years of compounding inflation
    fn tariff_for_year(&self, year: u32) -> f64 {
        let growth = 1.0 + self.params.tariff_inflation_rate;
        self.params.initial_energy_tariff * growth.powf((year - 1) as f64)
    }

    /// Divisor bringing a year-end amount back to present value
    fn discount_factor(&self, year: u32) -> f64 {
        (1.0 + self.params.discount_rate).powf(year as f64)
    }
}

/// Reject a projection whose figures left the f64 range
fn ensure_finite(records: &[YearRecord], summary: &SummaryIndicators) -> Result<()> {
    for r in records {
        let source = if !r.energy_tariff.is_finite() {
            Some(("tariff_inflation_rate", "energy tariff"))
        } else if !(r.energy_revenue.is_finite() && r.net_cash_flow.is_finite() && r.cumulative_net.is_finite()) {
            Some(("monthly_client_consumption", "net cash flow"))
        } else if !(r.discounted_cash_flow.is_finite() && r.cumulative_discounted.is_finite()) {
            Some(("discount_rate", "discounted cash flow"))
        } else {
            None
        };

        if let Some((name, figure)) = source {
            return Err(ProjectionError::invalid(
                name,
                format!("{} is not finite in year {}", figure, r.year),
            ));
        }
    }

    if !summary.net_present_value.is_finite() {
        return Err(ProjectionError::invalid("initial_investment", "net present value is not finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_reference_values() {
        let result = compute(&ProjectParameters::default()).unwrap();
        let first = &result.records[0];

        assert_eq!(first.year, 1);
        assert_eq!(first.energy_tariff, 1_000.0);
        assert_eq!(first.energy_revenue, 154_044_000.0);
        assert!((first.tax_deduction - 11_663_333.33).abs() < 0.01);
        assert_eq!(first.om_cost, 3_000_000.0);
        assert!((first.net_cash_flow - 162_707_333.33).abs() < 0.01);
        assert!((first.discounted_cash_flow - 150_654_938.27).abs() < 0.01);
        assert_eq!(first.cumulative_net, first.net_cash_flow);
        assert_eq!(first.cumulative_discounted, first.discounted_cash_flow);
    }

    #[test]
    fn test_tariff_compounds() {
        let engine = ProjectionEngine::new(ProjectParameters::default()).unwrap();
        assert_eq!(engine.tariff_for_year(1), 1_000.0);
        assert!((engine.tariff_for_year(2) - 1_100.0).abs() < 1e-9);
        assert!((engine.tariff_for_year(3) - 1_210.0).abs() < 1e-9);
    }

    #[test]
    fn test_deduction_window() {
        let result = compute(&ProjectParameters::default()).unwrap();
        let annual = ProjectParameters::default().annual_deduction();

        for r in &result.records {
            if r.year <= 15 {
                assert_eq!(r.tax_deduction, annual);
            } else {
                assert_eq!(r.tax_deduction, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_rates_are_flat() {
        let params = ProjectParameters {
            lifetime_years: 3,
            tariff_inflation_rate: 0.0,
            discount_rate: 0.0,
            ..Default::default()
        };
        let result = compute(&params).unwrap();

        for r in &result.records {
            assert_eq!(r.energy_tariff, 1_000.0);
            assert_eq!(r.discounted_cash_flow, r.net_cash_flow);
        }
    }

    #[test]
    fn test_invalid_params_produce_no_output() {
        let params = ProjectParameters {
            initial_investment: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            compute(&params),
            Err(ProjectionError::InvalidParameter { name: "initial_investment", .. })
        ));
        assert!(ProjectionEngine::new(params).is_err());
    }

    #[test]
    fn test_overflowing_tariff_rejected() {
        let params = ProjectParameters {
            tariff_inflation_rate: 1e300,
            lifetime_years: 3,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert!(matches!(
            compute(&params),
            Err(ProjectionError::InvalidParameter { name: "tariff_inflation_rate", .. })
        ));
    }

    #[test]
    fn test_vanishing_discount_factor_rejected() {
        let params = ProjectParameters {
            discount_rate: -0.999_999,
            lifetime_years: 100,
            ..Default::default()
        };
        assert!(matches!(
            compute(&params),
            Err(ProjectionError::InvalidParameter { name: "discount_rate", .. })
        ));
    }

    #[test]
    fn test_longest_horizon_stays_finite() {
        let params = ProjectParameters {
            lifetime_years: crate::parameters::MAX_LIFETIME_YEARS,
            ..Default::default()
        };
        let result = compute(&params).unwrap();

        assert_eq!(result.len(), 100);
        assert!(result.summary.net_present_value.is_finite());
        assert!(result.records.iter().all(|r| r.cumulative_discounted.is_finite()));
    }
}
