//! Dashboard presentation adapter
//!
//! Turns a projection into the metrics panel, chart series and table the
//! dashboard shows. Nothing here recomputes financial figures.

pub mod format;
pub mod charts;
pub mod table;

pub use charts::{Chart, DashboardCharts, ReferenceLine, Series};
pub use format::{format_cop, format_payback, format_percent};
pub use table::write_table_csv;

use crate::error::Result;
use crate::parameters::ProjectParameters;
use crate::projection::{ProjectionResult, SummaryIndicators, YearRecord};
use serde::{Deserialize, Serialize};

/// A single labelled headline figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    fn new(label: &str, value: String) -> Self {
        Self { label: label.to_string(), value }
    }
}

/// Formatted summary indicators, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsPanel {
    pub net_present_value: Metric,
    pub internal_rate_of_return: Metric,
    pub simple_payback: Metric,
    pub discounted_payback: Metric,
}

impl MetricsPanel {
    pub fn build(params: &ProjectParameters, summary: &SummaryIndicators) -> Self {
        Self {
            net_present_value: Metric::new(
                "Net Present Value (NPV)",
                format_cop(summary.net_present_value),
            ),
            internal_rate_of_return: Metric::new(
                "Internal Rate of Return (IRR)",
                format_percent(summary.internal_rate_of_return),
            ),
            simple_payback: Metric::new(
                "Simple Payback",
                format_payback(summary.simple_payback_year, params.lifetime_years),
            ),
            discounted_payback: Metric::new(
                "Discounted Payback",
                format_payback(summary.discounted_payback_year, params.lifetime_years),
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        [
            &self.net_present_value,
            &self.internal_rate_of_return,
            &self.simple_payback,
            &self.discounted_payback,
        ]
        .into_iter()
    }
}

/// Everything the dashboard renders for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub parameters: ProjectParameters,
    pub metrics: MetricsPanel,
    pub summary: SummaryIndicators,
    pub charts: DashboardCharts,
    pub records: Vec<YearRecord>,
}

impl Dashboard {
    pub fn build(project_name: &str, params: &ProjectParameters, result: &ProjectionResult) -> Self {
        Self {
            title: format!("Financial Analysis of {}", project_name),
            parameters: params.clone(),
            metrics: MetricsPanel::build(params, &result.summary),
            summary: result.summary.clone(),
            charts: DashboardCharts::build(params, result),
            records: result.records.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plain-text summary: title, metrics and a compact yearly table
pub fn render_summary(dashboard: &Dashboard) -> String {
    let mut out = format!(
        "{}\n{}\n\n",
        dashboard.title,
        "=".repeat(dashboard.title.len())
    );
    for metric in dashboard.metrics.iter() {
        out.push_str(&format!("{:<32} {}\n", metric.label, metric.value));
    }

    out.push_str(&format!(
        "\n{:>4} | {:>18} | {:>16} | {:>14} | {:>18} | {:>18} | {:>18}\n",
        "Year", "Energy Revenue", "Tax Deduction", "O&M Cost", "Net Cash Flow", "Discounted", "Cumulative Net"
    ));
    for r in &dashboard.records {
        out.push_str(&format!(
            "{:>4} | {:>18.0} | {:>16.0} | {:>14.0} | {:>18.0} | {:>18.0} | {:>18.0}\n",
            r.year,
            r.energy_revenue,
            r.tax_deduction,
            r.om_cost,
            r.net_cash_flow,
            r.discounted_cash_flow,
            r.cumulative_net,
        ));
    }

    out
}
