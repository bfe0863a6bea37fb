//! Chart data series for the dashboard
//!
//! Only the data is produced here; drawing is left to whatever front end
//! consumes the serialized dashboard.

use crate::parameters::ProjectParameters;
use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

const MILLION: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One plotted series, x values are project years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub x: Vec<u32>,
    pub y: Vec<f64>,
}

/// Straight marker line across the plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub label: String,
    pub orientation: Orientation,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

/// The three dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub cash_flows: Chart,
    pub cumulative_vs_investment: Chart,
    pub savings_vs_costs: Chart,
}

impl DashboardCharts {
    pub fn build(params: &ProjectParameters, result: &ProjectionResult) -> Self {
        Self {
            cash_flows: cash_flow_chart(result),
            cumulative_vs_investment: cumulative_chart(params, result),
            savings_vs_costs: savings_chart(result),
        }
    }
}

fn series<F>(label: &str, kind: SeriesKind, result: &ProjectionResult, value: F) -> Series
where
    F: Fn(&crate::projection::YearRecord) -> f64,
{
    Series {
        label: label.to_string(),
        kind,
        x: result.records.iter().map(|r| r.year).collect(),
        y: result.records.iter().map(value).collect(),
    }
}

/// Net and discounted flows per year, in COP
fn cash_flow_chart(result: &ProjectionResult) -> Chart {
    Chart {
        title: "Annual Cash Flows".to_string(),
        x_label: "Year".to_string(),
        y_label: "COP".to_string(),
        series: vec![
            series("Net Cash Flow", SeriesKind::Line, result, |r| r.net_cash_flow),
            series("Discounted Cash Flow", SeriesKind::Line, result, |r| r.discounted_cash_flow),
        ],
        reference_lines: Vec::new(),
    }
}

/// Cumulative net flow against the investment, in millions of COP.
/// The payback marker is left out entirely when payback is never reached.
fn cumulative_chart(params: &ProjectParameters, result: &ProjectionResult) -> Chart {
    let mut reference_lines = vec![ReferenceLine {
        label: "Initial Investment".to_string(),
        orientation: Orientation::Horizontal,
        value: params.initial_investment / MILLION,
    }];

    if let Some(year) = result.summary.simple_payback_year {
        reference_lines.push(ReferenceLine {
            label: format!("Payback: Year {}", year),
            orientation: Orientation::Vertical,
            value: year as f64,
        });
    }

    Chart {
        title: "Cumulative Cash Flow vs Investment".to_string(),
        x_label: "Year".to_string(),
        y_label: "Millions of COP".to_string(),
        series: vec![series("Cumulative Net", SeriesKind::Line, result, |r| {
            r.cumulative_net / MILLION
        })],
        reference_lines,
    }
}

/// Energy revenue as bars with the O&M cost line, in millions of COP
fn savings_chart(result: &ProjectionResult) -> Chart {
    Chart {
        title: "Energy Revenue vs Maintenance Costs".to_string(),
        x_label: "Year".to_string(),
        y_label: "Millions of COP".to_string(),
        series: vec![
            series("Energy Revenue", SeriesKind::Bar, result, |r| r.energy_revenue / MILLION),
            series("O&M Cost", SeriesKind::Line, result, |r| r.om_cost / MILLION),
        ],
        reference_lines: Vec::new(),
    }
}
