//! Solar Projection - deterministic cash-flow projection for a solar energy investment
//!
//! This library provides:
//! - The project parameter set with its defaults, validation and overrides
//! - A yearly projection engine (tariff growth, tax deduction, discounting)
//! - Summary indicators (NPV, simplified IRR, simple and discounted payback)
//! - A report adapter producing metrics, chart series, a CSV table and JSON

pub mod error;
pub mod parameters;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use parameters::{ParameterOverrides, ProjectParameters};
pub use projection::{compute, ProjectionEngine, ProjectionResult, SummaryIndicators, YearRecord};
pub use report::Dashboard;
