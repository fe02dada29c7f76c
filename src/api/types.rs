//! API response and query types.
//!
//! Month records use the CSV export column names for consistency across
//! output formats.

use serde::{Deserialize, Serialize};

use crate::engine::seasonal::MONTH_LABELS;
use crate::report::SimulationReport;

/// One month of the consumption-vs-generation comparison series.
#[derive(Debug, Serialize)]
pub struct MonthRecord {
    /// Calendar month index (0 = January).
    pub month_index: usize,
    /// Month label, matching the CSV export.
    pub month: &'static str,
    /// Household consumption (kWh, flat across the year).
    pub consumption_kwh: f64,
    /// Seasonal generation for this month (kWh).
    pub generation_kwh: f64,
}

impl MonthRecord {
    /// Builds the record for `month_index` out of a committed report.
    pub fn from_report(report: &SimulationReport, month_index: usize) -> Self {
        Self {
            month_index,
            month: MONTH_LABELS[month_index],
            consumption_kwh: report.monthly_consumption_kwh,
            generation_kwh: report.monthly_generation_profile[month_index],
        }
    }
}

/// Optional range query parameters for the series endpoint.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Start month index (inclusive, 0 = January).
    pub from: Option<usize>,
    /// End month index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
