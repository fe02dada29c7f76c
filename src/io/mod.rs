//! Report import/export helpers.

/// CSV export of the monthly comparison series.
pub mod export;
