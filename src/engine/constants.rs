//! Simulation constants shared across the sizing engine.

/// Fraction of theoretical DC output actually delivered after inverter,
/// wiring, soiling, and temperature losses.
pub const PERFORMANCE_RATIO: f64 = 0.80;

/// Rated power of one panel under standard test conditions (Wp).
pub const PANEL_UNIT_WP: f64 = 550.0;

/// Footprint of one panel (m²).
pub const PANEL_UNIT_AREA_M2: f64 = 2.3;

/// Grid emission factor (kg CO₂ per kWh).
pub const CO2_EMISSION_FACTOR_KG_PER_KWH: f64 = 0.075;

/// DC-to-AC oversizing ratio used for the recommended inverter size.
pub const INVERTER_OVERSIZING_RATIO: f64 = 1.25;

/// Billing-month length used for monthly/daily kWh conversions.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Installed-cost share: photovoltaic panels.
pub const PANELS_COST_SHARE: f64 = 0.40;
/// Installed-cost share: inverter(s).
pub const INVERTER_COST_SHARE: f64 = 0.20;
/// Installed-cost share: structures, cables, and protections.
pub const STRUCTURE_COST_SHARE: f64 = 0.15;
/// Installed-cost share: labor and design.
pub const LABOR_COST_SHARE: f64 = 0.25;

/// Rounds to 2 decimal places. Applied to currency, area, and power
/// outputs; panel counts stay exact integers.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
