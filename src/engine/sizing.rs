//! Forward (consumption → system) and budget-driven (budget → system) sizing.

use serde::Serialize;

use super::constants::{
    CO2_EMISSION_FACTOR_KG_PER_KWH, DAYS_PER_MONTH, INVERTER_COST_SHARE,
    INVERTER_OVERSIZING_RATIO, LABOR_COST_SHARE, PANEL_UNIT_AREA_M2, PANEL_UNIT_WP,
    PANELS_COST_SHARE, PERFORMANCE_RATIO, STRUCTURE_COST_SHARE, round2,
};

/// Inputs shared by both sizing modes.
///
/// Range validation happens at the configuration boundary; these functions
/// assume consumption > 0 (≥ 0 for the budget mode), tariff ≥ 0, and
/// strictly positive irradiance and cost rate.
#[derive(Debug, Clone, Copy)]
pub struct SizingInputs {
    /// Average monthly consumption (kWh).
    pub monthly_consumption_kwh: f64,
    /// Total tariff rate, the sum of all entered components (currency/kWh).
    pub tariff_rate: f64,
    /// Average daily peak-sun-equivalent hours for the site.
    pub irradiance_hours: f64,
    /// Regional installed cost per watt-peak (currency/Wp).
    pub cost_per_watt_peak: f64,
}

/// Installed-cost breakdown by fixed category shares.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostBreakdown {
    /// Photovoltaic panels (40%).
    pub panels: f64,
    /// Inverter(s) (20%).
    pub inverters: f64,
    /// Structures, cables, and protections (15%).
    pub structure_and_cabling: f64,
    /// Labor and design (25%).
    pub labor_and_design: f64,
}

impl CostBreakdown {
    fn from_total(total_cost: f64) -> Self {
        Self {
            panels: round2(total_cost * PANELS_COST_SHARE),
            inverters: round2(total_cost * INVERTER_COST_SHARE),
            structure_and_cabling: round2(total_cost * STRUCTURE_COST_SHARE),
            labor_and_design: round2(total_cost * LABOR_COST_SHARE),
        }
    }

    /// Sum of all categories. Equals the total cost within 2-dp rounding.
    pub fn total(&self) -> f64 {
        self.panels + self.inverters + self.structure_and_cabling + self.labor_and_design
    }
}

/// A sized photovoltaic system and its financial/environmental outcomes.
///
/// Currency, area, and power fields are rounded to 2 decimal places;
/// `panel_count` is an exact integer.
#[derive(Debug, Clone, Serialize)]
pub struct SystemSizing {
    /// Whole panels to install, never below one.
    pub panel_count: u32,
    /// Installed DC power (kWp).
    pub system_power_kwp: f64,
    /// Recommended inverter AC rating (kW), advisory 125% oversizing.
    pub inverter_power_kw: f64,
    /// Minimum roof area for the array (m²).
    pub array_area_m2: f64,
    /// Total installed cost (currency).
    pub total_cost: f64,
    /// Expected average monthly generation (kWh).
    pub monthly_generation_kwh: f64,
    /// Gross monthly savings, capped at what is actually offset (currency).
    pub monthly_savings: f64,
    /// CO₂ avoided per year (kg).
    pub annual_co2_avoided_kg: f64,
    /// Installed-cost breakdown by category.
    pub cost_breakdown: CostBreakdown,
}

/// Sizes a system to cover the household's monthly consumption.
///
/// The installable power is a whole number of panels, so the final system
/// is always at least as large as the theoretical requirement once rounded
/// (and never below one panel, even for near-zero consumption).
pub fn size_from_consumption(inputs: &SizingInputs) -> SystemSizing {
    let daily_consumption_kwh = inputs.monthly_consumption_kwh / DAYS_PER_MONTH;
    let required_kwp = daily_consumption_kwh / (inputs.irradiance_hours * PERFORMANCE_RATIO);
    let panel_count = panel_count_for(required_kwp * 1000.0);

    let system_wp = f64::from(panel_count) * PANEL_UNIT_WP;
    let total_cost = system_wp * inputs.cost_per_watt_peak;

    build_sizing(panel_count, system_wp / 1000.0, total_cost, inputs)
}

/// Sizes a system around the amount the household is willing to spend.
///
/// Inverts the cost step of the forward calculation: the system power is
/// derived from the budget, and `total_cost` stays fixed to the stated
/// budget rather than being recomputed from the rounded panel count. The
/// implied per-panel cost may therefore differ slightly from the regional
/// rate; the two modes are deliberately not round-trip-consistent.
pub fn size_from_budget(budget: f64, inputs: &SizingInputs) -> SystemSizing {
    let system_wp = budget / inputs.cost_per_watt_peak;
    let panel_count = panel_count_for(system_wp);

    build_sizing(panel_count, system_wp / 1000.0, budget, inputs)
}

/// Whole panels for the required DC power, rounded to nearest, minimum one.
fn panel_count_for(required_wp: f64) -> u32 {
    let rounded = (required_wp / PANEL_UNIT_WP).round();
    (rounded as u32).max(1)
}

fn build_sizing(
    panel_count: u32,
    system_kwp: f64,
    total_cost: f64,
    inputs: &SizingInputs,
) -> SystemSizing {
    let monthly_generation_kwh =
        system_kwp * inputs.irradiance_hours * PERFORMANCE_RATIO * DAYS_PER_MONTH;
    // Savings never exceed what is actually offset; surplus becomes
    // net-metering credits, handled by the billing resolver.
    let monthly_savings =
        monthly_generation_kwh.min(inputs.monthly_consumption_kwh) * inputs.tariff_rate;
    let annual_co2_avoided_kg =
        monthly_generation_kwh * 12.0 * CO2_EMISSION_FACTOR_KG_PER_KWH;

    SystemSizing {
        panel_count,
        system_power_kwp: round2(system_kwp),
        inverter_power_kw: round2(system_kwp / INVERTER_OVERSIZING_RATIO),
        array_area_m2: round2(f64::from(panel_count) * PANEL_UNIT_AREA_M2),
        total_cost: round2(total_cost),
        monthly_generation_kwh: round2(monthly_generation_kwh),
        monthly_savings: round2(monthly_savings),
        annual_co2_avoided_kg: round2(annual_co2_avoided_kg),
        cost_breakdown: CostBreakdown::from_total(total_cost),
    }
}
