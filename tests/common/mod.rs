//! Shared test fixtures for integration tests.

use solar_sim::config::ScenarioConfig;
use solar_sim::engine::SizingInputs;
use solar_sim::session::Session;

/// Baseline sizing inputs: 300 kWh bill, 0.85 tariff, Rio das Ostras site.
pub fn baseline_inputs() -> SizingInputs {
    SizingInputs {
        monthly_consumption_kwh: 300.0,
        tariff_rate: 0.85,
        irradiance_hours: 4.98,
        cost_per_watt_peak: 2.49,
    }
}

/// Baseline inputs with a different consumption figure.
pub fn inputs_with_consumption(monthly_consumption_kwh: f64) -> SizingInputs {
    SizingInputs {
        monthly_consumption_kwh,
        ..baseline_inputs()
    }
}

/// Fresh session over the baseline scenario.
pub fn baseline_session() -> Session {
    Session::new(ScenarioConfig::baseline())
}
