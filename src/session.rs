//! Process-wide session state: current form values and the last committed
//! result.
//!
//! There is exactly one logical actor at a time, so the session is plain
//! owned state: each "simulate" action reads the current values and
//! replaces the committed report wholesale (last-write-wins).

use crate::config::{BudgetMode, ConfigError, ScenarioConfig};
use crate::engine::{SizingInputs, SystemSizing, billing, payback, seasonal, sizing};
use crate::report::SimulationReport;

/// Current form values plus the last committed report.
#[derive(Debug, Clone)]
pub struct Session {
    scenario: ScenarioConfig,
    tariff_components: Vec<f64>,
    last_report: Option<SimulationReport>,
}

/// Returns a new component sequence with `value` appended.
///
/// The "add one more" interaction is a pure append: callers replace their
/// sequence with the returned one instead of mutating shared state.
pub fn appended(components: &[f64], value: f64) -> Vec<f64> {
    let mut next = components.to_vec();
    next.push(value);
    next
}

impl Session {
    /// Starts a session from a validated scenario.
    pub fn new(scenario: ScenarioConfig) -> Self {
        let tariff_components = scenario.tariff.components.clone();
        Self {
            scenario,
            tariff_components,
            last_report: None,
        }
    }

    /// The scenario backing this session.
    pub fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }

    /// Mutable access for form editing.
    pub fn scenario_mut(&mut self) -> &mut ScenarioConfig {
        &mut self.scenario
    }

    /// The ordered tariff components currently entered.
    pub fn tariff_components(&self) -> &[f64] {
        &self.tariff_components
    }

    /// Total tariff rate: always the sum of the entered components.
    pub fn tariff_total(&self) -> f64 {
        self.tariff_components.iter().sum()
    }

    /// Appends one more rate component (a new field on the form).
    pub fn push_tariff_component(&mut self, value: f64) {
        self.tariff_components = appended(&self.tariff_components, value);
    }

    /// Replaces the component at `index`, leaving others untouched.
    pub fn set_tariff_component(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.tariff_components.get_mut(index) {
            *slot = value;
        }
    }

    /// Validates the current form values: the scenario with the edited
    /// tariff components in place of the seeded ones.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut scenario = self.scenario.clone();
        scenario.tariff.components = self.tariff_components.clone();
        scenario.validate()
    }

    /// Consumption figure in effect: the billed value, or the appliance
    /// estimate when no bill is available.
    pub fn effective_consumption_kwh(&self) -> f64 {
        let demand = &self.scenario.demand;
        demand.monthly_consumption_kwh.unwrap_or_else(|| {
            demand
                .appliances
                .unwrap_or_default()
                .estimated_monthly_kwh()
        })
    }

    fn sizing_inputs(&self) -> SizingInputs {
        SizingInputs {
            monthly_consumption_kwh: self.effective_consumption_kwh(),
            tariff_rate: self.tariff_total(),
            irradiance_hours: self.scenario.site.irradiance_hours_per_day,
            cost_per_watt_peak: self.scenario.site.cost_per_watt_peak,
        }
    }

    /// Consumption-driven sizing shown as a live cost hint before the user
    /// commits. Not stored.
    pub fn preview(&self) -> SystemSizing {
        sizing::size_from_consumption(&self.sizing_inputs())
    }

    /// Default custom-budget suggestion: the site estimate rounded to the
    /// nearest hundred.
    pub fn suggested_budget(&self) -> f64 {
        (self.preview().total_cost / 100.0).round() * 100.0
    }

    /// Runs the committed calculation and replaces the stored report.
    ///
    /// The budgeting mode selects the calculator: the site estimate runs
    /// forward from consumption, a custom budget sizes around the stated
    /// amount (falling back to the site estimate if the amount is absent).
    pub fn simulate(&mut self) -> &SimulationReport {
        let inputs = self.sizing_inputs();
        let sizing = match self.scenario.budget.mode {
            BudgetMode::SiteEstimate => sizing::size_from_consumption(&inputs),
            BudgetMode::Custom => {
                let forward = sizing::size_from_consumption(&inputs);
                let budget = self.scenario.budget.amount.unwrap_or(forward.total_cost);
                sizing::size_from_budget(budget, &inputs)
            }
        };

        let billing = billing::resolve(
            sizing.monthly_generation_kwh,
            inputs.monthly_consumption_kwh,
            inputs.tariff_rate,
            self.scenario.billing.connection_type,
        );
        let payback = payback::payback_period(sizing.total_cost, sizing.monthly_savings);
        let monthly_generation_profile = seasonal::monthly_profile(sizing.monthly_generation_kwh);

        let report = SimulationReport {
            city: self.scenario.site.city.clone(),
            monthly_consumption_kwh: inputs.monthly_consumption_kwh,
            tariff_rate: inputs.tariff_rate,
            sizing,
            billing,
            payback,
            monthly_generation_profile,
        };
        self.last_report.insert(report)
    }

    /// The last committed report, if any.
    pub fn last_report(&self) -> Option<&SimulationReport> {
        self.last_report.as_ref()
    }

    /// Drops the committed report (session end).
    pub fn clear(&mut self) {
        self.last_report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NetBalance;

    #[test]
    fn appended_is_pure() {
        let first = vec![0.85];
        let second = appended(&first, 0.31);
        assert_eq!(first, vec![0.85]);
        assert_eq!(second, vec![0.85, 0.31]);
    }

    #[test]
    fn tariff_total_tracks_components() {
        let mut session = Session::new(ScenarioConfig::baseline());
        assert!((session.tariff_total() - 0.85).abs() < 1e-9);
        session.push_tariff_component(0.31);
        assert_eq!(session.tariff_components(), &[0.85, 0.31]);
        assert!((session.tariff_total() - 1.16).abs() < 1e-9);
        session.set_tariff_component(1, 0.30);
        assert!((session.tariff_total() - 1.15).abs() < 1e-9);
    }

    #[test]
    fn effective_consumption_prefers_billed_figure() {
        let session = Session::new(ScenarioConfig::baseline());
        assert_eq!(session.effective_consumption_kwh(), 300.0);
    }

    #[test]
    fn effective_consumption_falls_back_to_estimate() {
        let session = Session::new(ScenarioConfig::new_build());
        // default appliance counts: 3 residents, 1 shower, 1 AC
        assert_eq!(session.effective_consumption_kwh(), 350.0);
    }

    #[test]
    fn simulate_commits_and_replaces_wholesale() {
        let mut session = Session::new(ScenarioConfig::baseline());
        assert!(session.last_report().is_none());

        session.simulate();
        let first_panels = session.last_report().map(|r| r.sizing.panel_count);
        assert_eq!(first_panels, Some(5));

        session.scenario_mut().demand.monthly_consumption_kwh = Some(900.0);
        session.simulate();
        let second = session.last_report();
        assert_eq!(second.map(|r| r.monthly_consumption_kwh), Some(900.0));
        assert!(second.map(|r| r.sizing.panel_count) > first_panels);
    }

    #[test]
    fn simulate_budget_mode_respects_amount() {
        let mut session = Session::new(ScenarioConfig::budget_capped());
        let report = session.simulate();
        assert_eq!(report.sizing.total_cost, 20_000.0);
    }

    #[test]
    fn simulate_surplus_reports_credits() {
        let mut session = Session::new(ScenarioConfig::baseline());
        let report = session.simulate();
        // 5 panels generate 328.68 kWh against 300 kWh consumption
        assert!(matches!(
            report.billing.balance,
            NetBalance::Surplus { credited_kwh } if credited_kwh > 0.0
        ));
        assert_eq!(report.billing.estimated_new_bill, 42.5);
    }

    #[test]
    fn preview_matches_forward_sizing_and_is_not_committed() {
        let session = Session::new(ScenarioConfig::baseline());
        let preview = session.preview();
        assert_eq!(preview.panel_count, 5);
        assert!(session.last_report().is_none());
    }

    #[test]
    fn suggested_budget_rounds_to_hundreds() {
        let session = Session::new(ScenarioConfig::baseline());
        // preview cost 6847.50 → 6800
        assert_eq!(session.suggested_budget(), 6800.0);
    }

    #[test]
    fn clear_drops_the_report() {
        let mut session = Session::new(ScenarioConfig::baseline());
        session.simulate();
        session.clear();
        assert!(session.last_report().is_none());
    }
}
