//! Interactive form state and field model.

use crate::config::{BudgetMode, ScenarioConfig};
use crate::engine::ApplianceCounts;
use crate::session::Session;

/// One editable numeric field on the form.
///
/// The visible field list depends on the demand mode (bill vs. estimate)
/// and the budgeting mode, so fields are resolved per frame rather than
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Monthly consumption off the bill (kWh).
    Consumption,
    /// People living in the house.
    Residents,
    /// Electric showers.
    ElectricShowers,
    /// Air-conditioning units.
    AirConditioners,
    /// Auxiliary freezers.
    Freezers,
    /// Home-office residents.
    HomeOffice,
    /// One tariff rate component (TE or TUSD).
    TariffComponent(usize),
    /// Custom budget amount.
    BudgetAmount,
}

impl Field {
    /// Form label for this field.
    pub fn label(self) -> String {
        match self {
            Field::Consumption => "Monthly consumption (kWh)".to_string(),
            Field::Residents => "Residents".to_string(),
            Field::ElectricShowers => "Electric showers".to_string(),
            Field::AirConditioners => "Air conditioners".to_string(),
            Field::Freezers => "Extra freezers".to_string(),
            Field::HomeOffice => "Home office residents".to_string(),
            Field::TariffComponent(i) => format!("Tariff component {} (R$/kWh)", i + 1),
            Field::BudgetAmount => "Budget amount (R$)".to_string(),
        }
    }
}

/// Interactive form application state.
pub struct App {
    /// Session holding form values and the committed report.
    pub session: Session,
    /// Index of the focused field in the current field list.
    pub focus: usize,
    /// Edit buffer for the focused field.
    pub edit: String,
    /// One-line feedback (validation error or commit confirmation).
    pub status: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the form app over a scenario.
    pub fn new(scenario: ScenarioConfig) -> Self {
        let session = Session::new(scenario);
        let mut app = Self {
            session,
            focus: 0,
            edit: String::new(),
            status: None,
            quit: false,
        };
        app.load_edit();
        app
    }

    /// The visible fields, in tab order, for the current modes.
    pub fn fields(&self) -> Vec<Field> {
        let scenario = self.session.scenario();
        let mut fields = Vec::new();

        if scenario.demand.monthly_consumption_kwh.is_some() {
            fields.push(Field::Consumption);
        } else {
            fields.extend([
                Field::Residents,
                Field::ElectricShowers,
                Field::AirConditioners,
                Field::Freezers,
                Field::HomeOffice,
            ]);
        }

        for i in 0..self.session.tariff_components().len() {
            fields.push(Field::TariffComponent(i));
        }

        if scenario.budget.mode == BudgetMode::Custom {
            fields.push(Field::BudgetAmount);
        }

        fields
    }

    /// The currently focused field.
    pub fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    fn appliances(&self) -> ApplianceCounts {
        self.session
            .scenario()
            .demand
            .appliances
            .unwrap_or_default()
    }

    /// Current value of a field, formatted for its edit buffer.
    pub fn field_value(&self, field: Field) -> String {
        let scenario = self.session.scenario();
        let counts = self.appliances();
        match field {
            Field::Consumption => format!(
                "{:.0}",
                scenario.demand.monthly_consumption_kwh.unwrap_or(0.0)
            ),
            Field::Residents => counts.residents.to_string(),
            Field::ElectricShowers => counts.electric_showers.to_string(),
            Field::AirConditioners => counts.air_conditioners.to_string(),
            Field::Freezers => counts.freezers.to_string(),
            Field::HomeOffice => counts.home_office.to_string(),
            Field::TariffComponent(i) => format!(
                "{:.2}",
                self.session.tariff_components().get(i).copied().unwrap_or(0.0)
            ),
            Field::BudgetAmount => {
                format!("{:.2}", scenario.budget.amount.unwrap_or(0.0))
            }
        }
    }

    /// Reloads the edit buffer from the focused field's current value.
    fn load_edit(&mut self) {
        self.edit = self.field_value(self.focused_field());
    }

    /// Parses the edit buffer into the focused field. Rejects (with a
    /// status message) anything that is not a number, keeping the old value.
    fn commit_edit(&mut self) {
        match self.focused_field() {
            Field::Consumption => {
                if let Some(value) = self.parse_value() {
                    self.session.scenario_mut().demand.monthly_consumption_kwh = Some(value);
                }
            }
            Field::Residents => self.set_count(|counts, n| counts.residents = n),
            Field::ElectricShowers => self.set_count(|counts, n| counts.electric_showers = n),
            Field::AirConditioners => self.set_count(|counts, n| counts.air_conditioners = n),
            Field::Freezers => self.set_count(|counts, n| counts.freezers = n),
            Field::HomeOffice => self.set_count(|counts, n| counts.home_office = n),
            Field::TariffComponent(i) => {
                if let Some(value) = self.parse_value() {
                    self.session.set_tariff_component(i, value);
                }
            }
            Field::BudgetAmount => {
                if let Some(value) = self.parse_value() {
                    self.session.scenario_mut().budget.amount = Some(value);
                }
            }
        }
    }

    fn parse_value(&mut self) -> Option<f64> {
        match self.edit.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.status = Some(format!("\"{}\" is not a number", self.edit));
                self.load_edit();
                None
            }
        }
    }

    fn set_count(&mut self, apply: impl FnOnce(&mut ApplianceCounts, u32)) {
        match self.edit.parse::<u32>() {
            Ok(count) => {
                let mut counts = self.appliances();
                apply(&mut counts, count);
                self.session.scenario_mut().demand.appliances = Some(counts);
            }
            Err(_) => {
                self.status = Some(format!("\"{}\" is not a whole number", self.edit));
                self.load_edit();
            }
        }
    }

    /// Moves focus to the next field, committing the current buffer.
    pub fn focus_next(&mut self) {
        self.commit_edit();
        self.focus = (self.focus + 1) % self.fields().len();
        self.load_edit();
    }

    /// Moves focus to the previous field, committing the current buffer.
    pub fn focus_prev(&mut self) {
        self.commit_edit();
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
        self.load_edit();
    }

    /// Types one character into the edit buffer.
    pub fn push_char(&mut self, c: char) {
        self.edit.push(c);
    }

    /// Deletes the last character of the edit buffer.
    pub fn backspace(&mut self) {
        self.edit.pop();
    }

    /// Switches between bill-based and appliance-estimate demand input.
    pub fn toggle_demand_mode(&mut self) {
        self.commit_edit();
        let demand = &mut self.session.scenario_mut().demand;
        if demand.monthly_consumption_kwh.is_some() {
            demand.monthly_consumption_kwh = None;
            if demand.appliances.is_none() {
                demand.appliances = Some(ApplianceCounts::default());
            }
        } else {
            demand.monthly_consumption_kwh = Some(300.0);
        }
        self.focus = 0;
        self.load_edit();
    }

    /// Cycles the connection phase type.
    pub fn cycle_connection(&mut self) {
        let billing = &mut self.session.scenario_mut().billing;
        billing.connection_type = billing.connection_type.next();
    }

    /// Switches between the site-estimated and custom budget modes.
    ///
    /// Entering custom mode seeds the amount with the site estimate
    /// rounded to the nearest hundred, like the original form default.
    pub fn toggle_budget_mode(&mut self) {
        self.commit_edit();
        let suggested = self.session.suggested_budget();
        let budget = &mut self.session.scenario_mut().budget;
        budget.mode = match budget.mode {
            BudgetMode::SiteEstimate => {
                if budget.amount.is_none() {
                    budget.amount = Some(suggested);
                }
                BudgetMode::Custom
            }
            BudgetMode::Custom => BudgetMode::SiteEstimate,
        };
        self.clamp_focus();
        self.load_edit();
    }

    /// Appends one more tariff component field and focuses it.
    pub fn add_tariff_component(&mut self) {
        self.commit_edit();
        self.session.push_tariff_component(0.0);
        let fields = self.fields();
        let last_component = self.session.tariff_components().len() - 1;
        self.focus = fields
            .iter()
            .position(|&f| f == Field::TariffComponent(last_component))
            .unwrap_or(0);
        self.load_edit();
    }

    fn clamp_focus(&mut self) {
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len - 1;
        }
    }

    /// Commits the edit buffer, validates, and runs the simulation.
    ///
    /// Validation failures surface on the status line and leave the last
    /// committed report untouched.
    pub fn simulate(&mut self) {
        self.commit_edit();
        let errors = self.session.validate();
        if let Some(first) = errors.first() {
            self.status = Some(first.to_string());
            return;
        }
        self.session.simulate();
        self.status = Some("simulation committed".to_string());
    }
}
