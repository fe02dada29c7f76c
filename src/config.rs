//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::engine::{ApplianceCounts, ConnectionType};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Site constants for the simulated location.
    #[serde(default)]
    pub site: SiteConfig,
    /// Household demand: a billed figure or an appliance estimate.
    #[serde(default)]
    pub demand: DemandConfig,
    /// Tariff rate components.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// Grid connection parameters.
    #[serde(default)]
    pub billing: BillingConfig,
    /// Investment budgeting mode.
    #[serde(default)]
    pub budget: BudgetConfig,
}

/// Site constants, keyed by a city label. Currently a single fixed
/// location; the values are external configuration, not user inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Display label for the location.
    pub city: String,
    /// Average daily peak-sun-equivalent hours (HSP).
    pub irradiance_hours_per_day: f64,
    /// Regional installed cost per watt-peak (currency/Wp).
    pub cost_per_watt_peak: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            city: "Rio das Ostras (RJ)".to_string(),
            irradiance_hours_per_day: 4.98,
            cost_per_watt_peak: 2.49,
        }
    }
}

/// Household demand inputs.
///
/// Exactly one source is needed: a monthly figure read off a utility bill,
/// or appliance counts for a house that does not have a bill yet. When
/// both are present the billed figure wins. No struct-level serde default
/// here: an explicit `[demand]` section with the billed figure omitted
/// means estimate mode, not the baseline 300 kWh.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemandConfig {
    /// Average monthly consumption from the bill (kWh).
    pub monthly_consumption_kwh: Option<f64>,
    /// Appliance counts for the estimate path.
    pub appliances: Option<ApplianceCounts>,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            monthly_consumption_kwh: Some(300.0),
            appliances: None,
        }
    }
}

/// Tariff rate components (currency/kWh each).
///
/// Real bills carry separate energy (TE) and distribution-use (TUSD) line
/// items; the total rate is always the sum of the entered components.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// One or more rate components, each within 0.00–3.00.
    pub components: Vec<f64>,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            components: vec![0.85],
        }
    }
}

impl TariffConfig {
    /// Total tariff rate: the sum of all components.
    pub fn total(&self) -> f64 {
        self.components.iter().sum()
    }
}

/// Grid connection parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillingConfig {
    /// Connection phase type: `single_phase`, `two_phase`, or `three_phase`.
    pub connection_type: ConnectionType,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            connection_type: ConnectionType::TwoPhase,
        }
    }
}

/// How the investment amount is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    /// Use the consumption-driven cost estimate.
    SiteEstimate,
    /// Size the system around a user-supplied amount.
    Custom,
}

/// Investment budgeting mode and optional custom amount.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BudgetConfig {
    /// Budgeting mode: `site_estimate` or `custom`.
    pub mode: BudgetMode,
    /// Custom budget amount (currency, ≥ 1000). Required for `custom`.
    pub amount: Option<f64>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            mode: BudgetMode::SiteEstimate,
            amount: None,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tariff.components"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a 300 kWh bill, a single 0.85 tariff
    /// component, two-phase connection, site-estimated budget.
    pub fn baseline() -> Self {
        Self {
            site: SiteConfig::default(),
            demand: DemandConfig::default(),
            tariff: TariffConfig::default(),
            billing: BillingConfig::default(),
            budget: BudgetConfig::default(),
        }
    }

    /// Returns the new-build preset: no bill yet, appliance estimate.
    pub fn new_build() -> Self {
        Self {
            demand: DemandConfig {
                monthly_consumption_kwh: None,
                appliances: Some(ApplianceCounts::default()),
            },
            ..Self::baseline()
        }
    }

    /// Returns the budget-capped preset: sizing driven by a fixed amount.
    pub fn budget_capped() -> Self {
        Self {
            budget: BudgetConfig {
                mode: BudgetMode::Custom,
                amount: Some(20_000.0),
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["bill_based", "new_build", "budget_capped"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "bill_based" => Ok(Self::baseline()),
            "new_build" => Ok(Self::new_build()),
            "budget_capped" => Ok(Self::budget_capped()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let site = &self.site;
        if site.irradiance_hours_per_day <= 0.0 {
            errors.push(ConfigError {
                field: "site.irradiance_hours_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        if site.cost_per_watt_peak <= 0.0 {
            errors.push(ConfigError {
                field: "site.cost_per_watt_peak".into(),
                message: "must be > 0".into(),
            });
        }

        let demand = &self.demand;
        match (demand.monthly_consumption_kwh, demand.appliances) {
            (None, None) => errors.push(ConfigError {
                field: "demand".into(),
                message: "provide monthly_consumption_kwh or [demand.appliances]".into(),
            }),
            (Some(kwh), _) if !(50.0..=10_000.0).contains(&kwh) => errors.push(ConfigError {
                field: "demand.monthly_consumption_kwh".into(),
                message: format!("must be within 50–10000 kWh, got {kwh}"),
            }),
            (None, Some(appliances)) if appliances.residents == 0 => errors.push(ConfigError {
                field: "demand.appliances.residents".into(),
                message: "must be >= 1".into(),
            }),
            _ => {}
        }

        let tariff = &self.tariff;
        if tariff.components.is_empty() {
            errors.push(ConfigError {
                field: "tariff.components".into(),
                message: "at least one rate component is required".into(),
            });
        }
        for (i, component) in tariff.components.iter().enumerate() {
            if !(0.0..=3.0).contains(component) {
                errors.push(ConfigError {
                    field: format!("tariff.components[{i}]"),
                    message: format!("must be within 0.00–3.00, got {component}"),
                });
            }
        }

        let budget = &self.budget;
        match (budget.mode, budget.amount) {
            (BudgetMode::Custom, None) => errors.push(ConfigError {
                field: "budget.amount".into(),
                message: "required when budget.mode = \"custom\"".into(),
            }),
            (_, Some(amount)) if amount < 1000.0 => errors.push(ConfigError {
                field: "budget.amount".into(),
                message: format!("must be >= 1000.00, got {amount}"),
            }),
            _ => {}
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = ScenarioConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_bill_based() {
        let cfg = ScenarioConfig::from_preset("bill_based");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[site]
city = "Rio das Ostras (RJ)"
irradiance_hours_per_day = 4.98
cost_per_watt_peak = 2.49

[demand]
monthly_consumption_kwh = 420.0

[tariff]
components = [0.62, 0.31]

[billing]
connection_type = "three_phase"

[budget]
mode = "custom"
amount = 18000.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().and_then(|c| c.demand.monthly_consumption_kwh),
            Some(420.0)
        );
        assert_eq!(cfg.as_ref().map(|c| c.tariff.components.len()), Some(2));
        assert_eq!(
            cfg.as_ref().map(|c| c.billing.connection_type),
            Some(ConnectionType::ThreePhase)
        );
        assert_eq!(cfg.as_ref().map(|c| c.budget.mode), Some(BudgetMode::Custom));
    }

    #[test]
    fn tariff_total_is_component_sum() {
        let cfg = ScenarioConfig::from_toml_str(
            r#"
[tariff]
components = [0.62, 0.31, 0.02]
"#,
        );
        let total = cfg.ok().map(|c| c.tariff.total());
        assert!(total.is_some_and(|t| (t - 0.95).abs() < 1e-9));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[site]
irradiance_hours_per_day = 4.98
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_connection_type_rejected() {
        let toml = r#"
[billing]
connection_type = "quad_phase"
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn validation_catches_consumption_out_of_range() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.demand.monthly_consumption_kwh = Some(20.0);
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "demand.monthly_consumption_kwh")
        );
    }

    #[test]
    fn validation_catches_missing_demand() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.demand.monthly_consumption_kwh = None;
        cfg.demand.appliances = None;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "demand"));
    }

    #[test]
    fn validation_catches_tariff_component_out_of_range() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.tariff.components = vec![0.85, 3.5];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "tariff.components[1]"));
    }

    #[test]
    fn validation_catches_empty_tariff() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.tariff.components = Vec::new();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "tariff.components"));
    }

    #[test]
    fn validation_catches_custom_budget_without_amount() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.budget.mode = BudgetMode::Custom;
        cfg.budget.amount = None;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "budget.amount"));
    }

    #[test]
    fn validation_catches_small_budget() {
        let mut cfg = ScenarioConfig::budget_capped();
        cfg.budget.amount = Some(500.0);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "budget.amount"));
    }

    #[test]
    fn validation_catches_zero_residents_in_estimate_mode() {
        let mut cfg = ScenarioConfig::new_build();
        let mut appliances = cfg.demand.appliances.unwrap_or_default();
        appliances.residents = 0;
        cfg.demand.appliances = Some(appliances);
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "demand.appliances.residents")
        );
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn explicit_demand_section_without_bill_selects_estimate_mode() {
        let toml = r#"
[demand]
[demand.appliances]
residents = 4
electric_showers = 2
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "estimate-mode TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().and_then(|c| c.demand.monthly_consumption_kwh),
            None
        );
        let counts = cfg.as_ref().and_then(|c| c.demand.appliances);
        assert_eq!(counts.map(|a| a.residents), Some(4));
        // unlisted appliance counts keep their form defaults
        assert_eq!(counts.map(|a| a.air_conditioners), Some(1));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[demand]
monthly_consumption_kwh = 550.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // consumption overridden
        assert_eq!(
            cfg.as_ref().and_then(|c| c.demand.monthly_consumption_kwh),
            Some(550.0)
        );
        // site constants kept default
        assert_eq!(
            cfg.as_ref().map(|c| c.site.irradiance_hours_per_day),
            Some(4.98)
        );
        // tariff kept default
        assert_eq!(cfg.as_ref().map(|c| c.tariff.total()), Some(0.85));
    }
}
