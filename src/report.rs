//! Committed simulation result set and its human-readable rendering.

use std::fmt;

use serde::Serialize;

use crate::currency::CurrencyFormatter;
use crate::engine::seasonal::MONTH_LABELS;
use crate::engine::{BillingOutcome, NetBalance, Payback, SystemSizing};

/// kg of CO₂ absorbed by one tree per year, for the equivalence line.
const CO2_KG_PER_TREE: f64 = 150.0;

/// The full result set of one committed simulation.
///
/// Computed fresh per "simulate" action and replaced wholesale; the session
/// holds at most one of these at a time.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Site label the simulation ran for.
    pub city: String,
    /// Consumption figure used (billed or appliance-estimated, kWh/month).
    pub monthly_consumption_kwh: f64,
    /// Total tariff rate used (currency/kWh).
    pub tariff_rate: f64,
    /// Sized system and its cost/savings/emissions.
    pub sizing: SystemSizing,
    /// Post-installation billing outcome.
    pub billing: BillingOutcome,
    /// Investment payback period.
    pub payback: Payback,
    /// Seasonal 12-month generation series (kWh, January–December).
    pub monthly_generation_profile: [f64; 12],
}

impl SimulationReport {
    /// Tree-equivalence of the avoided CO₂, at 150 kg per tree per year.
    pub fn equivalent_trees(&self) -> f64 {
        self.sizing.annual_co2_avoided_kg / CO2_KG_PER_TREE
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = CurrencyFormatter::from_env();
        let s = &self.sizing;
        let b = &s.cost_breakdown;

        writeln!(f, "--- Solar Simulation — {} ---", self.city)?;
        writeln!(
            f,
            "Inputs:                {:.2} kWh/month at {} /kWh",
            self.monthly_consumption_kwh,
            money.format(self.tariff_rate)
        )?;
        writeln!(f, "Investment considered: {}", money.format(s.total_cost))?;
        writeln!(f, "  Panels:                          {}", money.format(b.panels))?;
        writeln!(f, "  Inverter(s):                     {}", money.format(b.inverters))?;
        writeln!(
            f,
            "  Structures, cables, protections: {}",
            money.format(b.structure_and_cabling)
        )?;
        writeln!(
            f,
            "  Labor and design:                {}",
            money.format(b.labor_and_design)
        )?;
        writeln!(
            f,
            "System power:          {:.2} kWp ({} panels, {:.2} m²)",
            s.system_power_kwp, s.panel_count, s.array_area_m2
        )?;
        writeln!(
            f,
            "Recommended inverter:  ~{:.2} kW AC",
            s.inverter_power_kw
        )?;
        writeln!(
            f,
            "Monthly generation:    {:.2} kWh",
            s.monthly_generation_kwh
        )?;
        writeln!(
            f,
            "Gross monthly savings: {}",
            money.format(s.monthly_savings)
        )?;
        match self.billing.balance {
            NetBalance::Deficit { grid_energy_kwh } => {
                writeln!(
                    f,
                    "New monthly bill:      {} ({:.0} kWh still from the grid)",
                    money.format(self.billing.estimated_new_bill),
                    grid_energy_kwh
                )?;
            }
            NetBalance::Surplus { credited_kwh } => {
                writeln!(
                    f,
                    "New monthly bill:      {} (minimum charge; {:.0} kWh/month credited)",
                    money.format(self.billing.estimated_new_bill),
                    credited_kwh
                )?;
            }
        }
        writeln!(
            f,
            "CO2 avoided:           {:.2} kg/year (~{:.0} trees)",
            s.annual_co2_avoided_kg,
            self.equivalent_trees()
        )?;
        writeln!(f, "Payback:               {}", self.payback)?;

        writeln!(f, "Monthly generation profile (kWh):")?;
        for (label, kwh) in MONTH_LABELS.iter().zip(self.monthly_generation_profile) {
            writeln!(f, "  {label}  {kwh:>8.2}")?;
        }
        Ok(())
    }
}
