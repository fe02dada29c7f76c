//! Monthly consumption estimate for households without a utility bill.

use serde::{Deserialize, Serialize};

/// Average monthly consumption per resident (kWh).
const KWH_PER_RESIDENT: f64 = 60.0;
/// Average monthly consumption per electric shower (kWh).
const KWH_PER_ELECTRIC_SHOWER: f64 = 70.0;
/// Average monthly consumption per air-conditioning unit (kWh).
const KWH_PER_AIR_CONDITIONER: f64 = 100.0;
/// Average monthly consumption per auxiliary freezer (kWh).
const KWH_PER_FREEZER: f64 = 40.0;
/// Average monthly consumption per home-office resident (kWh).
const KWH_PER_HOME_OFFICE: f64 = 60.0;

/// Appliance counts for a household that does not have a bill yet.
///
/// The input layer clamps all counts to non-negative integers, so the
/// estimate itself has no error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplianceCounts {
    /// Number of people living in the house.
    pub residents: u32,
    /// Electric showers.
    pub electric_showers: u32,
    /// Air-conditioning units.
    pub air_conditioners: u32,
    /// Freezers beyond the main refrigerator.
    pub freezers: u32,
    /// Residents working from home with heavy computer use.
    pub home_office: u32,
}

impl Default for ApplianceCounts {
    fn default() -> Self {
        Self {
            residents: 3,
            electric_showers: 1,
            air_conditioners: 1,
            freezers: 0,
            home_office: 0,
        }
    }
}

impl ApplianceCounts {
    /// Estimated monthly consumption in kWh from the per-appliance averages.
    pub fn estimated_monthly_kwh(&self) -> f64 {
        f64::from(self.residents) * KWH_PER_RESIDENT
            + f64::from(self.electric_showers) * KWH_PER_ELECTRIC_SHOWER
            + f64::from(self.air_conditioners) * KWH_PER_AIR_CONDITIONER
            + f64::from(self.freezers) * KWH_PER_FREEZER
            + f64::from(self.home_office) * KWH_PER_HOME_OFFICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_residents_one_shower_one_ac() {
        let counts = ApplianceCounts {
            residents: 3,
            electric_showers: 1,
            air_conditioners: 1,
            freezers: 0,
            home_office: 0,
        };
        assert_eq!(counts.estimated_monthly_kwh(), 350.0);
    }

    #[test]
    fn empty_household_estimates_zero() {
        let counts = ApplianceCounts {
            residents: 0,
            electric_showers: 0,
            air_conditioners: 0,
            freezers: 0,
            home_office: 0,
        };
        assert_eq!(counts.estimated_monthly_kwh(), 0.0);
    }

    #[test]
    fn every_appliance_contributes() {
        let counts = ApplianceCounts {
            residents: 2,
            electric_showers: 1,
            air_conditioners: 2,
            freezers: 1,
            home_office: 1,
        };
        // 120 + 70 + 200 + 40 + 60
        assert_eq!(counts.estimated_monthly_kwh(), 490.0);
    }

    #[test]
    fn default_matches_form_defaults() {
        assert_eq!(ApplianceCounts::default().estimated_monthly_kwh(), 350.0);
    }
}
