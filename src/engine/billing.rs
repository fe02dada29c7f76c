//! Net-metering billing: the post-installation bill under minimum-charge
//! rules.
//!
//! Models the Brazilian distributed-generation rules: surplus generation is
//! credited in kWh, and the customer is never billed below the availability
//! charge tied to the connection phase type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::round2;

/// Grid connection phase type, which fixes the minimum billable energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Single-phase connection, 30 kWh/month minimum.
    SinglePhase,
    /// Two-phase connection, 50 kWh/month minimum.
    TwoPhase,
    /// Three-phase connection, 100 kWh/month minimum.
    ThreePhase,
}

impl ConnectionType {
    /// All variants, in minimum-charge order. Used for cycling in the form.
    pub const ALL: [ConnectionType; 3] = [
        ConnectionType::SinglePhase,
        ConnectionType::TwoPhase,
        ConnectionType::ThreePhase,
    ];

    /// Utility-mandated minimum billable energy for this connection (kWh).
    pub fn min_billable_kwh(self) -> f64 {
        match self {
            ConnectionType::SinglePhase => 30.0,
            ConnectionType::TwoPhase => 50.0,
            ConnectionType::ThreePhase => 100.0,
        }
    }

    /// The next variant in cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ConnectionType::SinglePhase => ConnectionType::TwoPhase,
            ConnectionType::TwoPhase => ConnectionType::ThreePhase,
            ConnectionType::ThreePhase => ConnectionType::SinglePhase,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionType::SinglePhase => "single-phase",
            ConnectionType::TwoPhase => "two-phase",
            ConnectionType::ThreePhase => "three-phase",
        };
        write!(f, "{label}")
    }
}

/// Terminal branch of the billing resolution, by sign of the net balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetBalance {
    /// Generation fell short; this much still comes from the grid.
    Deficit {
        /// Remaining grid consumption (kWh/month, positive).
        grid_energy_kwh: f64,
    },
    /// Generation met or exceeded consumption; the surplus becomes credits.
    Surplus {
        /// Energy credited for later offset (kWh/month, ≥ 0).
        credited_kwh: f64,
    },
}

/// Post-installation billing outcome for one month.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BillingOutcome {
    /// Generation minus consumption (kWh, signed).
    pub net_balance_kwh: f64,
    /// Minimum billable energy applied (kWh).
    pub min_billable_kwh: f64,
    /// Estimated monthly bill after installation (currency).
    pub estimated_new_bill: f64,
    /// Which terminal branch applied, with its reported quantity.
    pub balance: NetBalance,
}

/// Resolves the post-installation bill and net energy balance.
///
/// Deficit (balance < 0): the billable energy is the remaining grid
/// consumption or the connection minimum, whichever is larger. Surplus
/// (balance ≥ 0): the minimum charge always applies, regardless of how
/// much surplus is generated.
pub fn resolve(
    monthly_generation_kwh: f64,
    monthly_consumption_kwh: f64,
    tariff_rate: f64,
    connection: ConnectionType,
) -> BillingOutcome {
    let minimum = connection.min_billable_kwh();
    let balance = monthly_generation_kwh - monthly_consumption_kwh;

    if balance < 0.0 {
        let grid_energy_kwh = -balance;
        let billable_kwh = grid_energy_kwh.max(minimum);
        BillingOutcome {
            net_balance_kwh: round2(balance),
            min_billable_kwh: minimum,
            estimated_new_bill: round2(billable_kwh * tariff_rate),
            balance: NetBalance::Deficit {
                grid_energy_kwh: round2(grid_energy_kwh),
            },
        }
    } else {
        BillingOutcome {
            net_balance_kwh: round2(balance),
            min_billable_kwh: minimum,
            estimated_new_bill: round2(minimum * tariff_rate),
            balance: NetBalance::Surplus {
                credited_kwh: round2(balance),
            },
        }
    }
}
