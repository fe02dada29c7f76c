//! Pure sizing, billing, and payback calculations.
//!
//! Every function here is side-effect-free: inputs are pre-validated at the
//! configuration boundary and each call computes a fresh result.

/// Net-metering billing resolver and connection types.
pub mod billing;
pub mod constants;
/// Appliance-based consumption estimate.
pub mod estimator;
/// Payback period arithmetic.
pub mod payback;
/// 12-month seasonal generation profile.
pub mod seasonal;
/// Forward and budget-driven system sizing.
pub mod sizing;

// Re-export the main types for convenience
pub use billing::{BillingOutcome, ConnectionType, NetBalance};
pub use estimator::ApplianceCounts;
pub use payback::Payback;
pub use sizing::{CostBreakdown, SizingInputs, SystemSizing};
