//! Seasonal expansion of the average monthly generation figure.

use super::constants::round2;

/// Month-by-month irradiation multipliers, January through December.
///
/// The sequence sums to approximately 12, so expanding the average monthly
/// figure preserves the annual total.
pub const SEASONAL_FACTORS: [f64; 12] = [
    1.118, 1.223, 1.052, 1.014, 0.912, 0.890, 0.881, 1.014, 0.960, 0.984, 0.918, 1.042,
];

/// Calendar month labels matching [`SEASONAL_FACTORS`].
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Expands the average monthly generation into a 12-month series.
pub fn monthly_profile(monthly_generation_kwh: f64) -> [f64; 12] {
    std::array::from_fn(|i| round2(monthly_generation_kwh * SEASONAL_FACTORS[i]))
}
