//! Investment payback period from total cost and monthly savings.

use std::fmt;

use serde::Serialize;

/// Payback duration, or the sentinel for non-positive savings.
///
/// Division by a non-positive savings figure is undefined for this purpose,
/// so that case is a distinct variant rather than a computational error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payback {
    /// Monthly savings are zero or negative; no payback exists.
    NotApplicable,
    /// Whole years and leftover months (0–11) until cumulative savings
    /// equal the investment.
    Period {
        /// Whole years.
        years: u32,
        /// Leftover months, normalized to 0–11.
        months: u32,
    },
}

/// Computes the payback period for an investment.
///
/// Months are rounded to nearest; a result of 12 months carries into the
/// year count.
pub fn payback_period(total_cost: f64, monthly_savings: f64) -> Payback {
    if monthly_savings <= 0.0 {
        return Payback::NotApplicable;
    }

    let fractional_years = total_cost / (monthly_savings * 12.0);
    let mut years = fractional_years.floor() as u32;
    let mut months = ((fractional_years - fractional_years.floor()) * 12.0).round() as u32;
    if months == 12 {
        years += 1;
        months = 0;
    }

    Payback::Period { years, months }
}

fn count(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

impl fmt::Display for Payback {
    /// Renders as "Y years and M months", omitting either term when zero.
    /// Zero years and zero months renders as "0 months".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Payback::NotApplicable => write!(f, "not applicable"),
            Payback::Period { years, months } => {
                if years > 0 && months > 0 {
                    write!(f, "{} and {}", count(years, "year"), count(months, "month"))
                } else if years > 0 {
                    write!(f, "{}", count(years, "year"))
                } else {
                    write!(f, "{}", count(months, "month"))
                }
            }
        }
    }
}
