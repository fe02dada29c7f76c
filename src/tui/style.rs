//! Color constants and auto-scaling helpers for the interactive form.

use ratatui::style::Color;

/// Focused form field foreground.
pub const FOCUS_FG: Color = Color::Yellow;
/// Consumption line color.
pub const CONSUMPTION_COLOR: Color = Color::Red;
/// Generation line color.
pub const GENERATION_COLOR: Color = Color::Blue;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Surplus (credits) indicator color.
pub const SURPLUS_FG: Color = Color::Green;
/// Deficit (remaining grid consumption) indicator color.
pub const DEFICIT_FG: Color = Color::Magenta;

/// Computes Y-axis bounds from chart data points with 10% padding.
pub fn auto_bounds_y(consumption: &[(f64, f64)], generation: &[(f64, f64)]) -> [f64; 2] {
    let all = consumption.iter().chain(generation.iter()).map(|&(_, y)| y);
    let min = all.clone().fold(f64::INFINITY, f64::min);
    let max = all.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [(min - pad).max(0.0), max + pad]
}
