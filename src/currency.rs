//! Locale-aware currency formatting with a deterministic fallback.
//!
//! Bills render as `R$ 1.234,56`. The separator set comes from an explicit
//! locale table resolved against the process environment; when the locale
//! is unknown or unset the formatter falls back to the built-in BRL spec.
//! Both paths produce byte-identical output for standard currency values,
//! so formatting never depends on locale services being present.

use std::env;

/// Symbol and separator set for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSpec {
    /// Currency symbol, rendered before the amount.
    pub symbol: &'static str,
    /// Thousands grouping separator.
    pub thousands_sep: char,
    /// Decimal separator.
    pub decimal_sep: char,
}

/// Built-in Brazilian Real spec, also the fallback.
const BRL: LocaleSpec = LocaleSpec {
    symbol: "R$",
    thousands_sep: '.',
    decimal_sep: ',',
};

/// Locale tags with known currency specs.
const LOCALE_TABLE: &[(&str, LocaleSpec)] = &[("pt_BR", BRL)];

/// Formats monetary values to the `symbol thousands.decimal` pattern.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormatter {
    spec: LocaleSpec,
}

impl CurrencyFormatter {
    /// The deterministic built-in BRL formatter.
    pub fn brl() -> Self {
        Self { spec: BRL }
    }

    /// Resolves the process locale against the known table.
    ///
    /// Capability check, not error interception: `LC_ALL`, `LC_MONETARY`,
    /// and `LANG` are consulted in POSIX precedence order; a tag with no
    /// table entry (or no tag at all) selects the BRL fallback, which
    /// produces the same output as the table entry for `pt_BR`.
    pub fn from_env() -> Self {
        let tag = ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .find_map(|key| env::var(key).ok().filter(|v| !v.is_empty()))
            .unwrap_or_default();
        let spec = LOCALE_TABLE
            .iter()
            .find(|(prefix, _)| tag.starts_with(prefix))
            .map_or(BRL, |&(_, spec)| spec);
        Self { spec }
    }

    /// Formats a value as currency, e.g. `R$ 6.847,50`.
    ///
    /// Negative values render with a leading minus before the symbol.
    pub fn format(&self, value: f64) -> String {
        let negative = value < 0.0;
        // Work in integer cents to sidestep float formatting quirks
        let cents = (value.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let frac = cents % 100;

        let sign = if negative { "-" } else { "" };
        let grouped = group_thousands(whole, self.spec.thousands_sep);
        format!(
            "{sign}{} {grouped}{}{frac:02}",
            self.spec.symbol, self.spec.decimal_sep
        )
    }
}

/// Inserts the grouping separator every three digits from the right.
fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
