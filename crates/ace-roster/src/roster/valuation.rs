//! Pure valuation helpers shared by the repository, reports and filters.

use super::domain::ValueBand;

/// Signed deviation of actual salary from the ACE estimate, in percent.
///
/// Negative means the player is paid less than the model estimate.
/// A zero estimate yields `0.0` instead of an infinite or NaN result.
pub fn compute_value_pct(actual: f64, estimated: f64) -> f64 {
    if estimated == 0.0 {
        return 0.0;
    }
    (actual - estimated) / estimated * 100.0
}

/// Thresholds are strict upper bounds, so a boundary value lands in the band above it.
pub fn classify_value(pct: f64) -> ValueBand {
    if pct < -20.0 {
        ValueBand::Excellent
    } else if pct < -10.0 {
        ValueBand::Good
    } else if pct < 10.0 {
        ValueBand::Fair
    } else if pct < 20.0 {
        ValueBand::Overpaid
    } else {
        ValueBand::VeryOverpaid
    }
}

/// One decimal place, `+` prefix for positive values only.
pub fn format_value_pct(pct: f64) -> String {
    let sign = if pct > 0.0 { "+" } else { "" };
    format!("{sign}{pct:.1}%")
}

/// Whole currency units with thousands separators, e.g. `$1,234,568`.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}
