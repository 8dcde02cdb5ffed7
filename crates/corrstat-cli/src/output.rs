//! CLI output formatting.

use corrstat_core::Point;
use corrstat_data::Indicator;

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a value with thousand separators and at most three fraction
/// digits, trailing zeros dropped (`1234567.5` → `"1,234,567.5"`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut out: String = grouped.chars().rev().collect();
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// Format a regression coefficient. Magnitudes too small for three
/// fraction digits switch to scientific notation so they do not print as 0.
#[must_use]
pub fn format_coefficient(value: f64) -> String {
    if value != 0.0 && value.abs() < 1e-3 {
        format!("{value:.4e}")
    } else {
        format_number(value)
    }
}

/// Format a point as `(x, y)`, prefixed by its label when present.
#[must_use]
pub fn format_point(p: &Point) -> String {
    let coords = format!("({}, {})", format_number(p.x), format_number(p.y));
    match &p.label {
        Some(label) => format!("{label}: {coords}"),
        None => coords,
    }
}

/// Format an optional indicator value with its unit, or `N/A`.
#[must_use]
pub fn format_indicator(indicator: Indicator, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} {}", format_number(v), indicator.unit()),
        None => "N/A".to_string(),
    }
}
