//! Fixed-point formatting of statistics.

use crate::constants::R_DECIMALS;

/// Format `value` in fixed-point notation with exactly `decimals` digits
/// after the decimal point. Never switches to scientific notation.
///
/// Exact binary ties round half to even; negative zero prints as zero.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Format a correlation coefficient the way it is displayed: three decimals,
/// trailing zeros kept (`"1.000"`, never `"1"`).
#[must_use]
pub fn format_r(r: f64) -> String {
    format_fixed(r, R_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_trailing_zeros() {
        assert_eq!(format_r(1.0), "1.000");
        assert_eq!(format_r(-1.0), "-1.000");
        assert_eq!(format_r(0.5), "0.500");
    }

    #[test]
    fn rounds_to_three_digits() {
        assert_eq!(format_r(0.999_999_999_999_999_8), "1.000");
        assert_eq!(format_r(0.123_456), "0.123");
        assert_eq!(format_r(-0.876_54), "-0.877");
    }

    #[test]
    fn tiny_values_stay_fixed_point() {
        assert_eq!(format_r(1e-12), "0.000");
        assert_eq!(format_r(-0.0), "0.000");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_fixed(2.0, 0), "2");
        assert_eq!(format_fixed(1234.5678, 2), "1234.57");
    }
}
