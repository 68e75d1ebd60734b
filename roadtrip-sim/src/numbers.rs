//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Render a fuel quantity with at most three decimals, trimming trailing zeros.
#[must_use]
pub fn format_litres(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rendered = format!("{value:.3}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_is_exact_for_small_values() {
        assert!((u64_to_f64(700) - 700.0).abs() < f64::EPSILON);
        assert!((u64_to_f64(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn litres_drop_trailing_zeros() {
        assert_eq!(format_litres(50.0), "50");
        assert_eq!(format_litres(43.0), "43");
        assert_eq!(format_litres(0.5), "0.5");
        assert_eq!(format_litres(1.75), "1.75");
        assert_eq!(format_litres(10.000_000_001), "10");
    }

    #[test]
    fn litres_collapse_zero_and_non_finite() {
        assert_eq!(format_litres(0.0), "0");
        assert_eq!(format_litres(-0.000_1), "0");
        assert_eq!(format_litres(f64::NAN), "0");
    }
}
