//! Number formatting for report output
//!
//! Every formatter renders non-finite input (e.g. cost per case averted when
//! nothing is averted) as [`PLACEHOLDER`].

/// Shown in place of `inf` and `NaN`
pub const PLACEHOLDER: &str = "-";

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value with cents
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let cents_total = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents_total / 100),
        cents_total % 100
    )
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(whole))
}

/// Format a count rounded to whole units, e.g. cases or people
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(whole))
}

/// Format a small ratio with a fixed number of decimals
pub fn format_ratio(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.decimals$}")
}

/// Format a fraction as a percentage
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.1}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.5), "-$42.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(347_166.67), "$347,167");
        assert_eq!(format_currency_short(12.0), "$12");
    }

    #[test]
    fn test_non_finite_values_use_placeholder() {
        assert_eq!(format_currency(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_currency_short(f64::NAN), PLACEHOLDER);
        assert_eq!(format_count(f64::NEG_INFINITY), PLACEHOLDER);
        assert_eq!(format_ratio(f64::NAN, 2), PLACEHOLDER);
        assert_eq!(format_percentage(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn test_format_count_and_ratio() {
        assert_eq!(format_count(6_000.4), "6,000");
        assert_eq!(format_ratio(0.0376, 3), "0.038");
        assert_eq!(format_percentage(0.5), "50.0%");
    }
}
