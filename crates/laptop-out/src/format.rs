//! Number formatting for display.

/// Shown wherever a value is missing or not a number
pub const NOT_AVAILABLE: &str = "—";

const CURRENCY_PREFIX: &str = "Rp";
const GROUP_SEPARATOR: char = '.';

/// Format an amount the id-ID way: `Rp 15.000.000`, `Rp -2.500.000`.
///
/// Amounts are rounded to whole Rupiah. Non-finite amounts render as
/// [`NOT_AVAILABLE`].
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{} {}{}", CURRENCY_PREFIX, sign, group_thousands(&digits))
}

/// `Some(amount)` formatted, `None` as [`NOT_AVAILABLE`]
pub fn format_optional_rupiah(amount: Option<f64>) -> String {
    amount.map_or_else(|| NOT_AVAILABLE.to_string(), format_rupiah)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Trend score (nominally 0..1) as a whole percentage clamped to 0..=100.
/// Missing or NaN scores read as 0.
pub fn trend_percent(score: Option<f64>) -> u8 {
    match score {
        Some(value) if !value.is_nan() => (value * 100.0).clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}

/// A predicted price usable for display, or `None` ("not available")
pub fn displayable_prediction(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Optional statistic with fixed decimals, [`NOT_AVAILABLE`] when absent
pub fn format_statistic(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_grouping() {
        assert_eq!(format_rupiah(15_000_000.0), "Rp 15.000.000");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
    }

    #[test]
    fn test_rupiah_rounds_and_signs() {
        assert_eq!(format_rupiah(14_999_999.6), "Rp 15.000.000");
        assert_eq!(format_rupiah(-2_500_000.0), "Rp -2.500.000");
        assert_eq!(format_rupiah(-0.4), "Rp 0");
        assert_eq!(format_rupiah(f64::NAN), NOT_AVAILABLE);
    }

    #[test]
    fn test_trend_percent_clamps() {
        assert_eq!(trend_percent(Some(1.4)), 100);
        assert_eq!(trend_percent(Some(0.734)), 73);
        assert_eq!(trend_percent(Some(-0.2)), 0);
        assert_eq!(trend_percent(Some(f64::NAN)), 0);
        assert_eq!(trend_percent(None), 0);
    }

    #[test]
    fn test_missing_prediction() {
        assert_eq!(displayable_prediction(Some(f64::NAN)), None);
        assert_eq!(displayable_prediction(Some(1.0)), Some(1.0));
        assert_eq!(format_optional_rupiah(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_statistic() {
        assert_eq!(format_statistic(Some(0.91234), 3), "0.912");
        assert_eq!(format_statistic(None, 3), NOT_AVAILABLE);
    }
}
