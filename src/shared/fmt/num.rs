//! Number formatting for human-readable display.
//!
//! The API serves numeric fields as strings; these helpers parse them with a
//! fixed "unparsable → zero" rule so a malformed value renders as a neutral
//! figure instead of failing the row.

/// Adds thousands separators to an already fixed-decimal formatted string.
pub fn group_thousands(formatted: &str) -> String {
    let (number, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a raw price string as a dollar amount.
///
/// Unparsable input renders as `$0.00`. Magnitudes at or above one dollar get
/// two fraction digits with thousands separators; sub-dollar magnitudes get
/// six fraction digits so micro-cap prices stay distinguishable. Negative
/// values carry the sign before the `$`.
pub fn format_price(price: &str) -> String {
    let Ok(value) = price.parse::<f64>() else {
        return "$0.00".to_string();
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1.0 {
        format!("{}${}", sign, group_thousands(&format!("{:.2}", magnitude)))
    } else {
        format!("{}${:.6}", sign, magnitude)
    }
}

/// Format a raw 24h-change string as a signed percent.
///
/// The value is already scaled as a percentage (`"3.2"` means 3.2%).
/// Non-negative values carry an explicit `+` prefix; unparsable input renders
/// as `0.00%` with no sign.
pub fn format_change(change: &str) -> String {
    match change.parse::<f64>() {
        Ok(value) => format!("{:+.2}%", value),
        Err(_) => "0.00%".to_string(),
    }
}

/// Whether a raw change string represents a non-negative move.
///
/// Unparsable input counts as zero, hence positive.
pub fn is_positive_change(change: &str) -> bool {
    change.parse::<f64>().unwrap_or(0.0) >= 0.0
}

/// Format a large dollar magnitude with a `B`/`M` suffix.
///
/// Billions and millions are scaled down to two fraction digits; anything
/// smaller is plain currency.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!(
            "${}B",
            group_thousands(&format!("{:.2}", value / 1_000_000_000.0))
        )
    } else if value >= 1_000_000.0 {
        format!(
            "${}M",
            group_thousands(&format!("{:.2}", value / 1_000_000.0))
        )
    } else if value < 0.0 {
        format!("-${}", group_thousands(&format!("{:.2}", -value)))
    } else {
        format!("${}", group_thousands(&format!("{:.2}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("-1234.56"), "-1,234.56");
    }

    #[test]
    fn test_format_price_above_one_dollar() {
        assert_eq!(format_price("5"), "$5.00");
        assert_eq!(format_price("1"), "$1.00");
        assert_eq!(format_price("1234.567"), "$1,234.57");
        assert_eq!(format_price("96421.33"), "$96,421.33");
    }

    #[test]
    fn test_format_price_sub_dollar_gets_six_decimals() {
        assert_eq!(format_price("0.5"), "$0.500000");
        assert_eq!(format_price("0.00001234"), "$0.000012");
    }

    #[test]
    fn test_format_price_negative_sign_precedes_dollar() {
        assert_eq!(format_price("-5"), "-$5.00");
        assert_eq!(format_price("-1234.567"), "-$1,234.57");
        assert_eq!(format_price("-0.5"), "-$0.500000");
    }

    #[test]
    fn test_format_price_unparsable() {
        assert_eq!(format_price("abc"), "$0.00");
        assert_eq!(format_price(""), "$0.00");
    }

    #[test]
    fn test_format_change_signs() {
        assert_eq!(format_change("3.2"), "+3.20%");
        assert_eq!(format_change("-3.2"), "-3.20%");
        assert_eq!(format_change("0"), "+0.00%");
    }

    #[test]
    fn test_format_change_unparsable() {
        assert_eq!(format_change("n/a"), "0.00%");
        assert_eq!(format_change(""), "0.00%");
    }

    #[test]
    fn test_is_positive_change() {
        assert!(is_positive_change("0"));
        assert!(is_positive_change("3.2"));
        assert!(!is_positive_change("-0.01"));
        // unparsable counts as zero, hence positive
        assert!(is_positive_change("garbage"));
    }

    #[test]
    fn test_format_magnitude_billions() {
        assert_eq!(format_magnitude(1_500_000_000.0), "$1.50B");
        assert_eq!(format_magnitude(1_912_345_678_900.0), "$1,912.35B");
    }

    #[test]
    fn test_format_magnitude_millions() {
        assert_eq!(format_magnitude(2_500_000.0), "$2.50M");
        assert_eq!(format_magnitude(999_999_999.0), "$1,000.00M");
    }

    #[test]
    fn test_format_magnitude_plain() {
        assert_eq!(format_magnitude(999_999.0), "$999,999.00");
        assert_eq!(format_magnitude(0.0), "$0.00");
        assert_eq!(format_magnitude(-12.5), "-$12.50");
    }
}
