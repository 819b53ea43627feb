/// Форматирует число с разделителями тысяч (точками)
///
/// Used by the request logger for response sizes.
pub fn format_number(n: usize) -> String {
    group_digits(&n.to_string(), '.')
}

/// Formats a value with comma thousands separators and no decimals,
/// the way the metric cards show money ("1,234,568").
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, ',')),
        None => group_digits(&rounded, ','),
    }
}

/// Compact human-readable form of a large number: 1234 -> "1.23K",
/// 2500000 -> "2.5M". Display only; never feed the result back into
/// calculations.
pub fn numerize(value: f64, decimals: usize) -> String {
    const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let mut scaled = value.abs();
    let mut idx = 0;
    while scaled >= 1000.0 && idx < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        idx += 1;
    }

    format!(
        "{}{}{}",
        sign,
        drop_trailing_zeros(&format!("{:.*}", decimals, scaled)),
        SUFFIXES[idx]
    )
}

fn drop_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(150.0), "150");
        assert_eq!(format_thousands(1234.4), "1,234");
        assert_eq!(format_thousands(1234567.8), "1,234,568");
        assert_eq!(format_thousands(-98765.0), "-98,765");
    }

    #[test]
    fn test_numerize_small_values() {
        assert_eq!(numerize(0.0, 2), "0");
        assert_eq!(numerize(12.0, 2), "12");
        assert_eq!(numerize(12.346, 2), "12.35");
        assert_eq!(numerize(999.5, 2), "999.5");
    }

    #[test]
    fn test_numerize_suffixes() {
        assert_eq!(numerize(1000.0, 2), "1K");
        assert_eq!(numerize(1234.0, 2), "1.23K");
        assert_eq!(numerize(2_500_000.0, 2), "2.5M");
        assert_eq!(numerize(7_000_000_000.0, 2), "7B");
        assert_eq!(numerize(-45_600.0, 2), "-45.6K");
    }
}
