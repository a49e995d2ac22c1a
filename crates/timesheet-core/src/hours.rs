//! Hour and rate text handling
//!
//! Entry cells keep the raw text the user typed (so "3." survives until blur)
//! and are only interpreted as numbers for totals and saving.

/// Keep only digits and '.'
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse the longest leading decimal number ("1.2.3" → 1.2, "abc" → None)
pub fn parse_leading(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Value used for totals: unparsable text counts as zero
pub fn value_of(input: &str) -> f64 {
    parse_leading(input).unwrap_or(0.0)
}

/// Round to two decimals unless the value is whole
pub fn round_total(value: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// Display a number the way a rounded total reads ("7", "7.5", "7.25")
pub fn format_number(value: f64) -> String {
    let rounded = round_total(value);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

/// Cell text for a stored hour value; zero shows as an empty cell
pub fn display_hours(hours: f64) -> String {
    if hours == 0.0 {
        String::new()
    } else {
        format_number(hours)
    }
}

/// Clean up a cell on blur ("1.2.3" → "1.2", "." → "")
pub fn normalize(input: &str) -> String {
    match parse_leading(input) {
        Some(v) => display_hours(v),
        None => String::new(),
    }
}

/// Rate text to a float; non-numeric or negative becomes 0.0
pub fn rate_from_text(input: &str) -> f64 {
    match parse_leading(input) {
        Some(rate) if rate >= 0.0 => rate,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("1a.5h"), "1.5");
        assert_eq!(sanitize("-3"), "3");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_parse_leading() {
        assert_eq!(parse_leading("1.2.3"), Some(1.2));
        assert_eq!(parse_leading("3."), Some(3.0));
        assert_eq!(parse_leading(".5"), Some(0.5));
        assert_eq!(parse_leading("."), None);
        assert_eq!(parse_leading(""), None);
        assert_eq!(parse_leading("8h"), Some(8.0));
    }

    #[test]
    fn test_round_total() {
        assert_eq!(round_total(3.0), 3.0);
        assert_eq!(round_total(0.1 + 0.2), 0.3);
        assert_eq!(round_total(1.006), 1.01);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.333), "2.33");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("1.2.3"), "1.2");
        assert_eq!(normalize("0"), "");
        assert_eq!(normalize("."), "");
        assert_eq!(normalize("04.50"), "4.5");
    }

    #[test]
    fn test_rate_from_text() {
        assert_eq!(rate_from_text("95.50"), 95.5);
        assert_eq!(rate_from_text(""), 0.0);
        assert_eq!(rate_from_text("abc"), 0.0);
        assert_eq!(rate_from_text("-5"), 0.0);
    }
}
