/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1_234), "1,234");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a duration in whole seconds as a human-readable string.
///
/// * `< 60` seconds → `"45s"`
/// * `< 1` hour → `"2m 3s"`
/// * otherwise → `"1h 0m 12s"`
///
/// Negative inputs render with a leading minus.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_duration_secs;
///
/// assert_eq!(format_duration_secs(45), "45s");
/// assert_eq!(format_duration_secs(123), "2m 3s");
/// assert_eq!(format_duration_secs(3_612), "1h 0m 12s");
/// assert_eq!(format_duration_secs(0), "0s");
/// ```
pub fn format_duration_secs(seconds: i64) -> String {
    let negative = seconds < 0;
    let total = seconds.unsigned_abs();

    let formatted = if total < 60 {
        format!("{}s", total)
    } else if total < 3_600 {
        format!("{}m {}s", total / 60, total % 60)
    } else {
        let hours = total / 3_600;
        let rem = total % 3_600;
        format!("{}h {}m {}s", group_thousands(&hours.to_string()), rem / 60, rem % 60)
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a fractional seconds value with thousands separators and two
/// decimal places, e.g. for mean trip durations.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_seconds_f64;
///
/// assert_eq!(format_seconds_f64(200.0), "200.00");
/// assert_eq!(format_seconds_f64(1234.5), "1,234.50");
/// ```
pub fn format_seconds_f64(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let grouped = group_thousands(&integer_part.to_string());
    let frac_str = format!("{:.2}", frac_part);
    // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
    let result = format!("{}{}", grouped, &frac_str[1..]);

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
