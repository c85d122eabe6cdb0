//! Number formatting for dashboard tiles, tables, and chart labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format with `,` thousands separators and at most three fraction digits,
/// trailing zeros trimmed (`125000.0` -> `125,000`, `1234.5` -> `1,234.5`).
#[must_use]
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Integer count with thousands separators.
#[must_use]
pub fn grouped_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Fixed two-decimal amount without separators (`110000` -> `110000.00`).
#[must_use]
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Shortest display of a ratio followed by `%` (`88.0` -> `88%`, `5.6` -> `5.6%`).
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", trim_float(value))
}

/// Shortest round-trip display of a float, without a trailing `.0`.
#[must_use]
pub fn trim_float(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    value.to_string()
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
