#![forbid(unsafe_code)]

//! Dashboard progress bars.
//!
//! Each `.progress-item` shows its value as text (`"72"`, `"45.5%"`, `"N/A"`);
//! the fill width is derived from that text. Fills that scroll into view get
//! a width transition so later changes animate.

/// Transition set on a fill once it becomes visible.
pub const FILL_TRANSITION: &str = "width 1s ease";

/// Numeric value shown by a progress label.
///
/// `n/a` (any case) and text without a leading number read as `0`; otherwise
/// the longest leading decimal number is used, so `"45%"` reads as `45`.
#[must_use]
pub fn parse_progress_value(text: &str) -> f64 {
    let text = text.trim();
    if text.eq_ignore_ascii_case("n/a") {
        return 0.0;
    }
    parse_leading_number(text).unwrap_or(0.0)
}

/// CSS width for a progress label's text.
#[must_use]
pub fn fill_width(text: &str) -> String {
    format!("{}%", parse_progress_value(text))
}

/// Parse the longest prefix of `s` that forms a decimal number.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent (only consumed when it has digits).
fn parse_leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_reads_as_zero() {
        assert_eq!(parse_progress_value("N/A"), 0.0);
        assert_eq!(parse_progress_value("  n/a "), 0.0);
        assert_eq!(fill_width("n/A"), "0%");
    }

    #[test]
    fn leading_number_is_used() {
        assert_eq!(parse_progress_value("72"), 72.0);
        assert_eq!(parse_progress_value("45.5%"), 45.5);
        assert_eq!(parse_progress_value("-3 units"), -3.0);
        assert_eq!(parse_progress_value(".5"), 0.5);
        assert_eq!(parse_progress_value("7."), 7.0);
        assert_eq!(parse_progress_value("1e2%"), 100.0);
        assert_eq!(parse_progress_value("8e"), 8.0);
    }

    #[test]
    fn garbage_reads_as_zero() {
        assert_eq!(parse_progress_value(""), 0.0);
        assert_eq!(parse_progress_value("abc"), 0.0);
        assert_eq!(parse_progress_value("."), 0.0);
        assert_eq!(parse_progress_value("-"), 0.0);
        assert_eq!(fill_width("pending"), "0%");
    }

    #[test]
    fn width_formatting() {
        assert_eq!(fill_width("60"), "60%");
        assert_eq!(fill_width("12.25"), "12.25%");
    }
}
