//! Helpers for hosts that read geometry from computed-style text.

/// Parses the leading number of a computed style value, the way browsers' `parseFloat` does.
///
/// `"16px"` → `Some(16.0)`, `"  -2.5e1rem"` → `Some(-25.0)`, `"normal"` / `""` → `None`.
/// Units are ignored; computed styles report lengths in pixels.
pub fn parse_px(value: &str) -> Option<f32> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::parse_px;

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_px("16px"), Some(16.0));
        assert_eq!(parse_px("  12.5px"), Some(12.5));
        assert_eq!(parse_px("-4px"), Some(-4.0));
        assert_eq!(parse_px(".5em"), Some(0.5));
        assert_eq!(parse_px("3."), Some(3.0));
        assert_eq!(parse_px("1e2px"), Some(100.0));
        assert_eq!(parse_px("2em"), Some(2.0));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("-"), None);
        assert_eq!(parse_px("."), None);
    }
}
