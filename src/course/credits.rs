//! Conversion between credit entry text and credit values.
//!
//! Entry text is read leniently: the longest numeric prefix wins and trailing
//! garbage is ignored, so `"3 credits"` is 3. Text with no numeric prefix
//! becomes NaN, which the calculator later excludes.

/// Parse credit entry text into a number, NaN when nothing numeric leads it.
pub fn parse_credits(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a credit value for the entry cell. NaN renders empty, the way a
/// numeric input shows an unparseable value. Output always parses back to
/// the same value through [`parse_credits`].
pub fn format_credits(credits: f64) -> String {
    if credits.is_nan() {
        String::new()
    } else if credits == f64::INFINITY {
        "Infinity".to_string()
    } else if credits == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        credits.to_string()
    }
}
