//! Base-16 text helpers for color channels
//!
//! Channels are plain `f64`s, so formatting and parsing have to cope with
//! `NaN`, infinities, negative and fractional values without failing.

/// Lowercase base-16 text of a channel value
///
/// `NaN` and infinities are spelled out, negative values keep their sign and
/// the fractional part is dropped. `zero_pad` widens finite non-negative
/// values to at least two digits.
pub(crate) fn channel_to_hex(value: f64, zero_pad: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let whole = value.trunc();
    if whole < 0.0 {
        return format!("-{}", whole_to_hex(-whole));
    }

    let digits = whole_to_hex(whole);
    if zero_pad && digits.len() < 2 {
        format!("0{digits}")
    } else {
        digits
    }
}

/// Hex digits of a finite, non-negative integral `f64`
///
/// Works on the float directly so values past `u64::MAX` keep every digit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_to_hex(mut whole: f64) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = Vec::new();
    loop {
        let digit = whole.rem_euclid(16.0);
        out.push(DIGITS[digit as usize]);
        whole = ((whole - digit) / 16.0).trunc();
        if whole < 1.0 {
            break;
        }
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Parse the leading base-16 number of `text`
///
/// Mirrors a lenient integer parse: leading whitespace, an optional sign and
/// an optional `0x` prefix are accepted, then the longest run of hex digits
/// is read. Anything else yields `NaN`.
pub(crate) fn parse_hex_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);

    let mut value = 0.0_f64;
    let mut digits = 0usize;
    for c in rest.chars() {
        let Some(d) = c.to_digit(16) else { break };
        value = value * 16.0 + f64::from(d);
        digits += 1;
    }

    if digits == 0 {
        f64::NAN
    } else if negative {
        -value
    } else {
        value
    }
}

/// Character-indexed substring, clamped to the string length
pub(crate) fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_to_hex() {
        assert_eq!(channel_to_hex(255.0, false), "ff");
        assert_eq!(channel_to_hex(10.0, false), "a");
        assert_eq!(channel_to_hex(10.0, true), "0a");
        assert_eq!(channel_to_hex(0.0, false), "0");
        assert_eq!(channel_to_hex(4095.0, false), "fff");
        assert_eq!(channel_to_hex(16.9, false), "10");
        assert_eq!(channel_to_hex(-17.0, false), "-11");
        assert_eq!(channel_to_hex(-0.5, false), "0");
        assert_eq!(channel_to_hex(f64::NAN, true), "NaN");
        assert_eq!(channel_to_hex(f64::NEG_INFINITY, false), "-Infinity");
    }

    #[test]
    fn test_channel_to_hex_beyond_u64() {
        assert_eq!(channel_to_hex(1e20, false), "56bc75e2d63100000");
        assert_eq!(channel_to_hex(-1e20, false), "-56bc75e2d63100000");
        assert_eq!(channel_to_hex(18_446_744_073_709_551_616.0, true), "10000000000000000");
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_hex_prefix("ff"), 255.0);
        assert_eq!(parse_hex_prefix("0A"), 10.0);
        assert_eq!(parse_hex_prefix("1g"), 1.0);
        assert_eq!(parse_hex_prefix(" -f"), -15.0);
        assert_eq!(parse_hex_prefix("0x1f"), 31.0);
        assert!(parse_hex_prefix("").is_nan());
        assert!(parse_hex_prefix("zz").is_nan());
        assert!(parse_hex_prefix("0x").is_nan());
    }

    #[test]
    fn test_slice_chars_clamps() {
        assert_eq!(slice_chars("abcdef", 2, 4), "cd");
        assert_eq!(slice_chars("abc", 2, 4), "c");
        assert_eq!(slice_chars("abc", 4, 6), "");
    }
}
