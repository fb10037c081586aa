//! Parsing of raw measurement values.
//!
//! Values arrive as free text. The live per-row calculation is strict. The
//! printed report reads the leading number of a value, so `120°`, `6/10`,
//! and `120-130` read as 120, 6, and 120.

/// Which numeric rule to apply to a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// The whole (trimmed) value must be a number.
    Strict,
    /// Drop everything except digits, `.`, and `-`, then read the leading number.
    Lenient,
    /// Read the leading number of the value as written.
    Prefix,
}

/// Parse a value as a finite number according to `mode`.
pub fn parse_number(value: &str, mode: ParseMode) -> Option<f64> {
    match mode {
        ParseMode::Strict => parse_strict(value),
        ParseMode::Lenient => parse_lenient(value),
        ParseMode::Prefix => parse_prefix(value),
    }
}

pub fn parse_strict(value: &str) -> Option<f64> {
    finite(value.trim().parse::<f64>().ok()?)
}

/// Strip every character that is not a digit, a decimal point, or a minus
/// sign, then read the leading number of what remains.
pub fn parse_lenient(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    parse_leading(&cleaned)
}

/// Read the longest number at the start of the value, after leading
/// whitespace. `6/10` reads as 6.
pub fn parse_prefix(value: &str) -> Option<f64> {
    parse_leading(value.trim_start())
}

fn parse_leading(value: &str) -> Option<f64> {
    let len = number_prefix_len(value.as_bytes());
    finite(value[..len].parse::<f64>().ok()?)
}

/// Length of the longest prefix that reads as a decimal number: an optional
/// sign, digits with at most one decimal point, and an optional exponent.
/// Zero when the prefix holds no digit.
fn number_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut digits = digits_from(end);
    end += digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        end += 1 + fraction;
        digits += fraction;
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Whether a value has the manual muscle test shape `digits/digits`.
pub fn is_mmt_token(value: &str) -> bool {
    match value.split_once('/') {
        Some((level, scale)) => all_digits(level) && all_digits(scale),
        None => false,
    }
}

/// The level (numerator) of an MMT token such as `4/5`.
///
/// Returns `None` when the value is not an MMT token or the level does not
/// fit an integer.
pub fn parse_mmt_level(value: &str) -> Option<i64> {
    if !is_mmt_token(value) {
        return None;
    }
    let (level, _) = value.split_once('/')?;
    level.parse().ok()
}

/// The whole-number level written before the `/` of a grade, ignoring any
/// trailing modifier: `4+/5` and `4-/5` both read as 4.
pub fn parse_mmt_leading_level(value: &str) -> Option<i64> {
    let (level, _) = value.split_once('/')?;
    let level = level.trim_start();
    let sign = usize::from(level.starts_with(['+', '-']));
    let digits = level[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    level[..sign + digits].parse().ok()
}

/// The scale (denominator) of an MMT token, normally 5.
pub fn parse_mmt_scale(value: &str) -> Option<i64> {
    if !is_mmt_token(value) {
        return None;
    }
    let (_, scale) = value.split_once('/')?;
    scale.parse().ok()
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
