use std::str;

/// Scans an integer literal from the start of `bytes`.
///
/// The rules match C's `strtoll` with base 0, minus sign handling (callers
/// only invoke this at an ASCII digit): a `0x`/`0X` prefix followed by at
/// least one hex digit selects hexadecimal, any other leading `0` selects
/// octal, and everything else is decimal. Digit accumulation saturates at
/// `i64::MAX` instead of overflowing.
///
/// ## Parameters
/// - `bytes`: The input to scan; only a leading prefix is consumed.
///
/// ## Returns
/// - `Some((value, consumed))`: The decoded value and how many bytes of
///   input it occupied.
/// - `None`: If `bytes` does not start with an ASCII digit.
///
/// ## Example
/// ```
/// use lume::util::num::scan_integer;
///
/// assert_eq!(scan_integer(b"42;"), Some((42, 2)));
/// assert_eq!(scan_integer(b"0x1f"), Some((31, 4)));
/// assert_eq!(scan_integer(b"0755"), Some((493, 4)));
///
/// // An invalid octal digit ends the literal early.
/// assert_eq!(scan_integer(b"08"), Some((0, 1)));
/// ```
pub fn scan_integer(bytes: &[u8]) -> Option<(i64, usize)> {
    let first = *bytes.first()?;
    if !first.is_ascii_digit() {
        return None;
    }

    if first == b'0' {
        if matches!(bytes.get(1).copied(), Some(b'x' | b'X'))
            && bytes.get(2).is_some_and(u8::is_ascii_hexdigit)
        {
            return Some(scan_digits(&bytes[2..], 16, 2));
        }
        return Some(scan_digits(&bytes[1..], 8, 1));
    }

    Some(scan_digits(bytes, 10, 0))
}

fn scan_digits(bytes: &[u8], radix: u32, prefix: usize) -> (i64, usize) {
    let mut value: i64 = 0;
    let mut consumed = 0;

    for &byte in bytes {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            break;
        };
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
        consumed += 1;
    }

    (value, prefix + consumed)
}

/// Scans a floating-point literal from the start of `bytes`.
///
/// Accepts `digits [. digits*] [eE [+|-] digits+]`, consuming the exponent
/// marker only when at least one digit follows it, the same backtracking
/// `strtod` performs on input like `1.5e+`.
///
/// ## Parameters
/// - `bytes`: The input to scan; only a leading prefix is consumed.
///
/// ## Returns
/// - `Some((value, consumed))`: The decoded value and how many bytes of
///   input it occupied.
/// - `None`: If `bytes` does not start with an ASCII digit.
///
/// ## Example
/// ```
/// use lume::util::num::scan_float;
///
/// assert_eq!(scan_float(b"2.5;"), Some((2.5, 3)));
/// assert_eq!(scan_float(b"1.5e+2"), Some((150.0, 6)));
///
/// // A dangling exponent marker is not part of the literal.
/// assert_eq!(scan_float(b"1.5e+"), Some((1.5, 3)));
/// ```
pub fn scan_float(bytes: &[u8]) -> Option<(f64, usize)> {
    let mut end = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == 0 {
        return None;
    }

    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent).copied(), Some(b'+' | b'-')) {
            exponent += 1;
        }
        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            end = exponent;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
        }
    }

    let text = str::from_utf8(&bytes[..end]).ok()?;
    let value = text.parse().ok()?;
    Some((value, end))
}
