// Number base conversion for whitespace-separated integers.

use phlab_core::LookupError;

/// Digits used for every supported base, most significant first.
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<(), LookupError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(LookupError::InvalidInput(format!(
            "base {base} is outside {MIN_BASE}..={MAX_BASE}"
        )))
    }
}

/// Render `n` in `base` with uppercase digits.
pub fn to_base(n: i128, base: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut magnitude = n.unsigned_abs();
    let base = base as u128;
    let mut out = Vec::new();
    while magnitude > 0 {
        out.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if n < 0 {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Convert every whitespace-separated number in `input` from base `from` to
/// base `to`, joining the results with single spaces.
///
/// Digits are read case-insensitively. Fails if either base is outside
/// 2..=36 or any token is not a number in base `from`.
pub fn convert_base(input: &str, from: u32, to: u32) -> Result<String, LookupError> {
    check_base(from)?;
    check_base(to)?;
    let converted = input
        .split_whitespace()
        .map(|token| {
            i128::from_str_radix(token, from)
                .map(|n| to_base(n, to))
                .map_err(|_| {
                    LookupError::InvalidInput(format!("'{token}' is not a base {from} number"))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(converted.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_to_binary_and_hex() {
        assert_eq!(convert_base("10 255", 10, 2).unwrap(), "1010 11111111");
        assert_eq!(convert_base("255", 10, 16).unwrap(), "FF");
        assert_eq!(convert_base("ff Ff", 16, 10).unwrap(), "255 255");
    }

    #[test]
    fn base_36_and_zero() {
        assert_eq!(convert_base("35", 10, 36).unwrap(), "Z");
        assert_eq!(convert_base("0", 10, 2).unwrap(), "0");
        assert_eq!(convert_base("-10", 10, 2).unwrap(), "-1010");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(convert_base("   ", 10, 2).unwrap(), "");
    }

    #[test]
    fn invalid_digits_and_bases() {
        assert!(convert_base("12", 2, 10).is_err());
        assert!(convert_base("zz", 10, 2).is_err());
        assert!(convert_base("1", 1, 10).is_err());
        assert!(convert_base("1", 10, 37).is_err());
    }
}
