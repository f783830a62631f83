//! Parsing of string keys into indices.

/// Largest index a key may name: `2^53 - 1`, the last integer an IEEE 754
/// double represents exactly.
pub const MAX_SAFE_INDEX: u64 = (1 << 53) - 1;

/// Why a key was not accepted as an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("key is empty")]
    Empty,

    #[error("key is a negative number")]
    Negative,

    #[error("key has a fractional part")]
    Fractional,

    /// The key is a digit string larger than [`MAX_SAFE_INDEX`] or than
    /// `usize::MAX` on this target.
    #[error("key exceeds the safe index range")]
    Unsafe,

    #[error("key is not a decimal integer")]
    NotDecimal,
}

/// Parse `key` as a non-negative, safe, base-10 integer index.
///
/// Leading zeros are accepted (`"007"` is 7). Anything other than ASCII
/// digits is rejected, including `"+1"`, `" 1"`, `"-0"` and `"1e3"`.
///
/// ```
/// use odometer_index::{KeyError, parse_index_key};
///
/// assert_eq!(parse_index_key("42"), Ok(42));
/// assert_eq!(parse_index_key("1.5"), Err(KeyError::Fractional));
/// assert_eq!(parse_index_key("-1"), Err(KeyError::Negative));
/// assert_eq!(parse_index_key("abc"), Err(KeyError::NotDecimal));
/// ```
pub fn parse_index_key(key: &str) -> Result<usize, KeyError> {
    let bytes = key.as_bytes();
    if bytes.is_empty() {
        return Err(KeyError::Empty);
    }

    if !is_digits(bytes) {
        return Err(classify(bytes));
    }

    let mut value: u64 = 0;
    for &digit in bytes {
        // Bounded by MAX_SAFE_INDEX before every step, so this can't overflow.
        value = value * 10 + u64::from(digit - b'0');
        if value > MAX_SAFE_INDEX {
            return Err(KeyError::Unsafe);
        }
    }

    usize::try_from(value).map_err(|_| KeyError::Unsafe)
}

fn is_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// `digits` or `digits.digits*`.
fn is_decimal(bytes: &[u8]) -> bool {
    match bytes.iter().position(|&b| b == b'.') {
        None => is_digits(bytes),
        Some(dot) => {
            let (int, frac) = (&bytes[..dot], &bytes[dot + 1..]);
            is_digits(int) && frac.iter().all(u8::is_ascii_digit)
        }
    }
}

fn classify(bytes: &[u8]) -> KeyError {
    match bytes {
        [b'-', rest @ ..] if is_decimal(rest) => KeyError::Negative,
        _ if is_decimal(bytes) => KeyError::Fractional,
        _ => KeyError::NotDecimal,
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
