/// Digits kept when a number carries a country or trunk prefix.
pub const LOCAL_DIGITS: usize = 10;

const MIN_DIGITS: usize = 10;
const MAX_UNPREFIXED_DIGITS: usize = 11;

/// Reduces a phone-like token to its canonical digit string.
///
/// Ten or eleven digits are kept as written. Anything longer is assumed to
/// carry a leading country or trunk code and is cut down to the last
/// [`LOCAL_DIGITS`]. Fewer than ten digits is not a phone number.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() < MIN_DIGITS {
        return None;
    }

    if digits.len() > MAX_UNPREFIXED_DIGITS {
        return Some(digits[digits.len() - LOCAL_DIGITS..].to_string());
    }

    Some(digits)
}
