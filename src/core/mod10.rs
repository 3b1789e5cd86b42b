use crate::utils::error::{Result, ScanError};

/// Luhn-style modulo 10 check digit.
///
/// Digits are weighted 2, 1, 2, 1, ... starting from the rightmost one; every
/// product is folded into the sum of its decimal digits (18 -> 1 + 8).
pub fn mod10_digit(digits: &str) -> Result<char> {
    if digits.is_empty() {
        return Err(ScanError::invalid_input("cannot compute a check digit of an empty string"));
    }

    let mut total = 0u32;
    for (position, ch) in digits.chars().rev().enumerate() {
        let value = ch.to_digit(10).ok_or_else(|| {
            ScanError::invalid_input(format!("non-digit character {:?} in {:?}", ch, digits))
        })?;
        // enumerate() is 0-based, so even indexes are the odd 1-based positions
        let weighted = if position % 2 == 0 { value * 2 } else { value };
        total += weighted / 10 + weighted % 10;
    }

    let digit = (10 - total % 10) % 10;
    // digit < 10
    Ok(char::from(b'0' + digit as u8))
}

pub fn append_mod10_digit(digits: &str) -> Result<String> {
    let check = mod10_digit(digits)?;
    let mut extended = String::with_capacity(digits.len() + 1);
    extended.push_str(digits);
    extended.push(check);
    Ok(extended)
}
