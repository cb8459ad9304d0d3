//! Inverse captcha.
//!
//! The captcha is a circular list of digits. The answer sums every digit that
//! matches the digit a fixed number of steps ahead of it: the next digit for
//! part one, the digit halfway around the list for part two.

use crate::error::{Error, Result};

/// Parses the captcha into its digits.
pub fn parse_digits(input: &str) -> Result<Vec<u8>> {
    input
        .trim()
        .bytes()
        .enumerate()
        .map(|(column, byte)| {
            if byte.is_ascii_digit() {
                Ok(byte - b'0')
            } else {
                Err(Error::invalid(format!(
                    "captcha character {:?} at column {} is not a digit",
                    char::from(byte),
                    column + 1
                )))
            }
        })
        .collect()
}

/// Sums every digit equal to the digit `offset` positions further along the
/// circular list.
pub fn matching_sum(digits: &[u8], offset: usize) -> u64 {
    let len = digits.len();
    digits
        .iter()
        .enumerate()
        .filter(|&(i, &digit)| digit == digits[(i + offset) % len])
        .map(|(_, &digit)| u64::from(digit))
        .sum()
}

/// Sum of digits matching the next digit.
pub fn sum_matching_next(input: &str) -> Result<u64> {
    let digits = parse_digits(input)?;
    Ok(matching_sum(&digits, 1))
}

/// Sum of digits matching the digit halfway around the list.
pub fn sum_matching_halfway(input: &str) -> Result<u64> {
    let digits = parse_digits(input)?;
    if digits.len() % 2 != 0 {
        return Err(Error::invalid(format!(
            "halfway captcha needs an even number of digits, got {}",
            digits.len()
        )));
    }
    Ok(matching_sum(&digits, digits.len() / 2))
}
