// Message Codec
// Maps each character to its zero-padded 3-digit code point and back

use crate::config::DIGITS_PER_CHAR;
use crate::error::{Result, RsaError};

/// First code point that no longer fits in three digits
pub const CODE_POINT_LIMIT: u32 = 1000;

/// Encode one character as exactly three decimal digits
pub fn encode_char(c: char) -> Result<String> {
    let code_point = c as u32;
    if code_point >= CODE_POINT_LIMIT {
        return Err(RsaError::UnrepresentableChar { ch: c, code_point });
    }
    Ok(format!("{:03}", code_point))
}

/// Encode a whole message into its digit string
pub fn encode(text: &str) -> Result<String> {
    let mut digits = String::with_capacity(text.len() * DIGITS_PER_CHAR);
    for c in text.chars() {
        digits.push_str(&encode_char(c)?);
    }
    Ok(digits)
}

/// Drop `padding` trailing digits and decode the rest three digits at a time
pub fn decode(digits: &str, padding: usize) -> Result<String> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsaError::MalformedDigits(
            "digit string contains a non-digit character".to_string(),
        ));
    }
    if padding > digits.len() {
        return Err(RsaError::MalformedDigits(format!(
            "padding of {} exceeds the {} available digits",
            padding,
            digits.len()
        )));
    }

    let payload = &digits.as_bytes()[..digits.len() - padding];
    if payload.len() % DIGITS_PER_CHAR != 0 {
        return Err(RsaError::MalformedDigits(format!(
            "{} digits do not split into {}-digit characters",
            payload.len(),
            DIGITS_PER_CHAR
        )));
    }

    payload
        .chunks(DIGITS_PER_CHAR)
        .map(|group| {
            let code_point = group
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
            char::from_u32(code_point).ok_or_else(|| {
                RsaError::MalformedDigits(format!("{} is not a valid code point", code_point))
            })
        })
        .collect()
}
