// Block Chunking
// Splits a digit string into fixed-width blocks and joins decrypted blocks back

use num_bigint::BigUint;
use rand::Rng;

use crate::error::{Result, RsaError};

/// Digit string split into equal-width blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunked {
    pub blocks: Vec<String>,
    /// Random digits appended to fill the last block
    pub padding: usize,
}

impl Chunked {
    /// Interpret every block as a decimal integer
    pub fn to_integers(&self) -> Result<Vec<BigUint>> {
        self.blocks
            .iter()
            .map(|block| {
                BigUint::parse_bytes(block.as_bytes(), 10).ok_or_else(|| {
                    RsaError::MalformedDigits(format!("block {:?} is not a decimal number", block))
                })
            })
            .collect()
    }
}

/// Split `digits` into blocks of `block_len`, filling the tail with random digits.
///
/// The filler comes from `rng`, which need not be cryptographic: decoding
/// drops exactly `padding` digits, so the values never reach the plaintext.
pub fn chunk<R: Rng + ?Sized>(digits: &str, block_len: usize, rng: &mut R) -> Result<Chunked> {
    if block_len == 0 {
        return Err(RsaError::InvalidBlockLength("block length must be positive".to_string()));
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsaError::MalformedDigits(
            "digit string contains a non-digit character".to_string(),
        ));
    }

    let num_blocks = digits.len().div_ceil(block_len);
    let padded_len = num_blocks.checked_mul(block_len).ok_or_else(|| {
        RsaError::InvalidBlockLength(format!(
            "{} blocks of {} digits overflow the addressable length",
            num_blocks, block_len
        ))
    })?;
    let padding = padded_len - digits.len();

    let mut padded = String::new();
    padded.try_reserve_exact(padded_len).map_err(|_| {
        RsaError::InvalidBlockLength(format!(
            "cannot hold {} padded digits for block length {}",
            padded_len, block_len
        ))
    })?;
    padded.push_str(digits);
    for _ in 0..padding {
        padded.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    let blocks = padded
        .as_bytes()
        .chunks(block_len)
        .map(|block| block.iter().copied().map(char::from).collect())
        .collect();

    Ok(Chunked { blocks, padding })
}

/// Render each value as exactly `block_len` digits and concatenate in order
pub fn reassemble(values: &[BigUint], block_len: usize) -> Result<String> {
    let mut digits = String::with_capacity(values.len() * block_len);
    for (index, value) in values.iter().enumerate() {
        let rendered = value.to_str_radix(10);
        if rendered.len() > block_len {
            return Err(RsaError::MalformedDigits(format!(
                "block {} has {} digits, more than the block length {}",
                index,
                rendered.len(),
                block_len
            )));
        }
        // Exponentiation drops the leading zeros of the block's width
        digits.push_str(&format!("{:0>width$}", rendered, width = block_len));
    }
    Ok(digits)
}
