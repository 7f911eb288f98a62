// RSA Encryption Implementation
// Encodes text into decimal blocks and raises each block to e mod n

use log::debug;
use num_bigint::BigUint;

use super::chunk::chunk;
use super::codec::encode;
use super::keygen::PublicKey;
use crate::config::BlockLength;
use crate::error::Result;

/// Encrypted message: one integer per block plus the filler digit count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub blocks: Vec<BigUint>,
    pub padding: usize,
}

/// Compute b^e mod n for every block
pub fn encrypt_blocks(blocks: &[BigUint], public_key: &PublicKey) -> Vec<BigUint> {
    blocks
        .iter()
        .map(|block| block.modpow(&public_key.e, &public_key.n))
        .collect()
}

/// Encrypt a text message using RSA public key
///
/// Without an explicit `block_len` the widest length that fits below the
/// modulus is used; [`decrypt`](super::decrypt::decrypt) derives the same one.
pub fn encrypt(
    message: &str,
    public_key: &PublicKey,
    block_len: Option<BlockLength>,
) -> Result<Ciphertext> {
    let block_len = BlockLength::resolve(block_len, &public_key.n)?;

    let digits = encode(message)?;
    // Filler digits are dropped on decode, so thread_rng is enough here
    let chunked = chunk(&digits, block_len.get(), &mut rand::thread_rng())?;
    let blocks = encrypt_blocks(&chunked.to_integers()?, public_key);

    debug!(
        "encrypt chars={} block_len={} blocks={} padding={}",
        message.chars().count(),
        block_len.get(),
        blocks.len(),
        chunked.padding
    );

    Ok(Ciphertext {
        blocks,
        padding: chunked.padding,
    })
}
