// RSA Decryption Implementation
// Raises each ciphertext block to d mod n and decodes the recovered digits

use log::debug;
use num_bigint::BigUint;

use super::chunk::reassemble;
use super::codec::decode;
use super::keygen::PrivateKey;
use crate::config::BlockLength;
use crate::error::{Result, RsaError};

/// Compute c^d mod n for every block
pub fn decrypt_blocks(ciphertexts: &[BigUint], private_key: &PrivateKey) -> Result<Vec<BigUint>> {
    ciphertexts
        .iter()
        .enumerate()
        .map(|(index, c)| {
            if c >= &private_key.n {
                return Err(RsaError::CiphertextOutOfRange { index });
            }
            Ok(c.modpow(&private_key.d, &private_key.n))
        })
        .collect()
}

/// Decrypt ciphertext blocks back to text
/// `padding` must be the count returned alongside the ciphertext
pub fn decrypt(
    ciphertexts: &[BigUint],
    private_key: &PrivateKey,
    padding: usize,
    block_len: Option<BlockLength>,
) -> Result<String> {
    let block_len = BlockLength::resolve(block_len, &private_key.n)?;

    let blocks = decrypt_blocks(ciphertexts, private_key)?;
    let digits = reassemble(&blocks, block_len.get())?;
    let plaintext = decode(&digits, padding)?;

    debug!(
        "decrypt blocks={} block_len={} padding={} chars={}",
        ciphertexts.len(),
        block_len.get(),
        padding,
        plaintext.chars().count()
    );

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rsa::encrypt::Ciphertext;
    use crate::rsa::keygen::PublicKey;

    fn textbook_keys() -> (PublicKey, PrivateKey) {
        let n = BigUint::from(3233u32);
        (
            PublicKey { n: n.clone(), e: BigUint::from(17u32) },
            PrivateKey { n, d: BigUint::from(2753u32) },
        )
    }

    #[test]
    fn test_decrypt_textbook() {
        let (_, private) = textbook_keys();
        let blocks = decrypt_blocks(&[BigUint::from(2790u32)], &private).unwrap();
        assert_eq!(blocks, vec![BigUint::from(65u32)]);
        assert_eq!(reassemble(&blocks, 3).unwrap(), "065");

        let text = decrypt(&[BigUint::from(2790u32)], &private, 0, None).unwrap();
        assert_eq!(text, "A");
    }

    #[test]
    fn test_decrypt_roundtrip() {
        let (public, private) = textbook_keys();
        for message in ["", "A", "Hello, RSA!", "line one\nline two", "\u{3e7}\u{0}"] {
            let ciphertext = public.encrypt(message, None).unwrap();
            assert_eq!(private.decrypt(&ciphertext, None).unwrap(), message);
        }
    }

    #[test]
    fn test_decrypt_out_of_range() {
        let (_, private) = textbook_keys();
        let err = decrypt(&[BigUint::from(1u8), BigUint::from(3233u32)], &private, 0, None)
            .unwrap_err();
        assert_eq!(err, RsaError::CiphertextOutOfRange { index: 1 });
    }

    #[test]
    fn test_decrypt_bad_padding() {
        let (public, private) = textbook_keys();
        let ciphertext = public.encrypt("AB", None).unwrap();
        let tampered = Ciphertext { padding: 7, ..ciphertext };
        let err = private.decrypt(&tampered, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let (public, _) = textbook_keys();
        // Same modulus, unrelated exponent: 2753 + 1
        let wrong = PrivateKey { n: public.n.clone(), d: BigUint::from(2754u32) };
        let ciphertext = public.encrypt("Test", None).unwrap();
        let recovered = wrong.decrypt(&ciphertext, None);
        assert_ne!(recovered, Ok("Test".to_string()));
    }
}
