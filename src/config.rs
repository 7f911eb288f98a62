// Configuration for key generation and message blocking

use num_bigint::BigUint;

use crate::error::{Result, RsaError};

/// Smallest prime size accepted by key generation
pub const MIN_PRIME_BITS: u64 = 8;

/// Digits used to encode one character
pub const DIGITS_PER_CHAR: usize = 3;

/// Configuration for key pair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Size of each of the two primes, so the modulus is about twice this
    pub prime_bits: u64,
    pub max_prime_attempts: u32,
    pub max_exponent_attempts: u32,
    pub miller_rabin_rounds: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            prime_bits: 512,
            max_prime_attempts: 64,
            max_exponent_attempts: 1000,
            miller_rabin_rounds: 10,
        }
    }
}

impl KeyGenConfig {
    pub fn with_prime_bits(mut self, bits: u64) -> Self {
        self.prime_bits = bits;
        self
    }

    pub fn with_max_prime_attempts(mut self, attempts: u32) -> Self {
        self.max_prime_attempts = attempts;
        self
    }

    pub fn with_max_exponent_attempts(mut self, attempts: u32) -> Self {
        self.max_exponent_attempts = attempts;
        self
    }

    pub fn with_miller_rabin_rounds(mut self, rounds: u32) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    /// Reject settings that can never produce a key
    pub fn validate(&self) -> Result<()> {
        if self.prime_bits < MIN_PRIME_BITS {
            return Err(RsaError::InvalidKeySize {
                bits: self.prime_bits,
                min: MIN_PRIME_BITS,
            });
        }
        // Zero rounds would accept every odd candidate as prime
        if self.miller_rabin_rounds == 0 {
            return Err(RsaError::InvalidConfig(
                "miller_rabin_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Width, in decimal digits, of one plaintext block.
///
/// Always a positive multiple of [`DIGITS_PER_CHAR`] so that padding digits
/// never land inside a character's code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockLength(usize);

impl BlockLength {
    pub fn new(digits: usize) -> Result<Self> {
        if digits == 0 || digits % DIGITS_PER_CHAR != 0 {
            return Err(RsaError::InvalidBlockLength(format!(
                "{} is not a positive multiple of {}",
                digits, DIGITS_PER_CHAR
            )));
        }
        Ok(Self(digits))
    }

    /// Widest block length whose values all stay below `modulus`
    pub fn for_modulus(modulus: &BigUint) -> Result<Self> {
        // Decimal digits of n, minus one, is the largest k with 10^k <= n
        let max_digits = modulus.to_str_radix(10).len().saturating_sub(1);
        let digits = max_digits - max_digits % DIGITS_PER_CHAR;
        if digits == 0 {
            return Err(RsaError::InvalidBlockLength(format!(
                "modulus {} is too small to hold a single character",
                modulus
            )));
        }
        Ok(Self(digits))
    }

    /// Ensure every `self`-digit block is below `modulus`
    pub fn check_against(self, modulus: &BigUint) -> Result<Self> {
        let limit = num_traits::pow(BigUint::from(10u8), self.0);
        if &limit > modulus {
            return Err(RsaError::InvalidBlockLength(format!(
                "{}-digit blocks do not fit below modulus {}",
                self.0, modulus
            )));
        }
        Ok(self)
    }

    /// Explicit length checked against `modulus`, or the widest that fits
    pub fn resolve(block_len: Option<Self>, modulus: &BigUint) -> Result<Self> {
        match block_len {
            Some(len) => len.check_against(modulus),
            None => Self::for_modulus(modulus),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_length_multiple_of_three() {
        assert_eq!(BlockLength::new(6).unwrap().get(), 6);
        assert!(BlockLength::new(0).is_err());
        assert!(BlockLength::new(5).is_err());
    }

    #[test]
    fn test_for_modulus() {
        // 10^3 <= 3233 < 10^4
        assert_eq!(BlockLength::for_modulus(&BigUint::from(3233u32)).unwrap().get(), 3);
        assert_eq!(BlockLength::for_modulus(&BigUint::from(1000u32)).unwrap().get(), 3);
        assert_eq!(BlockLength::for_modulus(&BigUint::from(1_000_000u32)).unwrap().get(), 6);
        assert_eq!(BlockLength::for_modulus(&BigUint::from(999_999u32)).unwrap().get(), 3);
        assert!(BlockLength::for_modulus(&BigUint::from(999u32)).is_err());
    }

    #[test]
    fn test_check_against() {
        let n = BigUint::from(3233u32);
        assert!(BlockLength::new(3).unwrap().check_against(&n).is_ok());
        assert!(BlockLength::new(6).unwrap().check_against(&n).is_err());
        assert!(BlockLength::resolve(None, &n).is_ok());
    }

    #[test]
    fn test_key_gen_config() {
        let config = KeyGenConfig::default().with_prime_bits(4);
        assert!(config.validate().is_err());
        assert!(config.with_prime_bits(MIN_PRIME_BITS).validate().is_ok());
    }

    #[test]
    fn test_zero_primality_rounds_rejected() {
        let config = KeyGenConfig::default()
            .with_prime_bits(16)
            .with_miller_rabin_rounds(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RsaError::InvalidConfig(_)));
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
        assert!(config.with_miller_rabin_rounds(1).validate().is_ok());
    }
}
