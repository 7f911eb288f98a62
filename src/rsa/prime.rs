// Prime and Range Sources
// Key generation draws all of its randomness through `RandomSource`

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Result, RsaError};

/// Supplier of primes and uniformly sampled integers for key generation.
///
/// The default implementation is [`SecureSource`]. Tests substitute scripted
/// sources to pin down p, q and e.
pub trait RandomSource {
    /// A prime with exactly `bits` significant bits
    fn prime(&mut self, bits: u64) -> Result<BigUint>;

    /// An integer drawn uniformly from [low, high)
    fn range(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint>;
}

/// `RandomSource` backed by a cryptographic RNG and Miller-Rabin testing
#[derive(Debug, Clone)]
pub struct SecureSource<R> {
    rng: R,
    rounds: u32,
}

impl SecureSource<OsRng> {
    pub fn new(rounds: u32) -> Self {
        Self::with_rng(OsRng, rounds)
    }
}

impl Default for SecureSource<OsRng> {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<R: RngCore + CryptoRng> SecureSource<R> {
    pub fn with_rng(rng: R, rounds: u32) -> Self {
        Self { rng, rounds }
    }
}

impl<R: RngCore + CryptoRng> RandomSource for SecureSource<R> {
    fn prime(&mut self, bits: u64) -> Result<BigUint> {
        if bits < 2 {
            return Err(RsaError::PrimeGeneration(format!(
                "no prime has {} bits",
                bits
            )));
        }
        if self.rounds == 0 {
            return Err(RsaError::PrimeGeneration(
                "at least one Miller-Rabin round is required".to_string(),
            ));
        }

        // Range [2^(bits-1), 2^bits)
        let lower = BigUint::one() << (bits - 1);
        let upper = BigUint::one() << bits;

        loop {
            let mut candidate = self.rng.gen_biguint_range(&lower, &upper);

            // Make it odd; the top bit keeps it inside the range
            candidate |= BigUint::one();

            if is_probable_prime(&candidate, self.rounds, &mut self.rng) {
                return Ok(candidate);
            }
        }
    }

    fn range(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint> {
        if low >= high {
            return Err(RsaError::PrimeGeneration(format!(
                "empty sampling range [{}, {})",
                low, high
            )));
        }
        Ok(self.rng.gen_biguint_range(low, high))
    }
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime<R: RngCore + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two || n == &BigUint::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        // Pick random witness a in [2, n-1)
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_probable_prime() {
        let mut rng = StdRng::seed_from_u64(7);
        for p in [2u32, 3, 5, 7, 61, 53, 7919] {
            assert!(is_probable_prime(&BigUint::from(p), 10, &mut rng), "{}", p);
        }
        for c in [0u32, 1, 4, 9, 561, 3233] {
            assert!(!is_probable_prime(&BigUint::from(c), 10, &mut rng), "{}", c);
        }
    }

    #[test]
    fn test_prime_bit_length() {
        let mut source = SecureSource::with_rng(StdRng::seed_from_u64(42), 10);
        for bits in [8u64, 16, 64] {
            let p = source.prime(bits).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(p.is_odd());
        }
    }

    #[test]
    fn test_prime_too_small() {
        let mut source = SecureSource::default();
        assert!(matches!(source.prime(1), Err(RsaError::PrimeGeneration(_))));
    }

    #[test]
    fn test_prime_needs_witness_rounds() {
        let mut source = SecureSource::with_rng(StdRng::seed_from_u64(3), 0);
        assert!(matches!(source.prime(16), Err(RsaError::PrimeGeneration(_))));
    }

    #[test]
    fn test_range() {
        let mut source = SecureSource::with_rng(StdRng::seed_from_u64(1), 10);
        let low = BigUint::from(1u8);
        let high = BigUint::from(3u8);
        for _ in 0..32 {
            let v = source.range(&low, &high).unwrap().to_u32().unwrap();
            assert!((1..3).contains(&v));
        }
        assert!(source.range(&high, &low).is_err());
    }
}
