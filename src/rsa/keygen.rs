// RSA Key Generation
// Derives a public/private key pair from two primes

use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

use super::arith::{is_coprime, mod_inverse_unsigned};
use super::prime::{RandomSource, SecureSource};
use crate::config::{BlockLength, KeyGenConfig};
use crate::error::{Result, RsaError};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
}

impl PublicKey {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message using this public key
    pub fn encrypt(
        &self,
        message: &str,
        block_len: Option<BlockLength>,
    ) -> Result<super::encrypt::Ciphertext> {
        super::encrypt::encrypt(message, self, block_len)
    }
}

impl PrivateKey {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext produced by [`PublicKey::encrypt`]
    pub fn decrypt(
        &self,
        ciphertext: &super::encrypt::Ciphertext,
        block_len: Option<BlockLength>,
    ) -> Result<String> {
        super::decrypt::decrypt(&ciphertext.blocks, self, ciphertext.padding, block_len)
    }
}

/// Generate an RSA key pair from two primes of `bit_length` bits each
pub fn generate_keypair(bit_length: u64) -> Result<(PublicKey, PrivateKey)> {
    let config = KeyGenConfig::default().with_prime_bits(bit_length);
    let mut source = SecureSource::new(config.miller_rabin_rounds);
    generate_keypair_with(&config, &mut source)
}

/// Generate an RSA key pair, drawing primes and the exponent from `source`
pub fn generate_keypair_with<S: RandomSource + ?Sized>(
    config: &KeyGenConfig,
    source: &mut S,
) -> Result<(PublicKey, PrivateKey)> {
    config.validate()?;

    // Step 1: Generate two distinct primes p and q
    let p = source.prime(config.prime_bits)?;
    let mut q = source.prime(config.prime_bits)?;
    let mut redraws = 0;
    while q == p {
        if redraws == config.max_prime_attempts {
            return Err(RsaError::KeyGenerationExhausted {
                what: "a second distinct prime",
                attempts: redraws,
            });
        }
        q = source.prime(config.prime_bits)?;
        redraws += 1;
    }

    let (public, private, _) = derive_from_primes(&p, &q, config, source)?;
    Ok((public, private))
}

/// Build the key pair for known primes, also returning φ(n)
pub(crate) fn derive_from_primes<S: RandomSource + ?Sized>(
    p: &BigUint,
    q: &BigUint,
    config: &KeyGenConfig,
    source: &mut S,
) -> Result<(PublicKey, PrivateKey, BigUint)> {
    let two = BigUint::from(2u8);
    if p < &two || q < &two {
        return Err(RsaError::PrimeGeneration(format!("{} and {} are not both primes", p, q)));
    }

    // Step 2: n = p * q, φ(n) = (p-1)(q-1)
    let n = p * q;
    let phi = (p - 1u8) * (q - 1u8);

    // Step 3: Rejection-sample e in [1, φ) coprime to φ, skipping 1 and φ-1
    let one = BigUint::one();
    let phi_minus_one = &phi - 1u8;
    let phi_signed = BigInt::from(phi.clone());
    let mut attempts = 0;
    let e = loop {
        if attempts == config.max_exponent_attempts {
            return Err(RsaError::KeyGenerationExhausted {
                what: "a public exponent",
                attempts,
            });
        }
        attempts += 1;

        let candidate = source.range(&one, &phi)?;
        if candidate == one || candidate == phi_minus_one {
            trace!("rejecting degenerate exponent candidate");
            continue;
        }
        if is_coprime(&BigInt::from(candidate.clone()), &phi_signed) {
            break candidate;
        }
        trace!("rejecting exponent candidate sharing a factor with phi");
    };

    // Step 4: d = e^(-1) mod φ(n)
    let d = mod_inverse_unsigned(&e, &phi)?;

    debug!(
        "generated keypair prime_bits={} modulus_bits={} exponent_attempts={}",
        p.bits(),
        n.bits(),
        attempts
    );

    Ok((
        PublicKey { n: n.clone(), e },
        PrivateKey { n, d },
        phi,
    ))
}
