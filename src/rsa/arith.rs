// Modular Arithmetic
// Extended Euclid, coprimality and modular inverse over num-bigint integers

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Result, RsaError};

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(|a|, |b|)
///
/// Iterative, so deep inputs never grow the stack. Works for negative
/// inputs as well; the result is normalised so that g is never negative.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut a, mut b) = (a.clone(), b.clone());
    let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());
    let (mut y0, mut y1) = (BigInt::one(), BigInt::zero());

    // Invariant: x0*a0 + y0*b0 == b and x1*a0 + y1*b0 == a
    while !a.is_zero() {
        let (q, r) = b.div_mod_floor(&a);
        b = std::mem::replace(&mut a, r);

        let next_y = &y0 - &q * &y1;
        y0 = std::mem::replace(&mut y1, next_y);
        let next_x = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, next_x);
    }

    if b.is_negative() {
        (-b, -x0, -y0)
    } else {
        (b, x0, y0)
    }
}

/// True iff gcd(a, b) == 1
pub fn is_coprime(a: &BigInt, b: &BigInt) -> bool {
    extended_gcd(a, b).0.is_one()
}

/// Compute modular inverse: a^(-1) mod b
/// Returns the representative in [0, b)
pub fn mod_inverse(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if !b.is_positive() {
        return Err(RsaError::NonPositiveModulus);
    }

    let (g, x, _) = extended_gcd(a, b);
    if !g.is_one() {
        return Err(RsaError::NoInverse);
    }

    Ok(x.mod_floor(b))
}

/// Unsigned wrapper around [`mod_inverse`]
pub fn mod_inverse_unsigned(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let inverse = mod_inverse(&BigInt::from(a.clone()), &BigInt::from(m.clone()))?;
    inverse.to_biguint().ok_or(RsaError::NoInverse)
}
