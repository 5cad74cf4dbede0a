// RSA Key Generation
// Derives a key pair (n, e, d) from two caller-supplied primes.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::bigint::mod_inverse;
use crate::error::RsaError;

/// Fixed public exponent. 65537 is a Fermat prime whose two-bit pattern
/// keeps the encryption exponentiation cheap.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// An RSA key pair. Immutable once constructed; reused across any number of
/// encrypt/decrypt calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Modulus, n = p * q
    pub n: BigUint,
    /// Public exponent, always [`PUBLIC_EXPONENT`]
    pub e: BigUint,
    /// Private exponent, e^(-1) mod (p-1)(q-1)
    pub d: BigUint,
}

/// Generate an RSA key pair from two primes.
///
/// `p` and `q` are assumed to be distinct primes and are never tested for
/// primality here; supplying composites yields a key pair that simply does
/// not decrypt correctly.
pub fn generate_keypair(p: &BigUint, q: &BigUint) -> Result<KeyPair, RsaError> {
    let two = BigUint::from(2u8);
    if *p < two || *q < two {
        return Err(RsaError::KeyGeneration(
            "p and q must both be at least 2".to_string(),
        ));
    }

    let e = BigUint::from(PUBLIC_EXPONENT);
    let n = p * q;
    // Euler's totient of n for distinct primes p, q
    let z = (p - 1u8) * (q - 1u8);
    let d = private_exponent(&e, &z)?;

    Ok(KeyPair { n, e, d })
}

/// Generate an RSA key pair from primes given as decimal digit strings.
pub fn generate_keypair_from_decimal(p: &str, q: &str) -> Result<KeyPair, RsaError> {
    let p: BigUint = p.trim().parse()?;
    let q: BigUint = q.trim().parse()?;
    generate_keypair(&p, &q)
}

/// Derive the private exponent d with 0 < d < z and (e * d) mod z == 1.
///
/// The postcondition is verified explicitly: if e and z share a factor the
/// Bézout coefficients are meaningless, and returning them anyway would hand
/// the caller a key pair that silently fails to invert.
pub fn private_exponent(e: &BigUint, z: &BigUint) -> Result<BigUint, RsaError> {
    let d = mod_inverse(e, z).ok_or_else(|| {
        RsaError::KeyGeneration(format!(
            "e={} is not coprime with (p-1)*(q-1); choose different primes",
            e
        ))
    })?;

    if d.is_zero() || d >= *z || (e * &d) % z != BigUint::one() {
        return Err(RsaError::KeyGeneration(
            "derived exponent does not satisfy (e*d) mod z == 1".to_string(),
        ));
    }

    Ok(d)
}
