// RSA Engine
// Modular exponentiation as the encrypt/decrypt primitive. The same
// transform serves both directions; only the exponent differs.

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::codec::CodecKind;
use crate::error::RsaError;

/// Compute value^exponent mod n.
///
/// Encryption supplies `exponent = e`, decryption `exponent = d`. The range
/// precondition `0 <= value < n` is the caller's responsibility: RSA is only
/// a bijection on the residues `[0, n)`, and an out-of-range value still
/// produces a number, just not the mathematically intended one. The checked
/// entry points are [`encrypt`] and [`decrypt`].
pub fn transform(value: &BigUint, n: &BigUint, exponent: &BigUint) -> BigUint {
    mod_pow(value, exponent, n)
}

/// Encode a message with the chosen codec and encrypt it.
///
/// Fails with [`RsaError::ValueOutOfRange`] when the encoded message does
/// not fit below the modulus; no block splitting is performed, so such a
/// message is simply too long for this key.
pub fn encrypt(
    message: &[u8],
    n: &BigUint,
    exponent: &BigUint,
    codec: CodecKind,
) -> Result<BigUint, RsaError> {
    let encoded = codec.encode(message)?;
    if encoded >= *n {
        return Err(RsaError::ValueOutOfRange);
    }
    Ok(transform(&encoded, n, exponent))
}

/// Decrypt a ciphertext and decode it with the chosen codec.
///
/// The codec must match the one used to encrypt; a mismatch surfaces as a
/// [`crate::error::CodecError`] or as garbage bytes.
pub fn decrypt(
    ciphertext: &BigUint,
    n: &BigUint,
    exponent: &BigUint,
    codec: CodecKind,
) -> Result<Vec<u8>, RsaError> {
    if *ciphertext >= *n {
        return Err(RsaError::ValueOutOfRange);
    }
    let decoded = transform(ciphertext, n, exponent);
    Ok(codec.decode(&decoded)?)
}
