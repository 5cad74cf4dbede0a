// Error taxonomy for the RSA core
// Everything here is synchronous and deterministic: the same inputs always
// reproduce the same error, so nothing is retried internally.

use num_bigint::ParseBigIntError;
use thiserror::Error;

/// Errors surfaced by key generation and the encrypt/decrypt entry points.
#[derive(Debug, Error)]
pub enum RsaError {
    /// The extended-Euclid postcondition failed; the supplied primes cannot
    /// produce a usable private exponent. Fatal without different primes.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// An encoded message or a ciphertext fell outside `[0, n)`. RSA is only
    /// a bijection on that residue range, so the caller must reject the
    /// value rather than let it wrap.
    #[error("value out of range: must satisfy 0 <= value < n")]
    ValueOutOfRange,

    /// A prime supplied as a decimal string did not parse.
    #[error("invalid decimal integer: {0}")]
    InvalidPrime(#[from] ParseBigIntError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Decode-side failures: malformed or mismatched ciphertext/key.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The decimal rendering of the decoded value cannot be split into
    /// 2-digit groups.
    #[error("digit string of length {0} cannot be split into 2-digit groups")]
    OddDigitCount(usize),

    /// A 2-digit group fell outside the offset symbol range.
    #[error("digit group {0} outside the valid range 10..=73")]
    DigitGroupOutOfRange(u8),

    /// A symbol outside the 64-character alphabet.
    #[error("symbol {0:?} is not in the 64-character alphabet")]
    UnknownSymbol(char),

    /// The recovered symbol string is not a valid alphabet payload.
    #[error("invalid alphabet payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
