//! Textbook (unpadded) RSA over arbitrary-precision integers.
//!
//! Builds a key pair from two caller-supplied primes via the extended
//! Euclidean algorithm and applies square-and-multiply modular
//! exponentiation as the encrypt/decrypt primitive. Two interchangeable
//! codecs map byte messages to the single big integer the transform
//! operates on.
//!
//! This is the raw schoolbook construction: no padding scheme, no semantic
//! security, no timing resistance, no primality testing of the supplied
//! primes, and a single modulus-bounded block per message. Do not use it to
//! protect anything.

pub mod bigint;
pub mod codec;
pub mod engine;
pub mod error;
pub mod keygen;

pub use codec::{BitstringCodec, Codec, CodecKind, SymbolOffsetCodec};
pub use engine::{decrypt, encrypt, transform};
pub use error::{CodecError, RsaError};
pub use keygen::{
    generate_keypair, generate_keypair_from_decimal, KeyPair, PUBLIC_EXPONENT,
};
