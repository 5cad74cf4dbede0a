// Codec Module
// Two interchangeable strategies for mapping byte sequences to big integers
// and back, so modular exponentiation can act on arbitrary messages.

pub mod bitstring;
pub mod symbol;

pub use bitstring::BitstringCodec;
pub use symbol::SymbolOffsetCodec;

use num_bigint::BigUint;

use crate::error::CodecError;

/// Bidirectional mapping between byte sequences and big integers.
///
/// `decode` inverts `encode` on each codec's valid domain; the RSA engine is
/// agnostic to which implementation is in use.
pub trait Codec {
    /// Map a byte sequence to a single non-negative integer.
    fn encode(&self, bytes: &[u8]) -> Result<BigUint, CodecError>;

    /// Recover the byte sequence an integer was encoded from.
    fn decode(&self, value: &BigUint) -> Result<Vec<u8>, CodecError>;
}

/// Selects the byte-to-integer mapping used by [`crate::engine::encrypt`] and
/// [`crate::engine::decrypt`]. Encrypt and decrypt must agree on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// 64-symbol alphabet indices offset into 2-decimal-digit groups
    SymbolOffset,
    /// Big-endian bit concatenation of the raw bytes
    Bitstring,
}

impl CodecKind {
    pub fn encode(self, bytes: &[u8]) -> Result<BigUint, CodecError> {
        match self {
            CodecKind::SymbolOffset => SymbolOffsetCodec.encode(bytes),
            CodecKind::Bitstring => BitstringCodec.encode(bytes),
        }
    }

    pub fn decode(self, value: &BigUint) -> Result<Vec<u8>, CodecError> {
        match self {
            CodecKind::SymbolOffset => SymbolOffsetCodec.decode(value),
            CodecKind::Bitstring => BitstringCodec.decode(value),
        }
    }
}
