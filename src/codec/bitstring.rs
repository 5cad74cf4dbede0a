// Bitstring Codec
// Concatenates the message's bits (most-significant-bit first within each
// byte, bytes in order) and reads the result as one big integer.

use num_bigint::BigUint;
use num_traits::Zero;

use super::Codec;
use crate::error::CodecError;

/// Direct interpretation of the message's bit string as a big integer.
///
/// Known boundary case: a big integer has no notion of leading zero bits, so
/// any plaintext starting with one or more `0x00` bytes loses those bytes on
/// the way through the integer. That is inherent to integer-based encoding
/// of byte streams and is deliberately left as a documented limitation; the
/// codec only round-trips messages whose first byte is non-zero. Interior
/// and trailing zero bytes are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitstringCodec;

impl Codec for BitstringCodec {
    fn encode(&self, bytes: &[u8]) -> Result<BigUint, CodecError> {
        Ok(BigUint::from_bytes_be(bytes))
    }

    fn decode(&self, value: &BigUint) -> Result<Vec<u8>, CodecError> {
        if value.is_zero() {
            return Ok(Vec::new());
        }
        Ok(value.to_bytes_be())
    }
}
