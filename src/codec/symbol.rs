// Symbol Offset Codec
// Bytes -> 64-symbol alphabet -> per-symbol index + 10 -> concatenated
// 2-digit decimal groups, read as one big integer.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use num_bigint::BigUint;
use num_traits::Zero;

use super::Codec;
use crate::error::CodecError;

/// Added to every alphabet index so each group renders as exactly two
/// decimal digits. Indices span 0..=63, so offset values span 10..=73 and
/// stay inside the two-digit range 10..=99 that the fixed-width split in
/// `decode` depends on. Changing the offset or the alphabet size requires
/// re-checking that bound.
const OFFSET: u8 = 10;

/// The standard 64-symbol alphabet, in index order.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Inverse of [`ALPHABET`]: symbol to index 0..=63.
fn symbol_index(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Encodes through the 64-symbol alphabet transform with a fixed decimal
/// offset. The alphabet output is unpadded: the index table has no entry for
/// a padding symbol, so padded output would be unrepresentable.
///
/// The offset guarantees the first digit of the integer is non-zero, which
/// is what keeps the decimal rendering in `decode` aligned to 2-digit
/// groups. The empty message maps to zero and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolOffsetCodec;

impl Codec for SymbolOffsetCodec {
    fn encode(&self, bytes: &[u8]) -> Result<BigUint, CodecError> {
        if bytes.is_empty() {
            return Ok(BigUint::zero());
        }

        let symbols = STANDARD_NO_PAD.encode(bytes);

        // Concatenating 2-digit groups is the same as value*100 + group.
        let mut value = BigUint::zero();
        for symbol in symbols.bytes() {
            let index =
                symbol_index(symbol).ok_or(CodecError::UnknownSymbol(symbol as char))?;
            value = value * 100u32 + u32::from(index + OFFSET);
        }

        Ok(value)
    }

    fn decode(&self, value: &BigUint) -> Result<Vec<u8>, CodecError> {
        if value.is_zero() {
            return Ok(Vec::new());
        }

        let digits = value.to_string();
        if digits.len() % 2 != 0 {
            return Err(CodecError::OddDigitCount(digits.len()));
        }

        let mut symbols = String::with_capacity(digits.len() / 2);
        for group in digits.as_bytes().chunks(2) {
            let group = (group[0] - b'0') * 10 + (group[1] - b'0');
            if !(OFFSET..OFFSET + 64).contains(&group) {
                return Err(CodecError::DigitGroupOutOfRange(group));
            }
            symbols.push(ALPHABET[usize::from(group - OFFSET)] as char);
        }

        Ok(STANDARD_NO_PAD.decode(symbols)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_encode_known_vector() {
        // "M" -> alphabet "TQ" -> indices 19, 16 -> groups 29, 26
        assert_eq!(SymbolOffsetCodec.encode(b"M").unwrap(), uint(2926));
    }

    #[test]
    fn test_decode_known_vector() {
        assert_eq!(SymbolOffsetCodec.decode(&uint(2926)).unwrap(), b"M");
    }

    #[test]
    fn test_roundtrip() {
        let messages: [&[u8]; 6] = [
            b"",
            b"a",
            b"hello, rsa",
            b"The quick brown fox jumps over the lazy dog",
            &[0x00, 0x01, 0x02],
            &[0xff, 0xfe, 0xfd, 0xfc],
        ];
        for message in messages {
            let encoded = SymbolOffsetCodec.encode(message).unwrap();
            let decoded = SymbolOffsetCodec.decode(&encoded).unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn test_roundtrip_high_indices() {
        // 0xfb 0xff encodes to "+/8", exercising indices 62 and 63
        let message = [0xfbu8, 0xff];
        let encoded = SymbolOffsetCodec.encode(&message).unwrap();
        assert_eq!(SymbolOffsetCodec.decode(&encoded).unwrap(), message);
    }

    #[test]
    fn test_decode_odd_digit_count() {
        assert!(matches!(
            SymbolOffsetCodec.decode(&uint(123)),
            Err(CodecError::OddDigitCount(3))
        ));
    }

    #[test]
    fn test_decode_group_out_of_range() {
        // 99 is two digits but past the last alphabet index 73
        assert!(matches!(
            SymbolOffsetCodec.decode(&uint(2999)),
            Err(CodecError::DigitGroupOutOfRange(99))
        ));
        // An interior group below the offset
        assert!(matches!(
            SymbolOffsetCodec.decode(&uint(290526)),
            Err(CodecError::DigitGroupOutOfRange(5))
        ));
    }

    #[test]
    fn test_decode_invalid_symbol_length() {
        // A single symbol is never a valid unpadded alphabet payload
        assert!(matches!(
            SymbolOffsetCodec.decode(&uint(29)),
            Err(CodecError::Base64(_))
        ));
    }
}
