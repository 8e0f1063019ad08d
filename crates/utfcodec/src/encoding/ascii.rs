use super::{Encoding, reserve};
use crate::{bom::EncodingKind, error::CodecError};

/// 7-bit ASCII: one byte per code point, range `0..=0x7F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

impl Encoding for Ascii {
    type Unit = u8;

    const KIND: EncodingKind = EncodingKind::Ascii;
    const MAX_UNITS: usize = 1;

    fn validate(source: &[u8]) -> Result<usize, CodecError> {
        let &lead = source.first().ok_or(CodecError::truncated(1, 0))?;
        Ok(usize::from(lead.is_ascii()))
    }

    fn decode(source: &[u8]) -> Result<(u32, usize), CodecError> {
        let &lead = source.first().ok_or(CodecError::truncated(1, 0))?;
        if lead.is_ascii() {
            Ok((u32::from(lead), 1))
        } else {
            Err(CodecError::malformed(1))
        }
    }

    fn encode(code_point: u32, dest: &mut [u8]) -> Result<usize, CodecError> {
        let byte = u8::try_from(code_point)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(CodecError::CodePointOutOfRange(code_point))?;
        reserve(dest, 1)?[0] = byte;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::test_support::roundtrip;

    #[test]
    fn every_ascii_value_roundtrips() {
        assert!((0..=0x7F).all(roundtrip::<Ascii>));
    }

    #[test]
    fn high_bytes_are_rejected() {
        for byte in 0x80..=0xFF_u8 {
            assert_eq!(Ascii::validate(&[byte]), Ok(0));
            assert_eq!(
                Ascii::decode(&[byte]),
                Err(CodecError::MalformedSequence { len: 1 })
            );
        }
    }

    #[test]
    fn encode_rejects_non_ascii() {
        let mut buf = [0u8; 1];
        assert_eq!(
            Ascii::encode(0x80, &mut buf),
            Err(CodecError::CodePointOutOfRange(0x80))
        );
        assert_eq!(
            Ascii::encode(0x1_0041, &mut buf),
            Err(CodecError::CodePointOutOfRange(0x1_0041))
        );
        assert_eq!(buf, [0]);
    }

    #[test]
    fn empty_source_is_truncated() {
        assert_eq!(
            Ascii::decode(&[]),
            Err(CodecError::TruncatedInput {
                needed: 1,
                available: 0
            })
        );
        assert!(Ascii::validate(&[]).unwrap_err().is_truncation());
    }

    #[test]
    fn encode_needs_room() {
        assert_eq!(
            Ascii::encode(u32::from(b'A'), &mut []),
            Err(CodecError::DestinationTooSmall {
                needed: 1,
                available: 0
            })
        );
    }
}
