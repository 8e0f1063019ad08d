use super::{Encoding, check_scalar, reserve};
use crate::{bom::EncodingKind, error::CodecError};

/// UTF-32 in native code units: the unit is the scalar value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    const KIND: EncodingKind = EncodingKind::Utf32;
    const MAX_UNITS: usize = 1;

    fn validate(source: &[u32]) -> Result<usize, CodecError> {
        let &unit = source.first().ok_or(CodecError::truncated(1, 0))?;
        Ok(usize::from(check_scalar(unit).is_ok()))
    }

    fn decode(source: &[u32]) -> Result<(u32, usize), CodecError> {
        let &unit = source.first().ok_or(CodecError::truncated(1, 0))?;
        check_scalar(unit).map_err(|_| CodecError::malformed(1))?;
        Ok((unit, 1))
    }

    fn encode(code_point: u32, dest: &mut [u32]) -> Result<usize, CodecError> {
        check_scalar(code_point)?;
        reserve(dest, 1)?[0] = code_point;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::test_support::{roundtrip, scalars};

    #[test]
    fn all_scalars_roundtrip() {
        for cp in scalars() {
            assert!(roundtrip::<Utf32>(cp), "U+{cp:04X}");
        }
    }

    #[test]
    fn rejects_values_outside_scalar_range() {
        for unit in [0x11_0000, 0xFFFF_FFFF, 0xD800, 0xDFFF] {
            assert_eq!(Utf32::validate(&[unit]), Ok(0));
            assert_eq!(
                Utf32::decode(&[unit]),
                Err(CodecError::MalformedSequence { len: 1 })
            );
            assert_eq!(
                Utf32::encode(unit, &mut [0]),
                Err(CodecError::CodePointOutOfRange(unit))
            );
        }
    }

    #[test]
    fn encode_needs_room() {
        assert_eq!(
            Utf32::encode(0x41, &mut []),
            Err(CodecError::DestinationTooSmall {
                needed: 1,
                available: 0
            })
        );
        let mut buf = [0u32; 1];
        assert_eq!(Utf32::encode(0x1_F600, &mut buf), Ok(1));
        assert_eq!(buf, [0x1_F600]);
    }

    #[test]
    fn accepts_range_edges() {
        assert_eq!(Utf32::decode(&[0]), Ok((0, 1)));
        assert_eq!(Utf32::decode(&[0x10_FFFF, 0x11_0000]), Ok((0x10_FFFF, 1)));
    }
}
