use super::{Encoding, check_scalar, reserve};
use crate::{bom::EncodingKind, error::CodecError};

/// UTF-16 in native code units: one unit, or a surrogate pair above U+FFFF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

#[inline]
fn is_high(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
fn is_low(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

impl Encoding for Utf16 {
    type Unit = u16;

    const KIND: EncodingKind = EncodingKind::Utf16;
    const MAX_UNITS: usize = 2;

    fn validate(source: &[u16]) -> Result<usize, CodecError> {
        match Self::decode(source) {
            Ok((_, len)) => Ok(len),
            Err(CodecError::MalformedSequence { .. }) => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn decode(source: &[u16]) -> Result<(u32, usize), CodecError> {
        let &lead = source.first().ok_or(CodecError::truncated(1, 0))?;
        if !is_high(lead) && !is_low(lead) {
            return Ok((u32::from(lead), 1));
        }
        if is_low(lead) {
            return Err(CodecError::malformed(1));
        }

        let &trail = source.get(1).ok_or(CodecError::truncated(2, 1))?;
        if !is_low(trail) {
            return Err(CodecError::malformed(1));
        }
        let code_point =
            (((u32::from(lead) & 0x3FF) << 10) | (u32::from(trail) & 0x3FF)) + 0x1_0000;
        Ok((code_point, 2))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode(code_point: u32, dest: &mut [u16]) -> Result<usize, CodecError> {
        check_scalar(code_point)?;
        if code_point <= 0xFFFF {
            reserve(dest, 1)?[0] = code_point as u16;
            return Ok(1);
        }
        let v = code_point - 0x1_0000;
        reserve(dest, 2)?.copy_from_slice(&[
            0xD800 | (v >> 10) as u16,
            0xDC00 | (v & 0x3FF) as u16,
        ]);
        Ok(2)
    }
}
