//! Table-driven UTF-8 codec.
//!
//! Each byte maps to a class in [`BYTE_CLASS`]. For a leading byte the class
//! fixes the sequence length and the mask its first continuation byte must
//! hit; for a continuation byte the class is a bit in `0x10 | 0x20 | 0x40`
//! telling which sixteenth of `0x80..=0xBF` it falls in. Restricting the first
//! continuation this way rejects overlong forms, UTF-16 surrogates and values
//! above U+10FFFF without decoding first.
//!
//! | class | leading bytes   | length | first continuation |
//! |-------|-----------------|--------|--------------------|
//! | 2     | `C2..=DF`       | 2      | `80..=BF`          |
//! | 10    | `E0`            | 3      | `A0..=BF`          |
//! | 3     | `E1..=EC EE EF` | 3      | `80..=BF`          |
//! | 4     | `ED`            | 3      | `80..=9F`          |
//! | 11    | `F0`            | 4      | `90..=BF`          |
//! | 6     | `F1..=F3`       | 4      | `80..=BF`          |
//! | 5     | `F4`            | 4      | `80..=8F`          |
//!
//! Class 8 (`C0 C1 F5..=FF`) and the continuation classes never start a
//! sequence.

use super::{Encoding, check_scalar, reserve};
use crate::{bom::EncodingKind, error::CodecError};

/// UTF-8: one to four bytes per code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// Any continuation byte `80..=BF`.
const TAIL: u8 = 0x70;

const fn build_classes() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 0x80;
    while b < 256 {
        table[b] = match b {
            0x80..=0x8F => 0x10,
            0x90..=0x9F => 0x40,
            0xA0..=0xBF => 0x20,
            0xC2..=0xDF => 2,
            0xE0 => 10,
            0xED => 4,
            0xE1..=0xEF => 3,
            0xF0 => 11,
            0xF1..=0xF3 => 6,
            0xF4 => 5,
            _ => 8,
        };
        b += 1;
    }
    table
}

/// Byte classification, see the module docs.
pub(crate) const BYTE_CLASS: [u8; 256] = build_classes();

/// Sequence length and first-continuation mask for a leading class.
#[inline]
const fn plan(class: u8) -> Option<(usize, u8)> {
    match class {
        2 => Some((2, TAIL)),
        3 => Some((3, TAIL)),
        4 => Some((3, 0x50)),
        5 => Some((4, 0x10)),
        6 => Some((4, TAIL)),
        10 => Some((3, 0x20)),
        11 => Some((4, 0x60)),
        _ => None,
    }
}

#[inline]
fn accepts(byte: u8, mask: u8) -> bool {
    BYTE_CLASS[usize::from(byte)] & mask != 0
}

impl Utf8 {
    fn scan(source: &[u8]) -> Result<(u32, usize), CodecError> {
        let &lead = source.first().ok_or(CodecError::truncated(1, 0))?;
        if lead.is_ascii() {
            return Ok((u32::from(lead), 1));
        }

        let class = BYTE_CLASS[usize::from(lead)];
        let (len, first_mask) = plan(class).ok_or(CodecError::malformed(1))?;

        let mut code_point = (0xFF_u32 >> class) & u32::from(lead);
        for i in 1..len {
            let Some(&byte) = source.get(i) else {
                return Err(CodecError::truncated(len, source.len()));
            };
            let mask = if i == 1 { first_mask } else { TAIL };
            if !accepts(byte, mask) {
                return Err(CodecError::malformed(i));
            }
            code_point = (code_point << 6) | u32::from(byte & 0x3F);
        }

        Ok((code_point, len))
    }
}

impl Encoding for Utf8 {
    type Unit = u8;

    const KIND: EncodingKind = EncodingKind::Utf8;
    const MAX_UNITS: usize = 4;

    fn validate(source: &[u8]) -> Result<usize, CodecError> {
        match Self::scan(source) {
            Ok((_, len)) => Ok(len),
            Err(CodecError::MalformedSequence { .. }) => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn decode(source: &[u8]) -> Result<(u32, usize), CodecError> {
        Self::scan(source)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode(code_point: u32, dest: &mut [u8]) -> Result<usize, CodecError> {
        check_scalar(code_point)?;
        let cp = code_point;
        match cp {
            0..=0x7F => {
                reserve(dest, 1)?[0] = cp as u8;
                Ok(1)
            }
            0x80..=0x7FF => {
                reserve(dest, 2)?.copy_from_slice(&[
                    0xC0 | (cp >> 6) as u8,
                    0x80 | (cp & 0x3F) as u8,
                ]);
                Ok(2)
            }
            0x800..=0xFFFF => {
                reserve(dest, 3)?.copy_from_slice(&[
                    0xE0 | (cp >> 12) as u8,
                    0x80 | ((cp >> 6) & 0x3F) as u8,
                    0x80 | (cp & 0x3F) as u8,
                ]);
                Ok(3)
            }
            _ => {
                reserve(dest, 4)?.copy_from_slice(&[
                    0xF0 | (cp >> 18) as u8,
                    0x80 | ((cp >> 12) & 0x3F) as u8,
                    0x80 | ((cp >> 6) & 0x3F) as u8,
                    0x80 | (cp & 0x3F) as u8,
                ]);
                Ok(4)
            }
        }
    }
}
