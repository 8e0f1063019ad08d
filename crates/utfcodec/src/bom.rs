//! Byte-order-mark sniffing.

use core::fmt;

/// Encoding tag reported by BOM detection and carried by each codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingKind {
    /// No known signature.
    #[default]
    Unrecognized,
    /// 7-bit ASCII. Has no signature; never returned by [`detect_bom`].
    Ascii,
    /// UTF-8.
    Utf8,
    /// UTF-16.
    Utf16,
    /// UTF-32.
    Utf32,
}

impl EncodingKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EncodingKind::Unrecognized => "unrecognized",
            EncodingKind::Ascii => "ASCII",
            EncodingKind::Utf8 => "UTF-8",
            EncodingKind::Utf16 => "UTF-16",
            EncodingKind::Utf32 => "UTF-32",
        }
    }

    /// Bytes occupied by this encoding's signature, i.e. how far a caller
    /// advances past a detected BOM.
    #[must_use]
    pub const fn bom_len(self) -> usize {
        match self {
            EncodingKind::Unrecognized | EncodingKind::Ascii => 0,
            EncodingKind::Utf8 => 3,
            EncodingKind::Utf16 => 2,
            EncodingKind::Utf32 => 4,
        }
    }

    /// Bytes per code unit; 0 for [`EncodingKind::Unrecognized`].
    #[must_use]
    pub const fn unit_width(self) -> usize {
        match self {
            EncodingKind::Unrecognized => 0,
            EncodingKind::Ascii | EncodingKind::Utf8 => 1,
            EncodingKind::Utf16 => 2,
            EncodingKind::Utf32 => 4,
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies the first four bytes of a stream by their signature.
///
/// The bytes are read as a little-endian word and tested longest signature
/// first, so the UTF-32 mark is never mistaken for UTF-16:
///
/// - `00 00 FE FF` is UTF-32,
/// - `FF FE ..` is UTF-16,
/// - `EF BB BF ..` is UTF-8,
/// - anything else is [`EncodingKind::Unrecognized`], including the
///   byte-swapped `FE FF ..`.
///
/// ```rust
/// use utfcodec::{EncodingKind, detect_bom};
///
/// assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, b'A']), EncodingKind::Utf8);
/// assert_eq!(detect_bom(b"ABCD"), EncodingKind::Unrecognized);
/// ```
#[must_use]
pub fn detect_bom(bytes: &[u8; 4]) -> EncodingKind {
    let word = u32::from_le_bytes(*bytes);
    let kind = if word == 0xFFFE_0000 {
        EncodingKind::Utf32
    } else if word & 0xFFFF == 0xFEFF {
        EncodingKind::Utf16
    } else if word & 0x00FF_FFFF == 0x00BF_BBEF {
        EncodingKind::Utf8
    } else {
        EncodingKind::Unrecognized
    };
    crate::trace_event!(?kind, word, "detected byte order mark");
    kind
}

/// Like [`detect_bom`], for streams that may be shorter than four bytes.
///
/// Missing bytes never complete a signature.
#[must_use]
pub fn detect_bom_prefix(bytes: &[u8]) -> EncodingKind {
    // 0x01 appears in no signature.
    let mut padded = [0x01; 4];
    let n = bytes.len().min(4);
    padded[..n].copy_from_slice(&bytes[..n]);
    detect_bom(&padded)
}
