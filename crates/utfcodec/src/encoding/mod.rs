//! Per-encoding codecs.
//!
//! Every encoding is a zero-sized marker type implementing [`Encoding`]. The
//! codecs are stateless: a call inspects or writes one encoded code point and
//! reports how many code units it touched. Cursors and running totals belong
//! to the caller (see [`crate::transcode`]).
//!
//! Source and destination widths differ per encoding, so codecs are selected
//! statically through the type parameter rather than by a runtime tag.

mod ascii;
mod utf8;
mod utf16;
mod utf32;

pub use ascii::Ascii;
pub use utf8::Utf8;
pub use utf16::Utf16;
pub use utf32::Utf32;

use crate::{bom::EncodingKind, error::CodecError};

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Ascii {}
    impl Sealed for super::Utf8 {}
    impl Sealed for super::Utf16 {}
    impl Sealed for super::Utf32 {}
}

/// The validate / decode / encode contract shared by all codecs.
///
/// This trait is sealed; the set of encodings is closed.
pub trait Encoding: sealed::Sealed {
    /// Atomic storage unit: `u8`, `u16` or `u32`.
    type Unit: Copy + Default + Eq + core::fmt::Debug + 'static;

    /// Tag used by BOM detection and diagnostics.
    const KIND: EncodingKind;

    /// Most units one code point can occupy. A scratch buffer of this size
    /// always fits an encoded code point.
    const MAX_UNITS: usize;

    /// Checks whether the front of `source` is a well-formed sequence.
    ///
    /// Returns `Ok(n)` with the sequence length, or `Ok(0)` when the units are
    /// not well-formed.
    ///
    /// # Errors
    ///
    /// [`CodecError::TruncatedInput`] when `source` is empty or shorter than
    /// the length announced by its leading unit.
    fn validate(source: &[Self::Unit]) -> Result<usize, CodecError>;

    /// Decodes the code point at the front of `source`.
    ///
    /// Returns the code point and the number of units consumed.
    ///
    /// # Errors
    ///
    /// [`CodecError::TruncatedInput`] when more units are needed,
    /// [`CodecError::MalformedSequence`] when the units are ill-formed.
    fn decode(source: &[Self::Unit]) -> Result<(u32, usize), CodecError>;

    /// Writes the encoding of `code_point` at the front of `dest`.
    ///
    /// Returns the number of units written.
    ///
    /// # Errors
    ///
    /// [`CodecError::CodePointOutOfRange`] when the value is not
    /// representable, [`CodecError::DestinationTooSmall`] when `dest` cannot
    /// hold it. Nothing is written on failure.
    fn encode(code_point: u32, dest: &mut [Self::Unit]) -> Result<usize, CodecError>;

    /// Number of units `code_point` would occupy, without writing anything.
    ///
    /// # Errors
    ///
    /// [`CodecError::CodePointOutOfRange`] as for [`Encoding::encode`].
    fn encoded_len(code_point: u32) -> Result<usize, CodecError> {
        let mut scratch = [Self::Unit::default(); 4];
        Self::encode(code_point, &mut scratch[..Self::MAX_UNITS])
    }
}

#[inline]
pub(crate) const fn is_surrogate(code_point: u32) -> bool {
    matches!(code_point, 0xD800..=0xDFFF)
}

/// Rejects values that are not Unicode scalar values.
#[inline]
pub(crate) fn check_scalar(code_point: u32) -> Result<(), CodecError> {
    if code_point > MAX_CODE_POINT || is_surrogate(code_point) {
        Err(CodecError::CodePointOutOfRange(code_point))
    } else {
        Ok(())
    }
}

/// Returns the writable prefix of `dest` of exactly `needed` units.
#[inline]
pub(crate) fn reserve<T>(dest: &mut [T], needed: usize) -> Result<&mut [T], CodecError> {
    let available = dest.len();
    dest.get_mut(..needed)
        .ok_or(CodecError::DestinationTooSmall { needed, available })
}


#[cfg(test)]
mod tests {
    use core::mem::size_of;

    use super::*;

    fn unit_width<E: Encoding>() -> usize {
        size_of::<E::Unit>()
    }

    #[test]
    fn kinds_describe_unit_width() {
        assert_eq!(Ascii::KIND.unit_width(), unit_width::<Ascii>());
        assert_eq!(Utf8::KIND.unit_width(), unit_width::<Utf8>());
        assert_eq!(Utf16::KIND.unit_width(), unit_width::<Utf16>());
        assert_eq!(Utf32::KIND.unit_width(), unit_width::<Utf32>());
    }

    #[test]
    fn max_units_fit_the_widest_code_point() {
        assert_eq!(Utf8::encoded_len(MAX_CODE_POINT), Ok(Utf8::MAX_UNITS));
        assert_eq!(Utf16::encoded_len(MAX_CODE_POINT), Ok(Utf16::MAX_UNITS));
        assert_eq!(Utf32::encoded_len(MAX_CODE_POINT), Ok(Utf32::MAX_UNITS));
        assert_eq!(Ascii::encoded_len(0x7F), Ok(Ascii::MAX_UNITS));
    }

    #[test]
    fn scalar_check() {
        assert!(check_scalar(0xD7FF).is_ok());
        assert!(check_scalar(0xE000).is_ok());
        assert_eq!(
            check_scalar(0xDABC),
            Err(CodecError::CodePointOutOfRange(0xDABC))
        );
        assert_eq!(
            check_scalar(MAX_CODE_POINT + 1),
            Err(CodecError::CodePointOutOfRange(0x11_0000))
        );
    }
}
