//! Generic algorithms over any pair of codecs.
//!
//! Every routine drives the per-encoding [`Encoding`] operations with its own
//! cursors: decode one code point, advance the source by the units consumed,
//! encode, advance the destination by the units written. The first failure
//! stops the loop and is returned together with the progress made so far.

use core::ops::{Add, AddAssign};

use crate::{
    encoding::Encoding,
    error::{CodecError, TranscodeError},
};

/// Counts produced by one or more decode + encode steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertInfo {
    /// Code points decoded and re-encoded.
    pub code_points: usize,
    /// Source code units consumed.
    pub source_units: usize,
    /// Destination code units written.
    pub dest_units: usize,
}

impl Add for ConvertInfo {
    type Output = ConvertInfo;

    fn add(self, rhs: Self) -> Self::Output {
        ConvertInfo {
            code_points: self.code_points + rhs.code_points,
            source_units: self.source_units + rhs.source_units,
            dest_units: self.dest_units + rhs.dest_units,
        }
    }
}

impl AddAssign for ConvertInfo {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Number of code points encoded in `source`.
///
/// # Errors
///
/// Propagates the first decode failure; `progress.code_points` and
/// `progress.source_units` locate it.
pub fn count_code_points<E: Encoding>(source: &[E::Unit]) -> Result<usize, TranscodeError> {
    let mut progress = ConvertInfo::default();
    while progress.source_units < source.len() {
        let (_, consumed) = E::decode(&source[progress.source_units..])
            .map_err(|e| TranscodeError::new(e, progress))?;
        progress.source_units += consumed;
        progress.code_points += 1;
    }
    Ok(progress.code_points)
}

/// Number of `E` code units needed to encode `code_points`.
///
/// Each value is encoded into a scratch buffer and only the length is kept.
///
/// # Errors
///
/// [`CodecError::CodePointOutOfRange`] for the first value `E` cannot
/// represent; `progress.code_points` is its index.
pub fn required_units<E: Encoding>(code_points: &[u32]) -> Result<usize, TranscodeError> {
    let mut scratch = [E::Unit::default(); 4];
    let mut progress = ConvertInfo::default();
    for &cp in code_points {
        let written = E::encode(cp, &mut scratch[..E::MAX_UNITS])
            .map_err(|e| TranscodeError::new(e, progress))?;
        progress.code_points += 1;
        progress.source_units += 1;
        progress.dest_units += written;
    }
    Ok(progress.dest_units)
}

/// Converts the first code point of `source` into `dest`.
///
/// # Errors
///
/// Any decode failure from `S` or encode failure from `D`.
pub fn transcode_one<S: Encoding, D: Encoding>(
    source: &[S::Unit],
    dest: &mut [D::Unit],
) -> Result<ConvertInfo, CodecError> {
    let (code_point, source_units) = S::decode(source)?;
    let dest_units = D::encode(code_point, dest)?;
    Ok(ConvertInfo {
        code_points: 1,
        source_units,
        dest_units,
    })
}

/// Converts all of `source` into `dest`.
///
/// ```rust
/// use utfcodec::{Utf8, Utf16, transcode_all};
///
/// let mut dest = [0u16; 8];
/// let info = transcode_all::<Utf8, Utf16>("h€".as_bytes(), &mut dest).unwrap();
/// assert_eq!(info.code_points, 2);
/// assert_eq!(&dest[..info.dest_units], &[0x68, 0x20AC]);
/// ```
///
/// # Errors
///
/// The first decode or encode failure, including
/// [`CodecError::DestinationTooSmall`] once `dest` fills up. Units before
/// `progress` have been converted and written.
pub fn transcode_all<S: Encoding, D: Encoding>(
    source: &[S::Unit],
    dest: &mut [D::Unit],
) -> Result<ConvertInfo, TranscodeError> {
    let mut progress = ConvertInfo::default();
    while progress.source_units < source.len() {
        let step = transcode_one::<S, D>(
            &source[progress.source_units..],
            &mut dest[progress.dest_units..],
        )
        .map_err(|e| TranscodeError::new(e, progress))?;
        progress += step;
    }
    Ok(progress)
}

/// Length of the longest well-formed prefix of `source`.
///
/// Stops at the first malformed or truncated sequence, so a streaming caller
/// can hand the remainder to the next read.
#[must_use]
pub fn valid_up_to<E: Encoding>(source: &[E::Unit]) -> usize {
    let mut offset = 0;
    while offset < source.len() {
        match E::validate(&source[offset..]) {
            Ok(len) if len > 0 => offset += len,
            _ => break,
        }
    }
    offset
}

/// Iterates over the code points of `source`.
///
/// Yields one `Err` at the first failure and then stops.
#[must_use]
pub fn decode_iter<E: Encoding>(source: &[E::Unit]) -> CodePoints<'_, E> {
    CodePoints {
        source,
        failed: false,
    }
}

/// Iterator returned by [`decode_iter`].
#[derive(Debug)]
pub struct CodePoints<'a, E: Encoding> {
    source: &'a [E::Unit],
    failed: bool,
}

impl<E: Encoding> CodePoints<'_, E> {
    /// Units not yet decoded. After a failure this starts at the failing
    /// sequence.
    #[must_use]
    pub fn remaining(&self) -> &[E::Unit] {
        self.source
    }
}

impl<E: Encoding> Iterator for CodePoints<'_, E> {
    type Item = Result<u32, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.source.is_empty() {
            return None;
        }
        match E::decode(self.source) {
            Ok((code_point, consumed)) => {
                self.source = &self.source[consumed..];
                Some(Ok(code_point))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<E: Encoding> core::iter::FusedIterator for CodePoints<'_, E> {}
