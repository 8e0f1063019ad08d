use thiserror::Error;

use crate::transcode::ConvertInfo;

/// A failure reported by a single codec operation.
///
/// Truncation and malformation are kept apart so a streaming consumer can
/// tell "wait for more input" from "reject this data".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The leading unit announces a sequence longer than the units available.
    #[error("truncated input: sequence needs {needed} code units, {available} available")]
    TruncatedInput {
        /// Units the sequence requires.
        needed: usize,
        /// Units present in the source.
        available: usize,
    },
    /// The units present do not form a well-formed encoded code point.
    ///
    /// `len` is the maximal ill-formed subpart: the number of units a
    /// recovering caller skips before resuming (always at least 1).
    #[error("malformed sequence of {len} code unit(s)")]
    MalformedSequence {
        /// Units making up the ill-formed subpart.
        len: usize,
    },
    /// The value cannot be represented by the target encoding.
    #[error("code point U+{0:04X} is out of range for this encoding")]
    CodePointOutOfRange(u32),
    /// The write target cannot hold the encoded form.
    #[error("destination too small: {needed} code units needed, {available} available")]
    DestinationTooSmall {
        /// Units the encoded form occupies.
        needed: usize,
        /// Units left in the destination.
        available: usize,
    },
}

impl CodecError {
    /// Whether more input could turn this failure into a success.
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        matches!(self, CodecError::TruncatedInput { .. })
    }

    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        CodecError::TruncatedInput { needed, available }
    }

    pub(crate) fn malformed(len: usize) -> Self {
        CodecError::MalformedSequence { len }
    }
}

/// A failure from a whole-buffer operation, with the work completed before it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{error} after {} code points", .progress.code_points)]
pub struct TranscodeError {
    /// The first codec failure encountered.
    #[source]
    pub error: CodecError,
    /// Counts accumulated before the failing step.
    pub progress: ConvertInfo,
}

impl TranscodeError {
    pub(crate) fn new(error: CodecError, progress: ConvertInfo) -> Self {
        crate::trace_failure!(?error, ?progress, "transcoding stopped");
        Self { error, progress }
    }

    /// Source offset of the sequence that failed.
    #[must_use]
    pub fn source_offset(&self) -> usize {
        self.progress.source_units
    }
}
