//! Validating codecs for ASCII, UTF-8, UTF-16 and UTF-32, and transcoding
//! between them over caller-owned buffers.
//!
//! Each encoding is a zero-sized type implementing [`Encoding`]: `validate`,
//! `decode` and `encode` operate on one encoded code point at a time and never
//! read or write past the slices they are given. The functions in
//! [`transcode`] loop those operations over whole buffers.
//!
//! ```rust
//! use utfcodec::{Utf8, Utf32, transcode_all};
//!
//! let mut dest = [0u32; 3];
//! let info = transcode_all::<Utf8, Utf32>("A€𐍈".as_bytes(), &mut dest).unwrap();
//! assert_eq!(dest, [0x41, 0x20AC, 0x1_0348]);
//! assert_eq!((info.source_units, info.dest_units), (8, 3));
//! ```
//!
//! Failures keep truncated input ([`CodecError::TruncatedInput`]) apart from
//! corrupt input ([`CodecError::MalformedSequence`]) so streaming callers can
//! wait for more bytes instead of rejecting the data.

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

/// `tracing::debug!` when the `tracing` feature is enabled, nothing otherwise.
macro_rules! trace_failure {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// `tracing::trace!` when the `tracing` feature is enabled, nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use {trace_event, trace_failure};

mod bom;
mod encoding;
mod error;
pub mod transcode;

pub use bom::{EncodingKind, detect_bom, detect_bom_prefix};
pub use encoding::{Ascii, Encoding, MAX_CODE_POINT, Utf8, Utf16, Utf32};
pub use error::{CodecError, TranscodeError};
pub use transcode::{
    CodePoints, ConvertInfo, count_code_points, decode_iter, required_units, transcode_all,
    transcode_one, valid_up_to,
};
