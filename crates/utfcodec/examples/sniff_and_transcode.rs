//! Detects the signature of a byte stream, skips it, and re-encodes the body
//! as UTF-16 in fixed-size windows, carrying a truncated tail between reads.
#![allow(missing_docs)]

use utfcodec::{
    EncodingKind, Utf8, Utf16, count_code_points, detect_bom_prefix, transcode_all,
};

fn main() {
    let stream = "\u{FEFF}grüße, 𐍈!".as_bytes();
    let kind = detect_bom_prefix(stream);
    assert_eq!(kind, EncodingKind::Utf8);
    println!("signature: {kind}, skipping {} bytes", kind.bom_len());

    let body = &stream[kind.bom_len()..];
    let mut out: Vec<u16> = Vec::new();
    let mut carry: Vec<u8> = Vec::new();
    let mut dest = [0u16; 64];

    // Feed 5 bytes at a time so multi-byte sequences straddle the reads.
    for chunk in body.chunks(5) {
        carry.extend_from_slice(chunk);
        let consumed = match transcode_all::<Utf8, Utf16>(&carry, &mut dest) {
            Ok(info) => {
                out.extend_from_slice(&dest[..info.dest_units]);
                info.source_units
            }
            Err(err) if err.error.is_truncation() => {
                out.extend_from_slice(&dest[..err.progress.dest_units]);
                err.progress.source_units
            }
            Err(err) => {
                eprintln!("rejecting input: {err}");
                return;
            }
        };
        carry.drain(..consumed);
    }

    if let Err(err) = count_code_points::<Utf8>(&carry) {
        eprintln!("stream ended mid-sequence: {err}");
        return;
    }

    let text = String::from_utf16_lossy(&out);
    println!("{} UTF-16 units: {text}", out.len());
}
