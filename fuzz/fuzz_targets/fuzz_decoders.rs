#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfcodec::{
    CodecError, Encoding, Utf8, Utf16, Utf32, count_code_points, transcode_all, valid_up_to,
};

#[derive(Debug, Arbitrary)]
enum Input {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

/// Differential check of the UTF-8 decoder against `core::str`.
fn utf8(bytes: &[u8]) {
    let expected = core::str::from_utf8(bytes);
    let valid = expected.map_or_else(|e| e.valid_up_to(), str::len);
    assert_eq!(valid_up_to::<Utf8>(bytes), valid);

    match (count_code_points::<Utf8>(bytes), expected) {
        (Ok(n), Ok(s)) => assert_eq!(n, s.chars().count()),
        (Err(err), Err(e)) => {
            assert_eq!(err.source_offset(), e.valid_up_to());
            match (err.error, e.error_len()) {
                (CodecError::TruncatedInput { .. }, None) => {}
                (CodecError::MalformedSequence { len }, Some(n)) => assert_eq!(len, n),
                other => panic!("decoder disagrees with core: {other:?}"),
            }
        }
        other => panic!("decoder disagrees with core: {other:?}"),
    }

    // Valid prefixes must survive a round trip through UTF-16.
    let prefix = &bytes[..valid];
    let mut wide = vec![0u16; prefix.len()];
    let there = transcode_all::<Utf8, Utf16>(prefix, &mut wide).unwrap();
    let mut narrow = vec![0u8; prefix.len()];
    let back = transcode_all::<Utf16, Utf8>(&wide[..there.dest_units], &mut narrow).unwrap();
    assert_eq!(&narrow[..back.dest_units], prefix);
}

/// Differential check of the UTF-16 decoder against `char::decode_utf16`.
fn utf16(units: &[u16]) {
    let mut ours = units;
    for expected in char::decode_utf16(units.iter().copied()) {
        let decoded = Utf16::decode(ours);
        match (decoded, expected) {
            (Ok((cp, len)), Ok(ch)) => {
                assert_eq!(cp, u32::from(ch));
                assert_eq!(len, ch.len_utf16());
                ours = &ours[len..];
            }
            (Err(_), Err(_)) => ours = &ours[1..],
            other => panic!("decoder disagrees with core: {other:?}"),
        }
    }
    assert!(ours.is_empty());
}

fn utf32(units: &[u32]) {
    for &unit in units {
        let expected = char::from_u32(unit).map(u32::from);
        assert_eq!(Utf32::decode(&[unit]).ok().map(|(cp, _)| cp), expected);
    }
}

fuzz_target!(|input: Input| match input {
    Input::Utf8(bytes) => utf8(&bytes),
    Input::Utf16(units) => utf16(&units),
    Input::Utf32(units) => utf32(&units),
});
