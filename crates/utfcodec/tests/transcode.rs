#![allow(missing_docs)]

use utfcodec::{
    Ascii, CodecError, ConvertInfo, Encoding, EncodingKind, Utf8, Utf16, Utf32, detect_bom,
    transcode_all, transcode_one,
};

#[test]
fn utf8_to_utf32_sample() {
    let src = "A€𐍈".as_bytes();
    let mut dest = [0u32; 4];
    let info = transcode_all::<Utf8, Utf32>(src, &mut dest).unwrap();
    assert_eq!(&dest[..3], &[0x41, 0x20AC, 0x1_0348]);
    assert_eq!(
        info,
        ConvertInfo {
            code_points: 3,
            source_units: 8,
            dest_units: 3,
        }
    );
}

#[test]
fn lone_lead_byte_is_truncation_not_corruption() {
    let err = Utf8::decode(&[0xC2]).unwrap_err();
    assert!(err.is_truncation());
    assert_eq!(
        err,
        CodecError::TruncatedInput {
            needed: 2,
            available: 1
        }
    );
}

#[test]
fn utf16_surrogate_misuse() {
    assert_eq!(
        Utf16::decode(&[0xDC00]),
        Err(CodecError::MalformedSequence { len: 1 })
    );
    assert_eq!(
        Utf16::decode(&[0xD800, 0x0041]),
        Err(CodecError::MalformedSequence { len: 1 })
    );
}

#[test]
fn bom_signatures() {
    assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, 0x41]), EncodingKind::Utf8);
    assert_eq!(detect_bom(&[0xFF, 0xFE, 0x00, 0x00]), EncodingKind::Utf16);
    assert_eq!(detect_bom(&[0x00, 0x00, 0xFE, 0xFF]), EncodingKind::Utf32);
    assert_eq!(detect_bom(&[0x41, 0x42, 0x43, 0x44]), EncodingKind::Unrecognized);
}

#[test]
fn skip_bom_then_transcode() {
    let input = b"\xEF\xBB\xBFcaf\xC3\xA9";
    let kind = detect_bom(&[input[0], input[1], input[2], input[3]]);
    assert_eq!(kind, EncodingKind::Utf8);

    let body = &input[kind.bom_len()..];
    let mut dest = [0u8; 8];
    let err = transcode_all::<Utf8, Ascii>(body, &mut dest).unwrap_err();
    assert_eq!(err.error, CodecError::CodePointOutOfRange(0xE9));
    assert_eq!(&dest[..err.progress.dest_units], b"caf");
}

#[test]
fn transcode_between_every_pair() {
    let text = "x\u{7FF}\u{FFFD}\u{10FFFF}";
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let utf32: Vec<u32> = text.chars().map(u32::from).collect();

    let mut to16 = [0u16; 8];
    let info = transcode_all::<Utf32, Utf16>(&utf32, &mut to16).unwrap();
    assert_eq!(&to16[..info.dest_units], utf16.as_slice());

    let mut to8 = [0u8; 16];
    let info = transcode_all::<Utf16, Utf8>(&utf16, &mut to8).unwrap();
    assert_eq!(&to8[..info.dest_units], text.as_bytes());

    let mut back = [0u32; 4];
    let info = transcode_all::<Utf8, Utf32>(&to8[..info.dest_units], &mut back).unwrap();
    assert_eq!(&back[..info.dest_units], utf32.as_slice());
}

#[test]
fn transcode_one_leaves_rest_untouched() {
    let mut dest = [0u8; 4];
    let info = transcode_one::<Utf32, Utf8>(&[0x20AC, 0x41], &mut dest).unwrap();
    assert_eq!(info.source_units, 1);
    assert_eq!(dest, [0xE2, 0x82, 0xAC, 0x00]);
}
