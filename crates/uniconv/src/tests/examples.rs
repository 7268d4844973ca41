use alloc::vec::Vec;

use rstest::*;

use crate::{
    ByteOrder, Codepage, ConversionOptions, Converter, ErrorKind, Format, Source, Strictness,
    character::{self, REPLACEMENT_CHARACTER},
    codepage, utf8_string, utf16_string, utf32_string,
};

#[test]
fn surrogate_pair_decodes_to_one_code_point() {
    let mut cursor = 0;
    assert_eq!(
        character::decode_from_utf16(&[0xD83D, 0xDE00], &mut cursor, Strictness::Strict),
        Ok(0x1_F600)
    );
    assert_eq!(cursor, 2);
}

#[test]
fn lone_high_surrogate() {
    let mut cursor = 0;
    assert_eq!(
        character::decode_from_utf16(&[0xD83D], &mut cursor, Strictness::Strict)
            .unwrap_err()
            .kind(),
        ErrorKind::ConversionInvalidInput
    );
    assert_eq!(cursor, 0);
    assert_eq!(
        character::decode_from_utf16(&[0xD83D, 0x41], &mut cursor, Strictness::Lenient),
        Ok(REPLACEMENT_CHARACTER)
    );
    assert_eq!(cursor, 1);
}

#[test]
fn overlong_nul_is_rejected() {
    assert_eq!(
        utf32_string::size_from_utf8(b"\xC0\x80", Strictness::Strict)
            .unwrap_err()
            .kind(),
        ErrorKind::ConversionInvalidInput
    );
    let mut cursor = 0;
    assert_eq!(
        character::decode_from_utf8(b"\xC0\x80", &mut cursor, Strictness::Lenient),
        Ok(REPLACEMENT_CHARACTER)
    );
}

#[test]
fn byte_order_mark_wins() {
    let stream = [0xFF, 0xFE, 0x41, 0x00];
    let mut destination = [0u32; 2];
    assert_eq!(
        utf32_string::copy_from_utf16_stream(
            &mut destination,
            &stream,
            Some(ByteOrder::BigEndian),
            Strictness::Strict
        ),
        Ok(2)
    );
    assert_eq!(destination, [0x41, 0]);
}

#[test]
fn zero_bytes_infer_little_endian() {
    let stream = [0x41, 0x00, 0x42, 0x00];
    assert_eq!(
        utf8_string::size_from_utf16_stream(&stream, None, Strictness::Strict),
        Ok(3)
    );
    let mut destination = [0xFFu8; 3];
    utf8_string::copy_from_utf16_stream(&mut destination, &stream, None, Strictness::Strict)
        .unwrap();
    assert_eq!(&destination, b"AB\0");

    let mut converter = Converter::new(ConversionOptions::default());
    assert_eq!(
        converter.decode_to_string(Source::Utf16Stream(&stream)),
        Ok("AB".into())
    );
}

#[rstest]
#[case::windows_1250(Codepage::Windows1250, 0x80)]
#[case::windows_1255(Codepage::Windows1255, 0x80)]
#[case::windows_1257(Codepage::Windows1257, 0x80)]
#[case::iso_8859_4(Codepage::Iso8859_4, 0x1A)]
#[case::iso_8859_13(Codepage::Iso8859_13, 0x1A)]
#[case::ascii(Codepage::Ascii, 0x1A)]
fn euro_sign(#[case] codepage: Codepage, #[case] byte: u8) {
    assert_eq!(codepage::codepoint_to_byte(codepage, 0x20AC), byte);
}

#[rstest]
#[case::windows_1255_hole(Codepage::Windows1255, 0xCA, REPLACEMENT_CHARACTER)]
#[case::windows_1255_sheqel(Codepage::Windows1255, 0xA4, 0x20AA)]
#[case::iso_8859_4_currency(Codepage::Iso8859_4, 0xA4, 0xA4)]
#[case::iso_8859_13_quote(Codepage::Iso8859_13, 0xFF, 0x2019)]
#[case::ascii_high(Codepage::Ascii, 0x80, REPLACEMENT_CHARACTER)]
#[case::ascii_transparent(Codepage::Koi8U, 0x7F, 0x7F)]
fn table_boundaries(#[case] codepage: Codepage, #[case] byte: u8, #[case] code_point: u32) {
    assert_eq!(codepage::byte_to_codepoint(codepage, byte), code_point);
}

/// Every scalar value survives every Unicode string format.
#[test]
#[cfg_attr(feature = "test-fast", ignore = "walks every scalar value")]
fn all_scalars_round_trip() {
    let mut utf8 = [0u8; 4];
    let mut utf16 = [0u16; 2];
    let mut utf32 = [0u32; 1];
    let scalars: Vec<u32> = (0..0x11_0000).filter(|&cp| character::is_scalar_value(cp)).collect();
    for code_point in scalars {
        let (mut write, mut read) = (0, 0);
        character::encode_to_utf8(code_point, &mut utf8, &mut write, Strictness::Strict).unwrap();
        assert_eq!(
            character::decode_from_utf8(&utf8[..write], &mut read, Strictness::Strict),
            Ok(code_point)
        );

        let (mut write, mut read) = (0, 0);
        character::encode_to_utf16(code_point, &mut utf16, &mut write, Strictness::Strict)
            .unwrap();
        assert_eq!(
            character::decode_from_utf16(&utf16[..write], &mut read, Strictness::Strict),
            Ok(code_point)
        );
        assert_eq!(read, write);

        let (mut write, mut read) = (0, 0);
        character::encode_to_utf32(code_point, &mut utf32, &mut write, Strictness::Strict)
            .unwrap();
        assert_eq!(
            character::decode_from_utf32(&utf32, &mut read, Strictness::Strict),
            Ok(code_point)
        );
    }
}

#[test]
fn utf16_string_from_codepage_is_terminated() {
    let source = b"\xC1\xC2";
    assert_eq!(
        utf16_string::size_from_byte_stream(source, Codepage::Koi8R),
        Ok(3)
    );
    let mut destination = [0xFFFFu16; 3];
    utf16_string::copy_from_byte_stream(&mut destination, source, Codepage::Koi8R).unwrap();
    assert_eq!(destination, [0x0430, 0x0431, 0]);

    let mut converter = Converter::new(ConversionOptions::default());
    assert_eq!(
        converter.size(Source::ByteStream(source, Codepage::Koi8R), Format::Utf16),
        Ok(2)
    );
}
