#![expect(missing_docs)]

use rstest::*;
use uniconv::{
    ByteOrder, CollectingSink, Codepage, ConversionOptions, Converter, Destination, Encoded,
    ErrorDomain, ErrorKind, Format, Source, Strictness, WriteSink, framing, utf8_stream,
    utf16_stream, utf16_string, utf32_stream, utf32_string,
};

#[test]
fn free_functions_match_the_converter() {
    let text = "Grüße, 世界 😀";
    let mut converter = Converter::new(ConversionOptions::default());

    let needed = utf16_string::size_from_utf8(text.as_bytes(), Strictness::Strict).unwrap();
    let mut units = vec![0u16; needed];
    utf16_string::copy_from_utf8(&mut units, text.as_bytes(), Strictness::Strict).unwrap();
    assert_eq!(
        converter.encode_str(text, Format::Utf16),
        Ok(Encoded::Utf16(units.clone()))
    );
    assert_eq!(units, text.encode_utf16().collect::<Vec<_>>());

    let needed = utf32_stream::size_from_utf16(&units, Strictness::Strict).unwrap();
    let mut stream = vec![0u8; needed];
    utf32_stream::copy_from_utf16(
        &mut stream,
        &units,
        ByteOrder::BigEndian,
        Strictness::Strict,
    )
    .unwrap();
    assert_eq!(
        converter.convert(Source::Utf16(&units), Format::Utf32Stream),
        Ok(Encoded::Bytes(stream.clone()))
    );
    assert_eq!(
        converter.decode_to_string(Source::Utf32Stream(&stream)),
        Ok(text.to_owned())
    );
}

#[rstest]
#[case::utf8(Format::Utf8Stream, &[0xEF, 0xBB, 0xBF, 0x41], 3)]
#[case::utf16_be(Format::Utf16Stream, &[0xFE, 0xFF, 0x00, 0x41], 2)]
#[case::utf32_be(Format::Utf32Stream, &[0, 0, 0xFE, 0xFF, 0, 0, 0, 0x41], 4)]
fn streams_always_carry_a_mark(
    #[case] format: Format,
    #[case] expected: &[u8],
    #[case] mark_len: usize,
) {
    let mut converter = Converter::new(ConversionOptions::default());
    assert_eq!(
        converter.encode_str("A", format),
        Ok(Encoded::Bytes(expected.to_vec()))
    );
    let offset = match format {
        Format::Utf8Stream => framing::detect_utf8(expected),
        Format::Utf16Stream => framing::detect_utf16(expected, None).map(|framing| framing.offset),
        _ => framing::detect_utf32(expected, None).map(|framing| framing.offset),
    };
    assert_eq!(offset, Ok(mark_len));
}

#[test]
fn utf8_stream_sizes_count_utf8_bytes() {
    let units = "€€".encode_utf16().collect::<Vec<_>>();
    assert_eq!(utf8_stream::size_from_utf16(&units, Strictness::Strict), Ok(9));
    assert_eq!(utf16_stream::size_from_utf16(&units, Strictness::Strict), Ok(6));
}

#[test]
fn codepage_destinations_substitute() {
    let mut converter = Converter::new(ConversionOptions::default());
    let mut buffer = [0u8; 3];
    let written = converter
        .copy(
            Source::Utf32(&[0x41, 0x0416, 0x1_F600]),
            Destination::ByteStream(&mut buffer, Codepage::Koi8R),
        )
        .unwrap();
    assert_eq!(written, 3);
    assert_eq!(buffer, [0x41, 0xF6, 0x1A]);
}

#[test]
fn codepage_lookup_by_name_and_id() {
    assert_eq!("CP1252".parse::<Codepage>(), Ok(Codepage::Windows1252));
    assert_eq!(" koi8-u ".parse::<Codepage>(), Ok(Codepage::Koi8U));
    assert_eq!(Codepage::from_id(28_605), Ok(Codepage::Iso8859_15));
    let error = "ebcdic".parse::<Codepage>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnsupportedValue);
    assert_eq!(error.domain(), ErrorDomain::Arguments);
}

#[test]
fn strict_failures_are_reported_once_per_call() {
    let mut converter = Converter::with_sink(ConversionOptions::default(), CollectingSink::new());
    let error = converter
        .size(Source::Utf8(b"ok\xFF"), Format::Utf32)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
    assert_eq!(error.domain(), ErrorDomain::Conversion);
    assert_eq!(converter.sink().warnings().len(), 1);
    assert_eq!(
        converter.sink().warnings()[0].lines().last(),
        Some("unable to determine UTF-32 string size of UTF-8 string")
    );

    let mut lenient = Converter::with_sink(ConversionOptions::lenient(), CollectingSink::new());
    assert_eq!(
        lenient.convert(Source::Utf8(b"ok\xFF"), Format::Utf32),
        Ok(Encoded::Utf32(vec![0x6F, 0x6B, 0xFFFD]))
    );
    assert!(lenient.sink().warnings().is_empty());
}

#[test]
fn write_sink_writes_lines() {
    let mut converter = Converter::with_sink(
        ConversionOptions::default(),
        WriteSink::new(String::new()),
    );
    assert!(converter.decode_to_string(Source::Utf16Stream(&[0x41])).is_err());
    let written = converter.into_sink().into_inner();
    assert!(written.ends_with("unable to decode UTF-16 stream\n"));
}

#[test]
fn strings_from_streams_are_terminated() {
    let stream = [0xFF, 0xFE, 0x41, 0x00];
    assert_eq!(
        utf32_string::size_from_utf16_stream(&stream, None, Strictness::Strict),
        Ok(2)
    );
    let terminated = [0xFF, 0xFE, 0x41, 0x00, 0x00, 0x00];
    assert_eq!(
        utf32_string::size_from_utf16_stream(&terminated, None, Strictness::Strict),
        Ok(2)
    );
}
