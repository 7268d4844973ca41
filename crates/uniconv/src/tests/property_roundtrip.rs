use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use crate::{ByteOrder, Codepage, ConversionOptions, Converter, Encoded, Format, Source, Strictness};

const UNICODE_FORMATS: [Format; 6] = [
    Format::Utf8,
    Format::Utf16,
    Format::Utf32,
    Format::Utf8Stream,
    Format::Utf16Stream,
    Format::Utf32Stream,
];

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

fn as_source(encoded: &Encoded, format: Format) -> Source<'_> {
    match (encoded, format) {
        (Encoded::Utf16(units), _) => Source::Utf16(units),
        (Encoded::Utf32(units), _) => Source::Utf32(units),
        (Encoded::Bytes(bytes), Format::Utf8Stream) => Source::Utf8Stream(bytes),
        (Encoded::Bytes(bytes), Format::Utf16Stream) => Source::Utf16Stream(bytes),
        (Encoded::Bytes(bytes), Format::Utf32Stream) => Source::Utf32Stream(bytes),
        (Encoded::Bytes(bytes), Format::ByteStream(codepage)) => {
            Source::ByteStream(bytes, codepage)
        }
        (Encoded::Bytes(bytes), _) => Source::Utf8(bytes),
    }
}

/// Property: every Unicode format carries every scalar value unchanged, in
/// both stream byte orders.
#[test]
fn every_scalar_round_trips() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, little_endian: bool) -> bool {
        if text.is_empty() {
            return true;
        }
        let mut converter = Converter::new(ConversionOptions {
            byte_order: Some(if little_endian {
                ByteOrder::LittleEndian
            } else {
                ByteOrder::BigEndian
            }),
            ..Default::default()
        });
        UNICODE_FORMATS.iter().all(|&format| {
            let encoded = converter.encode_str(&text, format).unwrap();
            converter.decode_to_string(as_source(&encoded, format)).unwrap() == text
        })
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, bool) -> bool);
}

/// Property: decoding arbitrary bytes leniently and encoding the result is
/// idempotent; a second pass reads back the same text strictly.
#[test]
fn lenient_decode_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, units: Vec<u16>) -> bool {
        let mut lenient = Converter::new(ConversionOptions::lenient());
        let mut strict = Converter::new(ConversionOptions::default());

        let from_utf8 = lenient.decode_to_string(Source::Utf8(&bytes)).unwrap();
        let from_utf16 = lenient.decode_to_string(Source::Utf16(&units)).unwrap();
        [from_utf8, from_utf16].iter().all(|text| {
            let encoded = strict.encode_str(text, Format::Utf16).unwrap();
            strict.decode_to_string(as_source(&encoded, Format::Utf16)).unwrap() == *text
        })
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u16>) -> bool);
}

/// Property: the legacy codepages decode every byte, and every code point a
/// byte decodes to (other than U+FFFD) encodes back to that byte.
#[test]
fn codepage_bytes_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, codepage: u8) -> bool {
        let codepage = Codepage::ALL[usize::from(codepage) % Codepage::ALL.len()];
        if bytes.is_empty() {
            return true;
        }
        let mut converter = Converter::new(ConversionOptions::default());
        let text = converter
            .decode_to_string(Source::ByteStream(&bytes, codepage))
            .unwrap();
        let encoded = converter
            .encode_str(&text, Format::ByteStream(codepage))
            .unwrap();
        let Some(encoded) = encoded.as_bytes() else {
            return false;
        };
        encoded.len() == bytes.len()
            && text
                .chars()
                .zip(bytes.iter().zip(encoded))
                .all(|(c, (before, after))| c == '\u{FFFD}' || before == after)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

#[test]
fn strictness_is_carried_into_options() {
    assert_eq!(ConversionOptions::lenient().strictness, Strictness::Lenient);
}
