use alloc::format;

use bstr::BStr;

use super::{
    CodePoint, HIGH_SURROGATE_START, LOW_SURROGATE_END, REPLACEMENT_CHARACTER,
    UNICODE_CHARACTER_MAX, check_decode_cursor, check_encode_room, encodable,
};
use crate::{
    error::{Error, ErrorKind, Result},
    options::Strictness,
};

/// Sequence length announced by a lead byte, or `None` if `byte` cannot start
/// a sequence.
const fn sequence_len(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Smallest code point that needs a sequence of `len` bytes.
const fn minimum_for_len(len: usize) -> CodePoint {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x1_0000,
        _ => 0,
    }
}

const fn encoded_len(code_point: CodePoint) -> usize {
    match code_point {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        _ => 4,
    }
}

fn malformed(
    source: &[u8],
    cursor: &mut usize,
    end: usize,
    reason: &str,
    strictness: Strictness,
) -> Result<CodePoint> {
    let start = *cursor;
    if strictness.is_strict() {
        return Err(Error::set(
            ErrorKind::ConversionInvalidInput,
            format!(
                "{reason} in UTF-8 sequence {:?} at offset {start}",
                BStr::new(&source[start..end])
            ),
        ));
    }
    *cursor = start + 1;
    Ok(REPLACEMENT_CHARACTER)
}

/// Decodes one code point from a UTF-8 string.
///
/// Consumes one to four bytes. Invalid lead bytes, truncated sequences,
/// missing continuation bytes, overlong forms and values above U+10FFFF are
/// malformed: in strict mode they fail, in lenient mode they consume one byte
/// and yield U+FFFD. An encoded surrogate fails in strict mode and is replaced
/// as a whole three-byte sequence in lenient mode.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if `cursor` is at the end of `source`.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for malformed input in strict mode.
pub fn decode_from_utf8(
    source: &[u8],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<CodePoint> {
    check_decode_cursor(source.len(), *cursor, "UTF-8")?;
    let start = *cursor;
    let lead = source[start];

    let Some(len) = sequence_len(lead) else {
        return malformed(source, cursor, start + 1, "invalid lead byte", strictness);
    };
    if len == 1 {
        *cursor = start + 1;
        return Ok(CodePoint::from(lead));
    }
    if source.len() - start < len {
        return malformed(source, cursor, source.len(), "truncated sequence", strictness);
    }

    let end = start + len;
    let mut code_point = CodePoint::from(lead) & (0x7F >> len);
    for (offset, &byte) in source[start + 1..end].iter().enumerate() {
        if !is_continuation(byte) {
            return malformed(
                source,
                cursor,
                start + offset + 2,
                "missing continuation byte",
                strictness,
            );
        }
        code_point = (code_point << 6) | CodePoint::from(byte & 0x3F);
    }

    if code_point < minimum_for_len(len) {
        return malformed(source, cursor, end, "overlong encoding", strictness);
    }
    if code_point > UNICODE_CHARACTER_MAX {
        return malformed(source, cursor, end, "value out of range", strictness);
    }
    if (HIGH_SURROGATE_START..=LOW_SURROGATE_END).contains(&code_point) {
        if strictness.is_strict() {
            return Err(Error::set(
                ErrorKind::ConversionInvalidInput,
                format!(
                    "encoded surrogate U+{code_point:04X} in UTF-8 sequence {:?} at offset {start}",
                    BStr::new(&source[start..end])
                ),
            ));
        }
        *cursor = end;
        return Ok(REPLACEMENT_CHARACTER);
    }

    *cursor = end;
    Ok(code_point)
}

/// Encodes one code point into a UTF-8 string.
///
/// Non-scalar values fail in strict mode and are written as U+FFFD in lenient
/// mode.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if the whole sequence does not fit.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict
///   mode.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_to_utf8(
    code_point: CodePoint,
    destination: &mut [u8],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<()> {
    let code_point = encodable(code_point, strictness, "UTF-8")?;
    let len = encoded_len(code_point);
    check_encode_room(destination.len(), *cursor, len, "UTF-8")?;

    let out = &mut destination[*cursor..*cursor + len];
    match len {
        1 => out[0] = code_point as u8,
        2 => {
            out[0] = 0xC0 | (code_point >> 6) as u8;
            out[1] = 0x80 | (code_point & 0x3F) as u8;
        }
        3 => {
            out[0] = 0xE0 | (code_point >> 12) as u8;
            out[1] = 0x80 | ((code_point >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (code_point & 0x3F) as u8;
        }
        _ => {
            out[0] = 0xF0 | (code_point >> 18) as u8;
            out[1] = 0x80 | ((code_point >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((code_point >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (code_point & 0x3F) as u8;
        }
    }
    *cursor += len;
    Ok(())
}

/// Number of bytes [`encode_to_utf8`] writes for `code_point`.
///
/// # Errors
///
/// [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict mode.
pub fn size_to_utf8(code_point: CodePoint, strictness: Strictness) -> Result<usize> {
    encodable(code_point, strictness, "UTF-8").map(encoded_len)
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use rstest::*;

    use super::*;

    fn decode_all(source: &[u8], strictness: Strictness) -> Result<Vec<CodePoint>> {
        let mut cursor = 0;
        let mut out = Vec::new();
        while cursor < source.len() {
            out.push(decode_from_utf8(source, &mut cursor, strictness)?);
        }
        Ok(out)
    }

    #[rstest]
    #[case(b"A", 0x41)]
    #[case(b"\xC3\xA9", 0xE9)]
    #[case(b"\xE2\x82\xAC", 0x20AC)]
    #[case(b"\xF0\x9F\x98\x80", 0x1_F600)]
    #[case(b"\xF4\x8F\xBF\xBF", 0x10_FFFF)]
    fn decodes_well_formed(#[case] source: &[u8], #[case] expected: CodePoint) {
        let mut cursor = 0;
        assert_eq!(
            decode_from_utf8(source, &mut cursor, Strictness::Strict),
            Ok(expected)
        );
        assert_eq!(cursor, source.len());
    }

    #[rstest]
    #[case::overlong_nul(b"\xC0\x80")]
    #[case::overlong_three(b"\xE0\x80\xAF")]
    #[case::bad_continuation(b"\xC3\x41")]
    #[case::truncated(b"\xE2\x82")]
    #[case::lone_continuation(b"\x80")]
    #[case::invalid_lead(b"\xF8\x88\x80\x80\x80")]
    #[case::above_max(b"\xF4\x90\x80\x80")]
    fn malformed_fails_strict_and_replaces_one_byte_lenient(#[case] source: &[u8]) {
        let mut cursor = 0;
        let error = decode_from_utf8(source, &mut cursor, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(cursor, 0);

        assert_eq!(
            decode_from_utf8(source, &mut cursor, Strictness::Lenient),
            Ok(REPLACEMENT_CHARACTER)
        );
        assert_eq!(cursor, 1);
    }

    #[test]
    fn lenient_resynchronizes_after_overlong() {
        assert_eq!(
            decode_all(b"\xC0\x80A", Strictness::Lenient),
            Ok(alloc::vec![REPLACEMENT_CHARACTER, REPLACEMENT_CHARACTER, 0x41])
        );
    }

    #[test]
    fn encoded_surrogate() {
        let source = b"\xED\xA0\x80";
        let mut cursor = 0;
        let error = decode_from_utf8(source, &mut cursor, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(
            decode_from_utf8(source, &mut cursor, Strictness::Lenient),
            Ok(REPLACEMENT_CHARACTER)
        );
        assert_eq!(cursor, 3);
    }

    #[test]
    fn error_message_shows_offending_bytes() {
        let mut cursor = 1;
        let error = decode_from_utf8(b"A\xC0\x80", &mut cursor, Strictness::Strict).unwrap_err();
        insta::assert_snapshot!(
            error.last_message(),
            @r#"overlong encoding in UTF-8 sequence "\xc0\x80" at offset 1"#
        );
    }

    #[test]
    fn encodes_minimal_form() {
        let mut buffer = [0u8; 4];
        for ch in ['A', 'é', '€', '😀'] {
            let mut cursor = 0;
            encode_to_utf8(ch.into(), &mut buffer, &mut cursor, Strictness::Strict).unwrap();
            let mut expected = [0u8; 4];
            assert_eq!(&buffer[..cursor], ch.encode_utf8(&mut expected).as_bytes());
            assert_eq!(
                size_to_utf8(ch.into(), Strictness::Strict),
                Ok(ch.len_utf8())
            );
        }
    }

    #[test]
    fn never_writes_partial_sequence() {
        let mut buffer = [0u8; 3];
        let mut cursor = 0;
        let error =
            encode_to_utf8(0x1_F600, &mut buffer, &mut cursor, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(cursor, 0);
        assert_eq!(buffer, [0; 3]);
    }

    #[test]
    fn lenient_encode_replaces_surrogates() {
        let mut buffer = [0u8; 3];
        let mut cursor = 0;
        encode_to_utf8(0xD800, &mut buffer, &mut cursor, Strictness::Lenient).unwrap();
        assert_eq!(&buffer, "\u{FFFD}".as_bytes());
        assert_eq!(size_to_utf8(0xD800, Strictness::Lenient), Ok(3));
        assert!(size_to_utf8(0xD800, Strictness::Strict).is_err());
    }

    #[test]
    fn decodes_mixed_text() {
        let text = "aé€😀";
        let decoded = decode_all(text.as_bytes(), Strictness::Strict).unwrap();
        let round: String = decoded
            .iter()
            .map(|&cp| char::from_u32(cp).unwrap())
            .collect();
        assert_eq!(round, text);
    }
}
