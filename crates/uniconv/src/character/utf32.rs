use alloc::format;

use super::{
    CodePoint, REPLACEMENT_CHARACTER, check_decode_cursor, check_encode_room, check_stream_cursor,
    encodable, is_scalar_value,
};
use crate::{
    byte_order::ByteOrder,
    error::{Error, ErrorKind, Result},
    options::Strictness,
};

fn validate(unit: u32, offset: usize, strictness: Strictness, format: &str) -> Result<CodePoint> {
    if is_scalar_value(unit) {
        Ok(unit)
    } else if strictness.is_strict() {
        Err(Error::set(
            ErrorKind::ConversionInvalidInput,
            format!("invalid {format} unit 0x{unit:08x} at offset {offset}"),
        ))
    } else {
        Ok(REPLACEMENT_CHARACTER)
    }
}

/// Decodes one code point from a UTF-32 string.
///
/// Values above U+10FFFF and surrogates fail in strict mode and yield U+FFFD
/// in lenient mode.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if `cursor` is at the end of `source`.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for invalid units in strict mode.
pub fn decode_from_utf32(
    source: &[u32],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<CodePoint> {
    check_decode_cursor(source.len(), *cursor, "UTF-32")?;
    let code_point = validate(source[*cursor], *cursor, strictness, "UTF-32")?;
    *cursor += 1;
    Ok(code_point)
}

/// Decodes one code point from a UTF-32 byte stream in `byte_order`.
///
/// `cursor` counts bytes.
///
/// # Errors
///
/// As [`decode_from_utf32`]; fewer than four bytes left at `cursor` is
/// [`ErrorKind::ArgumentTooSmall`].
pub fn decode_from_utf32_stream(
    source: &[u8],
    cursor: &mut usize,
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<CodePoint> {
    check_stream_cursor(source.len(), *cursor, 4, "UTF-32 stream")?;
    let start = *cursor;
    let unit = byte_order.read_u32([
        source[start],
        source[start + 1],
        source[start + 2],
        source[start + 3],
    ]);
    let code_point = validate(unit, start, strictness, "UTF-32 stream")?;
    *cursor = start + 4;
    Ok(code_point)
}

/// Encodes one code point into a UTF-32 string.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if the unit does not fit.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict
///   mode.
pub fn encode_to_utf32(
    code_point: CodePoint,
    destination: &mut [u32],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<()> {
    let code_point = encodable(code_point, strictness, "UTF-32")?;
    check_encode_room(destination.len(), *cursor, 1, "UTF-32")?;
    destination[*cursor] = code_point;
    *cursor += 1;
    Ok(())
}

/// Encodes one code point into a UTF-32 byte stream in `byte_order`.
///
/// `cursor` counts bytes.
///
/// # Errors
///
/// As [`encode_to_utf32`].
pub fn encode_to_utf32_stream(
    code_point: CodePoint,
    destination: &mut [u8],
    cursor: &mut usize,
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<()> {
    let code_point = encodable(code_point, strictness, "UTF-32 stream")?;
    check_encode_room(destination.len(), *cursor, 4, "UTF-32 stream")?;
    destination[*cursor..*cursor + 4].copy_from_slice(&byte_order.write_u32(code_point));
    *cursor += 4;
    Ok(())
}

/// Number of 32-bit units [`encode_to_utf32`] writes for `code_point`:
/// always one.
///
/// # Errors
///
/// [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict mode.
pub fn size_to_utf32(code_point: CodePoint, strictness: Strictness) -> Result<usize> {
    encodable(code_point, strictness, "UTF-32").map(|_| 1)
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::surrogate(0xD800)]
    #[case::above_max(0x11_0000)]
    #[case::all_ones(u32::MAX)]
    fn invalid_units(#[case] unit: u32) {
        let mut cursor = 0;
        let error = decode_from_utf32(&[unit], &mut cursor, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(
            decode_from_utf32(&[unit], &mut cursor, Strictness::Lenient),
            Ok(REPLACEMENT_CHARACTER)
        );
        assert_eq!(cursor, 1);
    }

    #[test]
    fn stream_in_both_orders() {
        let mut cursor = 0;
        assert_eq!(
            decode_from_utf32_stream(
                &[0x00, 0xF6, 0x01, 0x00],
                &mut cursor,
                ByteOrder::LittleEndian,
                Strictness::Strict
            ),
            Ok(0x1_F600)
        );
        let mut buffer = [0u8; 4];
        let mut cursor = 0;
        encode_to_utf32_stream(
            0x1_F600,
            &mut buffer,
            &mut cursor,
            ByteOrder::BigEndian,
            Strictness::Strict,
        )
        .unwrap();
        assert_eq!(buffer, [0x00, 0x01, 0xF6, 0x00]);
    }

    #[test]
    fn stream_truncated_unit() {
        let mut cursor = 0;
        let error = decode_from_utf32_stream(
            &[0x41, 0x00, 0x00],
            &mut cursor,
            ByteOrder::LittleEndian,
            Strictness::Strict,
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
    }

    #[test]
    fn encode_needs_room() {
        let mut buffer = [0u32; 1];
        let mut cursor = 1;
        let error =
            encode_to_utf32(0x41, &mut buffer, &mut cursor, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(size_to_utf32(0x41, Strictness::Strict), Ok(1));
        assert_eq!(size_to_utf32(0xDFFF, Strictness::Lenient), Ok(1));
    }
}
