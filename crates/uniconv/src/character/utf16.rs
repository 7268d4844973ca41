use alloc::format;

use super::{
    CodePoint, HIGH_SURROGATE_END, HIGH_SURROGATE_START, LOW_SURROGATE_END, LOW_SURROGATE_START,
    REPLACEMENT_CHARACTER, check_decode_cursor, check_encode_room, check_stream_cursor, encodable,
};
use crate::{
    byte_order::ByteOrder,
    error::{Error, ErrorKind, Result},
    options::Strictness,
};

const fn is_high_surrogate(unit: u16) -> bool {
    unit as CodePoint >= HIGH_SURROGATE_START && unit as CodePoint <= HIGH_SURROGATE_END
}

const fn is_low_surrogate(unit: u16) -> bool {
    unit as CodePoint >= LOW_SURROGATE_START && unit as CodePoint <= LOW_SURROGATE_END
}

const fn combine(high: u16, low: u16) -> CodePoint {
    0x1_0000
        + ((high as CodePoint - HIGH_SURROGATE_START) << 10)
        + (low as CodePoint - LOW_SURROGATE_START)
}

/// Shared decode over any 16-bit unit source.
///
/// `unit_at(i)` returns the unit starting at position `i`, or `None` past the
/// end; one unit spans `step` positions. The cursor must already be checked.
fn decode_units<F>(
    unit_at: F,
    cursor: &mut usize,
    step: usize,
    strictness: Strictness,
    format: &str,
) -> Result<CodePoint>
where
    F: Fn(usize) -> Option<u16>,
{
    let start = *cursor;
    let Some(unit) = unit_at(start) else {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!("{format} source too small: no unit at {start}"),
        ));
    };

    if is_high_surrogate(unit) {
        if let Some(low) = unit_at(start + step).filter(|&low| is_low_surrogate(low)) {
            *cursor = start + 2 * step;
            return Ok(combine(unit, low));
        }
    } else if !is_low_surrogate(unit) {
        *cursor = start + step;
        return Ok(CodePoint::from(unit));
    }

    if strictness.is_strict() {
        return Err(Error::set(
            ErrorKind::ConversionInvalidInput,
            format!("unpaired surrogate 0x{unit:04x} in {format} at offset {start}"),
        ));
    }
    *cursor = start + step;
    Ok(REPLACEMENT_CHARACTER)
}

/// Decodes one code point from a UTF-16 string.
///
/// Consumes one unit, or two for a surrogate pair. An unpaired surrogate fails
/// in strict mode and yields U+FFFD, consuming only that unit, in lenient
/// mode.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if `cursor` is at the end of `source`.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for unpaired surrogates in strict
///   mode.
pub fn decode_from_utf16(
    source: &[u16],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<CodePoint> {
    check_decode_cursor(source.len(), *cursor, "UTF-16")?;
    decode_units(
        |index| source.get(index).copied(),
        cursor,
        1,
        strictness,
        "UTF-16",
    )
}

/// Decodes one code point from a UTF-16 byte stream in `byte_order`.
///
/// `cursor` counts bytes. Behaves like [`decode_from_utf16`] otherwise.
///
/// # Errors
///
/// As [`decode_from_utf16`]; fewer than two bytes left at `cursor` is
/// [`ErrorKind::ArgumentTooSmall`].
pub fn decode_from_utf16_stream(
    source: &[u8],
    cursor: &mut usize,
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<CodePoint> {
    check_stream_cursor(source.len(), *cursor, 2, "UTF-16 stream")?;
    decode_units(
        |index| {
            let bytes = source.get(index..index + 2)?;
            Some(byte_order.read_u16([bytes[0], bytes[1]]))
        },
        cursor,
        2,
        strictness,
        "UTF-16 stream",
    )
}

/// Splits a scalar value into one or two UTF-16 units.
#[expect(clippy::cast_possible_truncation)]
fn to_units(code_point: CodePoint) -> ([u16; 2], usize) {
    if code_point < 0x1_0000 {
        ([code_point as u16, 0], 1)
    } else {
        let offset = code_point - 0x1_0000;
        let high = (HIGH_SURROGATE_START + (offset >> 10)) as u16;
        let low = (LOW_SURROGATE_START + (offset & 0x3FF)) as u16;
        ([high, low], 2)
    }
}

/// Encodes one code point into a UTF-16 string.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`] if the unit(s) do not fit.
/// - [`ErrorKind::InvalidArgument`] if `cursor` is past the end.
/// - [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict
///   mode.
pub fn encode_to_utf16(
    code_point: CodePoint,
    destination: &mut [u16],
    cursor: &mut usize,
    strictness: Strictness,
) -> Result<()> {
    let code_point = encodable(code_point, strictness, "UTF-16")?;
    let (units, len) = to_units(code_point);
    check_encode_room(destination.len(), *cursor, len, "UTF-16")?;
    destination[*cursor..*cursor + len].copy_from_slice(&units[..len]);
    *cursor += len;
    Ok(())
}

/// Encodes one code point into a UTF-16 byte stream in `byte_order`.
///
/// `cursor` counts bytes.
///
/// # Errors
///
/// As [`encode_to_utf16`].
pub fn encode_to_utf16_stream(
    code_point: CodePoint,
    destination: &mut [u8],
    cursor: &mut usize,
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<()> {
    let code_point = encodable(code_point, strictness, "UTF-16 stream")?;
    let (units, len) = to_units(code_point);
    check_encode_room(destination.len(), *cursor, 2 * len, "UTF-16 stream")?;
    for &unit in &units[..len] {
        destination[*cursor..*cursor + 2].copy_from_slice(&byte_order.write_u16(unit));
        *cursor += 2;
    }
    Ok(())
}

/// Number of 16-bit units [`encode_to_utf16`] writes for `code_point`.
///
/// # Errors
///
/// [`ErrorKind::ConversionInvalidInput`] for non-scalar values in strict mode.
pub fn size_to_utf16(code_point: CodePoint, strictness: Strictness) -> Result<usize> {
    encodable(code_point, strictness, "UTF-16").map(|code_point| to_units(code_point).1)
}
