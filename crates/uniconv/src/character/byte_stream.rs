use super::{CodePoint, check_decode_cursor, check_encode_room};
use crate::{
    codepage::{Codepage, byte_to_codepoint, codepoint_to_byte},
    error::Result,
};

/// Decodes one byte of a `codepage` byte stream.
///
/// Always consumes exactly one byte; undefined bytes yield U+FFFD.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`](crate::ErrorKind::ArgumentTooSmall) if
///   `cursor` is at the end of `source`.
/// - [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) if
///   `cursor` is past the end.
pub fn decode_from_byte_stream(
    source: &[u8],
    cursor: &mut usize,
    codepage: Codepage,
) -> Result<CodePoint> {
    check_decode_cursor(source.len(), *cursor, codepage.name())?;
    let code_point = byte_to_codepoint(codepage, source[*cursor]);
    *cursor += 1;
    Ok(code_point)
}

/// Encodes one code point as one byte of a `codepage` byte stream.
///
/// Unmappable code points are written as `0x1A`; only a full destination
/// fails.
///
/// # Errors
///
/// - [`ErrorKind::ArgumentTooSmall`](crate::ErrorKind::ArgumentTooSmall) if
///   there is no room left.
/// - [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) if
///   `cursor` is past the end.
pub fn encode_to_byte_stream(
    code_point: CodePoint,
    destination: &mut [u8],
    cursor: &mut usize,
    codepage: Codepage,
) -> Result<()> {
    check_encode_room(destination.len(), *cursor, 1, codepage.name())?;
    destination[*cursor] = codepoint_to_byte(codepage, code_point);
    *cursor += 1;
    Ok(())
}

/// Number of bytes [`encode_to_byte_stream`] writes: always one.
#[must_use]
pub const fn size_to_byte_stream(_code_point: CodePoint) -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        character::{ASCII_REPLACEMENT_BYTE, REPLACEMENT_CHARACTER},
        error::ErrorKind,
    };

    #[test]
    fn one_byte_per_code_point() {
        let source = [0x41, 0x80, 0x81];
        let mut cursor = 0;
        let decoded: alloc::vec::Vec<_> = (0..3)
            .map(|_| decode_from_byte_stream(&source, &mut cursor, Codepage::Windows1252).unwrap())
            .collect();
        assert_eq!(decoded, [0x41, 0x20AC, REPLACEMENT_CHARACTER]);
        assert_eq!(
            decode_from_byte_stream(&source, &mut cursor, Codepage::Windows1252)
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentTooSmall
        );
    }

    #[test]
    fn unmappable_code_points_never_fail() {
        let mut buffer = [0u8; 2];
        let mut cursor = 0;
        encode_to_byte_stream(0x20AC, &mut buffer, &mut cursor, Codepage::Windows1255).unwrap();
        encode_to_byte_stream(0xDC00, &mut buffer, &mut cursor, Codepage::Windows1255).unwrap();
        assert_eq!(buffer, [0x80, ASCII_REPLACEMENT_BYTE]);
        assert_eq!(
            encode_to_byte_stream(0x41, &mut buffer, &mut cursor, Codepage::Windows1255)
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentTooSmall
        );
    }
}
