//! Single code point decode and encode for every supported format.
//!
//! Every decoder reads one code point at `cursor` and advances it past the
//! units it consumed. Every encoder writes the whole representation of one
//! code point at `cursor` or nothing at all. `size_to_*` reports exactly the
//! number of units the matching encoder writes, under the same
//! [`Strictness`].

use alloc::format;

use crate::{
    error::{Error, ErrorKind, Result},
    options::Strictness,
};

mod byte_stream;
mod utf16;
mod utf32;
mod utf8;

pub use byte_stream::{decode_from_byte_stream, encode_to_byte_stream, size_to_byte_stream};
pub use utf8::{decode_from_utf8, encode_to_utf8, size_to_utf8};
pub use utf16::{
    decode_from_utf16, decode_from_utf16_stream, encode_to_utf16, encode_to_utf16_stream,
    size_to_utf16,
};
pub use utf32::{
    decode_from_utf32, decode_from_utf32_stream, encode_to_utf32, encode_to_utf32_stream,
    size_to_utf32,
};

/// A Unicode code point, or a value decoded from input that claims to be one.
pub type CodePoint = u32;

/// U+FFFD, substituted for malformed input in lenient mode.
pub const REPLACEMENT_CHARACTER: CodePoint = 0xFFFD;

/// Byte written by codepage encoders for unmappable code points (ASCII SUB).
pub const ASCII_REPLACEMENT_BYTE: u8 = 0x1A;

/// The largest Unicode code point.
pub const UNICODE_CHARACTER_MAX: CodePoint = 0x0010_FFFF;

/// First high (leading) surrogate.
pub const HIGH_SURROGATE_START: CodePoint = 0xD800;
/// Last high (leading) surrogate.
pub const HIGH_SURROGATE_END: CodePoint = 0xDBFF;
/// First low (trailing) surrogate.
pub const LOW_SURROGATE_START: CodePoint = 0xDC00;
/// Last low (trailing) surrogate.
pub const LOW_SURROGATE_END: CodePoint = 0xDFFF;

/// Whether `code_point` is a Unicode scalar value: at most U+10FFFF and not a
/// surrogate.
#[must_use]
pub const fn is_scalar_value(code_point: CodePoint) -> bool {
    code_point <= UNICODE_CHARACTER_MAX
        && !(code_point >= HIGH_SURROGATE_START && code_point <= LOW_SURROGATE_END)
}

/// Checks that `cursor` addresses a unit of a `len`-unit source.
pub(crate) fn check_decode_cursor(len: usize, cursor: usize, format: &str) -> Result<()> {
    if cursor > len {
        return Err(Error::set(
            ErrorKind::InvalidArgument,
            format!("{format} cursor {cursor} is past the end of the source ({len})"),
        ));
    }
    if cursor == len {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!("{format} source too small: no unit at {cursor}"),
        ));
    }
    Ok(())
}

/// Checks that a whole `width`-byte unit is left at `cursor` in a byte stream.
pub(crate) fn check_stream_cursor(
    len: usize,
    cursor: usize,
    width: usize,
    format: &str,
) -> Result<()> {
    check_decode_cursor(len, cursor, format)?;
    if len - cursor < width {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!("missing {format} bytes at offset {cursor}"),
        ));
    }
    Ok(())
}

/// Checks that `needed` units fit at `cursor` in a `len`-unit destination.
pub(crate) fn check_encode_room(
    len: usize,
    cursor: usize,
    needed: usize,
    format: &str,
) -> Result<()> {
    if cursor > len {
        return Err(Error::set(
            ErrorKind::InvalidArgument,
            format!("{format} cursor {cursor} is past the end of the destination ({len})"),
        ));
    }
    if len - cursor < needed {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!("{format} destination too small: {needed} units needed at {cursor}"),
        ));
    }
    Ok(())
}

/// The value an encoder writes for `code_point`.
pub(crate) fn encodable(
    code_point: CodePoint,
    strictness: Strictness,
    format: &str,
) -> Result<CodePoint> {
    if is_scalar_value(code_point) {
        Ok(code_point)
    } else if strictness.is_strict() {
        Err(Error::set(
            ErrorKind::ConversionInvalidInput,
            format!("unable to encode U+{code_point:04X} to {format}: not a Unicode scalar value"),
        ))
    } else {
        Ok(REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_values() {
        assert!(is_scalar_value(0));
        assert!(is_scalar_value(0xD7FF));
        assert!(!is_scalar_value(0xD800));
        assert!(!is_scalar_value(0xDFFF));
        assert!(is_scalar_value(0xE000));
        assert!(is_scalar_value(0x10_FFFF));
        assert!(!is_scalar_value(0x11_0000));
    }

    #[test]
    fn cursor_checks() {
        assert!(check_decode_cursor(2, 1, "UTF-8").is_ok());
        assert_eq!(
            check_decode_cursor(2, 2, "UTF-8").unwrap_err().kind(),
            ErrorKind::ArgumentTooSmall
        );
        assert_eq!(
            check_decode_cursor(2, 3, "UTF-8").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(check_encode_room(4, 1, 3, "UTF-8").is_ok());
        assert_eq!(
            check_encode_room(4, 2, 3, "UTF-8").unwrap_err().kind(),
            ErrorKind::ArgumentTooSmall
        );
    }

    #[test]
    fn encodable_substitutes_only_when_lenient() {
        assert_eq!(encodable(0x41, Strictness::Strict, "UTF-8"), Ok(0x41));
        assert_eq!(
            encodable(0xDC00, Strictness::Lenient, "UTF-8"),
            Ok(REPLACEMENT_CHARACTER)
        );
        assert_eq!(
            encodable(0x11_0000, Strictness::Strict, "UTF-8")
                .unwrap_err()
                .kind(),
            ErrorKind::ConversionInvalidInput
        );
    }
}
