//! Conversions into UTF-8 strings.
//!
//! Every source has a `size_from_*` function returning the number of bytes
//! the matching `copy_from_*` writes. Sources read from streams (codepage,
//! UTF-8, UTF-16 or UTF-32 byte streams) are zero terminated: one `0` byte is
//! appended unless the stream already ends in a zero unit.

use crate::{
    byte_order::ByteOrder,
    codepage::Codepage,
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{
        self, ByteStreamSource, Termination, Utf8Source, Utf8StreamSource, Utf8Target, Utf16Source,
        Utf16StreamSource, Utf32Source, Utf32StreamSource,
    },
};

const SIZE_FAILED: &str = "unable to determine UTF-8 string size";
const COPY_FAILED: &str = "unable to copy UTF-8 string";

/// Bytes needed to hold `source` after validation.
///
/// # Errors
///
/// Malformed input in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf8(source: &[u8], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &Utf8Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Copies `source` into `destination`, validating it, and returns the bytes
/// written.
///
/// # Errors
///
/// Malformed input in strict mode, or a destination smaller than
/// [`size_from_utf8`] reports.
pub fn copy_from_utf8(
    destination: &mut [u8],
    source: &[u8],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf8Source::new(source, strictness),
        &Utf8Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-16 `source` as UTF-8.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16(source: &[u16], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &Utf8Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-16 `source` into `destination` and returns the bytes written.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a destination smaller than
/// [`size_from_utf16`] reports.
pub fn copy_from_utf16(
    destination: &mut [u8],
    source: &[u16],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf16Source::new(source, strictness),
        &Utf8Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-32 `source` as UTF-8.
///
/// # Errors
///
/// Invalid units in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32(source: &[u32], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &Utf8Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into `destination` and returns the bytes written.
///
/// # Errors
///
/// Invalid units in strict mode, or a destination smaller than
/// [`size_from_utf32`] reports.
pub fn copy_from_utf32(
    destination: &mut [u8],
    source: &[u32],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf32Source::new(source, strictness),
        &Utf8Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold a `codepage` byte stream as a terminated UTF-8
/// string.
///
/// # Errors
///
/// An empty stream.
pub fn size_from_byte_stream(source: &[u8], codepage: Codepage) -> Result<usize> {
    let decoder = ByteStreamSource::new(source, codepage).describe(SIZE_FAILED)?;
    protocol::size(
        &decoder,
        &Utf8Target::new(Strictness::Strict),
        Termination::ZeroUnit,
    )
    .describe(SIZE_FAILED)
}

/// Converts a `codepage` byte stream into a terminated UTF-8 string.
///
/// # Errors
///
/// An empty stream, or a destination smaller than [`size_from_byte_stream`]
/// reports.
pub fn copy_from_byte_stream(
    destination: &mut [u8],
    source: &[u8],
    codepage: Codepage,
) -> Result<usize> {
    let decoder = ByteStreamSource::new(source, codepage).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf8Target::new(Strictness::Strict),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold a UTF-8 stream, without its byte order mark, as a
/// terminated UTF-8 string.
///
/// # Errors
///
/// An empty stream, malformed input in strict mode, or a size beyond
/// `isize::MAX`.
pub fn size_from_utf8_stream(source: &[u8], strictness: Strictness) -> Result<usize> {
    let decoder = Utf8StreamSource::new(source, strictness).describe(SIZE_FAILED)?;
    protocol::size(&decoder, &Utf8Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Copies a UTF-8 stream, without its byte order mark, into a terminated
/// UTF-8 string.
///
/// # Errors
///
/// An empty stream, malformed input in strict mode, or a destination smaller
/// than [`size_from_utf8_stream`] reports.
pub fn copy_from_utf8_stream(
    destination: &mut [u8],
    source: &[u8],
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf8StreamSource::new(source, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf8Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold a UTF-16 stream as a terminated UTF-8 string.
///
/// `byte_order` is used only when the stream has no byte order mark and its
/// first unit is ambiguous.
///
/// # Errors
///
/// A stream shorter than two bytes or of odd size, unpaired surrogates in
/// strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16_stream(
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf16StreamSource::new(source, byte_order, strictness).describe(SIZE_FAILED)?;
    protocol::size(&decoder, &Utf8Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Converts a UTF-16 stream into a terminated UTF-8 string.
///
/// # Errors
///
/// As [`size_from_utf16_stream`], or a destination smaller than it reports.
pub fn copy_from_utf16_stream(
    destination: &mut [u8],
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf16StreamSource::new(source, byte_order, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf8Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold a UTF-32 stream as a terminated UTF-8 string.
///
/// # Errors
///
/// A stream shorter than four bytes or not a multiple of four, invalid units
/// in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32_stream(
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf32StreamSource::new(source, byte_order, strictness).describe(SIZE_FAILED)?;
    protocol::size(&decoder, &Utf8Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Converts a UTF-32 stream into a terminated UTF-8 string.
///
/// # Errors
///
/// As [`size_from_utf32_stream`], or a destination smaller than it reports.
pub fn copy_from_utf32_stream(
    destination: &mut [u8],
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf32StreamSource::new(source, byte_order, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf8Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::error::ErrorKind;

    const STRICT: Strictness = Strictness::Strict;

    #[test]
    fn utf16_stream_without_mark_is_terminated() {
        let source = [0x41, 0x00, 0x42, 0x00];
        let size = size_from_utf16_stream(&source, None, STRICT).unwrap();
        assert_eq!(size, 3);
        let mut buffer = vec![0xFF; size];
        assert_eq!(copy_from_utf16_stream(&mut buffer, &source, None, STRICT), Ok(3));
        assert_eq!(buffer, b"AB\0");
    }

    #[test]
    fn byte_stream_is_mapped_through_codepage() {
        let source = [0x80, 0xE0];
        assert_eq!(size_from_byte_stream(&source, Codepage::Windows1255), Ok(6));
        let mut buffer = [0u8; 6];
        copy_from_byte_stream(&mut buffer, &source, Codepage::Windows1255).unwrap();
        assert_eq!(&buffer, "€א\0".as_bytes());
    }

    #[test]
    fn utf8_stream_mark_is_dropped() {
        let source = b"\xEF\xBB\xBFhi\0";
        assert_eq!(size_from_utf8_stream(source, STRICT), Ok(3));
        let mut buffer = [0u8; 3];
        copy_from_utf8_stream(&mut buffer, source, STRICT).unwrap();
        assert_eq!(&buffer, b"hi\0");
    }

    #[test]
    fn strings_are_not_terminated() {
        assert_eq!(size_from_utf16(&[0x41, 0x42], STRICT), Ok(2));
        assert_eq!(size_from_utf32(&[], STRICT), Ok(0));
        assert_eq!(size_from_utf8(b"abc", STRICT), Ok(3));
    }

    #[test]
    fn copy_checks_destination_size() {
        let mut buffer = [0u8; 3];
        let error = copy_from_utf32(&mut buffer, &[0x1_F600], STRICT).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(error.to_string(), COPY_FAILED);
    }

    #[test]
    fn lenient_copy_replaces_malformed_input() {
        let source = b"a\xC0\x80b";
        let size = size_from_utf8(source, Strictness::Lenient).unwrap();
        assert_eq!(size, 8);
        let mut buffer = vec![0; size];
        copy_from_utf8(&mut buffer, source, Strictness::Lenient).unwrap();
        assert_eq!(buffer, "a\u{FFFD}\u{FFFD}b".as_bytes());
        assert_eq!(
            size_from_utf8(source, STRICT).unwrap_err().kind(),
            ErrorKind::ConversionInvalidInput
        );
    }
}
