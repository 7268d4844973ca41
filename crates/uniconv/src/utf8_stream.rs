//! Conversions into UTF-8 byte streams.
//!
//! Every stream starts with the byte order mark `EF BB BF`; the sizes
//! reported include it.

use crate::{
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{self, Termination, Utf8StreamTarget, Utf8Source, Utf16Source, Utf32Source},
};

const SIZE_FAILED: &str = "unable to determine UTF-8 stream size";
const COPY_FAILED: &str = "unable to copy UTF-8 stream";

/// Bytes needed to hold UTF-8 `source` as a UTF-8 stream, byte order mark included.
///
/// # Errors
///
/// Malformed input in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf8(source: &[u8], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &Utf8StreamTarget::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-8 `source` into a UTF-8 stream and returns the bytes written.
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
        &Utf8StreamTarget::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-16 `source` as a UTF-8 stream, byte order mark included.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16(source: &[u16], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &Utf8StreamTarget::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-16 `source` into a UTF-8 stream and returns the bytes written.
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
        &Utf8StreamTarget::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-32 `source` as a UTF-8 stream, byte order mark included.
///
/// # Errors
///
/// Invalid units in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32(source: &[u32], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &Utf8StreamTarget::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into a UTF-8 stream and returns the bytes written.
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
        &Utf8StreamTarget::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn mark_precedes_content() {
        let source = "€".encode_utf16().collect::<alloc::vec::Vec<_>>();
        let needed = size_from_utf16(&source, Strictness::Strict).unwrap();
        assert_eq!(needed, 6);
        let mut buffer = vec![0u8; needed];
        assert_eq!(
            copy_from_utf16(&mut buffer, &source, Strictness::Strict),
            Ok(6)
        );
        assert_eq!(buffer, b"\xEF\xBB\xBF\xE2\x82\xAC");
    }

    #[test]
    fn empty_source_is_only_the_mark() {
        assert_eq!(size_from_utf32(&[], Strictness::Strict), Ok(3));
        let mut buffer = [0u8; 2];
        let error = copy_from_utf8(&mut buffer, b"", Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(error.last_message(), "unable to copy UTF-8 stream");
    }

    #[test]
    fn lenient_replaces_invalid_units() {
        let mut buffer = [0u8; 6];
        assert_eq!(
            copy_from_utf32(&mut buffer, &[0xD800], Strictness::Lenient),
            Ok(6)
        );
        assert_eq!(&buffer[3..], "\u{FFFD}".as_bytes());
        assert_eq!(
            size_from_utf32(&[0xD800], Strictness::Strict)
                .unwrap_err()
                .kind(),
            ErrorKind::ConversionInvalidInput
        );
    }
}
