//! Conversions into single-byte codepage streams.
//!
//! Every code point becomes exactly one byte; code points the codepage cannot
//! represent are written as `0x1A`. Only the Unicode source can fail.

use crate::{
    codepage::Codepage,
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{self, ByteStreamTarget, Termination, Utf8Source, Utf16Source, Utf32Source},
};

const SIZE_FAILED: &str = "unable to determine byte stream size";
const COPY_FAILED: &str = "unable to copy byte stream";

/// Bytes needed to hold UTF-8 `source` in `codepage`.
///
/// # Errors
///
/// Malformed input in strict mode.
pub fn size_from_utf8(source: &[u8], codepage: Codepage, strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-8 `source` into `codepage` bytes and returns the bytes
/// written.
///
/// # Errors
///
/// Malformed input in strict mode, or a destination smaller than
/// [`size_from_utf8`] reports.
pub fn copy_from_utf8(
    destination: &mut [u8],
    source: &[u8],
    codepage: Codepage,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf8Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-16 `source` in `codepage`.
///
/// # Errors
///
/// Unpaired surrogates in strict mode.
pub fn size_from_utf16(
    source: &[u16],
    codepage: Codepage,
    strictness: Strictness,
) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-16 `source` into `codepage` bytes and returns the bytes
/// written.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a destination smaller than
/// [`size_from_utf16`] reports.
pub fn copy_from_utf16(
    destination: &mut [u8],
    source: &[u16],
    codepage: Codepage,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf16Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-32 `source` in `codepage`.
///
/// # Errors
///
/// Invalid units in strict mode.
pub fn size_from_utf32(
    source: &[u32],
    codepage: Codepage,
    strictness: Strictness,
) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into `codepage` bytes and returns the bytes
/// written.
///
/// # Errors
///
/// Invalid units in strict mode, or a destination smaller than
/// [`size_from_utf32`] reports.
pub fn copy_from_utf32(
    destination: &mut [u8],
    source: &[u32],
    codepage: Codepage,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf32Source::new(source, strictness),
        &ByteStreamTarget::new(codepage),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{character::ASCII_REPLACEMENT_BYTE, error::ErrorKind};

    #[test]
    fn unmappable_characters_become_sub() {
        let source = "a€😀";
        assert_eq!(
            size_from_utf8(source.as_bytes(), Codepage::Windows1252, Strictness::Strict),
            Ok(3)
        );
        let mut buffer = [0u8; 3];
        copy_from_utf8(
            &mut buffer,
            source.as_bytes(),
            Codepage::Windows1252,
            Strictness::Strict,
        )
        .unwrap();
        assert_eq!(buffer, [0x61, 0x80, ASCII_REPLACEMENT_BYTE]);
    }

    #[test]
    fn surrogate_pairs_are_one_byte() {
        let mut buffer = [0u8; 2];
        let written = copy_from_utf16(
            &mut buffer,
            &[0xD83D, 0xDE00, 0x05D0],
            Codepage::Windows1255,
            Strictness::Strict,
        )
        .unwrap();
        assert_eq!(written, 2);
        assert_eq!(buffer, [ASCII_REPLACEMENT_BYTE, 0xE0]);
    }

    #[test]
    fn invalid_source_still_fails_strict() {
        let error =
            size_from_utf32(&[0xD800], Codepage::Iso8859_4, Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(
            size_from_utf32(&[0xD800], Codepage::Iso8859_4, Strictness::Lenient),
            Ok(1)
        );
    }
}
