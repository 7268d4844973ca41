//! Conversions into UTF-32 byte streams.
//!
//! Every stream starts with the byte order mark in the requested byte order;
//! the sizes reported include it and count bytes.

use crate::{
    byte_order::ByteOrder,
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{self, Termination, Utf32StreamTarget, Utf8Source, Utf16Source, Utf32Source},
};

const SIZE_FAILED: &str = "unable to determine UTF-32 stream size";
const COPY_FAILED: &str = "unable to copy UTF-32 stream";

/// Bytes needed to hold UTF-8 `source` as a UTF-32 stream, byte order mark included.
///
/// # Errors
///
/// Malformed input in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf8(source: &[u8], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &Utf32StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-8 `source` into a UTF-32 stream in `byte_order` and returns the
/// bytes written.
///
/// # Errors
///
/// Malformed input in strict mode, or a destination smaller than
/// [`size_from_utf8`] reports.
pub fn copy_from_utf8(
    destination: &mut [u8],
    source: &[u8],
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf8Source::new(source, strictness),
        &Utf32StreamTarget::new(byte_order, strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-16 `source` as a UTF-32 stream, byte order mark included.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16(source: &[u16], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &Utf32StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-16 `source` into a UTF-32 stream in `byte_order` and returns the
/// bytes written.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a destination smaller than
/// [`size_from_utf16`] reports.
pub fn copy_from_utf16(
    destination: &mut [u8],
    source: &[u16],
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf16Source::new(source, strictness),
        &Utf32StreamTarget::new(byte_order, strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-32 `source` as a UTF-32 stream, byte order mark included.
///
/// # Errors
///
/// Invalid units in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32(source: &[u32], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &Utf32StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into a UTF-32 stream in `byte_order` and returns the
/// bytes written.
///
/// # Errors
///
/// Invalid units in strict mode, or a destination smaller than
/// [`size_from_utf32`] reports.
pub fn copy_from_utf32(
    destination: &mut [u8],
    source: &[u32],
    byte_order: ByteOrder,
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf32Source::new(source, strictness),
        &Utf32StreamTarget::new(byte_order, strictness),
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
    fn little_endian_stream() {
        let source = "A😀".as_bytes();
        let needed = size_from_utf8(source, Strictness::Strict).unwrap();
        assert_eq!(needed, 12);
        let mut buffer = vec![0u8; needed];
        copy_from_utf8(
            &mut buffer,
            source,
            ByteOrder::LittleEndian,
            Strictness::Strict,
        )
        .unwrap();
        assert_eq!(
            buffer,
            [0xFF, 0xFE, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00, 0x00, 0xF6, 0x01, 0x00]
        );
    }

    #[test]
    fn unpaired_surrogate_from_utf16() {
        let error = size_from_utf16(&[0xDE00], Strictness::Strict).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(
            error.last_message(),
            "unable to determine UTF-32 stream size"
        );

        let mut buffer = [0u8; 8];
        assert_eq!(
            copy_from_utf16(
                &mut buffer,
                &[0xDE00],
                ByteOrder::BigEndian,
                Strictness::Lenient
            ),
            Ok(8)
        );
        assert_eq!(buffer[4..], [0x00, 0x00, 0xFF, 0xFD]);
    }
}
