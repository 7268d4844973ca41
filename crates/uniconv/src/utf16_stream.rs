//! Conversions into UTF-16 byte streams.
//!
//! Every stream starts with the byte order mark in the requested byte order;
//! the sizes reported include it and count bytes.

use crate::{
    byte_order::ByteOrder,
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{self, Termination, Utf16StreamTarget, Utf8Source, Utf16Source, Utf32Source},
};

const SIZE_FAILED: &str = "unable to determine UTF-16 stream size";
const COPY_FAILED: &str = "unable to copy UTF-16 stream";

/// Bytes needed to hold UTF-8 `source` as a UTF-16 stream, byte order mark included.
///
/// # Errors
///
/// Malformed input in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf8(source: &[u8], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &Utf16StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-8 `source` into a UTF-16 stream in `byte_order` and returns the
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
        &Utf16StreamTarget::new(byte_order, strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-16 `source` as a UTF-16 stream, byte order mark included.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16(source: &[u16], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &Utf16StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-16 `source` into a UTF-16 stream in `byte_order` and returns the
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
        &Utf16StreamTarget::new(byte_order, strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Bytes needed to hold UTF-32 `source` as a UTF-16 stream, byte order mark included.
///
/// # Errors
///
/// Invalid units in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32(source: &[u32], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &Utf16StreamTarget::new(ByteOrder::BigEndian, strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into a UTF-16 stream in `byte_order` and returns the
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
        &Utf16StreamTarget::new(byte_order, strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}
