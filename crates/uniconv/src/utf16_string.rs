//! Conversions into UTF-16 strings.
//!
//! Every source has a `size_from_*` function returning the number of 16-bit units
//! the matching `copy_from_*` writes. Sources read from streams (codepage,
//! UTF-8, UTF-16 or UTF-32 byte streams) are zero terminated: one zero unit is
//! appended unless the stream already ends in one.

use crate::{
    byte_order::ByteOrder,
    codepage::Codepage,
    error::{Result, ResultExt},
    options::Strictness,
    protocol::{
        self, ByteStreamSource, Termination, Utf8Source, Utf8StreamSource, Utf16Target, Utf16Source,
        Utf16StreamSource, Utf32Source, Utf32StreamSource,
    },
};

const SIZE_FAILED: &str = "unable to determine UTF-16 string size";
const COPY_FAILED: &str = "unable to copy UTF-16 string";

/// Units needed to hold UTF-8 `source` as UTF-16.
///
/// # Errors
///
/// Malformed input in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf8(source: &[u8], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf8Source::new(source, strictness),
        &Utf16Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-8 `source` into `destination` and returns the units written.
///
/// # Errors
///
/// Malformed input in strict mode, or a destination smaller than
/// [`size_from_utf8`] reports.
pub fn copy_from_utf8(
    destination: &mut [u16],
    source: &[u8],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf8Source::new(source, strictness),
        &Utf16Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold `source` after validation.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf16(source: &[u16], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf16Source::new(source, strictness),
        &Utf16Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Copies `source` into `destination`, validating it, and returns the units
/// written.
///
/// # Errors
///
/// Unpaired surrogates in strict mode, or a destination smaller than
/// [`size_from_utf16`] reports.
pub fn copy_from_utf16(
    destination: &mut [u16],
    source: &[u16],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf16Source::new(source, strictness),
        &Utf16Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold UTF-32 `source` as UTF-16.
///
/// # Errors
///
/// Invalid units in strict mode, or a size beyond `isize::MAX`.
pub fn size_from_utf32(source: &[u32], strictness: Strictness) -> Result<usize> {
    protocol::size(
        &Utf32Source::new(source, strictness),
        &Utf16Target::new(strictness),
        Termination::None,
    )
    .describe(SIZE_FAILED)
}

/// Converts UTF-32 `source` into `destination` and returns the units written.
///
/// # Errors
///
/// Invalid units in strict mode, or a destination smaller than
/// [`size_from_utf32`] reports.
pub fn copy_from_utf32(
    destination: &mut [u16],
    source: &[u32],
    strictness: Strictness,
) -> Result<usize> {
    protocol::copy(
        &Utf32Source::new(source, strictness),
        &Utf16Target::new(strictness),
        destination,
        Termination::None,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold a `codepage` byte stream as a terminated UTF-8
/// string.
///
/// # Errors
///
/// An empty stream.
pub fn size_from_byte_stream(source: &[u8], codepage: Codepage) -> Result<usize> {
    let decoder = ByteStreamSource::new(source, codepage).describe(SIZE_FAILED)?;
    protocol::size(
        &decoder,
        &Utf16Target::new(Strictness::Strict),
        Termination::ZeroUnit,
    )
    .describe(SIZE_FAILED)
}

/// Converts a `codepage` byte stream into a terminated UTF-16 string.
///
/// # Errors
///
/// An empty stream, or a destination smaller than [`size_from_byte_stream`]
/// reports.
pub fn copy_from_byte_stream(
    destination: &mut [u16],
    source: &[u8],
    codepage: Codepage,
) -> Result<usize> {
    let decoder = ByteStreamSource::new(source, codepage).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf16Target::new(Strictness::Strict),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold a UTF-8 stream, without its byte order mark, as a
/// terminated UTF-16 string.
///
/// # Errors
///
/// An empty stream, malformed input in strict mode, or a size beyond
/// `isize::MAX`.
pub fn size_from_utf8_stream(source: &[u8], strictness: Strictness) -> Result<usize> {
    let decoder = Utf8StreamSource::new(source, strictness).describe(SIZE_FAILED)?;
    protocol::size(&decoder, &Utf16Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Converts a UTF-8 stream, without its byte order mark, into a terminated
/// UTF-16 string.
///
/// # Errors
///
/// An empty stream, malformed input in strict mode, or a destination smaller
/// than [`size_from_utf8_stream`] reports.
pub fn copy_from_utf8_stream(
    destination: &mut [u16],
    source: &[u8],
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf8StreamSource::new(source, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf16Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold a UTF-16 stream as a terminated UTF-16 string.
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
    protocol::size(&decoder, &Utf16Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Converts a UTF-16 stream into a terminated UTF-16 string.
///
/// # Errors
///
/// As [`size_from_utf16_stream`], or a destination smaller than it reports.
pub fn copy_from_utf16_stream(
    destination: &mut [u16],
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf16StreamSource::new(source, byte_order, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf16Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}

/// Units needed to hold a UTF-32 stream as a terminated UTF-16 string.
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
    protocol::size(&decoder, &Utf16Target::new(strictness), Termination::ZeroUnit)
        .describe(SIZE_FAILED)
}

/// Converts a UTF-32 stream into a terminated UTF-16 string.
///
/// # Errors
///
/// As [`size_from_utf32_stream`], or a destination smaller than it reports.
pub fn copy_from_utf32_stream(
    destination: &mut [u16],
    source: &[u8],
    byte_order: Option<ByteOrder>,
    strictness: Strictness,
) -> Result<usize> {
    let decoder = Utf32StreamSource::new(source, byte_order, strictness).describe(COPY_FAILED)?;
    protocol::copy(
        &decoder,
        &Utf16Target::new(strictness),
        destination,
        Termination::ZeroUnit,
    )
    .describe(COPY_FAILED)
}
