//! The size and copy passes shared by every conversion.
//!
//! A conversion pairs a [`Decoder`] over the source with a [`Target`]
//! describing the destination format. [`size`] and [`copy`] walk the source
//! with the same decoder, so the units the size pass counts are exactly the
//! units the copy pass writes.

use alloc::format;

use crate::{
    character::CodePoint,
    error::{Error, ErrorKind, Result, ResultExt},
};

mod source;
mod target;

pub(crate) use source::{
    ByteStreamSource, Utf8Source, Utf8StreamSource, Utf16Source, Utf16StreamSource, Utf32Source,
    Utf32StreamSource,
};
pub(crate) use target::{
    ByteStreamTarget, Utf8StreamTarget, Utf8Target, Utf16StreamTarget, Utf16Target,
    Utf32StreamTarget, Utf32Target,
};

/// Largest size, in units, either pass reports.
const MAXIMUM_SIZE: usize = isize::MAX.unsigned_abs();

/// Reads code points one at a time from a source.
pub(crate) trait Decoder {
    /// Format name used in error messages.
    fn name(&self) -> &'static str;

    /// Position of the first character, past any byte order mark.
    fn start(&self) -> usize;

    /// Position one past the last unit.
    fn end(&self) -> usize;

    /// Decodes the code point at `cursor` and advances past it.
    fn decode(&self, cursor: &mut usize) -> Result<CodePoint>;

    /// Whether the source already ends in a zero unit.
    fn is_terminated(&self) -> bool;
}

/// Describes how code points are written to a destination.
pub(crate) trait Target {
    /// The destination's unit type.
    type Unit: Copy + Default;

    /// Format name used in error messages.
    fn name(&self) -> &'static str;

    /// Units written before the first character, e.g. a byte order mark.
    fn prologue_len(&self) -> usize {
        0
    }

    /// Writes the prologue at `cursor`.
    fn write_prologue(&self, _destination: &mut [Self::Unit], _cursor: &mut usize) -> Result<()> {
        Ok(())
    }

    /// Units [`Target::encode`] writes for `code_point`.
    fn size_of(&self, code_point: CodePoint) -> Result<usize>;

    /// Writes `code_point` at `cursor`, or nothing if it does not fit.
    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [Self::Unit],
        cursor: &mut usize,
    ) -> Result<()>;
}

/// Whether a zero unit is appended to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Termination {
    /// Write exactly what the source holds.
    None,
    /// Append a zero unit unless the source already ends in one.
    ZeroUnit,
}

impl Termination {
    pub(crate) fn from_flag(zero_terminate: bool) -> Self {
        if zero_terminate {
            Termination::ZeroUnit
        } else {
            Termination::None
        }
    }

    fn appends<D: Decoder + ?Sized>(self, decoder: &D) -> bool {
        self == Termination::ZeroUnit && !decoder.is_terminated()
    }
}

fn add_units(total: usize, units: usize) -> Result<usize> {
    total
        .checked_add(units)
        .filter(|&total| total <= MAXIMUM_SIZE)
        .ok_or_else(|| {
            Error::set(
                ErrorKind::ArgumentExceedsMaximum,
                "destination size exceeds maximum",
            )
        })
}

fn decode_next<D: Decoder + ?Sized>(decoder: &D, cursor: &mut usize) -> Result<CodePoint> {
    let start = *cursor;
    decoder
        .decode(cursor)
        .with_context(ErrorKind::ConversionInvalidInput, || {
            format!(
                "unable to copy Unicode character from {} at offset {start}",
                decoder.name()
            )
        })
}

/// Computes the number of destination units needed to convert the whole
/// source, including any prologue and terminator.
pub(crate) fn size<D, T>(decoder: &D, target: &T, termination: Termination) -> Result<usize>
where
    D: Decoder + ?Sized,
    T: Target + ?Sized,
{
    let mut total = target.prologue_len();
    let mut cursor = decoder.start();
    while cursor < decoder.end() {
        let code_point = decode_next(decoder, &mut cursor)?;
        let units = target
            .size_of(code_point)
            .with_context(ErrorKind::ConversionInvalidOutput, || {
                format!("unable to determine size of {} character", target.name())
            })?;
        total = add_units(total, units)?;
    }
    if termination.appends(decoder) {
        total = add_units(total, target.size_of(0)?)?;
    }
    Ok(total)
}

/// Converts the whole source into `destination` and returns the number of
/// units written.
///
/// Every write is bounds checked; a destination smaller than [`size`]
/// reports fails with [`ErrorKind::ArgumentTooSmall`] as its kind.
pub(crate) fn copy<D, T>(
    decoder: &D,
    target: &T,
    destination: &mut [T::Unit],
    termination: Termination,
) -> Result<usize>
where
    D: Decoder + ?Sized,
    T: Target + ?Sized,
{
    let mut written = 0;
    target
        .write_prologue(destination, &mut written)
        .with_context(ErrorKind::ConversionInvalidOutput, || {
            format!("unable to copy {} byte order mark", target.name())
        })?;

    let mut cursor = decoder.start();
    while cursor < decoder.end() {
        let code_point = decode_next(decoder, &mut cursor)?;
        target
            .encode(code_point, destination, &mut written)
            .with_context(ErrorKind::ConversionInvalidOutput, || {
                format!(
                    "unable to copy Unicode character to {} at offset {written}",
                    target.name()
                )
            })?;
    }
    if termination.appends(decoder) {
        target
            .encode(0, destination, &mut written)
            .with_context(ErrorKind::ConversionInvalidOutput, || {
                format!("unable to copy {} terminator", target.name())
            })?;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{byte_order::ByteOrder, codepage::Codepage, options::Strictness};

    const STRICT: Strictness = Strictness::Strict;

    #[test]
    fn size_matches_copy() {
        let source = "aé€😀".as_bytes();
        let decoder = Utf8Source::new(source, STRICT);
        let target = Utf16Target::new(STRICT);
        let needed = size(&decoder, &target, Termination::None).unwrap();
        assert_eq!(needed, 5);

        let mut buffer = vec![0u16; needed];
        assert_eq!(
            copy(&decoder, &target, &mut buffer, Termination::None),
            Ok(needed)
        );
        assert_eq!(buffer, "aé€😀".encode_utf16().collect::<alloc::vec::Vec<_>>());
    }

    #[test]
    fn short_destination_reports_too_small() {
        let decoder = Utf8Source::new(b"abc", STRICT);
        let target = Utf32Target::new(STRICT);
        let mut buffer = [0u32; 2];
        let error = copy(&decoder, &target, &mut buffer, Termination::None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(
            error.last_message(),
            "unable to copy Unicode character to UTF-32 string at offset 2"
        );
    }

    #[test]
    fn terminator_is_added_once() {
        let target = Utf8Target::new(STRICT);
        let unterminated = ByteStreamSource::new(b"ab", Codepage::Ascii).unwrap();
        let terminated = ByteStreamSource::new(b"ab\0", Codepage::Ascii).unwrap();
        assert_eq!(size(&unterminated, &target, Termination::ZeroUnit), Ok(3));
        assert_eq!(size(&terminated, &target, Termination::ZeroUnit), Ok(3));
        assert_eq!(size(&unterminated, &target, Termination::None), Ok(2));

        let mut buffer = [0xFFu8; 3];
        assert_eq!(
            copy(&unterminated, &target, &mut buffer, Termination::ZeroUnit),
            Ok(3)
        );
        assert_eq!(&buffer, b"ab\0");
    }

    #[test]
    fn prologue_counts_toward_size() {
        let decoder = Utf32Source::new(&[0x41], STRICT);
        let target = Utf16StreamTarget::new(ByteOrder::LittleEndian, STRICT);
        assert_eq!(size(&decoder, &target, Termination::None), Ok(4));
        let mut buffer = [0u8; 4];
        copy(&decoder, &target, &mut buffer, Termination::None).unwrap();
        assert_eq!(buffer, [0xFF, 0xFE, 0x41, 0x00]);
    }

    #[test]
    fn decode_failures_keep_their_kind() {
        let decoder = Utf16Source::new(&[0x41, 0xD83D], STRICT);
        let target = Utf8Target::new(STRICT);
        let error = size(&decoder, &target, Termination::None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConversionInvalidInput);
        assert_eq!(error.entries()[1].kind, ErrorKind::ConversionInvalidInput);
    }

    #[test]
    fn size_overflow_is_reported() {
        assert_eq!(
            add_units(MAXIMUM_SIZE, 1).unwrap_err().kind(),
            ErrorKind::ArgumentExceedsMaximum
        );
        assert_eq!(add_units(MAXIMUM_SIZE - 1, 1), Ok(MAXIMUM_SIZE));
    }
}
