//! A configured entry point over every conversion pair.
//!
//! The free functions in the destination modules fix one source and one
//! destination format each. [`Converter`] selects both at run time, applies a
//! single [`ConversionOptions`], owns output buffers on request, and reports
//! failures to a [`DiagnosticSink`].

use alloc::{boxed::Box, format, string::String, vec, vec::Vec};
use core::fmt;

use crate::{
    byte_order::ByteOrder,
    codepage::Codepage,
    diagnostic::{DiagnosticSink, NoopSink},
    error::{Error, ErrorKind, Result, ResultExt},
    options::ConversionOptions,
    protocol::{
        self, ByteStreamSource, ByteStreamTarget, Decoder, Termination, Utf8Source,
        Utf8StreamSource, Utf8StreamTarget, Utf8Target, Utf16Source, Utf16StreamSource,
        Utf16StreamTarget, Utf16Target, Utf32Source, Utf32StreamSource, Utf32StreamTarget,
        Utf32Target,
    },
};

/// Input to a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// UTF-8 code units.
    Utf8(&'a [u8]),
    /// UTF-16 code units in native order.
    Utf16(&'a [u16]),
    /// UTF-32 code units in native order.
    Utf32(&'a [u32]),
    /// Bytes of a single-byte codepage.
    ByteStream(&'a [u8], Codepage),
    /// UTF-8 bytes with an optional byte order mark.
    Utf8Stream(&'a [u8]),
    /// UTF-16 bytes; the byte order comes from the stream or the options.
    Utf16Stream(&'a [u8]),
    /// UTF-32 bytes; the byte order comes from the stream or the options.
    Utf32Stream(&'a [u8]),
}

impl<'a> Source<'a> {
    /// Human readable name of the source format.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Source::Utf8(_) => "UTF-8 string",
            Source::Utf16(_) => "UTF-16 string",
            Source::Utf32(_) => "UTF-32 string",
            Source::ByteStream(_, codepage) => codepage.name(),
            Source::Utf8Stream(_) => "UTF-8 stream",
            Source::Utf16Stream(_) => "UTF-16 stream",
            Source::Utf32Stream(_) => "UTF-32 stream",
        }
    }

    fn decoder(self, options: &ConversionOptions) -> Result<Box<dyn Decoder + 'a>> {
        let strictness = options.strictness;
        let decoder: Box<dyn Decoder + 'a> = match self {
            Source::Utf8(source) => Box::new(Utf8Source::new(source, strictness)),
            Source::Utf16(source) => Box::new(Utf16Source::new(source, strictness)),
            Source::Utf32(source) => Box::new(Utf32Source::new(source, strictness)),
            Source::ByteStream(source, codepage) => {
                Box::new(ByteStreamSource::new(source, codepage)?)
            }
            Source::Utf8Stream(source) => Box::new(Utf8StreamSource::new(source, strictness)?),
            Source::Utf16Stream(source) => Box::new(Utf16StreamSource::new(
                source,
                options.byte_order,
                strictness,
            )?),
            Source::Utf32Stream(source) => Box::new(Utf32StreamSource::new(
                source,
                options.byte_order,
                strictness,
            )?),
        };
        Ok(decoder)
    }
}

/// Output format of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Format {
    /// UTF-8 code units.
    Utf8,
    /// UTF-16 code units in native order.
    Utf16,
    /// UTF-32 code units in native order.
    Utf32,
    /// Bytes of a single-byte codepage.
    ByteStream(Codepage),
    /// UTF-8 bytes behind a byte order mark.
    Utf8Stream,
    /// UTF-16 bytes behind a byte order mark.
    Utf16Stream,
    /// UTF-32 bytes behind a byte order mark.
    Utf32Stream,
}

impl Format {
    /// Human readable name of the format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Utf8 => "UTF-8 string",
            Format::Utf16 => "UTF-16 string",
            Format::Utf32 => "UTF-32 string",
            Format::ByteStream(codepage) => codepage.name(),
            Format::Utf8Stream => "UTF-8 stream",
            Format::Utf16Stream => "UTF-16 stream",
            Format::Utf32Stream => "UTF-32 stream",
        }
    }

    /// Whether the format is a string, the only kind that takes a
    /// terminator.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Format::Utf8 | Format::Utf16 | Format::Utf32)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A caller-provided buffer tagged with the format to write into it.
#[derive(Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// UTF-8 code units.
    Utf8(&'a mut [u8]),
    /// UTF-16 code units in native order.
    Utf16(&'a mut [u16]),
    /// UTF-32 code units in native order.
    Utf32(&'a mut [u32]),
    /// Bytes of a single-byte codepage.
    ByteStream(&'a mut [u8], Codepage),
    /// UTF-8 bytes behind a byte order mark.
    Utf8Stream(&'a mut [u8]),
    /// UTF-16 bytes behind a byte order mark.
    Utf16Stream(&'a mut [u8]),
    /// UTF-32 bytes behind a byte order mark.
    Utf32Stream(&'a mut [u8]),
}

impl Destination<'_> {
    /// The format written into this buffer.
    #[must_use]
    pub fn format(&self) -> Format {
        match self {
            Destination::Utf8(_) => Format::Utf8,
            Destination::Utf16(_) => Format::Utf16,
            Destination::Utf32(_) => Format::Utf32,
            Destination::ByteStream(_, codepage) => Format::ByteStream(*codepage),
            Destination::Utf8Stream(_) => Format::Utf8Stream,
            Destination::Utf16Stream(_) => Format::Utf16Stream,
            Destination::Utf32Stream(_) => Format::Utf32Stream,
        }
    }
}

/// An owned conversion result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoded {
    /// UTF-8, codepage and stream output.
    Bytes(Vec<u8>),
    /// UTF-16 string output.
    Utf16(Vec<u16>),
    /// UTF-32 string output.
    Utf32(Vec<u32>),
}

impl Encoded {
    /// Number of units held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Encoded::Bytes(units) => units.len(),
            Encoded::Utf16(units) => units.len(),
            Encoded::Utf32(units) => units.len(),
        }
    }

    /// Whether no units are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes, if this holds byte output.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Encoded::Bytes(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

/// Runs conversions between any source and destination format.
///
/// ```
/// use uniconv::{ConversionOptions, Converter, Encoded, Format, Source};
///
/// let mut converter = Converter::new(ConversionOptions::default());
/// let encoded = converter.convert(Source::Utf8(b"AB"), Format::Utf16Stream)?;
/// assert_eq!(encoded, Encoded::Bytes(vec![0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42]));
///
/// let text = converter.decode_to_string(Source::Utf16Stream(&[0xFF, 0xFE, 0x41, 0x00]))?;
/// assert_eq!(text, "A");
/// # Ok::<(), uniconv::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter<S: DiagnosticSink = NoopSink> {
    options: ConversionOptions,
    sink: S,
}

impl Converter<NoopSink> {
    /// Creates a converter that discards warnings.
    #[must_use]
    pub fn new(options: ConversionOptions) -> Self {
        Converter {
            options,
            sink: NoopSink,
        }
    }
}

impl<S: DiagnosticSink> Converter<S> {
    /// Creates a converter that reports every failed conversion to `sink`.
    #[must_use]
    pub fn with_sink(options: ConversionOptions, sink: S) -> Self {
        Converter { options, sink }
    }

    /// The options every conversion uses.
    #[must_use]
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// The diagnostic sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the converter and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Units needed to convert `source` into `format`, including any byte
    /// order mark and terminator.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::ArgumentTooSmall`] for an empty codepage or UTF-8
    ///   stream, or a UTF-16/UTF-32 stream of the wrong length.
    /// - [`ErrorKind::ConversionInvalidInput`] for malformed input in strict
    ///   mode.
    /// - [`ErrorKind::ArgumentExceedsMaximum`] if the size overflows.
    pub fn size(&mut self, source: Source<'_>, format: Format) -> Result<usize> {
        let result = self.size_of(source, format).describe_with(|| {
            format!("unable to determine {format} size of {}", source.name())
        });
        self.report(result)
    }

    /// Converts `source` into `destination` and returns the units written.
    ///
    /// # Errors
    ///
    /// As [`Converter::size`]; a destination smaller than the size reported
    /// fails with [`ErrorKind::ArgumentTooSmall`].
    pub fn copy(&mut self, source: Source<'_>, destination: Destination<'_>) -> Result<usize> {
        let format = destination.format();
        let result = self
            .copy_into(source, destination)
            .describe_with(|| format!("unable to convert {} to {format}", source.name()));
        self.report(result)
    }

    /// Converts `source` into a newly allocated buffer of `format`.
    ///
    /// # Errors
    ///
    /// As [`Converter::size`].
    pub fn convert(&mut self, source: Source<'_>, format: Format) -> Result<Encoded> {
        let result = self
            .convert_to(source, format)
            .describe_with(|| format!("unable to convert {} to {format}", source.name()));
        self.report(result)
    }

    /// Decodes `source` into a Rust string. No terminator is appended.
    ///
    /// # Errors
    ///
    /// As [`Converter::size`].
    pub fn decode_to_string(&mut self, source: Source<'_>) -> Result<String> {
        let result = self
            .unterminated_utf8(source)
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|_| {
                    Error::set(
                        ErrorKind::ConversionInvalidOutput,
                        "decoded bytes are not valid UTF-8",
                    )
                })
            })
            .describe_with(|| format!("unable to decode {}", source.name()));
        self.report(result)
    }

    /// Encodes `text` into `format`.
    ///
    /// # Errors
    ///
    /// As [`Converter::size`].
    pub fn encode_str(&mut self, text: &str, format: Format) -> Result<Encoded> {
        self.convert(Source::Utf8(text.as_bytes()), format)
    }

    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(error) = &result {
            self.sink.warning(format_args!("{error:#}"));
        }
        result
    }

    fn termination(&self, format: Format) -> Termination {
        if format.is_string() {
            Termination::from_flag(self.options.zero_terminate)
        } else {
            Termination::None
        }
    }

    fn byte_order(&self) -> ByteOrder {
        self.options.byte_order.unwrap_or(ByteOrder::BigEndian)
    }

    fn size_of(&self, source: Source<'_>, format: Format) -> Result<usize> {
        let decoder = source.decoder(&self.options)?;
        let decoder = &*decoder;
        let strictness = self.options.strictness;
        let termination = self.termination(format);
        match format {
            Format::Utf8 => protocol::size(decoder, &Utf8Target::new(strictness), termination),
            Format::Utf16 => protocol::size(decoder, &Utf16Target::new(strictness), termination),
            Format::Utf32 => protocol::size(decoder, &Utf32Target::new(strictness), termination),
            Format::ByteStream(codepage) => {
                protocol::size(decoder, &ByteStreamTarget::new(codepage), termination)
            }
            Format::Utf8Stream => {
                protocol::size(decoder, &Utf8StreamTarget::new(strictness), termination)
            }
            Format::Utf16Stream => protocol::size(
                decoder,
                &Utf16StreamTarget::new(self.byte_order(), strictness),
                termination,
            ),
            Format::Utf32Stream => protocol::size(
                decoder,
                &Utf32StreamTarget::new(self.byte_order(), strictness),
                termination,
            ),
        }
    }

    fn copy_into(&self, source: Source<'_>, destination: Destination<'_>) -> Result<usize> {
        let decoder = source.decoder(&self.options)?;
        let decoder = &*decoder;
        let strictness = self.options.strictness;
        let termination = self.termination(destination.format());
        match destination {
            Destination::Utf8(buffer) => {
                protocol::copy(decoder, &Utf8Target::new(strictness), buffer, termination)
            }
            Destination::Utf16(buffer) => {
                protocol::copy(decoder, &Utf16Target::new(strictness), buffer, termination)
            }
            Destination::Utf32(buffer) => {
                protocol::copy(decoder, &Utf32Target::new(strictness), buffer, termination)
            }
            Destination::ByteStream(buffer, codepage) => protocol::copy(
                decoder,
                &ByteStreamTarget::new(codepage),
                buffer,
                termination,
            ),
            Destination::Utf8Stream(buffer) => protocol::copy(
                decoder,
                &Utf8StreamTarget::new(strictness),
                buffer,
                termination,
            ),
            Destination::Utf16Stream(buffer) => protocol::copy(
                decoder,
                &Utf16StreamTarget::new(self.byte_order(), strictness),
                buffer,
                termination,
            ),
            Destination::Utf32Stream(buffer) => protocol::copy(
                decoder,
                &Utf32StreamTarget::new(self.byte_order(), strictness),
                buffer,
                termination,
            ),
        }
    }

    fn convert_to(&self, source: Source<'_>, format: Format) -> Result<Encoded> {
        let needed = self.size_of(source, format)?;
        match format {
            Format::Utf16 => {
                let mut units = vec![0u16; needed];
                let written = self.copy_into(source, Destination::Utf16(&mut units))?;
                units.truncate(written);
                Ok(Encoded::Utf16(units))
            }
            Format::Utf32 => {
                let mut units = vec![0u32; needed];
                let written = self.copy_into(source, Destination::Utf32(&mut units))?;
                units.truncate(written);
                Ok(Encoded::Utf32(units))
            }
            Format::Utf8 => self.convert_bytes(source, needed, |bytes| Destination::Utf8(bytes)),
            Format::ByteStream(codepage) => self.convert_bytes(source, needed, |bytes| {
                Destination::ByteStream(bytes, codepage)
            }),
            Format::Utf8Stream => self.convert_bytes(source, needed, |bytes| Destination::Utf8Stream(bytes)),
            Format::Utf16Stream => self.convert_bytes(source, needed, |bytes| Destination::Utf16Stream(bytes)),
            Format::Utf32Stream => self.convert_bytes(source, needed, |bytes| Destination::Utf32Stream(bytes)),
        }
    }

    fn convert_bytes<F>(&self, source: Source<'_>, needed: usize, destination: F) -> Result<Encoded>
    where
        F: for<'b> FnOnce(&'b mut [u8]) -> Destination<'b>,
    {
        let mut bytes = vec![0u8; needed];
        let written = self.copy_into(source, destination(&mut bytes))?;
        bytes.truncate(written);
        Ok(Encoded::Bytes(bytes))
    }

    fn unterminated_utf8(&self, source: Source<'_>) -> Result<Vec<u8>> {
        let decoder = source.decoder(&self.options)?;
        let decoder = &*decoder;
        let target = Utf8Target::new(self.options.strictness);
        let mut bytes = vec![0u8; protocol::size(decoder, &target, Termination::None)?];
        let written = protocol::copy(decoder, &target, &mut bytes, Termination::None)?;
        bytes.truncate(written);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::{
        diagnostic::CollectingSink,
        options::{ConversionOptions, Strictness},
    };

    #[test]
    fn converts_between_streams() {
        let mut converter = Converter::new(ConversionOptions::default());
        let utf16 = [0xFF, 0xFE, 0x41, 0x00, 0x3D, 0xD8, 0x00, 0xDE];
        assert_eq!(
            converter.convert(Source::Utf16Stream(&utf16), Format::Utf32Stream),
            Ok(Encoded::Bytes(vec![
                0x00, 0x00, 0xFE, 0xFF, 0x00, 0x00, 0x00, 0x41, 0x00, 0x01, 0xF6, 0x00
            ]))
        );
        assert_eq!(
            converter.convert(Source::Utf16Stream(&utf16), Format::Utf16),
            Ok(Encoded::Utf16(vec![0x41, 0xD83D, 0xDE00]))
        );
    }

    #[test]
    fn allocates_every_byte_format() {
        let mut converter = Converter::new(ConversionOptions::default());
        let source = Source::Utf16(&[0x41, 0xE9]);
        assert_eq!(
            converter.convert(source, Format::Utf8),
            Ok(Encoded::Bytes(vec![0x41, 0xC3, 0xA9]))
        );
        assert_eq!(
            converter.convert(source, Format::Utf8Stream),
            Ok(Encoded::Bytes(vec![0xEF, 0xBB, 0xBF, 0x41, 0xC3, 0xA9]))
        );
        assert_eq!(
            converter.convert(source, Format::Utf16Stream),
            Ok(Encoded::Bytes(vec![0xFE, 0xFF, 0x00, 0x41, 0x00, 0xE9]))
        );
        assert_eq!(
            converter.encode_str("A", Format::Utf32Stream),
            Ok(Encoded::Bytes(vec![0x00, 0x00, 0xFE, 0xFF, 0x00, 0x00, 0x00, 0x41]))
        );
        assert_eq!(
            converter.encode_str("\u{e9}", Format::ByteStream(Codepage::Iso8859_1)),
            Ok(Encoded::Bytes(vec![0xE9]))
        );
    }

    #[test]
    fn zero_terminate_applies_to_strings_only() {
        let mut converter = Converter::new(ConversionOptions {
            zero_terminate: true,
            ..Default::default()
        });
        let source = Source::ByteStream(b"ab", Codepage::Ascii);
        assert_eq!(converter.size(source, Format::Utf32), Ok(3));
        assert_eq!(
            converter.convert(source, Format::Utf8),
            Ok(Encoded::Bytes(b"ab\0".to_vec()))
        );
        assert_eq!(converter.size(source, Format::Utf8Stream), Ok(5));
        assert_eq!(
            converter.decode_to_string(source),
            Ok("ab".to_string())
        );
        assert_eq!(converter.size(Source::Utf8(b"ab\0"), Format::Utf16), Ok(3));
    }

    #[test]
    fn byte_order_option_drives_streams() {
        let mut converter = Converter::new(ConversionOptions {
            byte_order: Some(ByteOrder::LittleEndian),
            ..Default::default()
        });
        assert_eq!(
            converter.encode_str("A", Format::Utf16Stream),
            Ok(Encoded::Bytes(vec![0xFF, 0xFE, 0x41, 0x00]))
        );
        assert_eq!(
            converter.decode_to_string(Source::Utf16Stream(&[0x30, 0x42])),
            Ok("\u{4230}".to_string())
        );
    }

    #[test]
    fn copy_into_caller_buffer() {
        let mut converter = Converter::new(ConversionOptions::default());
        let mut buffer = [0u8; 4];
        assert_eq!(
            converter.copy(
                Source::Utf8("€".as_bytes()),
                Destination::ByteStream(&mut buffer, Codepage::Windows1252)
            ),
            Ok(1)
        );
        assert_eq!(buffer[0], 0x80);

        let mut short = [0u16; 1];
        let error = converter
            .copy(Source::Utf8("😀".as_bytes()), Destination::Utf16(&mut short))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(
            error.to_string(),
            "unable to convert UTF-8 string to UTF-16 string"
        );
    }

    #[test]
    fn failures_reach_the_sink() {
        let mut converter =
            Converter::with_sink(ConversionOptions::default(), CollectingSink::new());
        assert!(converter.convert(Source::Utf16(&[0xD83D]), Format::Utf8).is_err());
        assert!(converter.convert(Source::Utf16(&[0x41]), Format::Utf8).is_ok());

        let warnings = converter.into_sink().take();
        assert_eq!(warnings.len(), 1);
        insta::assert_snapshot!(warnings[0], @r"
        unpaired surrogate 0xd83d in UTF-16 at offset 0
        unable to copy Unicode character from UTF-16 string at offset 0
        unable to convert UTF-16 string to UTF-8 string
        ");
    }

    #[test]
    fn lenient_decoding_to_string() {
        let mut converter = Converter::new(ConversionOptions::lenient());
        assert_eq!(
            converter.decode_to_string(Source::Utf8(b"a\xC0\x80b")),
            Ok("a\u{FFFD}\u{FFFD}b".to_string())
        );
        assert_eq!(converter.options().strictness, Strictness::Lenient);
    }

    #[test]
    fn empty_byte_stream_is_rejected() {
        let mut converter = Converter::new(ConversionOptions::default());
        assert_eq!(
            converter
                .size(Source::ByteStream(b"", Codepage::Iso8859_1), Format::Utf8)
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentTooSmall
        );
    }
}
