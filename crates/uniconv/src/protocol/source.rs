use super::Decoder;
use crate::{
    byte_order::ByteOrder,
    character::{self, CodePoint},
    codepage::Codepage,
    error::{Error, ErrorKind, Result},
    framing::{self, Framing},
    options::Strictness,
};

pub(crate) struct Utf8Source<'a> {
    source: &'a [u8],
    strictness: Strictness,
}

impl<'a> Utf8Source<'a> {
    pub(crate) fn new(source: &'a [u8], strictness: Strictness) -> Self {
        Utf8Source { source, strictness }
    }
}

impl Decoder for Utf8Source<'_> {
    fn name(&self) -> &'static str {
        "UTF-8 string"
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf8(self.source, cursor, self.strictness)
    }

    fn is_terminated(&self) -> bool {
        self.source.last() == Some(&0)
    }
}

pub(crate) struct Utf16Source<'a> {
    source: &'a [u16],
    strictness: Strictness,
}

impl<'a> Utf16Source<'a> {
    pub(crate) fn new(source: &'a [u16], strictness: Strictness) -> Self {
        Utf16Source { source, strictness }
    }
}

impl Decoder for Utf16Source<'_> {
    fn name(&self) -> &'static str {
        "UTF-16 string"
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf16(self.source, cursor, self.strictness)
    }

    fn is_terminated(&self) -> bool {
        self.source.last() == Some(&0)
    }
}

pub(crate) struct Utf32Source<'a> {
    source: &'a [u32],
    strictness: Strictness,
}

impl<'a> Utf32Source<'a> {
    pub(crate) fn new(source: &'a [u32], strictness: Strictness) -> Self {
        Utf32Source { source, strictness }
    }
}

impl Decoder for Utf32Source<'_> {
    fn name(&self) -> &'static str {
        "UTF-32 string"
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf32(self.source, cursor, self.strictness)
    }

    fn is_terminated(&self) -> bool {
        self.source.last() == Some(&0)
    }
}

/// A codepage byte stream. Must hold at least one byte.
pub(crate) struct ByteStreamSource<'a> {
    source: &'a [u8],
    codepage: Codepage,
}

impl<'a> ByteStreamSource<'a> {
    pub(crate) fn new(source: &'a [u8], codepage: Codepage) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::set(
                ErrorKind::ArgumentTooSmall,
                "missing byte stream bytes",
            ));
        }
        Ok(ByteStreamSource { source, codepage })
    }
}

impl Decoder for ByteStreamSource<'_> {
    fn name(&self) -> &'static str {
        self.codepage.name()
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_byte_stream(self.source, cursor, self.codepage)
    }

    fn is_terminated(&self) -> bool {
        self.source.last() == Some(&0)
    }
}

/// A UTF-8 byte stream with an optional leading byte order mark.
pub(crate) struct Utf8StreamSource<'a> {
    source: &'a [u8],
    start: usize,
    strictness: Strictness,
}

impl<'a> Utf8StreamSource<'a> {
    pub(crate) fn new(source: &'a [u8], strictness: Strictness) -> Result<Self> {
        let start = framing::detect_utf8(source)?;
        Ok(Utf8StreamSource {
            source,
            start,
            strictness,
        })
    }
}

impl Decoder for Utf8StreamSource<'_> {
    fn name(&self) -> &'static str {
        "UTF-8 stream"
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf8(self.source, cursor, self.strictness)
    }

    fn is_terminated(&self) -> bool {
        self.source.last() == Some(&0)
    }
}

/// A UTF-16 byte stream whose byte order is resolved on construction.
pub(crate) struct Utf16StreamSource<'a> {
    source: &'a [u8],
    framing: Framing,
    strictness: Strictness,
}

impl<'a> Utf16StreamSource<'a> {
    pub(crate) fn new(
        source: &'a [u8],
        default: Option<ByteOrder>,
        strictness: Strictness,
    ) -> Result<Self> {
        let framing = framing::detect_utf16(source, default)?;
        Ok(Utf16StreamSource {
            source,
            framing,
            strictness,
        })
    }
}

impl Decoder for Utf16StreamSource<'_> {
    fn name(&self) -> &'static str {
        "UTF-16 stream"
    }

    fn start(&self) -> usize {
        self.framing.offset
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf16_stream(
            self.source,
            cursor,
            self.framing.byte_order,
            self.strictness,
        )
    }

    fn is_terminated(&self) -> bool {
        self.source.ends_with(&[0, 0])
    }
}

/// A UTF-32 byte stream whose byte order is resolved on construction.
pub(crate) struct Utf32StreamSource<'a> {
    source: &'a [u8],
    framing: Framing,
    strictness: Strictness,
}

impl<'a> Utf32StreamSource<'a> {
    pub(crate) fn new(
        source: &'a [u8],
        default: Option<ByteOrder>,
        strictness: Strictness,
    ) -> Result<Self> {
        let framing = framing::detect_utf32(source, default)?;
        Ok(Utf32StreamSource {
            source,
            framing,
            strictness,
        })
    }
}

impl Decoder for Utf32StreamSource<'_> {
    fn name(&self) -> &'static str {
        "UTF-32 stream"
    }

    fn start(&self) -> usize {
        self.framing.offset
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn decode(&self, cursor: &mut usize) -> Result<CodePoint> {
        character::decode_from_utf32_stream(
            self.source,
            cursor,
            self.framing.byte_order,
            self.strictness,
        )
    }

    fn is_terminated(&self) -> bool {
        self.source.ends_with(&[0, 0, 0, 0])
    }
}
