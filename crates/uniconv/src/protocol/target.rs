use super::Target;
use crate::{
    byte_order::ByteOrder,
    character::{self, CodePoint, check_encode_room},
    codepage::Codepage,
    error::Result,
    framing::UTF8_BYTE_ORDER_MARK,
    options::Strictness,
};

fn write_mark(mark: &[u8], destination: &mut [u8], cursor: &mut usize, name: &str) -> Result<()> {
    check_encode_room(destination.len(), *cursor, mark.len(), name)?;
    destination[*cursor..*cursor + mark.len()].copy_from_slice(mark);
    *cursor += mark.len();
    Ok(())
}

pub(crate) struct Utf8Target {
    strictness: Strictness,
}

impl Utf8Target {
    pub(crate) fn new(strictness: Strictness) -> Self {
        Utf8Target { strictness }
    }
}

impl Target for Utf8Target {
    type Unit = u8;

    fn name(&self) -> &'static str {
        "UTF-8 string"
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf8(code_point, self.strictness)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u8],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf8(code_point, destination, cursor, self.strictness)
    }
}

pub(crate) struct Utf16Target {
    strictness: Strictness,
}

impl Utf16Target {
    pub(crate) fn new(strictness: Strictness) -> Self {
        Utf16Target { strictness }
    }
}

impl Target for Utf16Target {
    type Unit = u16;

    fn name(&self) -> &'static str {
        "UTF-16 string"
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf16(code_point, self.strictness)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u16],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf16(code_point, destination, cursor, self.strictness)
    }
}

pub(crate) struct Utf32Target {
    strictness: Strictness,
}

impl Utf32Target {
    pub(crate) fn new(strictness: Strictness) -> Self {
        Utf32Target { strictness }
    }
}

impl Target for Utf32Target {
    type Unit = u32;

    fn name(&self) -> &'static str {
        "UTF-32 string"
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf32(code_point, self.strictness)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u32],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf32(code_point, destination, cursor, self.strictness)
    }
}

/// One byte per code point; unmappable code points become `0x1A`.
pub(crate) struct ByteStreamTarget {
    codepage: Codepage,
}

impl ByteStreamTarget {
    pub(crate) fn new(codepage: Codepage) -> Self {
        ByteStreamTarget { codepage }
    }
}

impl Target for ByteStreamTarget {
    type Unit = u8;

    fn name(&self) -> &'static str {
        self.codepage.name()
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        Ok(character::size_to_byte_stream(code_point))
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u8],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_byte_stream(code_point, destination, cursor, self.codepage)
    }
}

/// UTF-8 bytes behind a mandatory byte order mark.
pub(crate) struct Utf8StreamTarget {
    strictness: Strictness,
}

impl Utf8StreamTarget {
    pub(crate) fn new(strictness: Strictness) -> Self {
        Utf8StreamTarget { strictness }
    }
}

impl Target for Utf8StreamTarget {
    type Unit = u8;

    fn name(&self) -> &'static str {
        "UTF-8 stream"
    }

    fn prologue_len(&self) -> usize {
        UTF8_BYTE_ORDER_MARK.len()
    }

    fn write_prologue(&self, destination: &mut [u8], cursor: &mut usize) -> Result<()> {
        write_mark(&UTF8_BYTE_ORDER_MARK, destination, cursor, self.name())
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf8(code_point, self.strictness)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u8],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf8(code_point, destination, cursor, self.strictness)
    }
}

/// UTF-16 units in `byte_order` behind a mandatory byte order mark.
pub(crate) struct Utf16StreamTarget {
    byte_order: ByteOrder,
    strictness: Strictness,
}

impl Utf16StreamTarget {
    pub(crate) fn new(byte_order: ByteOrder, strictness: Strictness) -> Self {
        Utf16StreamTarget {
            byte_order,
            strictness,
        }
    }
}

impl Target for Utf16StreamTarget {
    type Unit = u8;

    fn name(&self) -> &'static str {
        "UTF-16 stream"
    }

    fn prologue_len(&self) -> usize {
        2
    }

    fn write_prologue(&self, destination: &mut [u8], cursor: &mut usize) -> Result<()> {
        write_mark(
            &self.byte_order.utf16_byte_order_mark(),
            destination,
            cursor,
            self.name(),
        )
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf16(code_point, self.strictness).map(|units| 2 * units)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u8],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf16_stream(
            code_point,
            destination,
            cursor,
            self.byte_order,
            self.strictness,
        )
    }
}

/// UTF-32 units in `byte_order` behind a mandatory byte order mark.
pub(crate) struct Utf32StreamTarget {
    byte_order: ByteOrder,
    strictness: Strictness,
}

impl Utf32StreamTarget {
    pub(crate) fn new(byte_order: ByteOrder, strictness: Strictness) -> Self {
        Utf32StreamTarget {
            byte_order,
            strictness,
        }
    }
}

impl Target for Utf32StreamTarget {
    type Unit = u8;

    fn name(&self) -> &'static str {
        "UTF-32 stream"
    }

    fn prologue_len(&self) -> usize {
        4
    }

    fn write_prologue(&self, destination: &mut [u8], cursor: &mut usize) -> Result<()> {
        write_mark(
            &self.byte_order.utf32_byte_order_mark(),
            destination,
            cursor,
            self.name(),
        )
    }

    fn size_of(&self, code_point: CodePoint) -> Result<usize> {
        character::size_to_utf32(code_point, self.strictness).map(|units| 4 * units)
    }

    fn encode(
        &self,
        code_point: CodePoint,
        destination: &mut [u8],
        cursor: &mut usize,
    ) -> Result<()> {
        character::encode_to_utf32_stream(
            code_point,
            destination,
            cursor,
            self.byte_order,
            self.strictness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn marks_need_room() {
        let target = Utf8StreamTarget::new(Strictness::Strict);
        let mut buffer = [0u8; 2];
        let mut cursor = 0;
        assert_eq!(
            target
                .write_prologue(&mut buffer, &mut cursor)
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentTooSmall
        );
        assert_eq!(cursor, 0);
    }

    #[test]
    fn stream_sizes_count_bytes() {
        let utf16 = Utf16StreamTarget::new(ByteOrder::BigEndian, Strictness::Strict);
        let utf32 = Utf32StreamTarget::new(ByteOrder::BigEndian, Strictness::Strict);
        assert_eq!(utf16.size_of(0x1_F600), Ok(4));
        assert_eq!(utf16.size_of(0x41), Ok(2));
        assert_eq!(utf32.size_of(0x41), Ok(4));
        assert_eq!(Utf8StreamTarget::new(Strictness::Strict).size_of(0x20AC), Ok(3));
    }
}
