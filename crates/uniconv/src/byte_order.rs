use alloc::format;

use crate::error::{Error, ErrorKind, Result};

/// Byte order of a UTF-16 or UTF-32 byte stream.
///
/// An unspecified order is written `Option<ByteOrder>::None` and is resolved
/// from the stream itself (see [`crate::framing`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Legacy tag byte for big-endian.
    pub const BIG_ENDIAN_TAG: u8 = b'b';
    /// Legacy tag byte for little-endian.
    pub const LITTLE_ENDIAN_TAG: u8 = b'l';

    /// Parses a legacy byte-order tag: `b'b'`, `b'l'`, or `0` for
    /// "unspecified".
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnsupportedValue`] for any other byte.
    pub fn from_tag(tag: u8) -> Result<Option<ByteOrder>> {
        match tag {
            0 => Ok(None),
            Self::BIG_ENDIAN_TAG => Ok(Some(ByteOrder::BigEndian)),
            Self::LITTLE_ENDIAN_TAG => Ok(Some(ByteOrder::LittleEndian)),
            other => Err(Error::set(
                ErrorKind::UnsupportedValue,
                format!("unsupported byte order: 0x{other:02x}"),
            )),
        }
    }

    /// The legacy tag byte for this order.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            ByteOrder::BigEndian => Self::BIG_ENDIAN_TAG,
            ByteOrder::LittleEndian => Self::LITTLE_ENDIAN_TAG,
        }
    }

    /// The UTF-16 byte order mark as it appears in a stream of this order.
    #[must_use]
    pub const fn utf16_byte_order_mark(self) -> [u8; 2] {
        self.write_u16(0xFEFF)
    }

    /// The UTF-32 byte order mark as it appears in a stream of this order.
    #[must_use]
    pub const fn utf32_byte_order_mark(self) -> [u8; 4] {
        self.write_u32(0xFEFF)
    }

    /// Reads one 16-bit unit.
    #[must_use]
    pub const fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    /// Reads one 32-bit unit.
    #[must_use]
    pub const fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    /// Writes one 16-bit unit.
    #[must_use]
    pub const fn write_u16(self, unit: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => unit.to_be_bytes(),
            ByteOrder::LittleEndian => unit.to_le_bytes(),
        }
    }

    /// Writes one 32-bit unit.
    #[must_use]
    pub const fn write_u32(self, unit: u32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => unit.to_be_bytes(),
            ByteOrder::LittleEndian => unit.to_le_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, None)]
    #[case(b'b', Some(ByteOrder::BigEndian))]
    #[case(b'l', Some(ByteOrder::LittleEndian))]
    fn known_tags(#[case] tag: u8, #[case] expected: Option<ByteOrder>) {
        assert_eq!(ByteOrder::from_tag(tag).unwrap(), expected);
        if let Some(order) = expected {
            assert_eq!(order.tag(), tag);
        }
    }

    #[rstest]
    #[case(b'B')]
    #[case(b'x')]
    #[case(0xFF)]
    fn unknown_tags_are_unsupported(#[case] tag: u8) {
        let error = ByteOrder::from_tag(tag).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedValue);
    }

    #[test]
    fn byte_order_marks() {
        assert_eq!(ByteOrder::BigEndian.utf16_byte_order_mark(), [0xFE, 0xFF]);
        assert_eq!(ByteOrder::LittleEndian.utf16_byte_order_mark(), [0xFF, 0xFE]);
        assert_eq!(
            ByteOrder::BigEndian.utf32_byte_order_mark(),
            [0x00, 0x00, 0xFE, 0xFF]
        );
        assert_eq!(
            ByteOrder::LittleEndian.utf32_byte_order_mark(),
            [0xFF, 0xFE, 0x00, 0x00]
        );
    }

    #[test]
    fn units_round_trip_through_bytes() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            assert_eq!(order.read_u16(order.write_u16(0xD83D)), 0xD83D);
            assert_eq!(order.read_u32(order.write_u32(0x0001_F600)), 0x0001_F600);
        }
        assert_eq!(ByteOrder::LittleEndian.read_u16([0x41, 0x00]), 0x41);
    }
}
