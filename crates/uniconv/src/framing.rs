//! Byte order marks and byte-order resolution for UTF byte streams.
//!
//! UTF-16 and UTF-32 streams are resolved in a fixed order: a byte order mark
//! wins, then the zero-byte pattern of the first unit, then the caller's
//! default, and finally big-endian.

use alloc::format;

use crate::{
    byte_order::ByteOrder,
    error::{Error, ErrorKind, Result},
};

/// The UTF-8 byte order mark.
pub const UTF8_BYTE_ORDER_MARK: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Which rule decided the byte order of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The stream starts with a byte order mark.
    ByteOrderMark,
    /// The first unit holds a non-zero byte on one side only.
    ZeroBytes,
    /// The caller's default byte order.
    CallerDefault,
    /// Nothing else applied; big-endian.
    Fallback,
}

/// How a UTF-16 or UTF-32 stream is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Framing {
    /// Byte order of every unit after the mark.
    pub byte_order: ByteOrder,
    /// Offset of the first character: the length of the byte order mark, or
    /// zero.
    pub offset: usize,
    /// The rule that chose `byte_order`.
    pub resolution: Resolution,
}

impl Framing {
    fn marked(byte_order: ByteOrder, offset: usize) -> Self {
        Framing {
            byte_order,
            offset,
            resolution: Resolution::ByteOrderMark,
        }
    }

    fn unmarked(byte_order: ByteOrder, resolution: Resolution) -> Self {
        Framing {
            byte_order,
            offset: 0,
            resolution,
        }
    }

    fn defaulted(default: Option<ByteOrder>) -> Self {
        match default {
            Some(byte_order) => Self::unmarked(byte_order, Resolution::CallerDefault),
            None => Self::unmarked(ByteOrder::BigEndian, Resolution::Fallback),
        }
    }
}

fn check_stream_len(stream: &[u8], width: usize, format: &str) -> Result<()> {
    if stream.len() < width {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!("missing {format} stream bytes: {} of {width}", stream.len()),
        ));
    }
    if stream.len() % width != 0 {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            format!(
                "{format} stream size {} is not a multiple of {width}",
                stream.len()
            ),
        ));
    }
    Ok(())
}

/// Offset of the first character of a UTF-8 stream: skips an optional byte
/// order mark.
///
/// # Errors
///
/// [`ErrorKind::ArgumentTooSmall`] for an empty stream.
pub fn detect_utf8(stream: &[u8]) -> Result<usize> {
    if stream.is_empty() {
        return Err(Error::set(
            ErrorKind::ArgumentTooSmall,
            "missing UTF-8 stream bytes",
        ));
    }
    Ok(if stream.starts_with(&UTF8_BYTE_ORDER_MARK) {
        UTF8_BYTE_ORDER_MARK.len()
    } else {
        0
    })
}

/// Resolves the byte order of a UTF-16 stream.
///
/// # Errors
///
/// [`ErrorKind::ArgumentTooSmall`] if the stream is shorter than two bytes or
/// its size is odd.
pub fn detect_utf16(stream: &[u8], default: Option<ByteOrder>) -> Result<Framing> {
    check_stream_len(stream, 2, "UTF-16")?;
    let head = [stream[0], stream[1]];

    for byte_order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        if head == byte_order.utf16_byte_order_mark() {
            return Ok(Framing::marked(byte_order, 2));
        }
    }
    Ok(match head {
        [0, b] if b != 0 => Framing::unmarked(ByteOrder::BigEndian, Resolution::ZeroBytes),
        [a, 0] if a != 0 => Framing::unmarked(ByteOrder::LittleEndian, Resolution::ZeroBytes),
        _ => Framing::defaulted(default),
    })
}

/// Resolves the byte order of a UTF-32 stream.
///
/// # Errors
///
/// [`ErrorKind::ArgumentTooSmall`] if the stream is shorter than four bytes
/// or its size is not a multiple of four.
pub fn detect_utf32(stream: &[u8], default: Option<ByteOrder>) -> Result<Framing> {
    check_stream_len(stream, 4, "UTF-32")?;
    let head = [stream[0], stream[1], stream[2], stream[3]];

    for byte_order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        if head == byte_order.utf32_byte_order_mark() {
            return Ok(Framing::marked(byte_order, 4));
        }
    }
    Ok(match head {
        [0, 0, 0, d] if d != 0 => Framing::unmarked(ByteOrder::BigEndian, Resolution::ZeroBytes),
        [a, 0, 0, 0] if a != 0 => {
            Framing::unmarked(ByteOrder::LittleEndian, Resolution::ZeroBytes)
        }
        _ => Framing::defaulted(default),
    })
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    const BE: ByteOrder = ByteOrder::BigEndian;
    const LE: ByteOrder = ByteOrder::LittleEndian;

    #[rstest]
    #[case::le_mark(&[0xFF, 0xFE, 0x41, 0x00], Some(BE), LE, 2, Resolution::ByteOrderMark)]
    #[case::be_mark(&[0xFE, 0xFF, 0x00, 0x41], Some(LE), BE, 2, Resolution::ByteOrderMark)]
    #[case::zero_high(&[0x00, 0x41], Some(LE), BE, 0, Resolution::ZeroBytes)]
    #[case::zero_low(&[0x41, 0x00, 0x42, 0x00], Some(BE), LE, 0, Resolution::ZeroBytes)]
    #[case::ambiguous_default(&[0x30, 0x42], Some(LE), LE, 0, Resolution::CallerDefault)]
    #[case::ambiguous_fallback(&[0x30, 0x42], None, BE, 0, Resolution::Fallback)]
    #[case::all_zero(&[0x00, 0x00], None, BE, 0, Resolution::Fallback)]
    fn utf16_precedence(
        #[case] stream: &[u8],
        #[case] default: Option<ByteOrder>,
        #[case] byte_order: ByteOrder,
        #[case] offset: usize,
        #[case] resolution: Resolution,
    ) {
        assert_eq!(
            detect_utf16(stream, default),
            Ok(Framing {
                byte_order,
                offset,
                resolution
            })
        );
    }

    #[rstest]
    #[case::le_mark(&[0xFF, 0xFE, 0x00, 0x00], None, LE, 4, Resolution::ByteOrderMark)]
    #[case::be_mark(&[0x00, 0x00, 0xFE, 0xFF], Some(LE), BE, 4, Resolution::ByteOrderMark)]
    #[case::zero_high(&[0x00, 0x00, 0x00, 0x41], Some(LE), BE, 0, Resolution::ZeroBytes)]
    #[case::zero_low(&[0x41, 0x00, 0x00, 0x00], None, LE, 0, Resolution::ZeroBytes)]
    #[case::ambiguous_default(&[0, 1, 0xF6, 0], Some(LE), LE, 0, Resolution::CallerDefault)]
    #[case::ambiguous_fallback(&[0, 1, 0xF6, 0], None, BE, 0, Resolution::Fallback)]
    fn utf32_precedence(
        #[case] stream: &[u8],
        #[case] default: Option<ByteOrder>,
        #[case] byte_order: ByteOrder,
        #[case] offset: usize,
        #[case] resolution: Resolution,
    ) {
        assert_eq!(
            detect_utf32(stream, default),
            Ok(Framing {
                byte_order,
                offset,
                resolution
            })
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0x41])]
    #[case(&[0x41, 0x00, 0x42])]
    fn utf16_size_errors(#[case] stream: &[u8]) {
        assert_eq!(
            detect_utf16(stream, None).unwrap_err().kind(),
            ErrorKind::ArgumentTooSmall
        );
    }

    #[test]
    fn utf32_size_errors() {
        assert_eq!(
            detect_utf32(&[0xFF, 0xFE, 0x00, 0x00, 0x41], None)
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentTooSmall
        );
    }

    #[test]
    fn utf8_mark_is_optional() {
        assert_eq!(detect_utf8(b"\xEF\xBB\xBFA"), Ok(3));
        assert_eq!(detect_utf8(b"A"), Ok(0));
        assert_eq!(detect_utf8(b"\xEF\xBB"), Ok(0));
        assert_eq!(
            detect_utf8(b"").unwrap_err().kind(),
            ErrorKind::ArgumentTooSmall
        );
    }
}
