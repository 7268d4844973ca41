//! Conversion between Unicode encodings and single-byte codepages.
//!
//! Every conversion runs in two passes over the same decoder: a size pass
//! that reports how many destination units are needed, and a copy pass that
//! writes them into a caller-provided buffer. Both passes are available as
//! free functions, one module per destination format:
//!
//! | destination | module |
//! |---|---|
//! | UTF-8 string | [`utf8_string`] |
//! | UTF-16 string | [`utf16_string`] |
//! | UTF-32 string | [`utf32_string`] |
//! | codepage bytes | [`byte_stream`] |
//! | UTF-8 stream | [`utf8_stream`] |
//! | UTF-16 stream | [`utf16_stream`] |
//! | UTF-32 stream | [`utf32_stream`] |
//!
//! [`Converter`] picks the pair at run time and can allocate the output.
//!
//! ```
//! use uniconv::{Strictness, utf16_string};
//!
//! let source = "h\u{e9}llo".as_bytes();
//! let needed = utf16_string::size_from_utf8(source, Strictness::Strict)?;
//! let mut buffer = vec![0u16; needed];
//! utf16_string::copy_from_utf8(&mut buffer, source, Strictness::Strict)?;
//! assert_eq!(buffer, [0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
//! # Ok::<(), uniconv::Error>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "fuzzing"))]
extern crate std;

mod byte_order;
mod converter;
mod diagnostic;
mod error;
mod options;
mod protocol;

pub mod character;
pub mod codepage;
pub mod framing;

pub mod byte_stream;
pub mod utf16_stream;
pub mod utf16_string;
pub mod utf32_stream;
pub mod utf32_string;
pub mod utf8_stream;
pub mod utf8_string;

#[cfg(test)]
mod tests;

pub use byte_order::ByteOrder;
pub use character::CodePoint;
pub use codepage::Codepage;
pub use converter::{Converter, Destination, Encoded, Format, Source};
pub use diagnostic::{CollectingSink, DiagnosticSink, NoopSink, WriteSink};
pub use error::{Error, ErrorDomain, ErrorEntry, ErrorKind, Result, ResultExt};
pub use options::{ConversionOptions, Strictness};
