//! Single-byte codepages and their mapping to Unicode.
//!
//! Both directions are total: bytes a codepage leaves undefined decode to
//! U+FFFD, and code points a codepage cannot represent encode to `0x1A`.

use alloc::format;
use core::{fmt, str::FromStr};

use crate::{
    character::CodePoint,
    error::{Error, ErrorKind, Result},
};

mod table;
mod tables;

use table::CodepageTable;

/// A supported single-byte codepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Codepage {
    /// 7-bit US-ASCII; every byte from `0x80` up is undefined.
    Ascii,
    /// ISO 8859-1 (Latin-1), identical to the first 256 code points.
    Iso8859_1,
    /// ISO 8859-2 (Latin-2, Central European).
    Iso8859_2,
    /// ISO 8859-3 (Latin-3, South European).
    Iso8859_3,
    /// ISO 8859-4 (Latin-4, North European).
    Iso8859_4,
    /// ISO 8859-5 (Cyrillic).
    Iso8859_5,
    /// ISO 8859-6 (Arabic).
    Iso8859_6,
    /// ISO 8859-7 (Greek).
    Iso8859_7,
    /// ISO 8859-8 (Hebrew).
    Iso8859_8,
    /// ISO 8859-9 (Latin-5, Turkish).
    Iso8859_9,
    /// ISO 8859-10 (Latin-6, Nordic).
    Iso8859_10,
    /// ISO 8859-11 (Thai).
    Iso8859_11,
    /// ISO 8859-13 (Latin-7, Baltic Rim).
    Iso8859_13,
    /// ISO 8859-14 (Latin-8, Celtic).
    Iso8859_14,
    /// ISO 8859-15 (Latin-9).
    Iso8859_15,
    /// ISO 8859-16 (Latin-10, South-Eastern European).
    Iso8859_16,
    /// KOI8-R (Russian).
    Koi8R,
    /// KOI8-U (Ukrainian).
    Koi8U,
    /// Windows-874 (Thai).
    Windows874,
    /// Windows-1250 (Central European).
    Windows1250,
    /// Windows-1251 (Cyrillic).
    Windows1251,
    /// Windows-1252 (Western European).
    Windows1252,
    /// Windows-1253 (Greek).
    Windows1253,
    /// Windows-1254 (Turkish).
    Windows1254,
    /// Windows-1255 (Hebrew).
    Windows1255,
    /// Windows-1256 (Arabic).
    Windows1256,
    /// Windows-1257 (Baltic).
    Windows1257,
    /// Windows-1258 (Vietnamese).
    Windows1258,
}

impl Codepage {
    /// Every supported codepage.
    pub const ALL: [Codepage; 28] = [
        Codepage::Ascii,
        Codepage::Iso8859_1,
        Codepage::Iso8859_2,
        Codepage::Iso8859_3,
        Codepage::Iso8859_4,
        Codepage::Iso8859_5,
        Codepage::Iso8859_6,
        Codepage::Iso8859_7,
        Codepage::Iso8859_8,
        Codepage::Iso8859_9,
        Codepage::Iso8859_10,
        Codepage::Iso8859_11,
        Codepage::Iso8859_13,
        Codepage::Iso8859_14,
        Codepage::Iso8859_15,
        Codepage::Iso8859_16,
        Codepage::Koi8R,
        Codepage::Koi8U,
        Codepage::Windows874,
        Codepage::Windows1250,
        Codepage::Windows1251,
        Codepage::Windows1252,
        Codepage::Windows1253,
        Codepage::Windows1254,
        Codepage::Windows1255,
        Codepage::Windows1256,
        Codepage::Windows1257,
        Codepage::Windows1258,
    ];

    /// The numeric codepage identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Codepage::Ascii => 20127,
            Codepage::Iso8859_1 => 28591,
            Codepage::Iso8859_2 => 28592,
            Codepage::Iso8859_3 => 28593,
            Codepage::Iso8859_4 => 28594,
            Codepage::Iso8859_5 => 28595,
            Codepage::Iso8859_6 => 28596,
            Codepage::Iso8859_7 => 28597,
            Codepage::Iso8859_8 => 28598,
            Codepage::Iso8859_9 => 28599,
            Codepage::Iso8859_10 => 28600,
            Codepage::Iso8859_11 => 28601,
            Codepage::Iso8859_13 => 28603,
            Codepage::Iso8859_14 => 28604,
            Codepage::Iso8859_15 => 28605,
            Codepage::Iso8859_16 => 28606,
            Codepage::Koi8R => 20866,
            Codepage::Koi8U => 21866,
            Codepage::Windows874 => 874,
            Codepage::Windows1250 => 1250,
            Codepage::Windows1251 => 1251,
            Codepage::Windows1252 => 1252,
            Codepage::Windows1253 => 1253,
            Codepage::Windows1254 => 1254,
            Codepage::Windows1255 => 1255,
            Codepage::Windows1256 => 1256,
            Codepage::Windows1257 => 1257,
            Codepage::Windows1258 => 1258,
        }
    }

    /// Looks up a codepage by its numeric identifier.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnsupportedValue`] for identifiers outside the supported
    /// set.
    pub fn from_id(id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|codepage| codepage.id() == id)
            .ok_or_else(|| {
                Error::set(
                    ErrorKind::UnsupportedValue,
                    format!("unsupported codepage: {id}"),
                )
            })
    }

    /// The canonical lowercase name, e.g. `windows-1252`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Codepage::Ascii => "ascii",
            Codepage::Iso8859_1 => "iso-8859-1",
            Codepage::Iso8859_2 => "iso-8859-2",
            Codepage::Iso8859_3 => "iso-8859-3",
            Codepage::Iso8859_4 => "iso-8859-4",
            Codepage::Iso8859_5 => "iso-8859-5",
            Codepage::Iso8859_6 => "iso-8859-6",
            Codepage::Iso8859_7 => "iso-8859-7",
            Codepage::Iso8859_8 => "iso-8859-8",
            Codepage::Iso8859_9 => "iso-8859-9",
            Codepage::Iso8859_10 => "iso-8859-10",
            Codepage::Iso8859_11 => "iso-8859-11",
            Codepage::Iso8859_13 => "iso-8859-13",
            Codepage::Iso8859_14 => "iso-8859-14",
            Codepage::Iso8859_15 => "iso-8859-15",
            Codepage::Iso8859_16 => "iso-8859-16",
            Codepage::Koi8R => "koi8-r",
            Codepage::Koi8U => "koi8-u",
            Codepage::Windows874 => "windows-874",
            Codepage::Windows1250 => "windows-1250",
            Codepage::Windows1251 => "windows-1251",
            Codepage::Windows1252 => "windows-1252",
            Codepage::Windows1253 => "windows-1253",
            Codepage::Windows1254 => "windows-1254",
            Codepage::Windows1255 => "windows-1255",
            Codepage::Windows1256 => "windows-1256",
            Codepage::Windows1257 => "windows-1257",
            Codepage::Windows1258 => "windows-1258",
        }
    }

    pub(crate) fn table(self) -> &'static CodepageTable {
        match self {
            Codepage::Ascii => &tables::ASCII,
            Codepage::Iso8859_1 => &tables::ISO_8859_1,
            Codepage::Iso8859_2 => &tables::ISO_8859_2,
            Codepage::Iso8859_3 => &tables::ISO_8859_3,
            Codepage::Iso8859_4 => &tables::ISO_8859_4,
            Codepage::Iso8859_5 => &tables::ISO_8859_5,
            Codepage::Iso8859_6 => &tables::ISO_8859_6,
            Codepage::Iso8859_7 => &tables::ISO_8859_7,
            Codepage::Iso8859_8 => &tables::ISO_8859_8,
            Codepage::Iso8859_9 => &tables::ISO_8859_9,
            Codepage::Iso8859_10 => &tables::ISO_8859_10,
            Codepage::Iso8859_11 => &tables::ISO_8859_11,
            Codepage::Iso8859_13 => &tables::ISO_8859_13,
            Codepage::Iso8859_14 => &tables::ISO_8859_14,
            Codepage::Iso8859_15 => &tables::ISO_8859_15,
            Codepage::Iso8859_16 => &tables::ISO_8859_16,
            Codepage::Koi8R => &tables::KOI8_R,
            Codepage::Koi8U => &tables::KOI8_U,
            Codepage::Windows874 => &tables::WINDOWS_874,
            Codepage::Windows1250 => &tables::WINDOWS_1250,
            Codepage::Windows1251 => &tables::WINDOWS_1251,
            Codepage::Windows1252 => &tables::WINDOWS_1252,
            Codepage::Windows1253 => &tables::WINDOWS_1253,
            Codepage::Windows1254 => &tables::WINDOWS_1254,
            Codepage::Windows1255 => &tables::WINDOWS_1255,
            Codepage::Windows1256 => &tables::WINDOWS_1256,
            Codepage::Windows1257 => &tables::WINDOWS_1257,
            Codepage::Windows1258 => &tables::WINDOWS_1258,
        }
    }
}

impl fmt::Display for Codepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codepage {
    type Err = Error;

    /// Accepts the canonical name, `cp<id>`, or the bare identifier, in any
    /// letter case.
    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::set(
                ErrorKind::InvalidArgument,
                "missing codepage name",
            ));
        }
        if let Some(codepage) = Self::ALL
            .into_iter()
            .find(|codepage| codepage.name().eq_ignore_ascii_case(name))
        {
            return Ok(codepage);
        }

        let digits = match name.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("cp") => &name[2..],
            _ => name,
        };
        digits
            .parse::<u32>()
            .ok()
            .and_then(|id| Self::from_id(id).ok())
            .ok_or_else(|| {
                Error::set(
                    ErrorKind::UnsupportedValue,
                    format!("unsupported codepage: {name:?}"),
                )
            })
    }
}

/// Maps one byte of `codepage` to its code point.
///
/// Bytes the codepage leaves undefined map to U+FFFD.
#[must_use]
pub fn byte_to_codepoint(codepage: Codepage, byte: u8) -> CodePoint {
    codepage.table().decode(byte)
}

/// Maps a code point to its byte in `codepage`.
///
/// Code points the codepage cannot represent map to `0x1A`.
#[must_use]
pub fn codepoint_to_byte(codepage: Codepage, code_point: CodePoint) -> u8 {
    codepage.table().encode(code_point)
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use rstest::*;

    use super::*;
    use crate::character::{ASCII_REPLACEMENT_BYTE, REPLACEMENT_CHARACTER};

    #[rstest]
    #[case(Codepage::Windows1252, 0x80, 0x20AC)]
    #[case(Codepage::Windows1252, 0x9F, 0x0178)]
    #[case(Codepage::Windows1252, 0x81, REPLACEMENT_CHARACTER)]
    #[case(Codepage::Windows1255, 0x80, 0x20AC)]
    #[case(Codepage::Windows1255, 0xE0, 0x05D0)]
    #[case(Codepage::Windows1255, 0xFD, 0x200E)]
    #[case(Codepage::Windows1255, 0xCA, REPLACEMENT_CHARACTER)]
    #[case(Codepage::Windows1257, 0x80, 0x20AC)]
    #[case(Codepage::Windows1251, 0xC0, 0x0410)]
    #[case(Codepage::Iso8859_4, 0xA1, 0x0104)]
    #[case(Codepage::Iso8859_13, 0xFF, 0x2019)]
    #[case(Codepage::Iso8859_1, 0xE9, 0x00E9)]
    #[case(Codepage::Koi8R, 0xC1, 0x0430)]
    #[case(Codepage::Ascii, 0x41, 0x41)]
    #[case(Codepage::Ascii, 0x80, REPLACEMENT_CHARACTER)]
    fn decodes_bytes(#[case] codepage: Codepage, #[case] byte: u8, #[case] expected: CodePoint) {
        assert_eq!(byte_to_codepoint(codepage, byte), expected);
    }

    #[rstest]
    #[case(Codepage::Windows1255, 0x20AC, 0x80)]
    #[case(Codepage::Windows1255, 0x05D0, 0xE0)]
    #[case(Codepage::Windows1252, 0x0178, 0x9F)]
    #[case(Codepage::Iso8859_1, 0x00FF, 0xFF)]
    #[case(Codepage::Iso8859_1, 0x0100, ASCII_REPLACEMENT_BYTE)]
    #[case(Codepage::Windows1252, 0x05D0, ASCII_REPLACEMENT_BYTE)]
    #[case(Codepage::Ascii, 0x00E9, ASCII_REPLACEMENT_BYTE)]
    #[case(Codepage::Windows1250, 0x1_F600, ASCII_REPLACEMENT_BYTE)]
    #[case(Codepage::Windows1250, 0x0009, 0x09)]
    fn encodes_code_points(
        #[case] codepage: Codepage,
        #[case] code_point: CodePoint,
        #[case] expected: u8,
    ) {
        assert_eq!(codepoint_to_byte(codepage, code_point), expected);
    }

    #[test]
    fn every_table_is_consistent() {
        for codepage in Codepage::ALL {
            let table = codepage.table();
            assert_eq!(
                usize::from(table.base) + table.to_unicode.len(),
                0x100,
                "{codepage}: decode table must cover every byte"
            );
            assert!(
                table
                    .from_unicode
                    .windows(2)
                    .all(|pair| usize::from(pair[0].first) + pair[0].bytes.len()
                        <= usize::from(pair[1].first)),
                "{codepage}: encode ranges must be sorted and disjoint"
            );
            for byte in 0..=u8::MAX {
                let code_point = byte_to_codepoint(codepage, byte);
                if code_point != REPLACEMENT_CHARACTER {
                    assert_eq!(
                        codepoint_to_byte(codepage, code_point),
                        byte,
                        "{codepage}: byte 0x{byte:02x} does not round trip"
                    );
                }
            }
        }
    }

    #[test]
    fn unmapped_code_points_encode_to_substitute() {
        for codepage in Codepage::ALL {
            let mut decoded = vec![false; 0x1_0000];
            for byte in 0..=u8::MAX {
                let code_point = byte_to_codepoint(codepage, byte);
                if code_point != REPLACEMENT_CHARACTER {
                    decoded[code_point as usize] = true;
                }
            }
            for code_point in 0..=0xFFFF {
                if !decoded[code_point as usize] {
                    assert_eq!(
                        codepoint_to_byte(codepage, code_point),
                        ASCII_REPLACEMENT_BYTE,
                        "{codepage}: U+{code_point:04X} is not in the decode table"
                    );
                }
            }
        }
    }

    #[test]
    fn ids_and_names_round_trip() {
        for codepage in Codepage::ALL {
            assert_eq!(Codepage::from_id(codepage.id()), Ok(codepage));
            assert_eq!(codepage.name().parse::<Codepage>(), Ok(codepage));
            assert_eq!(codepage.to_string(), codepage.name());
        }
    }

    #[rstest]
    #[case("Windows-1252", Codepage::Windows1252)]
    #[case("CP1257", Codepage::Windows1257)]
    #[case("cp28594", Codepage::Iso8859_4)]
    #[case("20127", Codepage::Ascii)]
    #[case(" koi8-u ", Codepage::Koi8U)]
    fn parses_aliases(#[case] name: &str, #[case] expected: Codepage) {
        assert_eq!(name.parse::<Codepage>(), Ok(expected));
    }

    #[rstest]
    #[case("", ErrorKind::InvalidArgument)]
    #[case("utf-7", ErrorKind::UnsupportedValue)]
    #[case("cp1259", ErrorKind::UnsupportedValue)]
    #[case("28602", ErrorKind::UnsupportedValue)]
    fn rejects_unknown_names(#[case] name: &str, #[case] kind: ErrorKind) {
        assert_eq!(name.parse::<Codepage>().unwrap_err().kind(), kind);
    }
}
