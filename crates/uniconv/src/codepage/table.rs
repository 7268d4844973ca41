use crate::character::{ASCII_REPLACEMENT_BYTE, CodePoint, REPLACEMENT_CHARACTER};

/// A run of consecutive code points starting at `first` and the bytes they
/// encode to. Code points inside the run with no mapping hold the ASCII
/// replacement byte.
#[derive(Debug)]
pub(crate) struct EncodeRange {
    pub(crate) first: u16,
    pub(crate) bytes: &'static [u8],
}

/// Mapping data for one single-byte codepage.
///
/// Bytes and code points below `base` map to themselves. `to_unicode` holds
/// one entry per byte from `base` to `0xFF`. `from_unicode` is sorted by
/// `first` and its runs do not overlap.
#[derive(Debug)]
pub(crate) struct CodepageTable {
    pub(crate) base: u16,
    pub(crate) to_unicode: &'static [u16],
    pub(crate) from_unicode: &'static [EncodeRange],
}

impl CodepageTable {
    pub(crate) fn decode(&self, byte: u8) -> CodePoint {
        let Some(index) = u16::from(byte).checked_sub(self.base) else {
            return CodePoint::from(byte);
        };
        self.to_unicode
            .get(usize::from(index))
            .map_or(REPLACEMENT_CHARACTER, |&unit| CodePoint::from(unit))
    }

    pub(crate) fn encode(&self, code_point: CodePoint) -> u8 {
        if code_point < CodePoint::from(self.base) {
            return u8::try_from(code_point).unwrap_or(ASCII_REPLACEMENT_BYTE);
        }
        let Ok(code_point) = u16::try_from(code_point) else {
            return ASCII_REPLACEMENT_BYTE;
        };
        let after = self
            .from_unicode
            .partition_point(|range| range.first <= code_point);
        after
            .checked_sub(1)
            .and_then(|index| {
                let range = &self.from_unicode[index];
                range.bytes.get(usize::from(code_point - range.first))
            })
            .copied()
            .unwrap_or(ASCII_REPLACEMENT_BYTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: CodepageTable = CodepageTable {
        base: 0xFE,
        to_unicode: &[0x0100, 0xFFFD],
        from_unicode: &[EncodeRange {
            first: 0x0100,
            bytes: &[0xFE],
        }],
    };

    #[test]
    fn identity_below_base() {
        assert_eq!(SAMPLE.decode(0x41), 0x41);
        assert_eq!(SAMPLE.decode(0xFD), 0xFD);
        assert_eq!(SAMPLE.encode(0xFD), 0xFD);
    }

    #[test]
    fn lookups_above_base() {
        assert_eq!(SAMPLE.decode(0xFE), 0x0100);
        assert_eq!(SAMPLE.decode(0xFF), REPLACEMENT_CHARACTER);
        assert_eq!(SAMPLE.encode(0x0100), 0xFE);
    }

    #[test]
    fn unmapped_code_points_encode_to_sub() {
        assert_eq!(SAMPLE.encode(0xFE), ASCII_REPLACEMENT_BYTE);
        assert_eq!(SAMPLE.encode(0x0101), ASCII_REPLACEMENT_BYTE);
        assert_eq!(SAMPLE.encode(0x1_F600), ASCII_REPLACEMENT_BYTE);
    }
}
