use crate::byte_order::ByteOrder;

/// How malformed input and non-scalar values are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Strictness {
    /// Malformed sequences fail with
    /// [`ErrorKind::ConversionInvalidInput`](crate::ErrorKind::ConversionInvalidInput).
    #[default]
    Strict,
    /// Malformed sequences decode to U+FFFD and consume one unit; values that
    /// are not Unicode scalar values encode as U+FFFD.
    Lenient,
}

impl Strictness {
    /// Whether this is [`Strictness::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

/// Configuration of a [`Converter`](crate::Converter).
///
/// # Default
///
/// Strict decoding, byte order inferred from the stream, no terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct ConversionOptions {
    /// Policy for malformed input.
    ///
    /// # Default
    ///
    /// [`Strictness::Strict`]
    pub strictness: Strictness,

    /// Byte order used for UTF-16 and UTF-32 streams.
    ///
    /// When decoding, a byte order mark in the stream always wins; this value
    /// is used only when there is none and the leading zero bytes are not
    /// conclusive. When encoding, `None` writes big-endian.
    ///
    /// # Default
    ///
    /// `None`
    pub byte_order: Option<ByteOrder>,

    /// Whether to append a zero unit to string destinations.
    ///
    /// The terminator is added only when the source does not already end in
    /// a zero unit, so a terminated source is never terminated twice.
    ///
    /// # Default
    ///
    /// `false`
    pub zero_terminate: bool,
}

impl ConversionOptions {
    /// Options with lenient decoding and the other fields at their default.
    #[must_use]
    pub fn lenient() -> Self {
        ConversionOptions {
            strictness: Strictness::Lenient,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ConversionOptions::default();
        assert!(options.strictness.is_strict());
        assert_eq!(options.byte_order, None);
        assert!(!options.zero_terminate);
        assert!(!ConversionOptions::lenient().strictness.is_strict());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_options() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"strictness":"Lenient","byte_order":"LittleEndian"}"#)
                .unwrap();
        assert_eq!(options.strictness, Strictness::Lenient);
        assert_eq!(options.byte_order, Some(ByteOrder::LittleEndian));
        assert!(!options.zero_terminate);
    }

    #[cfg(feature = "fuzzing")]
    #[test]
    fn arbitrary_plans_build() {
        use arbitrary::{Arbitrary, Unstructured};

        use crate::converter::Format;

        let data = [0x5Au8; 32];
        let mut input = Unstructured::new(&data);
        assert!(ConversionOptions::arbitrary(&mut input).is_ok());
        assert!(Format::arbitrary(&mut input).is_ok());
    }
}
