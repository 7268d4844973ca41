use alloc::{borrow::Cow, vec, vec::Vec};
use core::fmt;

use thiserror::Error;

/// Broad category of an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    /// The caller passed an argument that cannot be used as given.
    Arguments,
    /// The input or output of a conversion could not be represented.
    Conversion,
}

/// The category and code of a failure.
///
/// The first kind recorded on an [`Error`] is the one reported by
/// [`Error::kind`]; layers that add context never replace it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A cursor or argument is out of its valid range.
    #[error("invalid argument")]
    InvalidArgument,
    /// A buffer is too small for the requested operation.
    #[error("argument too small")]
    ArgumentTooSmall,
    /// A size computation overflowed the addressable range.
    #[error("argument exceeds maximum")]
    ArgumentExceedsMaximum,
    /// A value is outside the supported set (codepage, byte-order tag).
    #[error("unsupported value")]
    UnsupportedValue,
    /// The source contains a unit sequence that cannot be decoded.
    #[error("invalid conversion input")]
    ConversionInvalidInput,
    /// A code point could not be written to the destination.
    #[error("invalid conversion output")]
    ConversionInvalidOutput,
}

impl ErrorKind {
    /// The domain this kind belongs to.
    #[must_use]
    pub const fn domain(self) -> ErrorDomain {
        match self {
            ErrorKind::InvalidArgument
            | ErrorKind::ArgumentTooSmall
            | ErrorKind::ArgumentExceedsMaximum
            | ErrorKind::UnsupportedValue => ErrorDomain::Arguments,
            ErrorKind::ConversionInvalidInput | ErrorKind::ConversionInvalidOutput => {
                ErrorDomain::Conversion
            }
        }
    }
}

/// One message in an [`Error`] chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// The kind the layer that added this message reported.
    pub kind: ErrorKind,
    /// Human readable description.
    pub message: Cow<'static, str>,
}

/// An accumulated failure.
///
/// Errors are created by the innermost failing operation with [`Error::set`]
/// and grow by one message per layer they pass through
/// ([`Error::add_message`], [`ResultExt::context`]). The plain `Display` form
/// prints the outermost message; the alternate form (`{:#}`) prints the whole
/// chain, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    entries: Vec<ErrorEntry>,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Starts a new error chain.
    pub fn set(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Error {
            entries: vec![ErrorEntry {
                kind,
                message: message.into(),
            }],
        }
    }

    /// Appends a message from an outer layer.
    #[must_use]
    pub fn add_message(mut self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        self.entries.push(ErrorEntry {
            kind,
            message: message.into(),
        });
        self
    }

    /// The kind set by the innermost failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.entries[0].kind
    }

    /// The domain of [`Error::kind`].
    #[must_use]
    pub fn domain(&self) -> ErrorDomain {
        self.kind().domain()
    }

    /// Every entry, innermost first.
    #[must_use]
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Every message, innermost first.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.message.as_ref())
    }

    /// The most recently added message.
    #[must_use]
    pub fn last_message(&self) -> &str {
        // `entries` is never empty: `set` is the only constructor.
        self.entries
            .last()
            .map_or("", |entry| entry.message.as_ref())
    }

    /// Writes every message, one per line, innermost first.
    ///
    /// # Errors
    ///
    /// Propagates failures of the writer.
    pub fn backtrace<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for message in self.messages() {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let mut first = true;
            for message in self.messages() {
                if !first {
                    f.write_str("\n")?;
                }
                first = false;
                f.write_str(message)?;
            }
            Ok(())
        } else {
            f.write_str(self.last_message())
        }
    }
}

impl core::error::Error for Error {}

/// Adds a message to the error path of a [`Result`].
pub trait ResultExt<T> {
    /// Appends `message` to the error chain, if any.
    ///
    /// # Errors
    ///
    /// Returns the same error with one more message.
    fn context(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message lazily.
    ///
    /// # Errors
    ///
    /// Returns the same error with one more message.
    fn with_context<M, F>(self, kind: ErrorKind, message: F) -> Result<T>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;

    /// Appends `message` under the kind the chain already carries.
    ///
    /// # Errors
    ///
    /// Returns the same error with one more message.
    fn describe(self, message: impl Into<Cow<'static, str>>) -> Result<T>;

    /// Like [`ResultExt::describe`], building the message only on error.
    ///
    /// # Errors
    ///
    /// Returns the same error with one more message.
    fn describe_with<M, F>(self, message: F) -> Result<T>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|error| error.add_message(kind, message))
    }

    fn with_context<M, F>(self, kind: ErrorKind, message: F) -> Result<T>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        self.map_err(|error| error.add_message(kind, message()))
    }

    fn describe(self, message: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|error| {
            let kind = error.kind();
            error.add_message(kind, message)
        })
    }

    fn describe_with<M, F>(self, message: F) -> Result<T>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        self.map_err(|error| {
            let kind = error.kind();
            error.add_message(kind, message())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;

    fn chained() -> Error {
        Error::set(ErrorKind::ArgumentTooSmall, "destination too small")
            .add_message(ErrorKind::ConversionInvalidOutput, "unable to copy character")
            .add_message(ErrorKind::ConversionInvalidOutput, "unable to copy UTF-8 string")
    }

    #[test]
    fn kind_is_set_once() {
        let error = chained();
        assert_eq!(error.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(error.domain(), ErrorDomain::Arguments);
        assert_eq!(error.entries().len(), 3);
    }

    #[test]
    fn display_prints_outermost_message() {
        assert_eq!(chained().to_string(), "unable to copy UTF-8 string");
    }

    #[test]
    fn alternate_display_prints_chain() {
        let rendered = alloc::format!("{:#}", chained());
        insta::assert_snapshot!(rendered, @r"
        destination too small
        unable to copy character
        unable to copy UTF-8 string
        ");
    }

    #[test]
    fn backtrace_writes_one_line_per_message() {
        let mut out = String::new();
        chained().backtrace(&mut out).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.ends_with("unable to copy UTF-8 string\n"));
    }

    #[test]
    fn context_only_touches_errors() {
        let ok: Result<u8> = Ok(1);
        assert_eq!(ok.context(ErrorKind::InvalidArgument, "unused"), Ok(1));

        let err: Result<u8> = Err(Error::set(ErrorKind::UnsupportedValue, "bad tag"));
        let err = err
            .with_context(ErrorKind::InvalidArgument, || "outer".to_string())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
        assert_eq!(err.messages().collect::<alloc::vec::Vec<_>>(), ["bad tag", "outer"]);

        let described: Result<u8> = Err(err);
        let described = described.describe("summary").unwrap_err();
        assert_eq!(described.entries()[2].kind, ErrorKind::UnsupportedValue);
    }

    #[test]
    fn describe_with_builds_message_only_on_error() {
        let ok: Result<u8> = Ok(1);
        assert_eq!(
            ok.describe_with(|| -> String { panic!("message built on success") }),
            Ok(1)
        );

        let err: Result<u8> = Err(Error::set(ErrorKind::ArgumentTooSmall, "short"));
        let err = err.describe_with(|| "summary".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentTooSmall);
        assert_eq!(err.to_string(), "summary");
    }

    #[test]
    fn conversion_kinds_are_in_conversion_domain() {
        assert_eq!(
            ErrorKind::ConversionInvalidInput.domain(),
            ErrorDomain::Conversion
        );
        assert_eq!(
            ErrorKind::ConversionInvalidOutput.domain(),
            ErrorDomain::Conversion
        );
    }
}
