use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

/// Receives human readable warnings about failed conversions.
///
/// A sink is write-only: nothing it does feeds back into the conversion.
pub trait DiagnosticSink {
    /// Records one warning.
    fn warning(&mut self, args: fmt::Arguments<'_>);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn warning(&mut self, args: fmt::Arguments<'_>) {
        (**self).warning(args);
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warning(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Keeps every warning in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    warnings: Vec<String>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings recorded so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Removes and returns the recorded warnings.
    pub fn take(&mut self) -> Vec<String> {
        core::mem::take(&mut self.warnings)
    }
}

impl DiagnosticSink for CollectingSink {
    fn warning(&mut self, args: fmt::Arguments<'_>) {
        self.warnings.push(args.to_string());
    }
}

/// Formats warnings into a [`fmt::Write`], one per line.
///
/// Write failures are dropped.
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

impl<W: fmt::Write> WriteSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        WriteSink { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> DiagnosticSink for WriteSink<W> {
    fn warning(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.writer.write_fmt(args);
        let _ = self.writer.write_char('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.warning(format_args!("first {}", 1));
        sink.warning(format_args!("second"));
        assert_eq!(sink.warnings(), ["first 1", "second"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn write_sink_terminates_lines() {
        fn report<S: DiagnosticSink>(mut sink: S, message: &str) {
            sink.warning(format_args!("{message}"));
        }

        let mut sink = WriteSink::new(String::new());
        report(&mut sink, "a");
        report(&mut sink, "b");
        assert_eq!(sink.into_inner(), "a\nb\n");
    }
}
