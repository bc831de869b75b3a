//! Console output behind a trait, so tests can capture lines in memory.

/// A destination for `cetak` output, one line per call.
pub trait OutputSink {
    /// Writes one line, without a trailing newline in `text`.
    fn write_line(&mut self, text: &str);
}

/// The production [`OutputSink`]; each line goes to standard output.
#[derive(Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}
