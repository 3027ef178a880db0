use crate::domain::ports::OutputSink;
use crate::error::Result;
use std::io::Write;

/// Writes each emitted line, newline-terminated, to any `Write` target
/// (e.g. Stdout).
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes an empty line, used to separate orders.
    pub fn separator(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}
