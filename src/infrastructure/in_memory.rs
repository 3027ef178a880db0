use crate::domain::ports::OutputSink;
use crate::error::Result;

/// An output sink that records every emitted line.
///
/// Ideal for testing, or for embedding a shop where the caller wants the
/// lines back instead of printed.
#[derive(Debug, Default, Clone)]
pub struct InMemorySink {
    lines: Vec<String>,
}

impl InMemorySink {
    /// Creates a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for InMemorySink {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
