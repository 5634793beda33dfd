use crate::types::Line;
use anyhow::{Context, Result};
use std::io::Write;

/// Writes extracted lines as plain newline-terminated text
pub struct LineWriter<W: Write> {
    writer: W,
    sentinel: String,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W, sentinel: impl Into<String>) -> Self {
        LineWriter {
            writer,
            sentinel: sentinel.into(),
        }
    }

    pub fn write_lines(&mut self, lines: &[Line]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line.render(&self.sentinel))
                .context("Failed to write line")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}
