//! Append-only output stream.

use crate::error::Result;
use std::io::Write;

const INDENT: &str = "    ";

/// Sequential writer over an [`std::io::Write`] target.
///
/// Text is only ever appended. Indentation is written lazily when the first
/// text of a line arrives, so a line's indent never has to be revised.
/// Any failed write is returned to the caller, which aborts the run.
pub struct Sink<W: Write> {
    out: W,
    indent: usize,
    at_line_start: bool,
}

impl<W: Write> Sink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            indent: 0,
            at_line_start: true,
        }
    }

    /// Append `text`, which must not contain a newline.
    pub fn write(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.write_all(INDENT.as_bytes())?;
            }
            self.at_line_start = false;
        }
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// End the current line.
    pub fn newline(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
