//! Line-oriented terminal I/O used by the classifier.
//!
//! The classifier never touches stdin/stdout directly; it goes through a
//! [`Console`], so scripted runs and tests can feed it in-memory streams.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

pub trait Console {
    /// Write `prompt` without a trailing newline and flush it.
    fn show_prompt(&mut self, prompt: &str) -> io::Result<()>;

    /// Write `line` followed by a newline.
    fn show_line(&mut self, line: &str) -> io::Result<()>;

    /// Read one line with its terminator stripped. `Ok(None)` means the
    /// stream is at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()
    }

    fn show_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(buf)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
