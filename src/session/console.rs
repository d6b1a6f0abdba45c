//! Line-based console I/O
//!
//! Wraps any buffered reader and writer so sessions can run against stdin
//! and stdout or against in-memory buffers. Input bytes that are not valid
//! UTF-8 are decoded lossily.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::Result;

/// Interactive input/output pair
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Words left over from the last token read
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Writer for free-form output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write one line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one raw line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Show `message` without a newline and read the reply line. Words left
    /// over from a token read on the same line are returned first.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(Some(rest.join(" ")));
        }
        self.read_line()
    }

    /// Show `message` and read the next whitespace-delimited word, skipping
    /// blank lines. The rest of the line is kept for later reads. `None` at
    /// end of input.
    pub fn prompt_token(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        while self.pending.is_empty() {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
            }
        }
        Ok(self.pending.pop_front())
    }

    /// Take back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
