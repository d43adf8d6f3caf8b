use std::io::{self, BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token},
};

/// Borrowed input and output streams of a running interpreter.
///
/// Builtins are plain function pointers, so the interpreter lends them its
/// streams through this handle for the duration of one call.
pub struct Io<'a> {
    pub input:  &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

impl<'a> Io<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` at the end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    /// Writes `text` without a newline and flushes, so a prompt is visible
    /// before the program blocks on input.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Writes `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Attaches the position of the call or statement performing the I/O to a
/// failure.
pub fn positioned<T>(result: io::Result<T>, token: &Token) -> EvalResult<T> {
    result.map_err(|e| RuntimeError::Io { details: e.to_string(),
                                          at:      token.position(), })
}
