use std::{
    io::{self, BufRead, Write},
    mem,
};

use crate::{error::Error, interpreter::evaluator::core::Interpreter};

pub const PRIMARY_PROMPT: &str = "msharp> ";
pub const CONTINUATION_PROMPT: &str = "...    ";

/// What to do with the buffered input after a line is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The input does not look complete yet; keep reading.
    Pending,
    /// The input looks complete; run it.
    Ready(String),
    /// More `}` than `{` were typed; the buffer was discarded.
    Unbalanced,
}

/// Accumulates interactive input until it looks like a complete statement.
///
/// Input looks complete once every `{` has been closed and the last line,
/// ignoring trailing whitespace, ends in `;` or `}`. Braces are counted
/// everywhere, including inside text literals, so unusual formatting can
/// submit too early or too late. The parser still has the final word.
///
/// # Example
/// ```
/// use msharp::repl::{InputBuffer, Submission};
///
/// let mut buffer = InputBuffer::new();
///
/// assert_eq!(buffer.push_line("if x {"), Submission::Pending);
/// assert_eq!(buffer.push_line("  say x;"), Submission::Pending);
/// assert_eq!(buffer.push_line("}"),
///            Submission::Ready("if x {\n  say x;\n}\n".to_string()));
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InputBuffer {
    buffer:      String,
    brace_depth: isize,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing but whitespace has been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// The prompt to show before reading the next line.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        if self.is_empty() {
            PRIMARY_PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    pub fn push_line(&mut self, line: &str) -> Submission {
        if self.is_empty() && line.trim().is_empty() {
            self.buffer.clear();
            return Submission::Pending;
        }

        self.buffer.push_str(line);
        self.buffer.push('\n');

        for c in line.chars() {
            match c {
                '{' => self.brace_depth += 1,
                '}' => self.brace_depth -= 1,
                _ => {},
            }
        }

        if self.brace_depth < 0 {
            self.clear();
            return Submission::Unbalanced;
        }

        let trimmed = line.trim_end();
        if self.brace_depth == 0 && (trimmed.ends_with(';') || trimmed.ends_with('}')) {
            self.brace_depth = 0;
            return Submission::Ready(mem::take(&mut self.buffer));
        }

        Submission::Pending
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.brace_depth = 0;
    }
}

/// Returns `true` for the inputs that end the interactive loop.
#[must_use]
pub fn is_quit_command(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.eq_ignore_ascii_case(":quit") || trimmed.eq_ignore_ascii_case("exit")
}

/// Writes a pipeline failure as a single diagnostic line.
pub fn report_error(errors: &mut impl Write, error: &Error) -> io::Result<()> {
    writeln!(errors, "M# error: {error}")
}

/// Runs the interactive loop until `:quit`, `exit` or the end of input.
///
/// Prompts and program output go to the interpreter's output; lines are read
/// from its input, which `readNumber` and `readString` share. Failures are
/// written to `errors` and the loop carries on with the variables assigned so
/// far.
///
/// # Errors
/// Only I/O failures of the loop's own streams end it with an error.
pub fn run<R: BufRead, W: Write>(interpreter: &mut Interpreter<R, W>,
                                 errors: &mut impl Write)
                                 -> io::Result<()> {
    {
        let mut io = interpreter.io();
        io.write_line("M# REPL")?;
        io.write_line("Type :quit to exit.")?;
    }

    let mut buffer = InputBuffer::new();

    loop {
        let line = {
            let mut io = interpreter.io();
            io.prompt(buffer.prompt())?;
            io.read_line()?
        };

        let Some(line) = line else {
            interpreter.io().write_line("")?;
            break;
        };

        if buffer.is_empty() && is_quit_command(&line) {
            break;
        }

        match buffer.push_line(&line) {
            Submission::Pending => {},
            Submission::Unbalanced => writeln!(errors, "M# error: Too many closing braces.")?,
            Submission::Ready(source) => {
                if let Err(e) = interpreter.execute_source(&source) {
                    report_error(errors, &e)?;
                }
            },
        }
    }

    Ok(())
}
