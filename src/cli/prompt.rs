//! Interactive prompts and user-facing output.

use std::io::{self, BufRead, Write};

use super::args::parse_yes_no;

/// Reads answers from `input` and writes prompts and progress to `output`.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.
    ///
    /// Returns `Ok(None)` if input ends before anything was typed. A final
    /// line without a trailing newline is accepted.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Ask until a yes/no token is given.
    ///
    /// Returns `Ok(None)` if input ends first.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(Some(yes));
            }
            writeln!(self.output, "Please answer y or n.")?;
        }
    }

    /// Print one line of user-facing output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
