//! Line-oriented prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts are echoed to, for callers that print between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks `question` until `accept` holds for the trimmed, lowercased answer.
    ///
    /// `note` is printed before every attempt. There is no retry limit; only
    /// end of input stops the loop.
    pub fn ask<F>(&mut self, note: &str, question: &str, accept: F) -> io::Result<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            writeln!(self.output, "{note}")?;
            let answer = self.read_answer(question)?;
            if accept(&answer) {
                return Ok(answer);
            }
            tracing::debug!(answer = %answer, "Rejected input");
        }
    }

    /// Returns true only for `yes`.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.read_answer(question)? == "yes")
    }

    /// Returns true only for `no`; any other answer counts as going on.
    pub fn declines(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.read_answer(question)? == "no")
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_lowercase())
    }
}
