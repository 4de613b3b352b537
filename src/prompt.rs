//! Interactive field collection over generic reader/writer pairs.
//!
//! All prompts go through [`Prompter`], which is generic over `BufRead` and
//! `Write` so the whole console session can be scripted in tests with
//! in-memory buffers. Numeric prompts parse defensively: a token that fails
//! to parse prints the [`InvalidInput`](crate::error::DeskError::InvalidInput)
//! message and re-prompts instead of corrupting the rest of the session.

use std::io::{self, BufRead, Write};

use crate::error::{DeskError, Result};
use crate::ui::Theme;

/// Prompts for and reads user-supplied fields.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, theme: Theme) -> Self {
        Self {
            reader,
            writer,
            theme,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Writes one full line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Emits `count` blank lines. Used for screen clearing.
    pub fn blank_lines(&mut self, count: u16) -> Result<()> {
        for _ in 0..count {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Prompts with `label: ` and reads a full line, trailing newline
    /// stripped. Embedded spaces are preserved (job descriptions).
    pub fn line(&mut self, label: &str) -> Result<String> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;
        let raw = self.read_raw_line()?;
        Ok(raw.trim().to_string())
    }

    /// Prompts for a single whitespace-delimited token, re-prompting until
    /// a non-empty token arrives. Anything after the first token on the line
    /// is discarded.
    pub fn token(&mut self, label: &str) -> Result<String> {
        loop {
            let line = self.line(label)?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
            let hint = self.theme.warn.apply_to("Please enter a value.").to_string();
            self.say(&hint)?;
        }
    }

    /// Prompts for an unsigned integer, re-prompting on parse failure with
    /// the `InvalidInput` message. This loop never fails except on IO error.
    pub fn number(&mut self, label: &str) -> Result<u32> {
        loop {
            let token = self.token(label)?;
            match token.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let err =
                        DeskError::InvalidInput(format!("expected a whole number, got '{token}'"));
                    let line = self.theme.warn.apply_to(err.to_string()).to_string();
                    self.say(&line)?;
                }
            }
        }
    }

    /// Password collection with confirmation: prompts for both fields until
    /// they match exactly. Every mismatch re-prompts for *both* fields.
    pub fn password(&mut self) -> Result<String> {
        loop {
            let password = self.token("Enter password")?;
            let confirm = self.token("Confirm password")?;
            if password == confirm {
                return Ok(password);
            }
            let warning = self
                .theme
                .warn
                .apply_to("Passwords do not match! Try again.")
                .to_string();
            self.say(&warning)?;
        }
    }

    /// Waits for an acknowledgment keypress (any line, content ignored).
    pub fn pause(&mut self) -> Result<()> {
        self.read_raw_line()?;
        Ok(())
    }

    // A zero-byte read means the input stream closed. Mapping it to an IO
    // error lets piped and scripted sessions terminate instead of spinning
    // on the re-prompt loops.
    fn read_raw_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Err(DeskError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_string()), Vec::new(), Theme::plain())
    }

    fn output(prompter: Prompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(prompter.writer).unwrap()
    }

    #[test]
    fn line_preserves_embedded_spaces() {
        let mut p = prompter("oil change and filter\n");
        assert_eq!(p.line("Enter job description").unwrap(), "oil change and filter");
    }

    #[test]
    fn token_takes_first_whitespace_delimited_word() {
        let mut p = prompter("alice trailing junk\n");
        assert_eq!(p.token("Enter user id").unwrap(), "alice");
    }

    #[test]
    fn token_reprompts_on_blank_line() {
        let mut p = prompter("\n   \nbob\n");
        assert_eq!(p.token("Enter user id").unwrap(), "bob");
        let out = output(p);
        assert_eq!(out.matches("Please enter a value.").count(), 2);
    }

    #[test]
    fn number_reprompts_on_parse_failure() {
        let mut p = prompter("abc\n-5\n42\n");
        assert_eq!(p.number("Enter engine id").unwrap(), 42);
        let out = output(p);
        assert!(out.contains("expected a whole number, got 'abc'"));
        assert!(out.contains("expected a whole number, got '-5'"));
    }

    #[test]
    fn password_mismatch_reprompts_both_fields() {
        let mut p = prompter("pw1\npw2\npw3\npw3\n");
        assert_eq!(p.password().unwrap(), "pw3");
        let out = output(p);
        assert_eq!(out.matches("Enter password: ").count(), 2);
        assert_eq!(out.matches("Confirm password: ").count(), 2);
        assert!(out.contains("Passwords do not match! Try again."));
    }

    #[test]
    fn eof_surfaces_as_io_error() {
        let mut p = prompter("");
        assert!(matches!(p.token("Enter user id"), Err(DeskError::Io(_))));
    }
}
