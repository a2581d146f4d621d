//! Line-based bounded integer prompt.
//!
//! Bounds work as `(min, max]` with `min` doubling as the exit sentinel:
//! `min` exits, `min < x <= max` is accepted, anything else (including text
//! that does not parse) is reported and asked again without a retry limit.

use std::io::{self, BufRead, Write};

use crate::output::{report, INVALID_INPUT};
use crate::terminal::ColorPalette;

/// Marker printed before every read.
pub const INPUT_MARKER: &str = "\n ENTER INPUT > ";

/// Classification of one line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Exit,
    Value(i64),
    Invalid,
}

/// Classify the first whitespace-delimited token of `input` against the bounds.
pub fn classify(input: &str, min: i64, max: i64) -> PromptOutcome {
    let token = input.split_whitespace().next().unwrap_or("");
    match token.parse::<i64>() {
        Ok(n) if n == min => PromptOutcome::Exit,
        Ok(n) if n > min && n <= max => PromptOutcome::Value(n),
        _ => PromptOutcome::Invalid,
    }
}

/// Integer prompt over any line reader, counting rejected attempts.
pub struct BoundedPrompt<R, W> {
    reader: R,
    writer: W,
    palette: ColorPalette,
    retries: usize,
}

impl<R: BufRead, W: Write> BoundedPrompt<R, W> {
    pub fn new(reader: R, writer: W, palette: ColorPalette) -> Self {
        Self {
            reader,
            writer,
            palette,
            retries: 0,
        }
    }

    /// Number of inputs rejected so far.
    pub fn retries(&self) -> usize {
        self.retries
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Ask until the input resolves. `Ok(None)` is the exit sentinel, which is
    /// also returned when the input stream is closed.
    pub fn prompt_int(&mut self, min: i64, max: i64) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_with_marker(INPUT_MARKER)? else {
                return Ok(None);
            };
            match classify(&line, min, max) {
                PromptOutcome::Exit => return Ok(None),
                PromptOutcome::Value(n) => return Ok(Some(n)),
                PromptOutcome::Invalid => {
                    self.retries += 1;
                    report(&mut self.writer, &self.palette, INVALID_INPUT)?;
                }
            }
        }
    }

    /// Read one trimmed line of free text; `None` when the stream is closed.
    pub fn prompt_text(&mut self, label: &str) -> io::Result<Option<String>> {
        let marker = format!("\n {} > ", label);
        Ok(self
            .read_with_marker(&marker)?
            .map(|line| line.trim().to_string()))
    }

    fn read_with_marker(&mut self, marker: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", marker)?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 still make a line; they just never parse.
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }
}
