use crate::core::name::{capitalize, normalize};
use crate::domain::model::Name;
use crate::utils::error::{LimerickError, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const NAME_PROMPT: &str = "Enter your name: ";
pub const NAME_REJECTED: &str = "Please only use letters!";
pub const YES_NO_REJECTED: &str = "Please enter Y/N only! ";
pub const RATING_PROMPT: &str = "On a scale of 1 to 5, how would you rate your limerick? ";
pub const RATING_REJECTED: &str = "Please use a scale of 1 to 5!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YesNoError {
    #[error("answer is not Y or N")]
    NotYesOrNo,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating is not an integer")]
    NotANumber,

    #[error("rating {0} is outside 1..=5")]
    OutOfRange(i64),
}

/// Line-oriented prompt/answer channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one line of input.
    /// Bytes that are not UTF-8 become U+FFFD, which no validator accepts,
    /// so the caller re-prompts. Returns [`LimerickError::InputClosed`] at
    /// end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(LimerickError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Exactly one letter, `y` or `n` in either case.
pub fn parse_yes_no(raw: &str) -> std::result::Result<bool, YesNoError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(char::is_alphabetic) {
        return Err(YesNoError::NotYesOrNo);
    }
    match capitalize(raw).as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(YesNoError::NotYesOrNo),
    }
}

pub fn parse_rating(raw: &str) -> std::result::Result<u8, RatingError> {
    let score: i64 = raw.trim().parse().map_err(|_| RatingError::NotANumber)?;
    match u8::try_from(score) {
        Ok(score @ 1..=5) => Ok(score),
        _ => Err(RatingError::OutOfRange(score)),
    }
}

/// Re-prompts until a valid name is entered.
pub fn ask_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Name> {
    loop {
        let raw = console.ask(NAME_PROMPT)?;
        match normalize(&raw) {
            Ok(name) => return Ok(name),
            Err(e) => {
                tracing::debug!("Rejected name {:?}: {}", raw, e);
                console.say(NAME_REJECTED)?;
            }
        }
    }
}

/// Resolves an answer already read, re-prompting until it is Y or N.
pub fn resolve_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    first_answer: String,
) -> Result<bool> {
    let mut answer = first_answer;
    loop {
        match parse_yes_no(&answer) {
            Ok(decision) => return Ok(decision),
            Err(e) => {
                tracing::debug!("Rejected answer {:?}: {}", answer, e);
                answer = console.ask(YES_NO_REJECTED)?;
            }
        }
    }
}

pub fn ask_yes_no<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<bool> {
    let answer = console.ask(prompt)?;
    resolve_yes_no(console, answer)
}

/// Re-prompts until an integer in 1..=5 is entered.
pub fn ask_rating<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u8> {
    loop {
        let raw = console.ask(RATING_PROMPT)?;
        match parse_rating(&raw) {
            Ok(score) => return Ok(score),
            Err(e) => {
                tracing::debug!("Rejected rating {:?}: {}", raw, e);
                console.say(RATING_REJECTED)?;
            }
        }
    }
}
