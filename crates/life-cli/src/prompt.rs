//! Reading the number of generations from the operator.

use life_core::{Error, Result};
use std::io::{BufRead, Write};
use tracing::warn;

pub const PROMPT: &str = "Please enter the number of generations to display: ";

/// Parse one line of operator input as a positive generation count.
pub fn parse_generation_count(line: &str) -> Result<u64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("no number was entered".to_string()));
    }

    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as u64),
        Ok(n) => Err(Error::InvalidInput(format!(
            "the number of generations must be at least 1, got {n}"
        ))),
        Err(_) => Err(Error::InvalidInput(format!(
            "'{trimmed}' is not a whole number"
        ))),
    }
}

/// Prompt until a valid count is entered.
///
/// Invalid lines are reported on `output` and the prompt repeats. Running
/// out of input first is an error.
pub fn read_generation_count<R, W>(input: &mut R, output: &mut W) -> Result<u64>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(Error::InvalidInput(
                "input ended before a generation count was entered".to_string(),
            ));
        }

        match parse_generation_count(&line) {
            Ok(count) => return Ok(count),
            Err(err) => {
                warn!(input = %line.trim(), "Rejected generation count");
                writeln!(output, "{err}. Please try again.")?;
            }
        }
    }
}
