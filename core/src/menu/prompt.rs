use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Parse a 1-based menu choice. Surrounding whitespace is ignored.
pub fn parse_selection(input: &str, upper: usize) -> Result<usize, SelectionError> {
    if upper == 0 {
        return Err(SelectionError::NoOptions);
    }
    let trimmed = input.trim();
    let selection = trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber {
            input: trimmed.to_string(),
            upper,
        })?;
    if selection < 1 || selection as u64 > upper as u64 {
        return Err(SelectionError::OutOfRange { selection, upper });
    }
    Ok(selection as usize)
}

/// Prompt until the user enters a valid choice in `1..=upper`. Returns `None`
/// once the input is exhausted.
pub fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    upper: usize,
) -> io::Result<Option<usize>> {
    if upper == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            SelectionError::NoOptions,
        ));
    }
    loop {
        write!(output, "{} >  ", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_selection(&line, upper) {
            Ok(selection) => return Ok(Some(selection)),
            Err(e) => {
                warn!(input = line.trim(), "rejected menu selection");
                writeln!(output, "\n{}\n", e)?;
            }
        }
    }
}

/// Block until the user hits enter. Returns `false` if the input is exhausted.
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Press ENTER to continue...")?;
    output.flush()?;
    let mut line = String::new();
    Ok(input.read_line(&mut line)? != 0)
}

#[derive(Error, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{input:?} is not a number. Please enter a number from 1 to {upper}.")]
    NotANumber { input: String, upper: usize },
    #[error("{selection} is not an option. Please enter a number from 1 to {upper}.")]
    OutOfRange { selection: i64, upper: usize },
    #[error("There is nothing to select")]
    NoOptions,
}
