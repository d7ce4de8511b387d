use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const INPUT_PROMPT: &str = "Enter path to your courses CSV (e.g. courses.csv): ";

/// Prompt user with a message and return their trimmed input.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    read_answer(std::io::stdin().lock())
}

/// Read one line of input and trim it. End of input reads as empty.
fn read_answer<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}
