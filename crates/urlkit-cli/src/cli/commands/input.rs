//! Reading command input from an argument or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use urlkit_core::error::input_from_bytes;

/// Returns `arg` itself, or all of stdin when `arg` is `-` (minus one
/// trailing line ending). Non-UTF-8 stdin is an invalid argument.
pub fn read_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("read stdin")?;
    let text = input_from_bytes(&buf)?;
    Ok(strip_line_ending(text).to_string())
}

pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
