//! `urlkit format <json>` – join a URL record back into a string.

use anyhow::{Context, Result};
use urlkit_core::url_model::{format, ParsedUrl};

use super::input::read_input;

pub fn run_format(record: &str) -> Result<()> {
    let json = read_input(record)?;
    let url = ParsedUrl::from_json(&json).context("read URL record")?;
    println!("{}", format(&url));
    Ok(())
}
