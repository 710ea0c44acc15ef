//! `urlkit parse <input>` – print URL components as JSON.

use anyhow::Result;
use urlkit_core::config::UrlKitConfig;
use urlkit_core::url_model::parse_with;

use super::input::read_input;

pub fn run_parse(cfg: &UrlKitConfig, input: &str, slashes_denote_host: bool) -> Result<()> {
    let text = read_input(input)?;
    let url = parse_with(&text, slashes_denote_host || cfg.parse.slashes_denote_host);
    println!("{}", url.to_json()?);
    Ok(())
}
