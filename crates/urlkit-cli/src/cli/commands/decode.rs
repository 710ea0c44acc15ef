//! `urlkit decode <input>` – decode percent-escapes.

use anyhow::Result;
use urlkit_core::codec::{decode_with, DecodeOptions, DECODE_COMPONENT_CHARS};
use urlkit_core::config::UrlKitConfig;

use super::input::read_input;
use crate::cli::ExcludeArgs;

pub(crate) fn decode_options<'a>(
    cfg: &'a UrlKitConfig,
    policy: &'a ExcludeArgs,
) -> DecodeOptions<'a> {
    DecodeOptions {
        exclude: policy.resolve(DECODE_COMPONENT_CHARS, cfg.decode_options().exclude),
    }
}

pub fn run_decode(cfg: &UrlKitConfig, input: &str, policy: &ExcludeArgs) -> Result<()> {
    let text = read_input(input)?;
    let opts = decode_options(cfg, policy);
    println!("{}", decode_with(&text, &opts));
    Ok(())
}
