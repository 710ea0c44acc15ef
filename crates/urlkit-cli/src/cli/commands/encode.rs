//! `urlkit encode <input>` – percent-encode text.

use anyhow::Result;
use urlkit_core::codec::{encode_with, EncodeOptions, COMPONENT_CHARS};
use urlkit_core::config::UrlKitConfig;

use super::input::read_input;
use crate::cli::ExcludeArgs;

/// Combines config defaults with command-line overrides.
pub(crate) fn encode_options<'a>(
    cfg: &'a UrlKitConfig,
    policy: &'a ExcludeArgs,
    no_keep_escaped: bool,
) -> EncodeOptions<'a> {
    let configured = cfg.encode_options();
    EncodeOptions {
        exclude: policy.resolve(COMPONENT_CHARS, configured.exclude),
        keep_escaped: configured.keep_escaped && !no_keep_escaped,
    }
}

pub fn run_encode(
    cfg: &UrlKitConfig,
    input: &str,
    policy: &ExcludeArgs,
    no_keep_escaped: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let opts = encode_options(cfg, policy, no_keep_escaped);
    tracing::debug!(exclude = opts.exclude, keep_escaped = opts.keep_escaped, "encode");
    println!("{}", encode_with(&text, &opts));
    Ok(())
}
