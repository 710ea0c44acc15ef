//! Tests for combining config defaults with command-line overrides.

use crate::cli::commands::{decode_options, encode_options, strip_line_ending};
use crate::cli::ExcludeArgs;
use urlkit_core::codec::{COMPONENT_CHARS, DECODE_DEFAULT_CHARS, DEFAULT_CHARS};
use urlkit_core::config::UrlKitConfig;

#[test]
fn encode_options_default_to_config() {
    let cfg = UrlKitConfig::default();
    let args = ExcludeArgs::default();
    let opts = encode_options(&cfg, &args, false);
    assert_eq!(opts.exclude, DEFAULT_CHARS);
    assert!(opts.keep_escaped);
}

#[test]
fn encode_options_overrides() {
    let mut cfg = UrlKitConfig::default();
    cfg.encode.exclude = Some("/".to_string());

    let args = ExcludeArgs::default();
    let configured = encode_options(&cfg, &args, true);
    assert_eq!(configured.exclude, "/");
    assert!(!configured.keep_escaped);

    let component = ExcludeArgs {
        component: true,
        exclude: None,
    };
    assert_eq!(encode_options(&cfg, &component, false).exclude, COMPONENT_CHARS);

    let explicit = ExcludeArgs {
        component: false,
        exclude: Some("@".to_string()),
    };
    assert_eq!(encode_options(&cfg, &explicit, false).exclude, "@");
}

#[test]
fn no_keep_escaped_wins_over_config() {
    let mut cfg = UrlKitConfig::default();
    cfg.encode.keep_escaped = true;
    let args = ExcludeArgs::default();
    assert!(encode_options(&cfg, &args, false).keep_escaped);
    assert!(!encode_options(&cfg, &args, true).keep_escaped);

    cfg.encode.keep_escaped = false;
    assert!(!encode_options(&cfg, &args, false).keep_escaped);
}

#[test]
fn decode_options_resolution() {
    let cfg = UrlKitConfig::default();
    let args = ExcludeArgs::default();
    assert_eq!(
        decode_options(&cfg, &args).exclude,
        DECODE_DEFAULT_CHARS
    );
    let component = ExcludeArgs {
        component: true,
        exclude: None,
    };
    assert_eq!(decode_options(&cfg, &component).exclude, "");
}

#[test]
fn stdin_line_ending_is_stripped_once() {
    assert_eq!(strip_line_ending("a b\n"), "a b");
    assert_eq!(strip_line_ending("a b\r\n"), "a b");
    assert_eq!(strip_line_ending("a b\n\n"), "a b\n");
    assert_eq!(strip_line_ending("a b"), "a b");
}
