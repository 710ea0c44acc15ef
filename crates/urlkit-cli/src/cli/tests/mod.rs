//! CLI argument parsing tests.

mod options;

use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_encode_defaults() {
    match parse(&["urlkit", "encode", "hello world"]) {
        CliCommand::Encode {
            input,
            policy,
            no_keep_escaped,
        } => {
            assert_eq!(input, "hello world");
            assert!(!policy.component);
            assert!(policy.exclude.is_none());
            assert!(!no_keep_escaped);
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_encode_flags() {
    match parse(&["urlkit", "encode", "a%20b", "--component", "--no-keep-escaped"]) {
        CliCommand::Encode {
            policy,
            no_keep_escaped,
            ..
        } => {
            assert!(policy.component);
            assert!(no_keep_escaped);
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_encode_component_conflicts_with_exclude() {
    assert!(Cli::try_parse_from(["urlkit", "encode", "x", "--component", "--exclude", "/"]).is_err());
}

#[test]
fn cli_parse_decode_exclude() {
    match parse(&["urlkit", "decode", "a%2Fb", "--exclude", "/"]) {
        CliCommand::Decode { input, policy } => {
            assert_eq!(input, "a%2Fb");
            assert_eq!(policy.exclude.as_deref(), Some("/"));
        }
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_parse() {
    match parse(&["urlkit", "parse", "//host/path"]) {
        CliCommand::Parse {
            input,
            slashes_denote_host,
        } => {
            assert_eq!(input, "//host/path");
            assert!(!slashes_denote_host);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_slashes_denote_host() {
    match parse(&["urlkit", "parse", "//host/path", "--slashes-denote-host"]) {
        CliCommand::Parse {
            slashes_denote_host,
            ..
        } => assert!(slashes_denote_host),
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_format_stdin() {
    match parse(&["urlkit", "format", "-"]) {
        CliCommand::Format { record } => assert_eq!(record, "-"),
        _ => panic!("expected Format"),
    }
}

#[test]
fn cli_parse_bench() {
    match parse(&["urlkit", "bench"]) {
        CliCommand::Bench { iterations } => assert!(iterations.is_none()),
        _ => panic!("expected Bench"),
    }
    match parse(&["urlkit", "bench", "--iterations", "500"]) {
        CliCommand::Bench { iterations } => assert_eq!(iterations, Some(500)),
        _ => panic!("expected Bench"),
    }
}

#[test]
fn cli_rejects_missing_input() {
    assert!(Cli::try_parse_from(["urlkit", "encode"]).is_err());
}
