//! CLI for the urlkit toolkit.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use urlkit_core::config;

use commands::{run_bench, run_decode, run_encode, run_format, run_parse};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: percent-encoding codec and URL parser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which safe-character set to use. Without flags the configured (or URL
/// default) set applies.
#[derive(Debug, Clone, Default, Args)]
pub struct ExcludeArgs {
    /// Use the single-component set (escapes `/`, `?`, `&`, ...).
    #[arg(long, conflicts_with = "exclude")]
    pub component: bool,

    /// Explicit characters to leave alone, besides alphanumerics.
    #[arg(long, value_name = "CHARS")]
    pub exclude: Option<String>,
}

impl ExcludeArgs {
    /// Resolves the exclude set: `--component`, then `--exclude`, then `configured`.
    pub fn resolve<'a>(&'a self, component_set: &'static str, configured: &'a str) -> &'a str {
        if self.component {
            component_set
        } else {
            self.exclude.as_deref().unwrap_or(configured)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Percent-encode text (`-` reads stdin).
    Encode {
        input: String,

        #[command(flatten)]
        policy: ExcludeArgs,

        /// Escape the `%` of existing escapes too.
        #[arg(long)]
        no_keep_escaped: bool,
    },

    /// Decode percent-escapes (`-` reads stdin).
    Decode {
        input: String,

        #[command(flatten)]
        policy: ExcludeArgs,
    },

    /// Split a URL into components and print them as JSON.
    Parse {
        input: String,

        /// Treat a scheme-less `//host/path` as having a host.
        #[arg(long)]
        slashes_denote_host: bool,
    },

    /// Join a JSON URL record (as printed by `parse`) back into a URL.
    Format {
        /// JSON record, or `-` to read it from stdin.
        record: String,
    },

    /// Benchmark parse/format/encode/decode on representative inputs.
    Bench {
        /// Measured iterations per case (default from config).
        #[arg(long, value_name = "N")]
        iterations: Option<u32>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Encode {
                input,
                policy,
                no_keep_escaped,
            } => run_encode(&cfg, &input, &policy, no_keep_escaped)?,
            CliCommand::Decode { input, policy } => run_decode(&cfg, &input, &policy)?,
            CliCommand::Parse {
                input,
                slashes_denote_host,
            } => run_parse(&cfg, &input, slashes_denote_host)?,
            CliCommand::Format { record } => run_format(&record)?,
            CliCommand::Bench { iterations } => run_bench(&cfg, iterations)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
