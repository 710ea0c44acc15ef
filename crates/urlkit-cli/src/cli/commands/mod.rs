//! CLI command handlers, one file per command.

mod bench;
mod decode;
mod encode;
mod format;
mod input;
mod parse;

pub use bench::run_bench;
pub use decode::run_decode;
pub use encode::run_encode;
pub use format::run_format;
pub use parse::run_parse;

#[cfg(test)]
pub(crate) use decode::decode_options;
#[cfg(test)]
pub(crate) use encode::encode_options;
#[cfg(test)]
pub(crate) use input::strip_line_ending;
