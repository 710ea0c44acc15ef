pub mod config;
pub mod error;
pub mod logging;

pub mod bench;
pub mod codec;
pub mod url_model;

pub use codec::{decode, decode_with, encode, encode_utf16, encode_with};
pub use codec::{DecodeOptions, EncodeCache, EncodeOptions};
pub use error::{Result, UrlKitError};
pub use url_model::{format, parse, parse_with, ParsedUrl};
