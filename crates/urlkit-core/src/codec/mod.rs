//! Percent-encoding codec.
//!
//! `encode` escapes every character outside `[0-9A-Za-z]` and a caller-supplied
//! exclude set; `decode` reverses well-formed escapes and leaves everything
//! else untouched. Neither direction fails: malformed input is carried through
//! (decode) or replaced by the escaped replacement character (encode).

mod decode;
mod encode;
mod table;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_utf16, encode_with};
pub use table::{EncodeCache, EncodeTable};

/// Characters left unescaped by `encode` in a full URL (besides alphanumerics).
pub const DEFAULT_CHARS: &str = ";/?:@&=+$,-_.!~*'()#";

/// Characters left unescaped by `encode` in a single URL component.
pub const COMPONENT_CHARS: &str = "-_.!~*'()";

/// Escapes `decode` keeps as-is in a full URL: structural separators.
pub const DECODE_DEFAULT_CHARS: &str = ";/?:@&=+$,#";

/// Escapes `decode` keeps as-is in a single component (none).
pub const DECODE_COMPONENT_CHARS: &str = "";

/// Policy for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions<'a> {
    /// Characters to leave unescaped in addition to `[0-9A-Za-z]`.
    /// Only ASCII characters have an effect.
    pub exclude: &'a str,
    /// Copy an existing `%XX` escape through instead of escaping its `%`.
    pub keep_escaped: bool,
}

impl<'a> EncodeOptions<'a> {
    /// Component policy: escape everything except [`COMPONENT_CHARS`].
    pub fn component() -> Self {
        Self {
            exclude: COMPONENT_CHARS,
            keep_escaped: true,
        }
    }

    pub fn with_exclude(exclude: &'a str) -> Self {
        Self {
            exclude,
            ..Self::default()
        }
    }

    pub fn keep_escaped(mut self, keep: bool) -> Self {
        self.keep_escaped = keep;
        self
    }
}

impl Default for EncodeOptions<'_> {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_CHARS,
            keep_escaped: true,
        }
    }
}

/// Policy for [`decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions<'a> {
    /// ASCII characters whose escapes stay escaped.
    pub exclude: &'a str,
}

impl<'a> DecodeOptions<'a> {
    /// Component policy: decode every valid escape.
    pub fn component() -> Self {
        Self {
            exclude: DECODE_COMPONENT_CHARS,
        }
    }

    pub fn with_exclude(exclude: &'a str) -> Self {
        Self { exclude }
    }
}

impl Default for DecodeOptions<'_> {
    fn default() -> Self {
        Self {
            exclude: DECODE_DEFAULT_CHARS,
        }
    }
}

/// Value of an ASCII hex digit, either case.
pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Appends `%XX` (uppercase hex) for one byte.
pub(crate) fn push_escaped(out: &mut String, b: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(HEX[(b >> 4) as usize] as char);
    out.push(HEX[(b & 0x0F) as usize] as char);
}
