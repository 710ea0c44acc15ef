//! Percent-encoding.

use super::table::{EncodeCache, EncodeTable};
use super::{hex_value, push_escaped, EncodeOptions};

/// UTF-8 bytes of U+FFFD, escaped. Emitted for unpaired surrogates.
const REPLACEMENT_ESCAPE: &str = "%EF%BF%BD";

/// Encodes `input` with the default URL policy ([`super::DEFAULT_CHARS`],
/// keeping existing escapes).
///
/// ```
/// use urlkit_core::codec::encode;
/// assert_eq!(encode("hello world"), "hello%20world");
/// assert_eq!(encode("already%20encoded"), "already%20encoded");
/// ```
pub fn encode(input: &str) -> String {
    encode_with(input, &EncodeOptions::default())
}

/// Encodes `input` under `opts`, using the process-wide table cache.
pub fn encode_with(input: &str, opts: &EncodeOptions<'_>) -> String {
    EncodeCache::global().encode(input, opts)
}

/// Encodes raw UTF-16 code units.
///
/// Unlike `&str`, a `u16` slice may carry unpaired surrogates; each one is
/// replaced by `%EF%BF%BD`. For well-formed text the output matches
/// [`encode_with`].
pub fn encode_utf16(units: &[u16], opts: &EncodeOptions<'_>) -> String {
    let table = EncodeCache::global().table(opts.exclude);
    let len = units.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        let unit = units[i];

        if opts.keep_escaped
            && unit == u16::from(b'%')
            && i + 2 < len
            && is_hex_unit(units[i + 1])
            && is_hex_unit(units[i + 2])
        {
            out.push('%');
            out.push(units[i + 1] as u8 as char);
            out.push(units[i + 2] as u8 as char);
            i += 3;
            continue;
        }

        if unit < 0x80 {
            out.push_str(table.get(unit as u8));
            i += 1;
            continue;
        }

        if (0xD800..=0xDFFF).contains(&unit) {
            if unit <= 0xDBFF && i + 1 < len && (0xDC00..=0xDFFF).contains(&units[i + 1]) {
                let high = u32::from(unit - 0xD800);
                let low = u32::from(units[i + 1] - 0xDC00);
                push_char_escaped(&mut out, 0x10000 + ((high << 10) | low));
                i += 2;
                continue;
            }
            out.push_str(REPLACEMENT_ESCAPE);
            i += 1;
            continue;
        }

        push_char_escaped(&mut out, u32::from(unit));
        i += 1;
    }

    out
}

/// Core byte loop shared by the cache and the free functions.
pub(super) fn encode_str(input: &str, table: &EncodeTable, keep_escaped: bool) -> String {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        if keep_escaped
            && b == b'%'
            && i + 2 < len
            && hex_value(bytes[i + 1]).is_some()
            && hex_value(bytes[i + 2]).is_some()
        {
            out.push_str(&input[i..i + 3]);
            i += 3;
            continue;
        }

        if b < 0x80 {
            out.push_str(table.get(b));
        } else {
            // Multi-byte UTF-8: escaping each byte equals escaping the code point.
            push_escaped(&mut out, b);
        }
        i += 1;
    }

    out
}

fn is_hex_unit(unit: u16) -> bool {
    unit < 0x80 && hex_value(unit as u8).is_some()
}

fn push_char_escaped(out: &mut String, code_point: u32) {
    let c = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    for b in c.encode_utf8(&mut buf).bytes() {
        push_escaped(out, b);
    }
}
