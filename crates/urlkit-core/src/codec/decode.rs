//! Percent-decoding (fail-soft).

use super::{hex_value, DecodeOptions};

/// Decodes `input` with the default URL policy: escapes of structural
/// separators ([`super::DECODE_DEFAULT_CHARS`]) stay escaped.
///
/// ```
/// use urlkit_core::codec::decode;
/// assert_eq!(decode("hello%20world"), "hello world");
/// assert_eq!(decode("100%"), "100%");
/// ```
pub fn decode(input: &str) -> String {
    decode_with(input, &DecodeOptions::default())
}

/// Decodes every well-formed `%XX` escape in `input` as UTF-8.
///
/// Escapes of ASCII characters listed in `opts.exclude` are copied verbatim.
/// Anything that does not form a valid escape or a valid UTF-8 sequence (lone
/// lead bytes, stray continuation bytes, overlongs, surrogates) is copied
/// through unchanged.
pub fn decode_with(input: &str, opts: &DecodeOptions<'_>) -> String {
    let bytes = input.as_bytes();
    if !bytes.contains(&b'%') {
        return input.to_string();
    }

    let mut keep = [false; 128];
    for b in opts.exclude.bytes().filter(u8::is_ascii) {
        keep[b as usize] = true;
    }

    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        let Some(lead) = escaped_byte(bytes, i) else {
            let next = bytes[i + 1..]
                .iter()
                .position(|&b| b == b'%')
                .map_or(len, |p| i + 1 + p);
            out.push_str(&input[i..next]);
            i = next;
            continue;
        };

        if lead < 0x80 {
            if keep[lead as usize] {
                out.push_str(&input[i..i + 3]);
            } else {
                out.push(lead as char);
            }
            i += 3;
            continue;
        }

        if let Some(decoded) = decode_sequence(bytes, i, lead) {
            out.push_str(decoded.as_str());
            i += 3 * decoded.width;
            continue;
        }

        out.push_str(&input[i..i + 3]);
        i += 3;
    }

    out
}

/// A multi-byte UTF-8 character assembled from consecutive escapes.
struct Decoded {
    buf: [u8; 4],
    width: usize,
}

impl Decoded {
    fn as_str(&self) -> &str {
        // Only constructed after `from_utf8` succeeded on the same bytes.
        std::str::from_utf8(&self.buf[..self.width]).unwrap_or_default()
    }
}

fn decode_sequence(bytes: &[u8], start: usize, lead: u8) -> Option<Decoded> {
    let width = utf8_width(lead)?;
    let mut buf = [0u8; 4];
    buf[0] = lead;
    for (k, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
        let b = escaped_byte(bytes, start + 3 * k)?;
        if b & 0xC0 != 0x80 {
            return None;
        }
        *slot = b;
    }
    std::str::from_utf8(&buf[..width]).ok()?;
    Some(Decoded { buf, width })
}

/// Byte value of a `%XX` escape starting at `i`, if there is one.
fn escaped_byte(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes.get(i) != Some(&b'%') {
        return None;
    }
    let high = hex_value(*bytes.get(i + 1)?)?;
    let low = hex_value(*bytes.get(i + 2)?)?;
    Some(high << 4 | low)
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}
