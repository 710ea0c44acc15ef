//! Reassembly of a [`ParsedUrl`].

use super::ParsedUrl;

/// Joins the components of `url` back into a string.
///
/// Pure concatenation in fixed order: protocol, `//` (when `slashes` is set or
/// the host is non-empty), `auth@`, host, `:port`, pathname, search, hash.
/// Field contents are not validated.
pub fn format(url: &ParsedUrl) -> String {
    let host = url.host.as_deref().unwrap_or("");
    let mut out = String::with_capacity(
        [
            url.protocol.as_deref(),
            url.auth.as_deref(),
            Some(host),
            url.port.as_deref(),
            url.pathname.as_deref(),
            url.search.as_deref(),
            url.hash.as_deref(),
        ]
        .iter()
        .flatten()
        .map(|s| s.len())
        .sum::<usize>()
            + 4,
    );

    if let Some(protocol) = &url.protocol {
        out.push_str(protocol);
    }
    if url.slashes || !host.is_empty() {
        out.push_str("//");
    }
    // An empty auth still writes '@' so `http://@host` survives a round trip.
    if let Some(auth) = &url.auth {
        out.push_str(auth);
        out.push('@');
    }
    out.push_str(host);
    if let Some(port) = url.port.as_deref().filter(|p| !p.is_empty()) {
        out.push(':');
        out.push_str(port);
    }
    for part in [&url.pathname, &url.search, &url.hash].into_iter().flatten() {
        out.push_str(part);
    }

    out
}
