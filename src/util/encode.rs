fn is_unreserved(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~')
}

/// Percent-encodes a resource path byte by byte, keeping `/` and RFC 3986
/// unreserved characters. The result is both the request target path and the
/// signed resource.
pub(crate) fn encode_resource_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for &b in path.as_bytes() {
        if is_unreserved(b) || b == b'/' {
            out.push(b as char);
            continue;
        }

        out.push('%');
        out.push(hex_upper(b >> 4));
        out.push(hex_upper(b & 0x0F));
    }
    out
}

fn hex_upper(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        10..=15 => (b'A' + (nibble - 10)) as char,
        _ => '0',
    }
}
