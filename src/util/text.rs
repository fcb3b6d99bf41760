/// Cuts `body` to at most `max_len` bytes on a char boundary, marking the cut.
pub(crate) fn truncate_snippet(body: &str, max_len: usize) -> String {
    if body.len() <= max_len {
        return body.to_string();
    }

    let mut cut = max_len;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
