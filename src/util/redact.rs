const REDACTED: &str = "<redacted>";

/// Keeps a short prefix of an identifier so logs stay correlatable.
pub(crate) fn redact_value(value: &str) -> String {
    let value = value.trim();
    let visible = value.chars().count() / 4;
    if visible == 0 {
        return REDACTED.to_string();
    }

    let prefix = value.chars().take(visible.min(4)).collect::<String>();
    format!("{prefix}***")
}
