//! Resource path construction.
//!
//! Paths are built verbatim: these functions apply no percent-encoding. The
//! dispatcher encodes the joined resource path before signing; query
//! parameters are never escaped.

/// Joins `base` and `child` with exactly one `/`, always yielding a leading `/`.
///
/// ```
/// assert_eq!(ds3::path::join_paths("/bucket/", "obj"), "/bucket/obj");
/// assert_eq!(ds3::path::join_paths("bucket", "obj"), "/bucket/obj");
/// assert_eq!(ds3::path::join_paths("/bucket", "/obj"), "/bucket/obj");
/// ```
pub fn join_paths(base: &str, child: &str) -> String {
    let mut out = String::with_capacity(base.len() + child.len() + 2);
    if !base.starts_with('/') {
        out.push('/');
    }
    out.push_str(base);

    // An empty base has already become "/".
    match (out.ends_with('/'), child.strip_prefix('/')) {
        (true, Some(rest)) => out.push_str(rest),
        (true, None) => out.push_str(child),
        (false, _) => {
            out.push('/');
            out.push_str(child);
        }
    }
    out
}

/// Appends `key=value` pairs to `resource` in the order given.
///
/// An empty parameter list returns `resource` unchanged. A resource that
/// already has a query (a bulk marker) is continued with `&`.
///
/// ```
/// # use ds3::path::build_path;
/// let params = [("k".to_string(), "v".to_string())];
/// assert_eq!(build_path("/b", &params), "/b?k=v");
/// assert_eq!(build_path("/b/?start-bulk-put", &params), "/b/?start-bulk-put&k=v");
/// ```
pub fn build_path(resource: &str, query_params: &[(String, String)]) -> String {
    if query_params.is_empty() {
        return resource.to_string();
    }

    let mut out = String::with_capacity(resource.len() + 16 * query_params.len());
    out.push_str(resource);
    out.push(if resource.contains('?') { '&' } else { '?' });
    for (idx, (key, value)) in query_params.iter().enumerate() {
        if idx > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}
