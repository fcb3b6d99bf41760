//! AWS-style (signature version 2) request signing.
//!
//! The string to sign has a fixed shape:
//!
//! ```text
//! HTTP-Verb    "\n"
//! Content-MD5  "\n"
//! Content-Type "\n"
//! Date         "\n"
//! CanonicalizedAmzHeaders
//! CanonicalizedResource
//! ```
//!
//! Absent fields are written as empty strings, never skipped.

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac as _};
use http::{HeaderMap, HeaderValue};
use sha1::Sha1;

use crate::{
    auth::Credentials,
    error::{Error, Result},
};

type HmacSha1 = Hmac<Sha1>;

/// Base64 HMAC-SHA1 of `message` under `key`.
///
/// The message bytes are hashed as given. An empty key is accepted and yields a
/// well-defined signature; rejecting it is the caller's job.
pub fn sign(key: &str, message: &[u8]) -> String {
    // The only `expect` outside tests: HMAC-SHA1 takes keys of any length.
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(message);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Fields of one request's string to sign.
///
/// Built fresh for every request: the `Date` differs per request, so the
/// signature does too.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalRequest {
    pub verb: String,
    pub content_md5: String,
    pub content_type: String,
    pub date: String,
    /// Pre-canonicalized block, each header newline-terminated.
    pub canonicalized_amz_headers: String,
    /// Joined resource path, no trailing newline.
    pub canonicalized_resource: String,
}

impl CanonicalRequest {
    /// Starts a request with empty MD5, content type, and AMZ headers.
    pub fn new(
        verb: impl Into<String>,
        date: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            verb: verb.into(),
            date: date.into(),
            canonicalized_resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = content_md5.into();
        self
    }

    pub fn with_amz_headers(mut self, canonicalized_amz_headers: impl Into<String>) -> Self {
        self.canonicalized_amz_headers = canonicalized_amz_headers.into();
        self
    }

    pub fn string_to_sign(&self) -> String {
        let Self {
            verb,
            content_md5,
            content_type,
            date,
            canonicalized_amz_headers,
            canonicalized_resource,
        } = self;
        format!(
            "{verb}\n{content_md5}\n{content_type}\n{date}\n{canonicalized_amz_headers}{canonicalized_resource}"
        )
    }

    /// Signs [`Self::string_to_sign`] with `key`.
    pub fn signature(&self, key: &str) -> String {
        sign(key, self.string_to_sign().as_bytes())
    }
}

/// Collects `x-amz-*` headers as `name:value\n` lines, sorted by name.
///
/// Repeated headers are folded into one comma-separated line.
pub fn canonicalized_amz_headers(headers: &HeaderMap) -> String {
    let mut amz: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        let name = name.as_str();
        if !name.starts_with("x-amz-") {
            continue;
        }
        let value = value.to_str().unwrap_or_default().trim().to_string();
        amz.entry(name).or_default().push(value);
    }

    let mut out = String::new();
    for (name, values) in amz {
        out.push_str(name);
        out.push(':');
        out.push_str(&values.join(","));
        out.push('\n');
    }
    out
}

/// Builds the `Authorization` value `AWS <client_id>:<signature>`.
pub fn authorization(
    credentials: &Credentials,
    request: &CanonicalRequest,
) -> Result<HeaderValue> {
    let signature = request.signature(credentials.key());
    let mut value = HeaderValue::from_str(&format!("AWS {}:{signature}", credentials.client_id()))
        .map_err(|_| Error::signing("client id is not a valid header value"))?;
    value.set_sensitive(true);
    Ok(value)
}
