use http::HeaderValue;
use url::Url;

use crate::error::{Error, Result};

/// Service location derived once from the endpoint URL.
///
/// `hostname` is never empty. A missing `port` means the scheme's default
/// port applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    hostname: String,
    port: Option<u16>,
}

impl Endpoint {
    /// Parses an absolute `http`/`https` URL with no path, query, or fragment.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|_| Error::invalid_config("endpoint must be a valid absolute URL"))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::invalid_config(
                "endpoint scheme must be http or https",
            ));
        }
        let hostname = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(Error::invalid_config("endpoint must include host")),
        };
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::invalid_config(
                "endpoint must not include query or fragment",
            ));
        }
        if url.path() != "/" && !url.path().is_empty() {
            return Err(Error::invalid_config("endpoint must not include a path"));
        }

        // `Url` drops ports equal to the scheme default.
        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname,
            port: url.port(),
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{port}", self.hostname),
            None => self.hostname.clone(),
        }
    }

    pub(crate) fn host_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.authority())
            .map_err(|_| Error::signing("invalid host header value"))
    }

    /// Resolves a request target (`/bucket/key?query`) against this endpoint.
    ///
    /// A `#` left in the target would be cut off as a fragment and is rejected.
    pub(crate) fn url_for(&self, path_and_query: &str) -> Result<Url> {
        let raw = format!("{}://{}{}", self.scheme, self.authority(), path_and_query);
        let url = Url::parse(&raw).map_err(|_| {
            Error::invalid_config(format!("request target is not a valid URL: {path_and_query}"))
        })?;
        if url.fragment().is_some() {
            return Err(Error::invalid_config(format!(
                "request target must not contain '#': {path_and_query}"
            )));
        }
        Ok(url)
    }
}
