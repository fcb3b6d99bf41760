use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::{
    error::{Error, Result},
    types::{ByteStream, Response},
};

/// Blocking HTTP transport.
///
/// The agent keeps no idle connections, so every request opens its own
/// connection and nothing is shared between calls.
pub(crate) struct BlockingTransport {
    agent: ureq::Agent,
    timeout: Option<Duration>,
    user_agent: String,
}

impl BlockingTransport {
    pub(crate) fn new(user_agent: Option<String>, timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_idle_connections(0)
            .max_idle_connections_per_host(0)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
            timeout,
            user_agent: user_agent.unwrap_or_else(default_user_agent),
        }
    }

    /// Sends one request and returns once the status line and headers arrive.
    ///
    /// The body is left unread for the caller. No status code is interpreted
    /// and nothing is retried.
    pub(crate) fn send(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<Bytes>,
    ) -> Result<Response> {
        #[cfg(feature = "tracing")]
        let _guard = tracing::debug_span!(
            "ds3.http",
            method = %method,
            host = url.host_str().unwrap_or(""),
            path = url.path(),
        )
        .entered();

        let result = match method {
            &Method::GET => {
                ensure_no_body(method, &body)?;
                self.prepare(self.agent.get(url.as_str()), headers).call()
            }
            &Method::HEAD => {
                ensure_no_body(method, &body)?;
                self.prepare(self.agent.head(url.as_str()), headers).call()
            }
            &Method::DELETE => {
                ensure_no_body(method, &body)?;
                self.prepare(self.agent.delete(url.as_str()), headers).call()
            }
            &Method::PUT => {
                let req = self.prepare(self.agent.put(url.as_str()), headers);
                match body {
                    Some(b) => req.send(b.as_ref()),
                    None => req.send_empty(),
                }
            }
            _ => {
                return Err(Error::invalid_config(format!(
                    "unsupported HTTP method: {method}"
                )));
            }
        };

        let resp = result.map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = ?err, "request failed before a response arrived");

            Error::transport(
                format!("request failed: {}", request_context(method, url)),
                Some(Box::new(err)),
            )
        })?;

        let (parts, body) = resp.into_parts();
        Ok(Response::new(
            parts.status,
            parts.headers,
            ByteStream::new(body.into_reader()),
        ))
    }

    fn prepare<B>(
        &self,
        mut req: ureq::RequestBuilder<B>,
        headers: &HeaderMap,
    ) -> ureq::RequestBuilder<B> {
        req = req.header(http::header::USER_AGENT, self.user_agent.as_str());
        for (name, value) in headers {
            let Ok(value_str) = value.to_str() else {
                continue;
            };
            req = req.header(name.as_str(), value_str);
        }

        if let Some(timeout) = self.timeout {
            req = req.config().timeout_global(Some(timeout)).build();
        }

        req
    }
}

/// Builds [`Error::Api`] from a failed response, preferring fields from an
/// XML error body.
pub(crate) fn response_error(status: StatusCode, headers: &HeaderMap, body: &str) -> Error {
    let request_id = headers
        .get("x-amz-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body_snippet = Some(crate::util::text::truncate_snippet(body, 4096));

    match crate::util::xml::parse_error_xml(body) {
        Some(parsed) => Error::Api {
            status,
            code: parsed.code,
            message: parsed.message,
            resource: parsed.resource,
            request_id: parsed.request_id.or(request_id),
            body_snippet,
        },
        None => Error::Api {
            status,
            code: None,
            message: None,
            resource: None,
            request_id,
            body_snippet,
        },
    }
}

fn request_context(method: &Method, url: &Url) -> String {
    let authority = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    format!("{method} {authority}{}", url.path())
}

fn ensure_no_body(method: &Method, body: &Option<Bytes>) -> Result<()> {
    match body {
        None => Ok(()),
        Some(_) => Err(Error::invalid_config(format!(
            "{method} requests do not accept a body"
        ))),
    }
}

fn default_user_agent() -> String {
    format!("ds3-rs/{}", env!("CARGO_PKG_VERSION"))
}
