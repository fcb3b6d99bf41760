//! Shared request and response types.

use std::io::Read;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;

use crate::error::{Error, Result};

/// One entry of a bulk object list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectDescriptor {
    /// Object name within the bucket.
    pub name: String,
    /// Object size in bytes.
    pub size: u64,
}

impl ObjectDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Streaming response body.
pub struct ByteStream {
    inner: Box<dyn Read + 'static>,
}

impl ByteStream {
    pub(crate) fn new<R>(reader: R) -> Self
    where
        R: Read + 'static,
    {
        Self {
            inner: Box::new(reader),
        }
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("inner", &"<reader>")
            .finish()
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Raw service response.
///
/// The status is not interpreted; use [`Response::error_for_status`] to turn
/// failures into [`Error::Api`].
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: ByteStream,
}

impl Response {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: ByteStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Gives up the status and headers for the body reader.
    pub fn into_body(self) -> ByteStream {
        self.body
    }

    /// Reads the whole body.
    pub fn bytes(self) -> Result<Bytes> {
        let mut out = Vec::new();
        self.into_body()
            .read_to_end(&mut out)
            .map_err(|e| Error::transport("failed to read response body", Some(Box::new(e))))?;
        Ok(Bytes::from(out))
    }

    /// Reads the whole body as text, replacing invalid UTF-8.
    pub fn text(self) -> Result<String> {
        let bytes = self.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Returns `self` on 2xx, otherwise reads the body into [`Error::Api`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            return Ok(self);
        }

        let status = self.status;
        let headers = self.headers.clone();
        let body = self.text()?;
        Err(crate::transport::blocking_transport::response_error(
            status, &headers, &body,
        ))
    }
}

/// Error document returned by the service.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "Error")]
pub(crate) struct XmlError {
    #[serde(rename = "Code")]
    pub(crate) code: Option<String>,
    #[serde(rename = "Message")]
    pub(crate) message: Option<String>,
    #[serde(rename = "Resource")]
    pub(crate) resource: Option<String>,
    #[serde(rename = "RequestId")]
    pub(crate) request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &'static [u8]) -> Response {
        Response::new(status, HeaderMap::new(), ByteStream::new(body))
    }

    #[test]
    fn reads_body_bytes_and_text() {
        let resp = response(StatusCode::OK, b"<ListAllMyBucketsResult/>");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().unwrap(), "<ListAllMyBucketsResult/>");
    }

    #[test]
    fn error_for_status_passes_success_through() {
        let resp = response(StatusCode::NO_CONTENT, b"").error_for_status().unwrap();
        assert_eq!(resp.bytes().unwrap(), Bytes::new());
    }

    #[test]
    fn error_for_status_parses_error_body() {
        let body = b"<Error><Code>NoSuchBucket</Code><HttpErrorCode>404</HttpErrorCode>\
<Message>The specified bucket does not exist</Message><Resource>/missing</Resource></Error>";
        let err = response(StatusCode::NOT_FOUND, body)
            .error_for_status()
            .unwrap_err();
        match err {
            Error::Api {
                status,
                code,
                message,
                resource,
                ..
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(code.as_deref(), Some("NoSuchBucket"));
                assert_eq!(
                    message.as_deref(),
                    Some("The specified bucket does not exist")
                );
                assert_eq!(resource.as_deref(), Some("/missing"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
