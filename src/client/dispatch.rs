use http::{HeaderMap, HeaderValue, header};

use super::Client;
use crate::{
    error::{Error, Result},
    path::build_path,
    request::Request,
    signing::{CanonicalRequest, authorization, canonicalized_amz_headers},
    types::Response,
    util,
};

impl Client {
    /// Signs and sends one request, returning the raw response.
    ///
    /// The resource path is percent-encoded once and that exact string is both
    /// sent and signed. `query_params` are appended to the request target in
    /// the given order and are not part of the signed resource. The response
    /// status is not interpreted.
    pub fn execute(
        &self,
        request: &Request,
        query_params: &[(String, String)],
    ) -> Result<Response> {
        request.validate()?;

        let method = request.method();
        let path = util::encode::encode_resource_path(&request.path());
        let resource = match request.subresource() {
            Some(marker) => format!("{path}?{marker}"),
            None => path.clone(),
        };

        let url = self
            .inner
            .endpoint
            .url_for(&build_path(&resource, query_params))?;
        // Dot segments are collapsed by URL parsing.
        if url.path() != path {
            return Err(Error::invalid_config(format!(
                "resource {path} would be sent as {}",
                url.path()
            )));
        }

        #[cfg(feature = "tracing")]
        let _guard = tracing::info_span!(
            "ds3.request",
            operation = request.operation(),
            method = %method,
            resource = %resource,
            host = self.inner.endpoint.hostname(),
        )
        .entered();

        let date = util::date::http_date(self.inner.clock.now())?;
        let content_type = request.content_type();

        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, self.inner.endpoint.host_header()?);
        headers.insert(
            header::DATE,
            HeaderValue::from_str(&date).map_err(|_| Error::signing("invalid Date header value"))?,
        );
        if let Some(content_type) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        let canonical = CanonicalRequest::new(method.as_str(), date, resource.as_str())
            .with_content_type(content_type.unwrap_or_default())
            .with_amz_headers(canonicalized_amz_headers(&headers));

        #[cfg(feature = "tracing")]
        tracing::debug!(string_to_sign = ?canonical.string_to_sign(), "signing request");

        headers.insert(
            header::AUTHORIZATION,
            authorization(&self.inner.credentials, &canonical)?,
        );

        let body = request.body()?;

        self.inner.transport.send(&method, &url, &headers, body)
    }
}
