//! Service-level operations.

use crate::{client::Client, error::Result, request::Request, types::Response};

/// Service operations.
#[derive(Clone, Debug)]
pub struct ServiceApi {
    client: Client,
}

impl ServiceApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Starts a request to list the buckets owned by the caller.
    pub fn list(&self) -> ListServicesRequest {
        ListServicesRequest {
            client: self.client.clone(),
            query_params: Vec::new(),
        }
    }
}

/// Request builder for `GET /`.
#[derive(Debug)]
pub struct ListServicesRequest {
    client: Client,
    query_params: Vec<(String, String)>,
}

impl ListServicesRequest {
    /// Appends an unsigned query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Sends the request.
    pub fn send(self) -> Result<Response> {
        self.client.execute(&Request::ListServices, &self.query_params)
    }
}
