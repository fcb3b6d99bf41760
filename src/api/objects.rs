//! Object operations.

use bytes::Bytes;

use crate::{client::Client, error::Result, request::Request, types::Response};

/// Object operations.
#[derive(Clone, Debug)]
pub struct ObjectsService {
    client: Client,
}

impl ObjectsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Starts a request to download an object.
    pub fn get(&self, bucket: impl Into<String>, object: impl Into<String>) -> GetObjectRequest {
        GetObjectRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            object: object.into(),
            query_params: Vec::new(),
        }
    }

    /// Starts a request to fetch an object's metadata.
    pub fn head(&self, bucket: impl Into<String>, object: impl Into<String>) -> HeadObjectRequest {
        HeadObjectRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            object: object.into(),
            query_params: Vec::new(),
        }
    }

    /// Starts an upload. The body defaults to empty.
    pub fn put(&self, bucket: impl Into<String>, object: impl Into<String>) -> PutObjectRequest {
        PutObjectRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            object: object.into(),
            body: Bytes::new(),
            query_params: Vec::new(),
        }
    }

    pub fn delete(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
    ) -> DeleteObjectRequest {
        DeleteObjectRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            object: object.into(),
            query_params: Vec::new(),
        }
    }
}

/// Request builder for `GET /{bucket}/{object}`.
#[derive(Debug)]
pub struct GetObjectRequest {
    client: Client,
    bucket: String,
    object: String,
    query_params: Vec<(String, String)>,
}

impl GetObjectRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Sends the request. The body is left unread on the returned response.
    pub fn send(self) -> Result<Response> {
        let request = Request::GetObject {
            bucket: self.bucket,
            object: self.object,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `HEAD /{bucket}/{object}`.
#[derive(Debug)]
pub struct HeadObjectRequest {
    client: Client,
    bucket: String,
    object: String,
    query_params: Vec<(String, String)>,
}

impl HeadObjectRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::HeadObject {
            bucket: self.bucket,
            object: self.object,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `PUT /{bucket}/{object}`.
#[derive(Debug)]
pub struct PutObjectRequest {
    client: Client,
    bucket: String,
    object: String,
    body: Bytes,
    query_params: Vec<(String, String)>,
}

impl PutObjectRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::PutObject {
            bucket: self.bucket,
            object: self.object,
            body: self.body,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `DELETE /{bucket}/{object}`.
#[derive(Debug)]
pub struct DeleteObjectRequest {
    client: Client,
    bucket: String,
    object: String,
    query_params: Vec<(String, String)>,
}

impl DeleteObjectRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::DeleteObject {
            bucket: self.bucket,
            object: self.object,
        };
        self.client.execute(&request, &self.query_params)
    }
}
