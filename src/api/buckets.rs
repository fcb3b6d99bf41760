//! Bucket operations, including bulk job registration.

use crate::{
    client::Client,
    error::Result,
    request::Request,
    types::{ObjectDescriptor, Response},
};

/// Bucket operations.
#[derive(Clone, Debug)]
pub struct BucketsService {
    client: Client,
}

impl BucketsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Starts a request to list a bucket's contents.
    pub fn list(&self, bucket: impl Into<String>) -> ListBucketRequest {
        ListBucketRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            query_params: Vec::new(),
        }
    }

    pub fn create(&self, bucket: impl Into<String>) -> CreateBucketRequest {
        CreateBucketRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            query_params: Vec::new(),
        }
    }

    pub fn delete(&self, bucket: impl Into<String>) -> DeleteBucketRequest {
        DeleteBucketRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            query_params: Vec::new(),
        }
    }

    /// Starts a request to check that a bucket exists and is accessible.
    pub fn head(&self, bucket: impl Into<String>) -> HeadBucketRequest {
        HeadBucketRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            query_params: Vec::new(),
        }
    }

    /// Starts a bulk put job registration. Add objects before sending.
    pub fn bulk_put(&self, bucket: impl Into<String>) -> BulkPutRequest {
        BulkPutRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            objects: Vec::new(),
            query_params: Vec::new(),
        }
    }

    /// Starts a bulk get job registration. Add object names before sending.
    pub fn bulk_get(&self, bucket: impl Into<String>) -> BulkGetRequest {
        BulkGetRequest {
            client: self.client.clone(),
            bucket: bucket.into(),
            objects: Vec::new(),
            query_params: Vec::new(),
        }
    }
}

/// Request builder for `GET /{bucket}`.
#[derive(Debug)]
pub struct ListBucketRequest {
    client: Client,
    bucket: String,
    query_params: Vec<(String, String)>,
}

impl ListBucketRequest {
    /// Appends a query parameter such as `prefix` or `max-keys`.
    ///
    /// Parameters are sent in the order added and are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::ListBucket {
            bucket: self.bucket,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `PUT /{bucket}`.
#[derive(Debug)]
pub struct CreateBucketRequest {
    client: Client,
    bucket: String,
    query_params: Vec<(String, String)>,
}

impl CreateBucketRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::CreateBucket {
            bucket: self.bucket,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `DELETE /{bucket}`.
#[derive(Debug)]
pub struct DeleteBucketRequest {
    client: Client,
    bucket: String,
    query_params: Vec<(String, String)>,
}

impl DeleteBucketRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::DeleteBucket {
            bucket: self.bucket,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `HEAD /{bucket}`.
#[derive(Debug)]
pub struct HeadBucketRequest {
    client: Client,
    bucket: String,
    query_params: Vec<(String, String)>,
}

impl HeadBucketRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn send(self) -> Result<Response> {
        let request = Request::HeadBucket {
            bucket: self.bucket,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `PUT /{bucket}/?start-bulk-put`.
#[derive(Debug)]
pub struct BulkPutRequest {
    client: Client,
    bucket: String,
    objects: Vec<ObjectDescriptor>,
    query_params: Vec<(String, String)>,
}

impl BulkPutRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn object(mut self, object: ObjectDescriptor) -> Self {
        self.objects.push(object);
        self
    }

    pub fn objects(mut self, objects: impl IntoIterator<Item = ObjectDescriptor>) -> Self {
        self.objects.extend(objects);
        self
    }

    /// Sends the request. The object list is encoded in the order added.
    pub fn send(self) -> Result<Response> {
        let request = Request::BulkPut {
            bucket: self.bucket,
            objects: self.objects,
        };
        self.client.execute(&request, &self.query_params)
    }
}

/// Request builder for `PUT /{bucket}/?start-bulk-get`.
#[derive(Debug)]
pub struct BulkGetRequest {
    client: Client,
    bucket: String,
    objects: Vec<String>,
    query_params: Vec<(String, String)>,
}

impl BulkGetRequest {
    /// Appends a query parameter. Parameters are sent in the order added and
    /// are not signed.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn object(mut self, name: impl Into<String>) -> Self {
        self.objects.push(name.into());
        self
    }

    pub fn objects<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sends the request. The name list is encoded in the order added.
    pub fn send(self) -> Result<Response> {
        let request = Request::BulkGet {
            bucket: self.bucket,
            objects: self.objects,
        };
        self.client.execute(&request, &self.query_params)
    }
}
