//! The closed set of operations the client can dispatch.

use bytes::Bytes;
use http::Method;

use crate::{
    error::{Error, Result},
    path::join_paths,
    types::ObjectDescriptor,
    util,
};

/// Content type sent and signed on every PUT.
pub const OCTET_STREAM: &str = "application/octet-stream";

const START_BULK_PUT: &str = "start-bulk-put";
const START_BULK_GET: &str = "start-bulk-get";

/// One service operation with the fields it requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// `GET /`
    ListServices,
    /// `GET /{bucket}`
    ListBucket { bucket: String },
    /// `PUT /{bucket}`
    CreateBucket { bucket: String },
    /// `DELETE /{bucket}`
    DeleteBucket { bucket: String },
    /// `HEAD /{bucket}`
    HeadBucket { bucket: String },
    /// `GET /{bucket}/{object}`
    GetObject { bucket: String, object: String },
    /// `HEAD /{bucket}/{object}`
    HeadObject { bucket: String, object: String },
    /// `PUT /{bucket}/{object}` with the object bytes.
    PutObject {
        bucket: String,
        object: String,
        body: Bytes,
    },
    /// `DELETE /{bucket}/{object}`
    DeleteObject { bucket: String, object: String },
    /// `PUT /{bucket}/?start-bulk-put` with names and sizes.
    BulkPut {
        bucket: String,
        objects: Vec<ObjectDescriptor>,
    },
    /// `PUT /{bucket}/?start-bulk-get` with names only.
    BulkGet {
        bucket: String,
        objects: Vec<String>,
    },
}

impl Request {
    pub fn method(&self) -> Method {
        match self {
            Self::ListServices
            | Self::ListBucket { .. }
            | Self::GetObject { .. } => Method::GET,
            Self::HeadBucket { .. } | Self::HeadObject { .. } => Method::HEAD,
            Self::DeleteBucket { .. } | Self::DeleteObject { .. } => Method::DELETE,
            Self::CreateBucket { .. }
            | Self::PutObject { .. }
            | Self::BulkPut { .. }
            | Self::BulkGet { .. } => Method::PUT,
        }
    }

    /// Joined resource path before encoding, without any bulk marker.
    pub fn path(&self) -> String {
        match self {
            Self::ListServices => "/".to_string(),
            Self::ListBucket { bucket }
            | Self::CreateBucket { bucket }
            | Self::DeleteBucket { bucket }
            | Self::HeadBucket { bucket } => join_paths("/", bucket),
            Self::GetObject { bucket, object }
            | Self::HeadObject { bucket, object }
            | Self::PutObject { bucket, object, .. }
            | Self::DeleteObject { bucket, object } => join_paths(bucket, object),
            Self::BulkPut { bucket, .. } | Self::BulkGet { bucket, .. } => {
                join_paths("/", bucket) + "/"
            }
        }
    }

    /// Bulk marker carried in the query and included in the signed resource.
    pub fn subresource(&self) -> Option<&'static str> {
        match self {
            Self::BulkPut { .. } => Some(START_BULK_PUT),
            Self::BulkGet { .. } => Some(START_BULK_GET),
            _ => None,
        }
    }

    /// Unencoded resource, including any bulk marker.
    pub fn resource(&self) -> String {
        match self.subresource() {
            Some(marker) => format!("{}?{marker}", self.path()),
            None => self.path(),
        }
    }

    /// Content type for the string to sign and the header, if any.
    pub fn content_type(&self) -> Option<&'static str> {
        (self.method() == Method::PUT).then_some(OCTET_STREAM)
    }

    /// Request body; bulk operations encode their object list here.
    pub fn body(&self) -> Result<Option<Bytes>> {
        match self {
            Self::PutObject { body, .. } => Ok(Some(body.clone())),
            Self::BulkPut { objects, .. } => util::xml::encode_bulk_put(objects).map(Some),
            Self::BulkGet { objects, .. } => util::xml::encode_bulk_get(objects).map(Some),
            _ => Ok(None),
        }
    }

    /// Rejects requests that cannot be written to the wire.
    ///
    /// Empty or otherwise unusual names are passed through; the service
    /// decides whether they are acceptable.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::ListServices => Ok(()),
            Self::ListBucket { bucket }
            | Self::CreateBucket { bucket }
            | Self::DeleteBucket { bucket }
            | Self::HeadBucket { bucket } => check_name("bucket", bucket),
            Self::GetObject { bucket, object }
            | Self::HeadObject { bucket, object }
            | Self::PutObject { bucket, object, .. }
            | Self::DeleteObject { bucket, object } => {
                check_name("bucket", bucket)?;
                check_name("object", object)
            }
            Self::BulkPut { bucket, objects } => {
                check_name("bucket", bucket)?;
                if objects.is_empty() {
                    return Err(Error::invalid_config("bulk put requires at least one object"));
                }
                objects.iter().try_for_each(|o| check_name("object", &o.name))
            }
            Self::BulkGet { bucket, objects } => {
                check_name("bucket", bucket)?;
                if objects.is_empty() {
                    return Err(Error::invalid_config("bulk get requires at least one object"));
                }
                objects.iter().try_for_each(|name| check_name("object", name))
            }
        }
    }

    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ListServices => "ListServices",
            Self::ListBucket { .. } => "ListBucket",
            Self::CreateBucket { .. } => "CreateBucket",
            Self::DeleteBucket { .. } => "DeleteBucket",
            Self::HeadBucket { .. } => "HeadBucket",
            Self::GetObject { .. } => "GetObject",
            Self::HeadObject { .. } => "HeadObject",
            Self::PutObject { .. } => "PutObject",
            Self::DeleteObject { .. } => "DeleteObject",
            Self::BulkPut { .. } => "BulkPut",
            Self::BulkGet { .. } => "BulkGet",
        }
    }
}

fn check_name(kind: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_ascii_control()) {
        return Err(Error::invalid_config(format!(
            "{kind} name must not contain control characters"
        )));
    }
    Ok(())
}
