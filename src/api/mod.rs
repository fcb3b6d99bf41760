mod buckets;
mod objects;
mod service;

pub use buckets::{
    BucketsService, BulkGetRequest, BulkPutRequest, CreateBucketRequest, DeleteBucketRequest,
    HeadBucketRequest, ListBucketRequest,
};
pub use objects::{
    DeleteObjectRequest, GetObjectRequest, HeadObjectRequest, ObjectsService, PutObjectRequest,
};
pub use service::{ListServicesRequest, ServiceApi};
