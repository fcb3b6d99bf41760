//! A small blocking client for DS3, the S3-compatible bulk storage API.
//!
//! Requests are signed with the HMAC-SHA1 `AWS` scheme and sent over plain
//! blocking HTTP. Responses come back raw; the caller decides what a status
//! code means.
//!
//! ## Quick start
//!
//! ```no_run
//! # fn demo() -> Result<(), ds3::Error> {
//! use ds3::{Client, Credentials, ObjectDescriptor};
//!
//! let client = Client::builder("http://ds3.example.com:8080")?
//!     .credentials(Credentials::new("client-id", "secret-key")?)
//!     .build()?;
//!
//! client.create_bucket("my-bucket")?;
//! let job = client.bulk_put("my-bucket", [ObjectDescriptor::new("a.txt", 12)])?;
//! println!("{}", String::from_utf8_lossy(&job));
//!
//! let resp = client.objects().get("my-bucket", "a.txt").send()?;
//! let body = resp.error_for_status()?.bytes()?;
//! println!("{} bytes", body.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! See README for product intent and usage.

#[cfg(all(
    feature = "rustls",
    feature = "native-tls",
    not(feature = "allow-both-tls")
))]
compile_error!("Enable only one of: rustls, native-tls.");

/// Service entry points and request builders.
pub mod api;
/// Time sources for request dates.
pub mod clock;
pub mod path;
pub mod signing;
/// Shared request/response types.
pub mod types;

mod auth;
mod client;
mod endpoint;
mod error;
mod request;
mod transport;
mod util;

pub use auth::{ACCESS_KEY_ENV, Credentials, SECRET_KEY_ENV};
pub use client::{Client, ClientBuilder, ENDPOINT_ENV};
pub use clock::{Clock, FixedClock, SystemClock};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use request::{OCTET_STREAM, Request};
pub use types::{ByteStream, ObjectDescriptor, Response};
