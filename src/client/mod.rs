mod dispatch;

use std::{sync::Arc, time::Duration};

use bytes::Bytes;

use crate::{
    api,
    auth::Credentials,
    clock::{Clock, SystemClock},
    endpoint::Endpoint,
    error::{Error, Result},
    transport::blocking_transport::BlockingTransport,
    types::ObjectDescriptor,
};

/// Environment variable holding the service endpoint URL.
pub const ENDPOINT_ENV: &str = "DS3_ENDPOINT";

/// Blocking DS3 client.
///
/// Cheap to clone; clones share the same immutable endpoint and credentials.
/// Every call opens its own connection, so a client can be used from several
/// threads at once.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub struct ClientBuilder {
    endpoint: Endpoint,
    credentials: Option<Credentials>,
    clock: Arc<dyn Clock>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

struct Inner {
    endpoint: Endpoint,
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    transport: BlockingTransport,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.endpoint)
            .field("credentials", &self.inner.credentials)
            .field("clock", &self.inner.clock)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder(endpoint: impl AsRef<str>) -> Result<ClientBuilder> {
        ClientBuilder::new(endpoint.as_ref())
    }

    /// Builds a client from `DS3_ENDPOINT`, `DS3_ACCESS_KEY` and `DS3_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .map_err(|_| Error::invalid_config(format!("missing {ENDPOINT_ENV}")))?;
        Self::builder(endpoint)?
            .credentials(Credentials::from_env()?)
            .build()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    pub fn service(&self) -> api::ServiceApi {
        api::ServiceApi::new(self.clone())
    }

    pub fn buckets(&self) -> api::BucketsService {
        api::BucketsService::new(self.clone())
    }

    pub fn objects(&self) -> api::ObjectsService {
        api::ObjectsService::new(self.clone())
    }

    /// Lists the buckets visible to these credentials. Returns the raw body.
    pub fn list_services(&self) -> Result<Bytes> {
        self.service().list().send()?.bytes()
    }

    /// Lists a bucket's contents. Returns the raw body.
    pub fn list_bucket(&self, bucket: impl Into<String>) -> Result<Bytes> {
        self.buckets().list(bucket).send()?.bytes()
    }

    pub fn create_bucket(&self, bucket: impl Into<String>) -> Result<Bytes> {
        self.buckets().create(bucket).send()?.bytes()
    }

    pub fn delete_bucket(&self, bucket: impl Into<String>) -> Result<Bytes> {
        self.buckets().delete(bucket).send()?.bytes()
    }

    pub fn get_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
    ) -> Result<Bytes> {
        self.objects().get(bucket, object).send()?.bytes()
    }

    pub fn put_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Result<Bytes> {
        self.objects().put(bucket, object).body(body).send()?.bytes()
    }

    pub fn delete_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
    ) -> Result<Bytes> {
        self.objects().delete(bucket, object).send()?.bytes()
    }

    /// Registers objects for a bulk put job. Returns the raw job document.
    pub fn bulk_put(
        &self,
        bucket: impl Into<String>,
        objects: impl IntoIterator<Item = ObjectDescriptor>,
    ) -> Result<Bytes> {
        self.buckets()
            .bulk_put(bucket)
            .objects(objects)
            .send()?
            .bytes()
    }

    /// Registers objects for a bulk get job. Returns the raw job document.
    pub fn bulk_get<I, S>(&self, bucket: impl Into<String>, objects: I) -> Result<Bytes>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buckets()
            .bulk_get(bucket)
            .objects(objects)
            .send()?
            .bytes()
    }
}

impl ClientBuilder {
    fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::parse(endpoint)?,
            credentials: None,
            clock: Arc::new(SystemClock),
            timeout: None,
            user_agent: None,
        })
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replaces the time source used for `Date` headers and signatures.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Caps the whole request, connect to last header byte.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::invalid_config("credentials are required"))?;
        let transport = BlockingTransport::new(self.user_agent, self.timeout);

        Ok(Client {
            inner: Arc::new(Inner {
                endpoint: self.endpoint,
                credentials,
                clock: self.clock,
                transport,
            }),
        })
    }
}
