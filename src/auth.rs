use std::fmt;

use crate::error::Error;

/// Environment variable holding the client identifier.
pub const ACCESS_KEY_ENV: &str = "DS3_ACCESS_KEY";
/// Environment variable holding the shared secret key.
pub const SECRET_KEY_ENV: &str = "DS3_SECRET_KEY";

/// Client identifier and shared secret used to sign requests.
///
/// Immutable once constructed.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    key: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, key: impl Into<String>) -> Result<Self, Error> {
        let client_id = client_id.into();
        let key = key.into();

        if client_id.trim().is_empty() {
            return Err(Error::invalid_config("client_id must not be empty"));
        }
        if key.is_empty() {
            return Err(Error::invalid_config("secret key must not be empty"));
        }

        Ok(Self { client_id, key })
    }

    /// Loads credentials from `DS3_ACCESS_KEY` and `DS3_SECRET_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let client_id = std::env::var(ACCESS_KEY_ENV)
            .map_err(|_| Error::invalid_config(format!("missing {ACCESS_KEY_ENV}")))?;
        let key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| Error::invalid_config(format!("missing {SECRET_KEY_ENV}")))?;

        Self::new(client_id, key)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "client_id",
                &crate::util::redact::redact_value(&self.client_id),
            )
            .field("key", &"<redacted>")
            .finish()
    }
}
