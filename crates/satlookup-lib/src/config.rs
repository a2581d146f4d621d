use std::env;
use std::fmt;
use std::time::Duration;

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};

/// Environment variable holding the Space-Track account name.
pub const USERNAME_ENV: &str = "SPACE_TRACK_USERNAME";
/// Environment variable holding the Space-Track password.
pub const PASSWORD_ENV: &str = "SPACE_TRACK_PASSWORD";
/// Optional override for the Space-Track host, mainly for tests.
pub const BASE_URL_ENV: &str = "SPACE_TRACK_BASE_URL";

/// Public Space-Track endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.space-track.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`SpaceTrackClient`](crate::SpaceTrackClient).
///
/// Credentials are carried as opaque strings. They are never validated and the
/// `Debug` rendering redacts the password.
#[derive(Clone)]
pub struct SpaceTrackConfig {
    pub identity: String,
    pub password: String,
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
}

impl SpaceTrackConfig {
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a configuration from `SPACE_TRACK_USERNAME`, `SPACE_TRACK_PASSWORD`
    /// and the optional `SPACE_TRACK_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let identity = required_var(USERNAME_ENV)?;
        let password = required_var(PASSWORD_ENV)?;
        let mut config = Self::new(identity, password);

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                config = config.with_base_url(trimmed);
            }
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Login endpoint that also executes the embedded `query`.
    pub fn auth_url(&self) -> String {
        format!("{}/ajaxauth/login", self.base_url)
    }

    /// Absolute query URL for a path produced by the query builders.
    pub fn query_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for SpaceTrackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceTrackConfig")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn required_var(var: &'static str) -> Result<String> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingCredential { var }),
    }
}
