use crate::error::{MarvelError, MarvelResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com:443/v1/public";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const PUBLIC_KEY_ENV: &str = "MARVEL_PUBLIC_KEY";
pub const PRIVATE_KEY_ENV: &str = "MARVEL_PRIVATE_KEY";
pub const BASE_URL_ENV: &str = "MARVEL_BASE_URL";
pub const TIMEOUT_ENV: &str = "MARVEL_TIMEOUT_SECS";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings for a [`MarvelClient`](crate::MarvelClient)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub public_key: String,
    pub private_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Read keys from `MARVEL_PUBLIC_KEY` / `MARVEL_PRIVATE_KEY`.
    ///
    /// `MARVEL_BASE_URL` and `MARVEL_TIMEOUT_SECS` override the defaults when set.
    pub fn from_env() -> MarvelResult<Self> {
        let public_key = env::var(PUBLIC_KEY_ENV).map_err(|_| {
            MarvelError::config_error(format!("{} environment variable not set", PUBLIC_KEY_ENV))
        })?;
        let private_key = env::var(PRIVATE_KEY_ENV).map_err(|_| {
            MarvelError::config_error(format!("{} environment variable not set", PRIVATE_KEY_ENV))
        })?;

        let mut config = Self::new(public_key, private_key);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config = config.base_url(base_url);
        }
        if let Ok(secs) = env::var(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                MarvelError::config_error(format!("{} must be a whole number of seconds", TIMEOUT_ENV))
            })?;
            config = config.timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Point at another gateway (a proxy or a mock server)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
