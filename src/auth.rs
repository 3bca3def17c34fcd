use crate::error::{MarvelError, MarvelResult};
use md5::{Digest, Md5};
use std::fmt;

/// Key pair issued by the Marvel developer portal
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Both keys must be non-empty before anything is sent
    pub fn validate(&self) -> MarvelResult<()> {
        if self.public_key.is_empty() {
            return Err(MarvelError::config_error("public key is empty"));
        }
        if self.private_key.is_empty() {
            return Err(MarvelError::config_error("private key is empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// The three parameters every request carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthQuery {
    pub apikey: String,
    pub hash: String,
    pub ts: String,
}

impl AuthQuery {
    /// Query pairs in wire order: `apikey`, `hash`, `ts`
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("apikey", self.apikey.as_str()),
            ("hash", self.hash.as_str()),
            ("ts", self.ts.as_str()),
        ]
    }
}

/// Build the signed auth parameters for one request.
///
/// `hash` is the lowercase hex MD5 of `timestamp + private_key + public_key`.
pub fn build_auth_query(credentials: &Credentials, timestamp: &str) -> MarvelResult<AuthQuery> {
    credentials.validate()?;
    if timestamp.is_empty() {
        return Err(MarvelError::config_error("timestamp is empty"));
    }

    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(credentials.private_key.as_bytes());
    hasher.update(credentials.public_key.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    Ok(AuthQuery {
        apikey: credentials.public_key.clone(),
        hash,
        ts: timestamp.to_string(),
    })
}

/// Source of the `ts` parameter
pub trait Clock: Send + Sync {
    fn timestamp(&self) -> String;
}

/// Wall clock, milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }
}

/// Always returns the same timestamp.
///
/// Useful for tests and for reproducing a known signature; the API may reject
/// a timestamp that has been replayed for too long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
