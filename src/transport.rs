use crate::error::{MarvelError, MarvelResult};
use bytes::Bytes;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Outcome of one GET, handed to the caller exactly once.
///
/// A completed request carries `status` and `body` with no `error`, whatever the
/// status code. A transport failure carries `error`, plus `status` when the
/// headers arrived before the body read failed.
///
/// There is no empty response: every constructor sets a status or an error.
#[derive(Debug)]
pub struct ApiResponse {
    pub body: Option<Bytes>,
    pub status: Option<u16>,
    pub error: Option<MarvelError>,
}

impl ApiResponse {
    pub fn completed(status: u16, body: Bytes) -> Self {
        Self {
            body: Some(body),
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(error: MarvelError) -> Self {
        Self {
            body: None,
            status: None,
            error: Some(error),
        }
    }

    /// 2xx status and no transport error
    pub fn is_success(&self) -> bool {
        self.error.is_none() && matches!(self.status, Some(200..=299))
    }

    /// Split into `(status, body)`, surfacing a transport error as `Err`
    pub fn into_result(self) -> MarvelResult<(u16, Bytes)> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let status = self
            .status
            .ok_or_else(|| MarvelError::config_error("response has neither status nor error"))?;
        Ok((status, self.body.unwrap_or_default()))
    }

    /// Parse the body as JSON regardless of status
    pub fn json<T: DeserializeOwned>(self) -> MarvelResult<T> {
        let (_, body) = self.into_result()?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Issues a single GET and reports the outcome as data
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url, timeout: Duration) -> ApiResponse;
}

/// Transport over a shared, pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> MarvelResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Reuse an existing reqwest client and its connection pool
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url, timeout: Duration) -> ApiResponse {
        let path = url.path().to_string();
        let response = match self.client.get(url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                // the URL carries the signature, keep it out of errors and logs
                let e = e.without_url();
                warn!("GET {} failed: {}", path, e);
                return ApiResponse::failed(e.into());
            }
        };

        let status = response.status().as_u16();
        debug!("GET {} -> {}", path, status);

        match response.bytes().await {
            Ok(body) => ApiResponse::completed(status, body),
            Err(e) => {
                let e = e.without_url();
                warn!("Reading body of GET {} failed: {}", path, e);
                ApiResponse {
                    body: None,
                    status: Some(status),
                    error: Some(e.into()),
                }
            }
        }
    }
}
