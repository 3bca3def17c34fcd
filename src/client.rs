use crate::{
    apis::{CharacterApi, ComicApi, CreatorApi, EventApi, SeriesApi, StoryApi},
    auth::{Clock, Credentials, SystemClock},
    config::ClientConfig,
    error::{MarvelError, MarvelResult},
    request::{redact, RequestBuilder},
    transport::{ApiResponse, ReqwestTransport, Transport},
};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main Marvel client
#[derive(Clone)]
pub struct MarvelClient {
    transport: Arc<dyn Transport>,
    builder: RequestBuilder,
    timeout: Duration,
}

impl MarvelClient {
    /// Create a client for the public gateway with default settings
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> MarvelResult<Self> {
        Self::with_config(ClientConfig::new(public_key, private_key))
    }

    /// Create a client from explicit settings, signing with the wall clock
    pub fn with_config(config: ClientConfig) -> MarvelResult<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Self::with_parts(config, Arc::new(transport), Arc::new(SystemClock))
    }

    /// Create a client with a custom reqwest client
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> MarvelResult<Self> {
        Self::with_parts(
            config,
            Arc::new(ReqwestTransport::with_client(client)),
            Arc::new(SystemClock),
        )
    }

    /// Create a client with every collaborator supplied by the caller
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> MarvelResult<Self> {
        let credentials = Credentials::new(config.public_key, config.private_key);
        let builder = RequestBuilder::new(&config.base_url, credentials, clock)?;

        Ok(Self {
            transport,
            builder,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.builder.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL builder bound to this client's credentials and clock
    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Get Character API
    pub fn characters(&self) -> CharacterApi<'_> {
        CharacterApi::new(self)
    }

    /// Get Comic API
    pub fn comics(&self) -> ComicApi<'_> {
        ComicApi::new(self)
    }

    /// Get Creator API
    pub fn creators(&self) -> CreatorApi<'_> {
        CreatorApi::new(self)
    }

    /// Get Event API
    pub fn events(&self) -> EventApi<'_> {
        EventApi::new(self)
    }

    /// Get Series API
    pub fn series(&self) -> SeriesApi<'_> {
        SeriesApi::new(self)
    }

    /// Get Story API
    pub fn stories(&self) -> StoryApi<'_> {
        StoryApi::new(self)
    }

    /// Execute a single GET, no retries.
    ///
    /// Never fails: transport problems come back inside the response.
    pub async fn execute(&self, url: Url) -> ApiResponse {
        debug!("HTTP GET {}", redact(&url));
        self.transport.get(url, self.timeout).await
    }

    /// Run [`execute`](Self::execute) on the current tokio runtime and hand the
    /// outcome to `callback` once it completes.
    ///
    /// Fails synchronously only when there is no runtime to spawn onto.
    ///
    /// The spawned task is detached. If the runtime shuts down before the GET
    /// finishes, the task is dropped and `callback` never runs, so keep the
    /// runtime alive until every callback has fired (for example by awaiting a
    /// channel the callback sends on).
    pub fn dispatch<F>(&self, url: Url, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current().map_err(|e| {
            MarvelError::config_error(format!("no tokio runtime to dispatch on: {}", e))
        })?;

        let client = self.clone();
        handle.spawn(async move {
            let response = client.execute(url).await;
            callback(response);
        });

        Ok(())
    }
}
