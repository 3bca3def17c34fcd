use crate::{
    auth::{build_auth_query, AuthQuery, Clock, Credentials},
    endpoint::{Endpoint, Resource},
    error::{MarvelError, MarvelResult},
    filters::FilterConfig,
};
use std::sync::Arc;
use url::Url;

/// Filter pairs for the fields that are set, in the filter's declared order
pub fn build_query<F: FilterConfig>(filter: &F) -> Vec<(&'static str, String)> {
    filter.query_pairs()
}

/// Assemble `base_path[/resource_id][/relationship]?<auth><filters>`.
///
/// Auth pairs always come first. Values are form-encoded.
pub fn build_url(
    base_path: &str,
    resource_id: Option<u64>,
    relationship: Option<&str>,
    auth: &AuthQuery,
    filter_query: &[(&str, String)],
) -> MarvelResult<Url> {
    let mut url = Url::parse(base_path)?;
    check_base(&url)?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            MarvelError::config_error(format!("base URL cannot carry a path: {}", base_path))
        })?;
        segments.pop_if_empty();
        if let Some(id) = resource_id {
            segments.push(&id.to_string());
        }
        if let Some(relationship) = relationship {
            segments.push(relationship);
        }
    }

    {
        let mut query = url.query_pairs_mut();
        for (key, value) in auth.pairs() {
            query.append_pair(key, value);
        }
        for (key, value) in filter_query {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}

/// An http(s) URL with a path and no query or fragment
fn check_base(url: &Url) -> MarvelResult<()> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(MarvelError::config_error(format!(
            "unsupported scheme in base URL: {}",
            url
        )));
    }
    if url.cannot_be_a_base() {
        return Err(MarvelError::config_error(format!(
            "base URL cannot carry a path: {}",
            url
        )));
    }
    if url.query().is_some() {
        return Err(MarvelError::config_error(format!(
            "base URL must not carry a query: {}",
            url
        )));
    }
    if url.fragment().is_some() {
        return Err(MarvelError::config_error(format!(
            "base URL must not carry a fragment: {}",
            url
        )));
    }
    Ok(())
}

/// Copy of `url` with the `hash` value masked, for logging
pub(crate) fn redact(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "hash" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

/// Maps endpoints plus filters to signed request URLs
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: Url,
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl RequestBuilder {
    /// Validate the base URL and credentials up front
    pub fn new(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        clock: Arc<dyn Clock>,
    ) -> MarvelResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        check_base(&base_url)?;
        credentials.validate()?;

        Ok(Self {
            base_url,
            credentials,
            clock,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign with a fresh timestamp from the clock
    pub fn auth_query(&self) -> MarvelResult<AuthQuery> {
        build_auth_query(&self.credentials, &self.clock.timestamp())
    }

    /// Collection root for a resource, e.g. `.../v1/public/characters`
    pub fn resource_base(&self, resource: Resource) -> MarvelResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                MarvelError::config_error(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(resource.path_segment());
        Ok(url)
    }

    /// `GET /{resource}` with filters
    pub fn list_url<F: FilterConfig>(&self, resource: Resource, filter: &F) -> MarvelResult<Url> {
        self.endpoint_url(&Endpoint::list(resource), &build_query(filter))
    }

    /// `GET /{resource}?id={id}`; the id travels as a query parameter
    pub fn single_url(&self, resource: Resource, id: u64) -> MarvelResult<Url> {
        self.endpoint_url(&Endpoint::list(resource), &[("id", id.to_string())])
    }

    /// `GET /{resource}/{id}/{related}` with filters
    pub fn related_url<F: FilterConfig>(
        &self,
        resource: Resource,
        id: u64,
        related: Resource,
        filter: &F,
    ) -> MarvelResult<Url> {
        self.endpoint_url(
            &Endpoint::related(resource, id, related),
            &build_query(filter),
        )
    }

    /// Build any endpoint with an explicit list of extra query pairs
    pub fn endpoint_url(
        &self,
        endpoint: &Endpoint,
        extra: &[(&str, String)],
    ) -> MarvelResult<Url> {
        let auth = self.auth_query()?;
        build_url(
            self.resource_base(endpoint.resource)?.as_str(),
            endpoint.resource_id,
            endpoint.related.map(Resource::path_segment),
            &auth,
            extra,
        )
    }
}
