use serde::{Deserialize, Serialize};
use std::fmt;

/// The six resource families exposed under `/v1/public`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Characters,
    Comics,
    Creators,
    Events,
    Series,
    Stories,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Characters,
        Resource::Comics,
        Resource::Creators,
        Resource::Events,
        Resource::Series,
        Resource::Stories,
    ];

    /// Path segment used both as the collection root and as a relationship suffix
    pub fn path_segment(self) -> &'static str {
        match self {
            Resource::Characters => "characters",
            Resource::Comics => "comics",
            Resource::Creators => "creators",
            Resource::Events => "events",
            Resource::Series => "series",
            Resource::Stories => "stories",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Path part of a request: `resource[/id][/related]`.
///
/// Query parameters never live here; the request builder appends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub resource: Resource,
    pub resource_id: Option<u64>,
    pub related: Option<Resource>,
}

impl Endpoint {
    /// Collection listing, e.g. `/characters`
    pub fn list(resource: Resource) -> Self {
        Self {
            resource,
            resource_id: None,
            related: None,
        }
    }

    /// Relationship listing, e.g. `/characters/1011334/comics`
    pub fn related(resource: Resource, id: u64, related: Resource) -> Self {
        Self {
            resource,
            resource_id: Some(id),
            related: Some(related),
        }
    }

    /// Path segments below the base URL
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec![self.resource.path_segment().to_string()];
        if let Some(id) = self.resource_id {
            segments.push(id.to_string());
        }
        if let Some(related) = self.related {
            segments.push(related.path_segment().to_string());
        }
        segments
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
