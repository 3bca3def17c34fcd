/*
 * Marvel Comics API Client - Typed Rust client for the Marvel public gateway
 */

// Internal modules
mod client;
mod apis;
mod error;
mod auth;
mod transport;
pub mod config;
pub mod endpoint;
pub mod filters;
pub mod request;

// Re-export public types and interfaces
pub use client::MarvelClient;
pub use apis::*;
pub use error::{MarvelError, MarvelResult};
pub use auth::{build_auth_query, AuthQuery, Clock, Credentials, FixedClock, SystemClock};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, Resource};
pub use filters::*;
pub use request::{build_query, build_url, RequestBuilder};
pub use transport::{ApiResponse, ReqwestTransport, Transport};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        MarvelClient, ClientConfig,
        Credentials, FixedClock, SystemClock,
        MarvelError, MarvelResult,
        ApiResponse, Resource,
        // Filter trait and the list filters
        FilterConfig,
        CharacterFilter, ComicFilter, CreatorFilter,
        EventFilter, SeriesFilter, StoryFilter,
    };
}
