use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        CreatorComicFilter, CreatorEventFilter, CreatorFilter, CreatorSeriesFilter,
        CreatorStoryFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Creator API operations
pub struct CreatorApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> CreatorApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    /// List comic creators
    pub fn list<F>(&self, filter: &CreatorFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing creators");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Creators, filter)?;

        self.client.dispatch(url, callback)
    }

    /// Fetch a single creator by id
    pub fn get<F>(&self, creator_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting creator {}", creator_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Creators, creator_id)?;

        self.client.dispatch(url, callback)
    }

    /// List comics in which the work of a creator appears
    pub fn comics<F>(
        &self,
        creator_id: u64,
        filter: &CreatorComicFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics for creator {}", creator_id);
        let url = self.client.request_builder().related_url(
            Resource::Creators,
            creator_id,
            Resource::Comics,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List events featuring the work of a creator
    pub fn events<F>(
        &self,
        creator_id: u64,
        filter: &CreatorEventFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events for creator {}", creator_id);
        let url = self.client.request_builder().related_url(
            Resource::Creators,
            creator_id,
            Resource::Events,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List series in which the work of a creator appears
    pub fn series<F>(
        &self,
        creator_id: u64,
        filter: &CreatorSeriesFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing series for creator {}", creator_id);
        let url = self.client.request_builder().related_url(
            Resource::Creators,
            creator_id,
            Resource::Series,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List stories by a creator
    pub fn stories<F>(
        &self,
        creator_id: u64,
        filter: &CreatorStoryFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories for creator {}", creator_id);
        let url = self.client.request_builder().related_url(
            Resource::Creators,
            creator_id,
            Resource::Stories,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
