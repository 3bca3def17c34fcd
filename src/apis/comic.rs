use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        ComicCharacterFilter, ComicCreatorFilter, ComicEventFilter, ComicFilter, ComicStoryFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Comic API operations
pub struct ComicApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> ComicApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    /// List comics
    ///
    /// # Arguments
    /// * `filter` - Query filters; unset fields are not sent
    /// * `callback` - Receives the raw response exactly once
    pub fn list<F>(&self, filter: &ComicFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Comics, filter)?;

        self.client.dispatch(url, callback)
    }

    /// Fetch a single comic by id
    pub fn get<F>(&self, comic_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting comic {}", comic_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Comics, comic_id)?;

        self.client.dispatch(url, callback)
    }

    /// List characters which appear in a comic
    pub fn characters<F>(
        &self,
        comic_id: u64,
        filter: &ComicCharacterFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing characters for comic {}", comic_id);
        let url = self.client.request_builder().related_url(
            Resource::Comics,
            comic_id,
            Resource::Characters,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List creators whose work appears in a comic
    pub fn creators<F>(
        &self,
        comic_id: u64,
        filter: &ComicCreatorFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing creators for comic {}", comic_id);
        let url = self.client.request_builder().related_url(
            Resource::Comics,
            comic_id,
            Resource::Creators,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List events in which a comic appears
    pub fn events<F>(&self, comic_id: u64, filter: &ComicEventFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events for comic {}", comic_id);
        let url = self.client.request_builder().related_url(
            Resource::Comics,
            comic_id,
            Resource::Events,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List stories in a comic issue
    pub fn stories<F>(&self, comic_id: u64, filter: &ComicStoryFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories for comic {}", comic_id);
        let url = self.client.request_builder().related_url(
            Resource::Comics,
            comic_id,
            Resource::Stories,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
