use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        StoryCharacterFilter, StoryComicFilter, StoryCreatorFilter, StoryEventFilter,
        StoryFilter, StorySeriesFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Story API operations
pub struct StoryApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> StoryApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    /// List comic stories
    pub fn list<F>(&self, filter: &StoryFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Stories, filter)?;

        self.client.dispatch(url, callback)
    }

    /// Fetch a single story by id
    pub fn get<F>(&self, story_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting story {}", story_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Stories, story_id)?;

        self.client.dispatch(url, callback)
    }

    pub fn characters<F>(
        &self,
        story_id: u64,
        filter: &StoryCharacterFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing characters for story {}", story_id);
        let url = self.client.request_builder().related_url(
            Resource::Stories,
            story_id,
            Resource::Characters,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn comics<F>(&self, story_id: u64, filter: &StoryComicFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics for story {}", story_id);
        let url = self.client.request_builder().related_url(
            Resource::Stories,
            story_id,
            Resource::Comics,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn creators<F>(
        &self,
        story_id: u64,
        filter: &StoryCreatorFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing creators for story {}", story_id);
        let url = self.client.request_builder().related_url(
            Resource::Stories,
            story_id,
            Resource::Creators,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn events<F>(&self, story_id: u64, filter: &StoryEventFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events for story {}", story_id);
        let url = self.client.request_builder().related_url(
            Resource::Stories,
            story_id,
            Resource::Events,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn series<F>(&self, story_id: u64, filter: &StorySeriesFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing series for story {}", story_id);
        let url = self.client.request_builder().related_url(
            Resource::Stories,
            story_id,
            Resource::Series,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
