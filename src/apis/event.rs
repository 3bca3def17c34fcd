use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        EventCharacterFilter, EventComicFilter, EventCreatorFilter, EventFilter,
        EventSeriesFilter, EventStoryFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Event API operations
pub struct EventApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> EventApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    pub fn list<F>(&self, filter: &EventFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Events, filter)?;

        self.client.dispatch(url, callback)
    }

    pub fn get<F>(&self, event_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting event {}", event_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Events, event_id)?;

        self.client.dispatch(url, callback)
    }

    pub fn characters<F>(
        &self,
        event_id: u64,
        filter: &EventCharacterFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing characters for event {}", event_id);
        let url = self.client.request_builder().related_url(
            Resource::Events,
            event_id,
            Resource::Characters,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// Comics published as part of the event
    pub fn comics<F>(&self, event_id: u64, filter: &EventComicFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics for event {}", event_id);
        let url = self.client.request_builder().related_url(
            Resource::Events,
            event_id,
            Resource::Comics,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn creators<F>(
        &self,
        event_id: u64,
        filter: &EventCreatorFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing creators for event {}", event_id);
        let url = self.client.request_builder().related_url(
            Resource::Events,
            event_id,
            Resource::Creators,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn series<F>(&self, event_id: u64, filter: &EventSeriesFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing series for event {}", event_id);
        let url = self.client.request_builder().related_url(
            Resource::Events,
            event_id,
            Resource::Series,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    pub fn stories<F>(&self, event_id: u64, filter: &EventStoryFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories for event {}", event_id);
        let url = self.client.request_builder().related_url(
            Resource::Events,
            event_id,
            Resource::Stories,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
