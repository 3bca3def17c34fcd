use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        SeriesCharacterFilter, SeriesComicFilter, SeriesCreatorFilter, SeriesEventFilter,
        SeriesFilter, SeriesStoryFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Series API operations
pub struct SeriesApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> SeriesApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    /// List comic series
    ///
    /// # Arguments
    /// * `filter` - Query filters; this endpoint has no `offset`
    /// * `callback` - Receives the raw response exactly once
    pub fn list<F>(&self, filter: &SeriesFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing series");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Series, filter)?;

        self.client.dispatch(url, callback)
    }

    /// Fetch a single series
    ///
    /// # Arguments
    /// * `series_id` - Sent as the `id` query parameter
    /// * `callback` - Receives the raw response exactly once
    pub fn get<F>(&self, series_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting series {}", series_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Series, series_id)?;

        self.client.dispatch(url, callback)
    }

    /// List characters which appear in a series
    pub fn characters<F>(
        &self,
        series_id: u64,
        filter: &SeriesCharacterFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing characters for series {}", series_id);
        let url = self.client.request_builder().related_url(
            Resource::Series,
            series_id,
            Resource::Characters,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List comics which are part of a series
    pub fn comics<F>(
        &self,
        series_id: u64,
        filter: &SeriesComicFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics for series {}", series_id);
        let url = self.client.request_builder().related_url(
            Resource::Series,
            series_id,
            Resource::Comics,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List creators whose work appears in a series
    pub fn creators<F>(
        &self,
        series_id: u64,
        filter: &SeriesCreatorFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing creators for series {}", series_id);
        let url = self.client.request_builder().related_url(
            Resource::Series,
            series_id,
            Resource::Creators,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List events which occur in a series
    pub fn events<F>(
        &self,
        series_id: u64,
        filter: &SeriesEventFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events for series {}", series_id);
        let url = self.client.request_builder().related_url(
            Resource::Series,
            series_id,
            Resource::Events,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List stories from a series
    pub fn stories<F>(
        &self,
        series_id: u64,
        filter: &SeriesStoryFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories for series {}", series_id);
        let url = self.client.request_builder().related_url(
            Resource::Series,
            series_id,
            Resource::Stories,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
