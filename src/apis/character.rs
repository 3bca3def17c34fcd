use crate::{
    client::MarvelClient,
    endpoint::Resource,
    error::MarvelResult,
    filters::{
        CharacterComicFilter, CharacterEventFilter, CharacterFilter, CharacterSeriesFilter,
        CharacterStoryFilter,
    },
    transport::ApiResponse,
};
use log::info;

/// Character API operations
pub struct CharacterApi<'a> {
    client: &'a MarvelClient,
}

impl<'a> CharacterApi<'a> {
    pub fn new(client: &'a MarvelClient) -> Self {
        Self { client }
    }

    /// List comic characters
    ///
    /// # Arguments
    /// * `filter` - Query filters; unset fields are not sent
    /// * `callback` - Receives the raw response exactly once
    pub fn list<F>(&self, filter: &CharacterFilter, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing characters");
        let url = self
            .client
            .request_builder()
            .list_url(Resource::Characters, filter)?;

        self.client.dispatch(url, callback)
    }

    /// Fetch a single character
    ///
    /// # Arguments
    /// * `character_id` - Sent as the `id` query parameter
    /// * `callback` - Receives the raw response exactly once
    pub fn get<F>(&self, character_id: u64, callback: F) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Getting character {}", character_id);
        let url = self
            .client
            .request_builder()
            .single_url(Resource::Characters, character_id)?;

        self.client.dispatch(url, callback)
    }

    /// List comics featuring a character
    ///
    /// # Arguments
    /// * `character_id` - Character id
    /// * `filter` - Query filters
    /// * `callback` - Receives the raw response exactly once
    pub fn comics<F>(
        &self,
        character_id: u64,
        filter: &CharacterComicFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing comics for character {}", character_id);
        let url = self.client.request_builder().related_url(
            Resource::Characters,
            character_id,
            Resource::Comics,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List events in which a character appears
    ///
    /// # Arguments
    /// * `character_id` - Character id
    /// * `filter` - Query filters
    /// * `callback` - Receives the raw response exactly once
    pub fn events<F>(
        &self,
        character_id: u64,
        filter: &CharacterEventFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing events for character {}", character_id);
        let url = self.client.request_builder().related_url(
            Resource::Characters,
            character_id,
            Resource::Events,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List series in which a character appears
    ///
    /// # Arguments
    /// * `character_id` - Character id
    /// * `filter` - Query filters
    /// * `callback` - Receives the raw response exactly once
    pub fn series<F>(
        &self,
        character_id: u64,
        filter: &CharacterSeriesFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing series for character {}", character_id);
        let url = self.client.request_builder().related_url(
            Resource::Characters,
            character_id,
            Resource::Series,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }

    /// List stories featuring a character
    ///
    /// # Arguments
    /// * `character_id` - Character id
    /// * `filter` - Query filters
    /// * `callback` - Receives the raw response exactly once
    pub fn stories<F>(
        &self,
        character_id: u64,
        filter: &CharacterStoryFilter,
        callback: F,
    ) -> MarvelResult<()>
    where
        F: FnOnce(ApiResponse) + Send + 'static,
    {
        info!("Listing stories for character {}", character_id);
        let url = self.client.request_builder().related_url(
            Resource::Characters,
            character_id,
            Resource::Stories,
            filter,
        )?;

        self.client.dispatch(url, callback)
    }
}
