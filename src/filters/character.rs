filter_config! {
    /// Filters for `GET /characters`
    pub struct CharacterFilter {
        /// e.g. `name`, `-modified`
        order_by: String => "orderBy",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
        /// ISO 8601 date
        modified_since: String => "modifiedSince",
        offset: u32 => "offset",
        limit: u32 => "limit",
        /// Comma-separated comic ids
        comics: String => "comics",
        series: String => "series",
        events: String => "events",
        stories: String => "stories",
    }
}

filter_config! {
    /// Filters for `GET /characters/{id}/comics`
    pub struct CharacterComicFilter {
        format_type: String => "formatType",
        date_descriptor: String => "dateDescriptor",
        title: String => "title",
        title_starts_with: String => "titleStartsWith",
        diamond_code: String => "diamondCode",
        upc: String => "upc",
        isbn: String => "isbn",
        ean: String => "ean",
        issn: String => "issn",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        format: String => "format",
        creators: String => "creators",
        series: String => "series",
        events: String => "events",
        stories: String => "stories",
        shared_appearances: String => "sharedAppearances",
        collaborators: String => "collaborators",
        no_variants: bool => "noVariants",
        date_range: String => "dataRange",
        start_year: u32 => "startYear",
        issue_number: u32 => "issueNumber",
        digital_id: u64 => "digitalId",
        limit: u32 => "limit",
        offset: u32 => "offset",
        has_digital_issue: bool => "hasDigitalIssue",
    }
}

filter_config! {
    /// Filters for `GET /characters/{id}/events`
    pub struct CharacterEventFilter {
        name_starts_with: String => "nameStartsWith",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        creators: String => "creators",
        series: String => "series",
        comics: String => "comics",
        stories: String => "stories",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}

filter_config! {
    /// Filters for `GET /characters/{id}/series`
    pub struct CharacterSeriesFilter {
        title: String => "title",
        title_starts_with: String => "titleStartsWith",
        modified_since: String => "modifiedSince",
        /// `collection`, `one shot`, `limited` or `ongoing`
        series_type: String => "seriesType",
        contains: String => "contains",
        order_by: String => "orderBy",
        comics: String => "comics",
        start_year: u32 => "startYear",
        stories: String => "stories",
        events: String => "events",
        creators: String => "creators",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}

filter_config! {
    /// Filters for `GET /characters/{id}/stories`
    pub struct CharacterStoryFilter {
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        comics: String => "comics",
        series: String => "series",
        events: String => "events",
        creators: String => "creators",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}
