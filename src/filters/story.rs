filter_config! {
    /// Filters for `GET /stories`
    pub struct StoryFilter {
        characters: String => "characters",
        comics: String => "comics",
        creators: String => "creators",
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        series: String => "series",
    }
}

filter_config! {
    /// Filters for `GET /stories/{id}/characters`
    pub struct StoryCharacterFilter {
        comics: String => "comics",
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
    }
}

filter_config! {
    /// Filters for `GET /stories/{id}/comics`
    pub struct StoryComicFilter {
        characters: String => "characters",
        collaborators: String => "collaborators",
        date_range: String => "dataRange",
        digital_id: u64 => "digitalId",
        events: String => "events",
        format: String => "format",
        issue_number: u32 => "issueNumber",
        limit: u32 => "limit",
        offset: u32 => "offset",
        shared_appearances: String => "sharedAppearances",
        start_year: u32 => "startYear",
        has_digital_issue: bool => "hasDigitalIssue",
        no_variants: bool => "noVariants",
        creators: String => "creators",
        series: String => "series",
        date_descriptor: String => "dateDescriptor",
        diamond_code: String => "diamondCode",
        ean: String => "ean",
        format_type: String => "formatType",
        isbn: String => "isbn",
        issn: String => "issn",
        upc: String => "upc",
        title_starts_with: String => "titleStartsWith",
        title: String => "title",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /stories/{id}/creators`
    pub struct StoryCreatorFilter {
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /stories/{id}/events`
    pub struct StoryEventFilter {
        characters: String => "characters",
        limit: u32 => "limit",
        offset: u32 => "offset",
        creators: String => "creators",
        series: String => "series",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /stories/{id}/series`
    pub struct StorySeriesFilter {
        characters: String => "characters",
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        start_year: u32 => "startYear",
        creators: String => "creators",
        title_starts_with: String => "titleStartsWith",
        title: String => "title",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}
