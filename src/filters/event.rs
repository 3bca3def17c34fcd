filter_config! {
    /// Filters for `GET /events`
    pub struct EventFilter {
        creators: String => "creators",
        characters: String => "charactor",
        comics: String => "comics",
        limit: u32 => "limit",
        offset: u32 => "offset",
        stories: String => "stories",
        series: String => "series",
        modified_since: String => "modifiedSince",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
        order_by: String => "orderBy",
    }
}

filter_config! {
    /// Filters for `GET /events/{id}/characters`
    pub struct EventCharacterFilter {
        comics: String => "comics",
        limit: u32 => "limit",
        offset: u32 => "offset",
        stories: String => "stories",
        series: String => "series",
        modified_since: String => "modifiedSince",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
        order_by: String => "orderBy",
    }
}

filter_config! {
    /// Filters for `GET /events/{id}/comics`
    pub struct EventComicFilter {
        characters: String => "characters",
        collaborators: String => "collaborators",
        date_range: String => "dataRange",
        digital_id: u64 => "digitalId",
        events: String => "events",
        format: String => "format",
        issue_number: u32 => "issueNumber",
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        shared_appearances: String => "sharedAppearances",
        start_year: u32 => "startYear",
        stories: String => "stories",
        has_digital_issue: bool => "hasDigitalIssue",
        no_variants: bool => "noVariants",
        creators: String => "creators",
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
    /// Filters for `GET /events/{id}/creators`
    pub struct EventCreatorFilter {
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        stories: String => "stories",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /events/{id}/series`
    pub struct EventSeriesFilter {
        characters: String => "characters",
        limit: u32 => "limit",
        offset: u32 => "offset",
        start_year: u32 => "startYear",
        stories: String => "stories",
        creators: String => "creators",
        title_starts_with: String => "titleStartsWith",
        title: String => "title",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /events/{id}/stories`
    pub struct EventStoryFilter {
        characters: String => "characters",
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        creators: String => "creators",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}
