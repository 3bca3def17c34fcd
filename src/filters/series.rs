filter_config! {
    /// Filters for `GET /series`
    pub struct SeriesFilter {
        characters: String => "characters",
        comics: String => "comics",
        creators: String => "creators",
        events: String => "events",
        limit: u32 => "limit",
        start_year: u32 => "startYear",
        stories: String => "stories",
        contains: String => "contains",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        series_type: String => "seriesType",
        title: String => "title",
        title_starts_with: String => "titleStartsWith",
    }
}

filter_config! {
    /// Filters for `GET /series/{id}/characters`
    pub struct SeriesCharacterFilter {
        comics: String => "comics",
        events: String => "events",
        limit: u32 => "limit",
        stories: String => "stories",
        offset: u32 => "offset",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
    }
}

filter_config! {
    /// Filters for `GET /series/{id}/comics`
    pub struct SeriesComicFilter {
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
    /// Filters for `GET /series/{id}/creators`
    pub struct SeriesCreatorFilter {
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        stories: String => "stories",
        comics: String => "comics",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /series/{id}/events`
    pub struct SeriesEventFilter {
        characters: String => "characters",
        limit: u32 => "limit",
        offset: u32 => "offset",
        stories: String => "stories",
        creators: String => "creators",
        comics: String => "comics",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}

filter_config! {
    /// Filters for `GET /series/{id}/stories`
    pub struct SeriesStoryFilter {
        characters: String => "characters",
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        creators: String => "creators",
        comics: String => "comics",
        order_by: String => "orderBy",
        modified_since: String => "modifiedSince",
    }
}
