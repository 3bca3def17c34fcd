filter_config! {
    /// Filters for `GET /creators`
    pub struct CreatorFilter {
        // comic id list goes out as `comis`
        comics: String => "comis",
        events: String => "events",
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        stories: String => "stories",
        first_name: String => "firstName",
        first_name_starts_with: String => "firstNameStartsWith",
        last_name: String => "lastName",
        last_name_starts_with: String => "lastNameStartsWith",
        middle_name: String => "middleName",
        middle_name_starts_with: String => "middleNameStartsWith",
        modified_since: String => "modifiedSince",
        name_starts_with: String => "nameStartsWith",
        order_by: String => "orderBy",
        suffix: String => "suffix",
    }
}

filter_config! {
    /// Filters for `GET /creators/{id}/comics`
    pub struct CreatorComicFilter {
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
    /// Filters for `GET /creators/{id}/events`
    pub struct CreatorEventFilter {
        characters: String => "charactor",
        comics: String => "comics",
        limit: u32 => "limit",
        offset: u32 => "offset",
        series: String => "series",
        stories: String => "stories",
        modified_since: String => "modifiedSince",
        name: String => "name",
        name_starts_with: String => "nameStartsWith",
        order_by: String => "orderBy",
    }
}

filter_config! {
    /// Filters for `GET /creators/{id}/series`
    pub struct CreatorSeriesFilter {
        characters: String => "charactor",
        comics: String => "comics",
        limit: u32 => "limit",
        offset: u32 => "offset",
        start_year: u32 => "startYear",
        stories: String => "stories",
        events: String => "events",
        contains: String => "contains",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        series_type: String => "seriesType",
        title: String => "title",
        title_starts_with: String => "titleStartsWith",
    }
}

filter_config! {
    /// Filters for `GET /creators/{id}/stories`
    pub struct CreatorStoryFilter {
        characters: String => "charactor",
        comics: String => "comics",
        limit: u32 => "limit",
        events: String => "events",
        offset: u32 => "offset",
        series: String => "series",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
    }
}
