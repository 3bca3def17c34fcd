filter_config! {
    /// Filters for `GET /comics`
    pub struct ComicFilter {
        /// e.g. `comic`, `magazine`, `trade paperback`
        format: String => "format",
        creators: String => "creators",
        characters: String => "characters",
        series: String => "series",
        stories: String => "stories",
        shared_appearances: String => "sharedAppearances",
        collaborators: String => "collaborators",
        no_variants: bool => "noVariants",
        /// Two comma-separated dates, e.g. `2013-01-01,2013-01-02`
        date_range: String => "dateRange",
        start_year: u32 => "startyear",
        issue_number: u32 => "issueNumber",
        digital_id: u64 => "digitalId",
        has_digital_issue: bool => "hasDigitalIssue",
        limit: u32 => "limit",
        offset: u32 => "offset",
        /// `comic` or `collection`
        format_type: String => "formatType",
        /// e.g. `lastWeek`, `thisMonth`
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
    }
}

filter_config! {
    /// Filters for `GET /comics/{id}/characters`
    pub struct ComicCharacterFilter {
        name_starts_with: String => "nameStartsWith",
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        name: String => "name",
        series: String => "series",
        events: String => "events",
        stories: String => "stories",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}

filter_config! {
    /// Filters for `GET /comics/{id}/creators`
    pub struct ComicCreatorFilter {
        first_name: String => "firstName",
        middle_name: String => "middleName",
        last_name: String => "lastName",
        suffix: String => "suffix",
        name_starts_with: String => "nameStartsWith",
        first_name_starts_with: String => "firstNameStartsWith",
        middle_name_starts_with: String => "middleNameStartsWith",
        last_name_starts_with: String => "lastNameStartsWith",
        comics: String => "comics",
        series: String => "series",
        stories: String => "stories",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}

filter_config! {
    /// Filters for `GET /comics/{id}/events`
    pub struct ComicEventFilter {
        characters: String => "characters",
        creators: String => "creators",
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
    /// Filters for `GET /comics/{id}/stories`
    pub struct ComicStoryFilter {
        modified_since: String => "modifiedSince",
        order_by: String => "orderBy",
        series: String => "series",
        events: String => "events",
        creators: String => "creators",
        characters: String => "characters",
        limit: u32 => "limit",
        offset: u32 => "offset",
    }
}
