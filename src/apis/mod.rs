pub mod character;
pub mod comic;
pub mod creator;
pub mod event;
pub mod series;
pub mod story;

// Re-export all APIs
pub use character::CharacterApi;
pub use comic::ComicApi;
pub use creator::CreatorApi;
pub use event::EventApi;
pub use series::SeriesApi;
pub use story::StoryApi;
