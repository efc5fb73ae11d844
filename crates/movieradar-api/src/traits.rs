//! Service trait for the catalog backend.
//!
//! The GUI only talks to the backend through this trait.

use std::future::Future;

use movieradar_core::details::DetailSources;
use movieradar_core::models::MediaItem;
use movieradar_core::search::SearchPage;

pub trait CatalogService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search movies and TV shows by free text.
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, Self::Error>> + Send;

    /// Currently trending titles.
    fn trending(&self) -> impl Future<Output = Result<Vec<MediaItem>, Self::Error>> + Send;

    /// Merged-source details for one title. `media_type` is `"movie"` or `"tv"`.
    fn details(
        &self,
        media_type: &str,
        id: i64,
    ) -> impl Future<Output = Result<DetailSources, Self::Error>> + Send;
}
