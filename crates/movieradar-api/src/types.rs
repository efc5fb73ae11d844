//! Response envelopes of the aggregator backend.

use serde::Deserialize;

use movieradar_core::details::DetailSources;
use movieradar_core::models::{MediaItem, OmdbDetails, TmdbDetails};
use movieradar_core::search::SearchPage;

/// `GET /search` → `{ "tmdb": { "results": [...], "page": 1, "total_pages": 3 }, "omdb": {...} }`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub tmdb: Option<TmdbPage>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<MediaItem>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl SearchResponse {
    pub fn into_page(self) -> SearchPage {
        match self.tmdb {
            Some(tmdb) => SearchPage {
                results: tmdb.results,
                page: tmdb.page,
                total_pages: tmdb.total_pages,
            },
            None => SearchPage {
                results: Vec::new(),
                page: 1,
                total_pages: 0,
            },
        }
    }
}

/// `GET /trending` → `{ "results": [...] }`
#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub results: Vec<MediaItem>,
}

/// `GET /details` → `{ "tmdb": {...}, "omdb": {...} }`, either side may be missing.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub tmdb: Option<TmdbDetails>,
    pub omdb: Option<OmdbDetails>,
}

impl DetailsResponse {
    pub fn into_sources(self) -> DetailSources {
        DetailSources {
            tmdb: self.tmdb,
            omdb: self.omdb,
        }
    }
}
