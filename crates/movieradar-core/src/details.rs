//! Details modal state and the TMDB/OMDB record merge.
//!
//! TMDB is the primary source and OMDB the fallback, field by field. OMDB
//! reports missing values as `"N/A"`; those count as absent, as do empty
//! strings from either side.

use crate::models::{MediaItem, OmdbDetails, TmdbDetails};

const CAST_LIMIT: usize = 5;
const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";

/// The two upstream records the backend returns for a details lookup.
#[derive(Debug, Clone, Default)]
pub struct DetailSources {
    pub tmdb: Option<TmdbDetails>,
    pub omdb: Option<OmdbDetails>,
}

/// Display-ready details for one title.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDetails {
    pub title: String,
    pub poster_url: Option<String>,
    pub plot: Option<String>,
    pub cast: Option<String>,
    pub release_date: Option<String>,
    pub ratings: Option<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty() && *v != "N/A")
}

impl MediaDetails {
    /// Merge both sources. `image_base` resolves TMDB's relative poster path.
    pub fn merge(sources: &DetailSources, image_base: &str) -> Self {
        let tmdb = sources.tmdb.as_ref();
        let omdb = sources.omdb.as_ref().filter(|o| o.is_found());

        let title = present(tmdb.and_then(|t| t.title.as_deref()))
            .or_else(|| present(tmdb.and_then(|t| t.name.as_deref())))
            .or_else(|| present(omdb.and_then(|o| o.title.as_deref())))
            .unwrap_or("Untitled")
            .to_string();

        let poster_url = present(tmdb.and_then(|t| t.poster_path.as_deref()))
            .map(|p| format!("{}{}", image_base.trim_end_matches('/'), p))
            .or_else(|| present(omdb.and_then(|o| o.poster.as_deref())).map(String::from));

        let plot = present(tmdb.and_then(|t| t.overview.as_deref()))
            .or_else(|| present(omdb.and_then(|o| o.plot.as_deref())))
            .map(String::from);

        let cast = tmdb_cast(tmdb).or_else(|| omdb_cast(omdb));

        let release_date = present(tmdb.and_then(|t| t.release_date.as_deref()))
            .or_else(|| present(tmdb.and_then(|t| t.first_air_date.as_deref())))
            .or_else(|| present(omdb.and_then(|o| o.released.as_deref())))
            .map(String::from);

        Self {
            title,
            poster_url,
            plot,
            cast,
            release_date,
            ratings: ratings_line(tmdb, omdb),
        }
    }
}

fn tmdb_cast(tmdb: Option<&TmdbDetails>) -> Option<String> {
    let names: Vec<&str> = tmdb?
        .credits
        .as_ref()?
        .cast
        .iter()
        .filter_map(|c| present(Some(c.name.as_str())))
        .take(CAST_LIMIT)
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

fn omdb_cast(omdb: Option<&OmdbDetails>) -> Option<String> {
    let actors = present(omdb?.actors.as_deref())?;
    let names: Vec<&str> = actors
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .take(CAST_LIMIT)
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

/// `TMDB 7.8/10 · IMDb 8.1/10 · Rotten Tomatoes 91%`, skipping whatever is
/// unavailable. `None` when no rating is available at all.
fn ratings_line(tmdb: Option<&TmdbDetails>, omdb: Option<&OmdbDetails>) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(vote) = tmdb.and_then(|t| t.vote_average).filter(|v| *v > 0.0) {
        parts.push(format!("TMDB {vote:.1}/10"));
    }
    if let Some(imdb) = present(omdb.and_then(|o| o.imdb_rating.as_deref())) {
        parts.push(format!("IMDb {imdb}/10"));
    }
    if let Some(rt) = present(omdb.and_then(|o| o.rating_from(ROTTEN_TOMATOES))) {
        parts.push(format!("{ROTTEN_TOMATOES} {rt}"));
    }
    (!parts.is_empty()).then(|| parts.join(" \u{00B7} "))
}

/// Request for the details of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub media_type: String,
    pub id: i64,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailsState {
    #[default]
    Closed,
    Loading(MediaItem),
    Loaded(MediaItem, Box<MediaDetails>),
    Failed(MediaItem, String),
}

impl DetailsState {
    /// The title the modal is showing, if open.
    pub fn item(&self) -> Option<&MediaItem> {
        match self {
            Self::Closed => None,
            Self::Loading(item) | Self::Loaded(item, _) | Self::Failed(item, _) => Some(item),
        }
    }
}

/// State of the single details modal.
///
/// Created once and reused for every open; opening while already open
/// replaces the content instead of stacking another modal.
#[derive(Debug)]
pub struct DetailsModal {
    state: DetailsState,
    image_base: String,
    latest_seq: u64,
}

impl DetailsModal {
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            state: DetailsState::Closed,
            image_base: image_base.into(),
            latest_seq: 0,
        }
    }

    /// Show the loading state for `item` and return the lookup to perform.
    pub fn open(&mut self, item: MediaItem) -> DetailsRequest {
        self.latest_seq += 1;
        let request = DetailsRequest {
            media_type: item.resolved_media_type().to_string(),
            id: item.id,
            seq: self.latest_seq,
        };
        self.state = DetailsState::Loading(item);
        request
    }

    /// Apply a lookup result. Dropped if the modal was closed or reopened
    /// for another title since the request was issued.
    pub fn finish(&mut self, seq: u64, outcome: Result<DetailSources, String>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        let item = match std::mem::take(&mut self.state) {
            DetailsState::Loading(item) => item,
            other => {
                self.state = other;
                return false;
            }
        };
        self.state = match outcome {
            Ok(sources) => {
                DetailsState::Loaded(item, Box::new(MediaDetails::merge(&sources, &self.image_base)))
            }
            Err(message) => DetailsState::Failed(item, message),
        };
        true
    }

    pub fn close(&mut self) {
        self.latest_seq += 1;
        self.state = DetailsState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailsState::Closed)
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }
}
