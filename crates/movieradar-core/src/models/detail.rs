use serde::{Deserialize, Serialize};

/// TMDB movie or TV detail record, as forwarded by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbDetails {
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    pub credits: Option<TmdbCredits>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbCast {
    pub name: String,
}

/// OMDB detail record. OMDB spells missing values as `"N/A"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbDetails {
    pub title: Option<String>,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub actors: Option<String>,
    pub released: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
    pub response: Option<String>,
}

/// One entry of OMDB's `Ratings` array, e.g. `{"Source": "Rotten Tomatoes", "Value": "91%"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    pub source: String,
    pub value: String,
}

impl OmdbDetails {
    /// OMDB answers lookups it cannot satisfy with `"Response": "False"`.
    pub fn is_found(&self) -> bool {
        self.response.as_deref() != Some("False")
    }

    /// The value of the rating whose `Source` equals `source`.
    pub fn rating_from(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source == source)
            .map(|r| r.value.as_str())
    }
}
