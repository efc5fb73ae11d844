use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie or TV show record as returned by the backend's search and
/// trending endpoints.
///
/// Only the fields the client reads are typed. Everything else the backend
/// sends is kept in `extra` so a stored copy round-trips the full record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `(id, media_type)` pair that identifies a record.
///
/// Ids are only unique within one media type, so both parts are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey<'a> {
    pub id: i64,
    pub media_type: &'a str,
}

impl MediaItem {
    /// The explicit `media_type`, or one inferred from which title field is
    /// set: a non-empty `title` means a movie, anything else a TV show.
    pub fn resolved_media_type(&self) -> &str {
        match (&self.media_type, &self.title) {
            (Some(kind), _) => kind,
            (None, Some(title)) if !title.is_empty() => "movie",
            (None, _) => "tv",
        }
    }

    pub fn identity(&self) -> IdentityKey<'_> {
        IdentityKey {
            id: self.id,
            media_type: self.resolved_media_type(),
        }
    }

    pub fn same_identity(&self, other: &MediaItem) -> bool {
        self.identity() == other.identity()
    }

    /// Returns the best available display title.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }

    /// Movie release date or first air date, empty when neither is known.
    pub fn display_date(&self) -> &str {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .unwrap_or("")
    }

    /// Full poster URL under `image_base`, if the record has a poster.
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base.trim_end_matches('/'), p))
    }

    /// Public TMDB page for this title.
    pub fn tmdb_url(&self) -> String {
        format!(
            "https://www.themoviedb.org/{}/{}",
            self.resolved_media_type(),
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: &str) -> MediaItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_title_without_media_type_is_movie() {
        let x = item(r#"{"id": 1, "title": "X"}"#);
        assert_eq!(x.resolved_media_type(), "movie");
    }

    #[test]
    fn test_name_without_media_type_is_tv() {
        let y = item(r#"{"id": 1, "name": "Y"}"#);
        assert_eq!(y.resolved_media_type(), "tv");
    }

    #[test]
    fn test_explicit_media_type_wins() {
        let p = item(r#"{"id": 1, "title": "X", "media_type": "person"}"#);
        assert_eq!(p.resolved_media_type(), "person");
    }

    #[test]
    fn test_identity_distinguishes_media_types() {
        let movie = item(r#"{"id": 7, "title": "Same"}"#);
        let show = item(r#"{"id": 7, "name": "Same"}"#);
        let explicit = item(r#"{"id": 7, "media_type": "movie"}"#);
        assert!(!movie.same_identity(&show));
        assert!(movie.same_identity(&explicit));
    }

    #[test]
    fn test_display_fallbacks() {
        let show = item(r#"{"id": 2, "name": "Show", "first_air_date": "2020-01-01"}"#);
        assert_eq!(show.display_title(), "Show");
        assert_eq!(show.display_date(), "2020-01-01");

        let bare = item(r#"{"id": 3}"#);
        assert_eq!(bare.display_title(), "Untitled");
        assert_eq!(bare.display_date(), "");
        assert_eq!(bare.poster_url("https://img/"), None);
    }

    #[test]
    fn test_tmdb_url_uses_resolved_type() {
        assert_eq!(
            item(r#"{"id": 1399, "name": "Show"}"#).tmdb_url(),
            "https://www.themoviedb.org/tv/1399"
        );
        assert_eq!(
            item(r#"{"id": 603, "title": "Film"}"#).tmdb_url(),
            "https://www.themoviedb.org/movie/603"
        );
    }

    #[test]
    fn test_poster_url_joins_base() {
        let x = item(r#"{"id": 4, "title": "X", "poster_path": "/abc.jpg"}"#);
        assert_eq!(
            x.poster_url("https://image.tmdb.org/t/p/w342/").as_deref(),
            Some("https://image.tmdb.org/t/p/w342/abc.jpg")
        );
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let x = item(r#"{"id": 9, "title": "X", "vote_average": 7.5, "poster_path": null}"#);
        let back = serde_json::to_value(&x).unwrap();
        assert_eq!(back, serde_json::json!({"id": 9, "title": "X", "vote_average": 7.5}));
    }
}
