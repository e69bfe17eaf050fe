//! Domain types shared by the catalog, the trending store and the view.

use serde::{Deserialize, Serialize};

/// Placeholder image shown for movies without a poster.
pub const NO_POSTER_URL: &str = "/static/no-movie.png";

/// A movie as returned by the metadata catalog.
///
/// Only the fields the client displays are modelled; everything else in the
/// upstream payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Resolves the poster reference against an image base URL.
    ///
    /// Falls back to [`NO_POSTER_URL`] when the catalog has no poster.
    pub fn poster_url(&self, image_base_url: &str) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{image_base_url}{path}"),
            _ => NO_POSTER_URL.to_string(),
        }
    }

    /// Release year taken from the `YYYY-MM-DD` release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }

    /// Rating formatted with one decimal, or "N/A".
    pub fn format_rating(&self) -> String {
        match self.vote_average {
            Some(rating) if rating > 0.0 => format!("{rating:.1}"),
            _ => "N/A".to_string(),
        }
    }
}

/// Search-frequency record owned by the trending datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Datastore identifier
    pub id: String,
    /// Query text the record is keyed by
    pub search_term: String,
    /// Number of successful searches for this query
    pub count: u64,
    /// Catalog id of the top result remembered for this query
    pub movie_id: u64,
    /// Title of the remembered movie
    pub title: String,
    /// Resolved poster URL of the remembered movie
    pub poster_url: String,
}

impl SearchRecord {
    /// Projects the record onto the row shown in the trending list.
    pub fn to_trending_entry(&self) -> TrendingEntry {
        TrendingEntry {
            id: self.id.clone(),
            title: self.title.clone(),
            poster_url: self.poster_url.clone(),
        }
    }
}

/// One row of the trending list. Rank is the position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub id: String,
    pub title: String,
    pub poster_url: String,
}

/// Everything the presentation layer needs to render the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    /// Raw text currently in the search box
    pub query: String,
    /// Debounced query that drove the latest search
    pub committed_query: String,
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub trending_movies: Vec<TrendingEntry>,
    pub is_trending_loading: bool,
    pub trending_error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(poster_path: Option<&str>, release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Batman".to_string(),
            poster_path: poster_path.map(str::to_string),
            vote_average: Some(7.25),
            original_language: Some("en".to_string()),
            release_date: release_date.map(str::to_string),
        }
    }

    #[test]
    fn test_poster_url_resolution() {
        let base = "https://image.tmdb.org/t/p/w500";
        assert_eq!(
            movie(Some("/abc.jpg"), None).poster_url(base),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(movie(None, None).poster_url(base), NO_POSTER_URL);
        assert_eq!(movie(Some(""), None).poster_url(base), NO_POSTER_URL);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(movie(None, Some("1989-06-23")).release_year(), Some("1989"));
        assert_eq!(movie(None, Some("")).release_year(), None);
        assert_eq!(movie(None, None).release_year(), None);
    }

    #[test]
    fn test_movie_deserializes_with_missing_optional_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 268, "title": "Batman"}"#).unwrap();
        assert_eq!(movie.id, 268);
        assert!(movie.poster_path.is_none());
        assert_eq!(movie.format_rating(), "N/A");
    }

    #[test]
    fn test_default_view_state_is_idle() {
        let state = ViewState::default();
        assert!(state.query.is_empty());
        assert!(state.movies.is_empty());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert!(!state.is_trending_loading);
    }
}
