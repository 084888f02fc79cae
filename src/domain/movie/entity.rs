use serde::{Deserialize, Serialize};

/// Base URL for TMDB poster images (w500 rendition)
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Represents one movie as known to the external metadata API
/// Treated as an opaque value object beyond identifier uniqueness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// External API identifier, unique per movie
    pub id: i64,

    /// Display title
    pub title: String,

    /// Poster image path, relative to the image host
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Plot synopsis
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieRecord {
    pub fn new(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            poster_path: None,
            overview: None,
        }
    }

    /// Full poster URL, if the record carries a poster path
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}/{}", POSTER_BASE_URL, path.trim_start_matches('/')))
    }
}

impl std::fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_joins_base() {
        let mut movie = MovieRecord::new(603, "The Matrix".to_string());
        movie.poster_path = Some("/abc123.jpg".to_string());

        assert_eq!(
            movie.poster_url().unwrap(),
            "https://image.tmdb.org/t/p/w500/abc123.jpg"
        );
    }

    #[test]
    fn test_poster_url_absent_without_path() {
        let movie = MovieRecord::new(603, "The Matrix".to_string());
        assert!(movie.poster_url().is_none());
    }

    #[test]
    fn test_serialized_shape_matches_store_format() {
        let mut movie = MovieRecord::new(1, "A".to_string());
        movie.poster_path = Some("/p.jpg".to_string());

        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"poster_path\":\"/p.jpg\""));

        let back: MovieRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }
}
