// src/integrations/tmdb/client.rs
//
// TMDB API Integration
//
// ARCHITECTURE:
// - REST client for the TMDB v3 API
// - Handles authentication and response mapping
// - Maps external data → domain MovieRecord (NO domain mutation)
// - Used by MovieService through the MovieProvider trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches the favorites store
// - Handles all external API concerns

use crate::domain::MovieRecord;
use crate::error::{AppError, AppResult};
use crate::integrations::MovieProvider;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Language code sent with every request
const LANGUAGE: &str = "en-US";

/// All list queries read the first page only
const PAGE: &str = "1";

/// List responses arrive wrapped in a results envelope
#[derive(Debug, Deserialize)]
struct MovieListData {
    results: Vec<MovieData>,
}

/// Raw movie payload from TMDB
#[derive(Debug, Deserialize)]
struct MovieData {
    id: i64,
    title: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
}

/// Error body TMDB returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    #[serde(default)]
    status_message: Option<String>,
}

/// TMDB API Client
pub struct TmdbClient {
    base_url: String,
    http_client: Client,
    access_token: String,
}

impl TmdbClient {
    /// Create a new client with a bearer access token
    pub fn new(access_token: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: TMDB_API_BASE.to_string(),
            http_client,
            access_token,
        }
    }

    /// Create a client from the TMDB_ACCESS_TOKEN environment variable
    pub fn from_env() -> AppResult<Self> {
        let token = std::env::var("TMDB_ACCESS_TOKEN")
            .map_err(|_| AppError::Other("TMDB_ACCESS_TOKEN is not set".to_string()))?;
        Ok(Self::new(token))
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("TMDB request failed with status {}", status));

        log::error!("TMDB API error ({}): {}", status, message);
        Err(AppError::Network(message))
    }

    async fn get_movie_list(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Vec<MovieRecord>> {
        let data: MovieListData = self.get_json(path, query).await?;
        Ok(data.results.into_iter().map(Self::map_movie).collect())
    }

    /// Map raw TMDB payload to the domain record
    fn map_movie(data: MovieData) -> MovieRecord {
        MovieRecord {
            id: data.id,
            title: data.title,
            poster_path: data.poster_path,
            overview: data.overview,
        }
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn search_by_keyword(&self, keyword: &str) -> AppResult<Vec<MovieRecord>> {
        self.get_movie_list(
            "/search/movie",
            &[
                ("query", keyword),
                ("language", LANGUAGE),
                ("page", PAGE),
                ("include_adult", "false"),
            ],
        )
        .await
    }

    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<MovieRecord>> {
        let genre_id = genre_id.to_string();
        self.get_movie_list(
            "/discover/movie",
            &[
                ("with_genres", genre_id.as_str()),
                ("language", LANGUAGE),
                ("page", PAGE),
            ],
        )
        .await
    }

    async fn popular(&self) -> AppResult<Vec<MovieRecord>> {
        self.get_movie_list("/movie/popular", &[("language", LANGUAGE), ("page", PAGE)])
            .await
    }

    async fn movie_details(&self, id: i64) -> AppResult<MovieRecord> {
        let data: MovieData = self
            .get_json(&format!("/movie/{}", id), &[("language", LANGUAGE)])
            .await?;
        Ok(Self::map_movie(data))
    }

    async fn recommendations(&self, id: i64) -> AppResult<Vec<MovieRecord>> {
        self.get_movie_list(
            &format!("/movie/{}/recommendations", id),
            &[("language", LANGUAGE), ("page", PAGE)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TmdbClient::new("test_token".to_string());
        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
        assert_eq!(client.access_token, "test_token");
    }

    #[test]
    fn test_list_envelope_deserializes() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "poster_path": "/m.jpg", "overview": "A hacker."},
                {"id": 604, "title": "The Matrix Reloaded", "poster_path": null}
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let data: MovieListData = serde_json::from_str(json).unwrap();
        assert_eq!(data.results.len(), 2);

        let movie = TmdbClient::map_movie(data.results.into_iter().next().unwrap());
        assert_eq!(movie.id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.poster_path.as_deref(), Some("/m.jpg"));
    }

    #[test]
    fn test_detail_payload_ignores_extra_fields() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker.",
            "runtime": 136,
            "genres": [{"id": 28, "name": "Action"}]
        }"#;

        let data: MovieData = serde_json::from_str(json).unwrap();
        let movie = TmdbClient::map_movie(data);
        assert_eq!(movie.id, 603);
        assert!(movie.poster_path.is_none());
    }

    // Note: Real API tests would be in integration test suite
    // and would use mocked responses or test against real API
}
