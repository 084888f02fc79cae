// src/integrations/provider.rs
//
// Movie metadata provider seam
//
// Services depend on this trait, never on a concrete HTTP client.

use crate::domain::MovieRecord;
use crate::error::AppResult;
use async_trait::async_trait;

/// Read-only movie metadata queries against the external API
///
/// Language is fixed to en-US and all list queries return the first
/// result page only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Keyword search
    async fn search_by_keyword(&self, keyword: &str) -> AppResult<Vec<MovieRecord>>;

    /// Genre-filtered discovery
    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<MovieRecord>>;

    /// Currently popular movies
    async fn popular(&self) -> AppResult<Vec<MovieRecord>>;

    /// Full record for one movie id
    async fn movie_details(&self, id: i64) -> AppResult<MovieRecord>;

    /// Recommendations derived from one movie id
    async fn recommendations(&self, id: i64) -> AppResult<Vec<MovieRecord>>;
}
