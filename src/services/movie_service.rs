// src/services/movie_service.rs
use crate::domain::{validate_movie, DomainError, Genre, MovieRecord};
use crate::error::{AppError, AppResult};
use crate::integrations::MovieProvider;
use std::sync::Arc;

/// Orchestrates movie queries against the external metadata provider
///
/// The service owns the API boundary rules the screens share: blank
/// keywords are rejected before a request goes out, malformed provider
/// records are dropped instead of propagated, and zero-result queries
/// surface as a distinct empty-result error so the UI can render a
/// "no results" state instead of a failure.
pub struct MovieService {
    provider: Arc<dyn MovieProvider>,
}

impl MovieService {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self { provider }
    }

    pub async fn search_by_keyword(&self, keyword: &str) -> AppResult<Vec<MovieRecord>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::Domain(DomainError::InvariantViolation(
                "Search keyword cannot be empty".to_string(),
            )));
        }

        let movies = self.provider.search_by_keyword(keyword).await?;
        Self::accept_results(movies)
    }

    pub async fn browse_genre(&self, genre: Genre) -> AppResult<Vec<MovieRecord>> {
        let movies = self.provider.discover_by_genre(genre.id()).await?;
        Self::accept_results(movies)
    }

    pub async fn popular(&self) -> AppResult<Vec<MovieRecord>> {
        let movies = self.provider.popular().await?;
        Self::accept_results(movies)
    }

    pub async fn movie_details(&self, id: i64) -> AppResult<MovieRecord> {
        let movie = self.provider.movie_details(id).await?;
        validate_movie(&movie)?;
        Ok(movie)
    }

    pub async fn recommendations(&self, id: i64) -> AppResult<Vec<MovieRecord>> {
        let movies = self.provider.recommendations(id).await?;
        Self::accept_results(movies)
    }

    /// Drop records that fail boundary validation; zero survivors is an
    /// empty result, not a technical failure
    fn accept_results(movies: Vec<MovieRecord>) -> AppResult<Vec<MovieRecord>> {
        let accepted: Vec<MovieRecord> = movies
            .into_iter()
            .filter(|movie| match validate_movie(movie) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("dropping malformed movie record {}: {}", movie.id, e);
                    false
                }
            })
            .collect();

        if accepted.is_empty() {
            return Err(AppError::EmptyResult);
        }

        Ok(accepted)
    }
}
