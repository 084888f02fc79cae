// src/services/favorites_service.rs
use crate::domain::{validate_movie, MovieRecord};
use crate::error::{AppError, AppResult};
use crate::repositories::FavoritesRepository;
use std::sync::Arc;

/// Orchestrates favorite-movie state for all screens
///
/// Mutations validate the record before it reaches the repository;
/// reads are pass-through so every caller sees the persisted state.
pub struct FavoritesService {
    favorites_repo: Arc<dyn FavoritesRepository>,
}

impl FavoritesService {
    pub fn new(favorites_repo: Arc<dyn FavoritesRepository>) -> Self {
        Self { favorites_repo }
    }

    pub fn list_favorites(&self) -> AppResult<Vec<MovieRecord>> {
        self.favorites_repo.load()
    }

    pub fn is_favorite(&self, movie_id: i64) -> AppResult<bool> {
        self.favorites_repo.is_favorite(movie_id)
    }

    pub fn add_favorite(&self, movie: &MovieRecord) -> AppResult<()> {
        validate_movie(movie).map_err(AppError::Domain)?;
        self.favorites_repo.add(movie)?;

        log::info!("added movie {} to favorites", movie.id);
        Ok(())
    }

    pub fn remove_favorite(&self, movie_id: i64) -> AppResult<()> {
        self.favorites_repo.remove(movie_id)?;

        log::info!("removed movie {} from favorites", movie_id);
        Ok(())
    }

    pub fn toggle_favorite(&self, movie: &MovieRecord) -> AppResult<bool> {
        validate_movie(movie).map_err(AppError::Domain)?;
        let now_favorite = self.favorites_repo.toggle(movie)?;

        log::info!(
            "movie {} is {} a favorite",
            movie.id,
            if now_favorite { "now" } else { "no longer" }
        );
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockFavoritesRepository;

    #[test]
    fn test_add_validates_before_repository() {
        // No expectation set: a repository call would panic the mock
        let repo = MockFavoritesRepository::new();
        let service = FavoritesService::new(Arc::new(repo));

        let malformed = MovieRecord::new(0, "".to_string());
        assert!(matches!(
            service.add_favorite(&malformed),
            Err(AppError::Domain(_))
        ));
    }

    #[test]
    fn test_toggle_reports_repository_state() {
        let mut repo = MockFavoritesRepository::new();
        repo.expect_toggle().returning(|_| Ok(true));

        let service = FavoritesService::new(Arc::new(repo));
        let movie = MovieRecord::new(603, "The Matrix".to_string());
        assert!(service.toggle_favorite(&movie).unwrap());
    }

    #[test]
    fn test_reads_pass_through() {
        let mut repo = MockFavoritesRepository::new();
        repo.expect_load()
            .returning(|| Ok(vec![MovieRecord::new(1, "A".to_string())]));
        repo.expect_is_favorite()
            .withf(|id| *id == 1)
            .returning(|_| Ok(true));

        let service = FavoritesService::new(Arc::new(repo));
        assert_eq!(service.list_favorites().unwrap().len(), 1);
        assert!(service.is_favorite(1).unwrap());
    }
}
