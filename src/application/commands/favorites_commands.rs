// src/application/commands/favorites_commands.rs
//
// Favorites Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::{FavoriteMovieDto, FavoritesViewDto, MovieDto},
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::MovieRecord;

/// Favorites screen: the full persisted list
///
/// Storage and deserialization failures degrade to an empty list plus
/// a notice; the screen never crashes over a broken store.
pub async fn list_favorites(state: &AppState) -> Result<FavoritesViewDto, String> {
    match state.favorites_service.list_favorites() {
        Ok(movies) => Ok(FavoritesViewDto {
            movies: movies.into_iter().map(MovieDto::from).collect(),
            notice: None,
        }),
        Err(e) => {
            let response = ErrorResponse::from_app_error(e);
            Ok(FavoritesViewDto {
                movies: Vec::new(),
                notice: Some(response.message),
            })
        }
    }
}

/// Flip the favorite state of a movie; returns the new state
pub async fn toggle_favorite(state: &AppState, dto: FavoriteMovieDto) -> Result<bool, String> {
    let movie = MovieRecord::from(dto);
    state
        .favorites_service
        .toggle_favorite(&movie)
        .to_error_response()
}

/// Add a movie to favorites (idempotent)
pub async fn add_favorite(state: &AppState, dto: FavoriteMovieDto) -> Result<(), String> {
    let movie = MovieRecord::from(dto);
    state
        .favorites_service
        .add_favorite(&movie)
        .to_error_response()
}

/// Remove a movie from favorites (no-op if absent)
pub async fn remove_favorite(state: &AppState, movie_id: i64) -> Result<(), String> {
    state
        .favorites_service
        .remove_favorite(movie_id)
        .to_error_response()
}

/// Whether a movie id is currently a favorite
pub async fn is_favorite(state: &AppState, movie_id: i64) -> Result<bool, String> {
    state
        .favorites_service
        .is_favorite(movie_id)
        .to_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::integrations::MockMovieProvider;
    use crate::repositories::MockFavoritesRepository;
    use crate::services::{FavoritesService, MovieService};
    use std::sync::Arc;

    fn state_with_favorites(repo: MockFavoritesRepository) -> AppState {
        AppState {
            movie_service: Arc::new(MovieService::new(Arc::new(MockMovieProvider::new()))),
            favorites_service: Arc::new(FavoritesService::new(Arc::new(repo))),
        }
    }

    #[tokio::test]
    async fn test_list_favorites_degrades_on_broken_store() {
        let mut repo = MockFavoritesRepository::new();
        repo.expect_load().returning(|| {
            Err(AppError::Deserialization(
                serde_json::from_str::<Vec<i32>>("not json").unwrap_err(),
            ))
        });

        let state = state_with_favorites(repo);
        let view = list_favorites(&state).await.unwrap();

        assert!(view.movies.is_empty());
        assert!(view.notice.is_some());
    }

    #[tokio::test]
    async fn test_list_favorites_happy_path_has_no_notice() {
        let mut repo = MockFavoritesRepository::new();
        repo.expect_load()
            .returning(|| Ok(vec![MovieRecord::new(1, "A".to_string())]));

        let state = state_with_favorites(repo);
        let view = list_favorites(&state).await.unwrap();

        assert_eq!(view.movies.len(), 1);
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn test_toggle_reports_new_state() {
        let mut repo = MockFavoritesRepository::new();
        repo.expect_toggle().returning(|_| Ok(true));

        let state = state_with_favorites(repo);
        let dto = FavoriteMovieDto {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: None,
            overview: None,
        };

        assert!(toggle_favorite(&state, dto).await.unwrap());
    }
}
