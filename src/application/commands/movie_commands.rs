// src/application/commands/movie_commands.rs
//
// Movie Query Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::{MovieDetailDto, MovieDto},
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::Genre;

/// Search movies by keyword
pub async fn search_movies(state: &AppState, keyword: String) -> Result<Vec<MovieDto>, String> {
    let movies = state
        .movie_service
        .search_by_keyword(&keyword)
        .await
        .to_error_response()?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Browse movies in one category
pub async fn browse_category(state: &AppState, category: String) -> Result<Vec<MovieDto>, String> {
    let genre = Genre::from_name(&category).ok_or_else(|| {
        ErrorResponse::validation(format!("Unknown category: {}", category)).to_json_string()
    })?;

    let movies = state
        .movie_service
        .browse_genre(genre)
        .await
        .to_error_response()?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Currently popular movies
pub async fn popular_movies(state: &AppState) -> Result<Vec<MovieDto>, String> {
    let movies = state.movie_service.popular().await.to_error_response()?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Full detail for one movie id
///
/// The id is the only handoff from list screens; the full record is
/// re-fetched here. A favorites read failure degrades to "not a
/// favorite" instead of failing the screen.
pub async fn get_movie_detail(state: &AppState, movie_id: i64) -> Result<MovieDetailDto, String> {
    let movie = state
        .movie_service
        .movie_details(movie_id)
        .await
        .to_error_response()?;

    let is_favorite = match state.favorites_service.is_favorite(movie_id) {
        Ok(fav) => fav,
        Err(e) => {
            log::warn!("favorite lookup failed for movie {}: {}", movie_id, e);
            false
        }
    };

    let poster_url = movie.poster_url();
    Ok(MovieDetailDto {
        id: movie.id,
        title: movie.title,
        poster_path: movie.poster_path,
        poster_url,
        overview: movie.overview,
        is_favorite,
    })
}

/// Recommendations for one movie id
pub async fn get_recommendations(
    state: &AppState,
    movie_id: i64,
) -> Result<Vec<MovieDto>, String> {
    let movies = state
        .movie_service
        .recommendations(movie_id)
        .await
        .to_error_response()?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}
