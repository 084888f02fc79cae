// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::MovieRecord;

// ============================================================================
// MOVIE DTOs
// ============================================================================

/// Summary row for list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

impl From<MovieRecord> for MovieDto {
    fn from(movie: MovieRecord) -> Self {
        let poster_url = movie.poster_url();
        Self {
            id: movie.id,
            title: movie.title,
            poster_url,
            overview: movie.overview,
        }
    }
}

/// Full record for the detail screen, including favorite state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
    pub is_favorite: bool,
}

/// Favorite mutations carry the full record so the favorites screen
/// can render without re-fetching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteMovieDto {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

impl From<FavoriteMovieDto> for MovieRecord {
    fn from(dto: FavoriteMovieDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            poster_path: dto.poster_path,
            overview: dto.overview,
        }
    }
}

// ============================================================================
// FAVORITES DTOs
// ============================================================================

/// Favorites screen payload
///
/// A storage or deserialization failure degrades to an empty list plus
/// a user-visible notice; it never fails the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesViewDto {
    pub movies: Vec<MovieDto>,
    pub notice: Option<String>,
}
