// src/lib.rs
// MovieHub - Local-first movie browser core
//
// Architecture:
// - Domain-centric: Business rules live in the domain
// - Explicit: No implicit behavior, no magic
// - Local-first: Favorite state is owned by the user's machine
// - Application Layer: UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{validate_movie, Genre, MovieRecord, POSTER_BASE_URL};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    FavoritesRepository, KeyValueRepository, KvFavoritesRepository, SqliteKeyValueRepository,
    FAVORITES_KEY,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FavoritesService, MovieService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{MovieProvider, TmdbClient};
