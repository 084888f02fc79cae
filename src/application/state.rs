// src/application/state.rs

use std::sync::Arc;

use crate::services::{FavoritesService, MovieService};

/// Application state shared by all command handlers.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub favorites_service: Arc<FavoritesService>,
}
