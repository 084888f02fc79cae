// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorites_service;
pub mod movie_service;


// Re-export all services
pub use favorites_service::FavoritesService;
pub use movie_service::MovieService;
