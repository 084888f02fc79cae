// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion for the UI boundary
// - Commands NEVER contain business logic

pub mod favorites_commands;
pub mod movie_commands;

pub use favorites_commands::*;
pub use movie_commands::*;
