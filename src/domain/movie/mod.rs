pub mod entity;
pub mod invariants;

pub use entity::{MovieRecord, POSTER_BASE_URL};
pub use invariants::validate_movie;
