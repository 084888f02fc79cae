use super::entity::MovieRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieRecord invariants
/// Applied once at the API boundary; stored records are trusted
pub fn validate_movie(movie: &MovieRecord) -> DomainResult<()> {
    validate_id(movie.id)?;
    validate_title(&movie.title)?;
    Ok(())
}

/// External identifiers are positive integers
fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity (external id) is immutable and positive
/// 2. Title is never blank
/// 3. Poster path and overview are optional and unvalidated
/// 4. The favorites list holds at most one record per id
