// src/repositories/favorites_repository.rs

use std::sync::{Arc, Mutex};

use crate::domain::MovieRecord;
use crate::error::AppResult;
use crate::repositories::KeyValueRepository;

/// Store key holding the serialized favorites list
pub const FAVORITES_KEY: &str = "@FavoriteList";

/// Owns the single durable list of favorite movies
///
/// The list is an ordered sequence with at most one entry per movie id,
/// serialized as a JSON array under [`FAVORITES_KEY`]. Reads always go
/// back to the store; there is no in-memory cache, so every screen sees
/// the latest persisted state.
#[cfg_attr(test, mockall::automock)]
pub trait FavoritesRepository: Send + Sync {
    /// Read the full list. An absent key is an empty list; a malformed
    /// stored value fails with a deserialization error.
    fn load(&self) -> AppResult<Vec<MovieRecord>>;

    /// Whether `id` is present in the persisted list
    fn is_favorite(&self, id: i64) -> AppResult<bool>;

    /// Append `movie` unless its id is already present. Idempotent.
    fn add(&self, movie: &MovieRecord) -> AppResult<()>;

    /// Drop any entry with `id`. No-op if absent.
    fn remove(&self, id: i64) -> AppResult<()>;

    /// Flip the favorite state of `movie`; returns the new state.
    fn toggle(&self, movie: &MovieRecord) -> AppResult<bool>;
}

pub struct KvFavoritesRepository {
    store: Arc<dyn KeyValueRepository>,
    // Serializes every load-mutate-persist cycle. Two concurrent
    // mutations would otherwise race on the shared key and the last
    // writer would silently discard the other's update.
    write_lock: Mutex<()>,
}

impl KvFavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn read_list(&self) -> AppResult<Vec<MovieRecord>> {
        match self.store.get(FAVORITES_KEY)? {
            Some(raw) => {
                let list: Vec<MovieRecord> = serde_json::from_str(&raw)?;
                Ok(list)
            }
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, list: &[MovieRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(list)?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}

impl FavoritesRepository for KvFavoritesRepository {
    fn load(&self) -> AppResult<Vec<MovieRecord>> {
        self.read_list()
    }

    fn is_favorite(&self, id: i64) -> AppResult<bool> {
        Ok(self.read_list()?.iter().any(|m| m.id == id))
    }

    fn add(&self, movie: &MovieRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut list = self.read_list()?;
        if list.iter().any(|m| m.id == movie.id) {
            log::debug!("movie {} already in favorites, add is a no-op", movie.id);
            return Ok(());
        }

        list.push(movie.clone());
        self.persist(&list)
    }

    fn remove(&self, id: i64) -> AppResult<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut list = self.read_list()?;
        let before = list.len();
        list.retain(|m| m.id != id);

        if list.len() == before {
            return Ok(());
        }

        self.persist(&list)
    }

    fn toggle(&self, movie: &MovieRecord) -> AppResult<bool> {
        let _guard = self.write_lock.lock().unwrap();

        let mut list = self.read_list()?;
        let now_favorite = if list.iter().any(|m| m.id == movie.id) {
            list.retain(|m| m.id != movie.id);
            false
        } else {
            list.push(movie.clone());
            true
        };

        self.persist(&list)?;
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connection::create_connection_pool_at, initialize_database};
    use crate::error::AppError;
    use crate::repositories::SqliteKeyValueRepository;

    fn test_setup() -> (
        tempfile::TempDir,
        Arc<SqliteKeyValueRepository>,
        KvFavoritesRepository,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool_at(&dir.path().join("test.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();

        let store = Arc::new(SqliteKeyValueRepository::new(Arc::new(pool)));
        let repo = KvFavoritesRepository::new(store.clone());
        (dir, store, repo)
    }

    fn movie(id: i64, title: &str) -> MovieRecord {
        MovieRecord::new(id, title.to_string())
    }

    #[test]
    fn test_empty_store_loads_empty_list() {
        let (_dir, _store, repo) = test_setup();

        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.is_favorite(42).unwrap());
    }

    #[test]
    fn test_add_then_is_favorite() {
        let (_dir, _store, repo) = test_setup();

        repo.add(&movie(1, "A")).unwrap();
        assert!(repo.is_favorite(1).unwrap());
        assert!(!repo.is_favorite(2).unwrap());
    }

    #[test]
    fn test_add_is_idempotent() {
        let (_dir, _store, repo) = test_setup();

        let m = movie(1, "A");
        repo.add(&m).unwrap();
        repo.add(&m).unwrap();

        let list = repo.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 1);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let (_dir, _store, repo) = test_setup();

        repo.add(&movie(1, "A")).unwrap();
        repo.add(&movie(2, "B")).unwrap();
        let before = repo.load().unwrap();

        repo.add(&movie(3, "C")).unwrap();
        repo.remove(3).unwrap();

        assert_eq!(repo.load().unwrap(), before);
        assert!(!repo.is_favorite(3).unwrap());
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_entries() {
        let (_dir, _store, repo) = test_setup();

        repo.add(&movie(1, "A")).unwrap();
        repo.add(&movie(2, "B")).unwrap();
        repo.add(&movie(3, "C")).unwrap();

        repo.remove(2).unwrap();

        let ids: Vec<i64> = repo.load().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let (_dir, _store, repo) = test_setup();

        repo.add(&movie(1, "A")).unwrap();
        repo.remove(99).unwrap();

        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_round_trip_preserves_ids_and_order() {
        let (_dir, _store, repo) = test_setup();

        for (id, title) in [(5, "E"), (1, "A"), (9, "I")] {
            repo.add(&movie(id, title)).unwrap();
        }

        let ids: Vec<i64> = repo.load().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 1, 9]);
    }

    #[test]
    fn test_toggle_flips_state_and_reports_it() {
        let (_dir, _store, repo) = test_setup();

        let m = movie(7, "G");
        assert!(repo.toggle(&m).unwrap());
        assert!(repo.is_favorite(7).unwrap());

        assert!(!repo.toggle(&m).unwrap());
        assert!(!repo.is_favorite(7).unwrap());
    }

    #[test]
    fn test_seeded_store_remove_scenario() {
        let (_dir, store, repo) = test_setup();

        store
            .set(
                FAVORITES_KEY,
                r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#,
            )
            .unwrap();

        repo.remove(1).unwrap();

        let list = repo.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
        assert_eq!(list[0].title, "B");
    }

    #[test]
    fn test_malformed_stored_value_fails_deserialization() {
        let (_dir, store, repo) = test_setup();

        store.set(FAVORITES_KEY, "not json at all").unwrap();

        match repo.load() {
            Err(AppError::Deserialization(_)) => {}
            other => panic!("expected deserialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_store_failure_propagates_as_storage_error() {
        use crate::repositories::MockKeyValueRepository;

        let mut store = MockKeyValueRepository::new();
        store
            .expect_get()
            .returning(|_| Err(AppError::Pool("no connections available".to_string())));

        let repo = KvFavoritesRepository::new(Arc::new(store));
        assert!(matches!(repo.load(), Err(AppError::Pool(_))));
        assert!(matches!(repo.is_favorite(1), Err(AppError::Pool(_))));
    }

    #[test]
    fn test_wrong_shape_fails_deserialization() {
        let (_dir, store, repo) = test_setup();

        // Valid JSON, but not an array of movie records
        store.set(FAVORITES_KEY, r#"{"id":1}"#).unwrap();

        assert!(matches!(
            repo.load(),
            Err(AppError::Deserialization(_))
        ));
    }
}
