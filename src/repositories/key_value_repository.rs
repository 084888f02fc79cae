// src/repositories/key_value_repository.rs

use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

/// Durable string store keyed by string
///
/// One serialized value per key. Values are opaque to this layer.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT value FROM kv_entries WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO kv_entries (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }
}
