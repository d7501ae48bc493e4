use ua_core::FieldLimits;
use ua_db::UserRepository;

use sqlx::SqlitePool;

/// Process-lifetime context shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub limits: FieldLimits,
}

impl AppState {
    pub fn new(pool: SqlitePool, limits: FieldLimits) -> Self {
        Self { pool, limits }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
