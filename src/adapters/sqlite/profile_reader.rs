//! SQLite implementation of ProfileReader.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use super::{db_error, row_to_profile, PROFILE_COLUMNS};
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::Profile;
use crate::ports::ProfileReader;

/// SQLite implementation of ProfileReader.
#[derive(Clone)]
pub struct SqliteProfileReader {
    pool: SqlitePool,
}

impl SqliteProfileReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for SqliteProfileReader {
    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        let sql = format!("SELECT {} FROM profiles WHERE id = ?", PROFILE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch profile"))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Profile>, DomainError> {
        let sql = format!(
            "SELECT {} FROM profiles ORDER BY id LIMIT ? OFFSET ?",
            PROFILE_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list profiles"))?;

        rows.iter().map(row_to_profile).collect()
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        let sql = format!("SELECT {} FROM profiles ORDER BY id", PROFILE_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to scan profiles"))?;

        rows.iter().map(row_to_profile).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count profiles"))?;

        Ok(count.max(0) as u64)
    }
}
