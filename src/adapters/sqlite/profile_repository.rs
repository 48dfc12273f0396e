//! SQLite implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;

use super::db_error;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{NewProfile, Profile};
use crate::ports::ProfileRepository;

/// SQLite implementation of ProfileRepository.
#[derive(Clone)]
pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn create(&self, profile: NewProfile) -> Result<Profile, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (
                name, photo, role, summary, location, area,
                technical_skills, soft_skills, experiences, education,
                projects, certifications, languages, areas_of_interest
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.photo)
        .bind(&profile.role)
        .bind(&profile.summary)
        .bind(&profile.location)
        .bind(&profile.area)
        .bind(Json(&profile.technical_skills))
        .bind(Json(&profile.soft_skills))
        .bind(Json(&profile.experiences))
        .bind(Json(&profile.education))
        .bind(Json(&profile.projects))
        .bind(Json(&profile.certifications))
        .bind(Json(&profile.languages))
        .bind(Json(&profile.areas_of_interest))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert profile"))?;

        let id = ProfileId::from_i64(result.last_insert_rowid());
        tracing::debug!(profile_id = %id, "profile row inserted");
        Ok(profile.into_profile(id))
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                name = ?, photo = ?, role = ?, summary = ?, location = ?, area = ?,
                technical_skills = ?, soft_skills = ?, experiences = ?, education = ?,
                projects = ?, certifications = ?, languages = ?, areas_of_interest = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.photo)
        .bind(&profile.role)
        .bind(&profile.summary)
        .bind(&profile.location)
        .bind(&profile.area)
        .bind(Json(&profile.technical_skills))
        .bind(Json(&profile.soft_skills))
        .bind(Json(&profile.experiences))
        .bind(Json(&profile.education))
        .bind(Json(&profile.projects))
        .bind(Json(&profile.certifications))
        .bind(Json(&profile.languages))
        .bind(Json(&profile.areas_of_interest))
        .bind(profile.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update profile"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::profile_not_found(profile.id));
        }

        Ok(())
    }

    async fn delete(&self, id: ProfileId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete profile"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM profiles")
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to clear profiles"))?;

        Ok(result.rows_affected())
    }
}
