//! SQLite adapters - Database implementations for the profile store ports.
//!
//! - `SqliteProfileRepository` - Writes
//! - `SqliteProfileReader` - Read-optimized queries
//!
//! Collection fields live in JSON text columns and are decoded through
//! `sqlx::types::Json`.

mod profile_reader;
mod profile_repository;

pub use profile_reader::SqliteProfileReader;
pub use profile_repository::SqliteProfileRepository;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::types::Json;
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{Education, Experience, LanguageSkill, Profile, Project};

/// Opens a connection pool for the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

pub(crate) const PROFILE_COLUMNS: &str = "id, name, photo, role, summary, location, area, \
     technical_skills, soft_skills, experiences, education, projects, \
     certifications, languages, areas_of_interest";

pub(crate) fn db_error(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn row_to_profile(row: &SqliteRow) -> Result<Profile, DomainError> {
    let Json(technical_skills): Json<Vec<String>> = column(row, "technical_skills")?;
    let Json(soft_skills): Json<Vec<String>> = column(row, "soft_skills")?;
    let Json(experiences): Json<Vec<Experience>> = column(row, "experiences")?;
    let Json(education): Json<Vec<Education>> = column(row, "education")?;
    let Json(projects): Json<Vec<Project>> = column(row, "projects")?;
    let Json(certifications): Json<Vec<String>> = column(row, "certifications")?;
    let Json(languages): Json<Vec<LanguageSkill>> = column(row, "languages")?;
    let Json(areas_of_interest): Json<Vec<String>> = column(row, "areas_of_interest")?;

    Ok(Profile {
        id: ProfileId::from_i64(column(row, "id")?),
        name: column(row, "name")?,
        photo: column(row, "photo")?,
        role: column(row, "role")?,
        summary: column(row, "summary")?,
        location: column(row, "location")?,
        area: column(row, "area")?,
        technical_skills,
        soft_skills,
        experiences,
        education,
        projects,
        certifications,
        languages,
        areas_of_interest,
    })
}
