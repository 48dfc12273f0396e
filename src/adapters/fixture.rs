//! JSON fixture loader for seeding the profile store.
//!
//! A fixture is a JSON array of profile objects. Field names may be the
//! English API names, the Portuguese names of the legacy dataset, or their
//! camelCase variants. Every top-level field is
//! optional at parse time, and entries are decoded one by one, so a bad
//! record never rejects the file. Completeness is checked later by
//! [`NewProfile::validate`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::profile::{Education, Experience, LanguageSkill, NewProfile, Project};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {} is not a JSON array of profiles: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A fixture entry that could not be read as a profile.
#[derive(Debug, Error)]
#[error("record {position} is malformed: {source}")]
pub struct RecordError {
    /// One-based position in the fixture array.
    pub position: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Outcome of reading one fixture entry.
pub type FixtureRecord = Result<NewProfile, RecordError>;

/// One fixture record, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureProfile {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "foto")]
    pub photo: String,
    #[serde(alias = "cargo")]
    pub role: String,
    #[serde(alias = "resumo")]
    pub summary: String,
    #[serde(alias = "localizacao")]
    pub location: String,
    pub area: String,
    #[serde(alias = "habilidades_tecnicas", alias = "habilidadesTecnicas")]
    pub technical_skills: Vec<String>,
    #[serde(alias = "softSkills")]
    pub soft_skills: Vec<String>,
    #[serde(alias = "experiencias")]
    pub experiences: Vec<Experience>,
    #[serde(alias = "formacao")]
    pub education: Vec<Education>,
    #[serde(alias = "projetos")]
    pub projects: Vec<Project>,
    #[serde(alias = "certificacoes")]
    pub certifications: Vec<String>,
    #[serde(alias = "idiomas")]
    pub languages: Vec<LanguageSkill>,
    #[serde(alias = "area_interesses", alias = "areaInteresses")]
    pub areas_of_interest: Vec<String>,
}

impl From<FixtureProfile> for NewProfile {
    fn from(record: FixtureProfile) -> Self {
        Self {
            name: record.name,
            photo: record.photo,
            role: record.role,
            summary: record.summary,
            location: record.location,
            area: record.area,
            technical_skills: record.technical_skills,
            soft_skills: record.soft_skills,
            experiences: record.experiences,
            education: record.education,
            projects: record.projects,
            certifications: record.certifications,
            languages: record.languages,
            areas_of_interest: record.areas_of_interest,
        }
    }
}

/// Parses fixture JSON text.
///
/// Only a file that is not a JSON array fails as a whole. Each entry is
/// decoded on its own, so a malformed record comes back as an `Err` next to
/// the records that did parse.
pub fn parse_fixture(path: &Path, text: &str) -> Result<Vec<FixtureRecord>, FixtureError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<FixtureProfile>(entry)
                .map(NewProfile::from)
                .map_err(|source| RecordError {
                    position: index + 1,
                    source,
                })
        })
        .collect())
}

/// Reads and parses a fixture file.
pub fn load_fixture(path: &Path) -> Result<Vec<FixtureRecord>, FixtureError> {
    if !path.exists() {
        return Err(FixtureError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_fixture(path, &text)?;
    let malformed = records.iter().filter(|r| r.is_err()).count();
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        malformed,
        "fixture loaded"
    );
    Ok(records)
}
