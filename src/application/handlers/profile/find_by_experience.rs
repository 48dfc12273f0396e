//! FindByExperienceHandler - Query handler for the minimum-experience filter.

use std::sync::Arc;

use crate::domain::profile::{profiles_with_min_experience, Profile, ProfileError};
use crate::ports::ProfileReader;

#[derive(Debug, Clone, Copy)]
pub struct FindByExperienceQuery {
    pub min_years: i32,
}

/// Profiles whose summed experience reaches `min_years`.
pub struct FindByExperienceHandler {
    reader: Arc<dyn ProfileReader>,
    current_year: i32,
}

impl FindByExperienceHandler {
    /// `current_year` closes experiences that are still ongoing.
    pub fn new(reader: Arc<dyn ProfileReader>, current_year: i32) -> Self {
        Self {
            reader,
            current_year,
        }
    }

    pub async fn handle(&self, query: FindByExperienceQuery) -> Result<Vec<Profile>, ProfileError> {
        let profiles = self.reader.list_all().await?;
        profiles_with_min_experience(profiles, query.min_years, self.current_year).map_err(|err| {
            tracing::warn!(error = %err, "experience filter hit a malformed date");
            err
        })
    }
}
