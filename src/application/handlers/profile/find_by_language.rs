//! FindByLanguageHandler - Query handler for the language filter.

use std::sync::Arc;

use crate::domain::profile::{profiles_by_language, Profile, ProfileError};
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct FindByLanguageQuery {
    pub language: String,
    /// Proficiency label the entry must reach, if any.
    pub min_level: Option<String>,
}

pub struct FindByLanguageHandler {
    reader: Arc<dyn ProfileReader>,
}

impl FindByLanguageHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: FindByLanguageQuery) -> Result<Vec<Profile>, ProfileError> {
        let profiles = self.reader.list_all().await?;
        Ok(profiles_by_language(
            profiles,
            &query.language,
            query.min_level.as_deref(),
        ))
    }
}
