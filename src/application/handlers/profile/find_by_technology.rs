//! FindByTechnologyHandler - Query handler for the technology filter.

use std::sync::Arc;

use crate::domain::profile::{profiles_with_technology, Profile, ProfileError};
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct FindByTechnologyQuery {
    pub technology: String,
}

/// Profiles with a technical skill containing the technology, ignoring case.
pub struct FindByTechnologyHandler {
    reader: Arc<dyn ProfileReader>,
}

impl FindByTechnologyHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: FindByTechnologyQuery) -> Result<Vec<Profile>, ProfileError> {
        let profiles = self.reader.list_all().await?;
        Ok(profiles_with_technology(profiles, &query.technology))
    }
}
