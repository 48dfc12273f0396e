//! ListProfilesHandler - Query handler for paginated listing and search.

use std::sync::Arc;

use crate::domain::profile::{search, Profile, ProfileError, ProfileSearch};
use crate::ports::ProfileReader;

/// Query to list profiles, optionally narrowed by search criteria.
#[derive(Debug, Clone)]
pub struct ListProfilesQuery {
    pub search: ProfileSearch,
}

/// Handler for listing profiles.
///
/// Without criteria this is a plain page read from the store. With any
/// criterion set, the whole store is scanned and handed to the search engine.
pub struct ListProfilesHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListProfilesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListProfilesQuery) -> Result<Vec<Profile>, ProfileError> {
        let criteria = query.search;

        if !criteria.has_criteria() {
            return Ok(self.reader.list(criteria.offset, criteria.limit).await?);
        }

        let candidates = self.reader.list_all().await?;
        let found = search(candidates, &criteria);
        tracing::debug!(
            results = found.len(),
            offset = criteria.offset,
            limit = criteria.limit,
            "profile search"
        );
        Ok(found)
    }
}
