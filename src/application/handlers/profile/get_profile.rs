//! GetProfileHandler - Query handler for retrieving one profile.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileReader;

/// Query to get a profile by ID.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub profile_id: ProfileId,
}

/// Handler for retrieving profile details.
pub struct GetProfileHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, ProfileError> {
        self.reader
            .get_by_id(query.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(query.profile_id))
    }
}
