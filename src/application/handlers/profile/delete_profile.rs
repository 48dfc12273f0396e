//! DeleteProfileHandler - Command handler for removing profiles.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::ProfileError;
use crate::ports::ProfileRepository;

/// Command to hard-delete a profile.
#[derive(Debug, Clone)]
pub struct DeleteProfileCommand {
    pub profile_id: ProfileId,
}

/// Handler for deleting profiles.
///
/// Returns `false` when the profile did not exist; that is not an error.
pub struct DeleteProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DeleteProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteProfileCommand) -> Result<bool, ProfileError> {
        let deleted = self.repository.delete(cmd.profile_id).await?;
        if deleted {
            tracing::info!(profile_id = %cmd.profile_id, "profile deleted");
        }
        Ok(deleted)
    }
}
