//! UpdateProfileHandler - Command handler for partial profile updates.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::{Profile, ProfileError, ProfileUpdate};
use crate::ports::{ProfileReader, ProfileRepository};

/// Command to overwrite the supplied fields of a profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub profile_id: ProfileId,
    pub update: ProfileUpdate,
}

/// Handler for updating profiles.
pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    reader: Arc<dyn ProfileReader>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, reader: Arc<dyn ProfileReader>) -> Self {
        Self { repository, reader }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Profile, ProfileError> {
        let mut profile = self
            .reader
            .get_by_id(cmd.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(cmd.profile_id))?;

        if cmd.update.is_empty() {
            return Ok(profile);
        }

        cmd.update.apply_to(&mut profile);
        self.repository.update(&profile).await?;

        tracing::info!(profile_id = %profile.id, "profile updated");
        Ok(profile)
    }
}
