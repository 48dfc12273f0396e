//! CreateProfileHandler - Command handler for storing new profiles.

use std::sync::Arc;

use crate::domain::profile::{NewProfile, Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Command to store a new profile.
///
/// The fields are expected to have passed boundary validation already.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub profile: NewProfile,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<Profile, ProfileError> {
        let profile = self.repository.create(cmd.profile).await?;
        tracing::info!(profile_id = %profile.id, area = %profile.area, "profile created");
        Ok(profile)
    }
}
