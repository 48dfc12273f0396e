//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{NewProfile, Profile};

/// Write side of the profile store.
///
/// Each call is one unit of work against the store; implementations
/// acquire whatever connection they need for the call and release it
/// before returning.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile. The store assigns the id, which is never
    /// handed out again, even after deletion.
    async fn create(&self, profile: NewProfile) -> Result<Profile, DomainError>;

    /// Overwrite a stored profile.
    ///
    /// # Errors
    ///
    /// `ErrorCode::ProfileNotFound` if no profile has this id.
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Hard-delete a profile. Returns `false` if it did not exist.
    async fn delete(&self, id: ProfileId) -> Result<bool, DomainError>;

    /// Remove every profile, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
