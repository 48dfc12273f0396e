//! ProfileReader port for profile query operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::Profile;

/// Read side of the profile store.
///
/// Listing order is insertion order (ascending id). First-seen semantics
/// in the aggregates depend on it.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError>;

    /// One page of profiles.
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Profile>, DomainError>;

    /// Full scan, used as the working set for search and aggregates.
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
