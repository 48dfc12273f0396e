//! In-memory profile store implementing both profile ports.
//!
//! Profiles are kept in insertion order; ids come from a monotonic counter
//! so a deleted id is never handed out again.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::profile::{NewProfile, Profile};
use crate::ports::{ProfileReader, ProfileRepository};

#[derive(Debug, Default)]
struct State {
    profiles: Vec<Profile>,
    last_id: i64,
}

/// Ordered, lock-guarded profile store.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    state: RwLock<State>,
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Profile store lock poisoned")
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `profiles`, ids assigned in order.
    pub fn with_profiles(profiles: impl IntoIterator<Item = NewProfile>) -> Self {
        let mut state = State::default();
        for profile in profiles {
            state.last_id += 1;
            state
                .profiles
                .push(profile.into_profile(ProfileId::from_i64(state.last_id)));
        }
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, DomainError> {
        self.state.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, DomainError> {
        self.state.write().map_err(|_| poisoned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn create(&self, profile: NewProfile) -> Result<Profile, DomainError> {
        let mut state = self.write()?;
        state.last_id += 1;
        let profile = profile.into_profile(ProfileId::from_i64(state.last_id));
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut state = self.write()?;
        match state.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => {
                *slot = profile.clone();
                Ok(())
            }
            None => Err(DomainError::profile_not_found(profile.id)),
        }
    }

    async fn delete(&self, id: ProfileId) -> Result<bool, DomainError> {
        let mut state = self.write()?;
        let before = state.profiles.len();
        state.profiles.retain(|p| p.id != id);
        Ok(state.profiles.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut state = self.write()?;
        let removed = state.profiles.len() as u64;
        state.profiles.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        Ok(self.read()?.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Profile>, DomainError> {
        Ok(self
            .read()?
            .profiles
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.read()?.profiles.clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.read()?.profiles.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::profile::test_support::new_profile;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = InMemoryProfileStore::new();
        let a = store.create(new_profile("Ana Souza", "Tech", &["Rust"])).await.unwrap();
        let b = store.create(new_profile("Bruno Lima", "Tech", &["Go"])).await.unwrap();
        assert_eq!(a.id.as_i64(), 1);
        assert_eq!(b.id.as_i64(), 2);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = InMemoryProfileStore::new();
        let a = store.create(new_profile("Ana Souza", "Tech", &["Rust"])).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());

        let b = store.create(new_profile("Bruno Lima", "Tech", &["Go"])).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let store = InMemoryProfileStore::new();
        assert!(!store.delete(ProfileId::from_i64(9)).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = InMemoryProfileStore::new();
        let ghost = new_profile("Ana Souza", "Tech", &["Rust"]).into_profile(ProfileId::from_i64(5));
        let err = store.update(&ghost).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let store = InMemoryProfileStore::with_profiles(vec![
            new_profile("Ana Souza", "Tech", &["Rust"]),
            new_profile("Bruno Lima", "Tech", &["Go"]),
            new_profile("Carla Dias", "Tech", &["Go"]),
        ]);
        let page = store.list(1, 5).await.unwrap();
        let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bruno Lima", "Carla Dias"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let store = InMemoryProfileStore::with_profiles(vec![
            new_profile("Ana Souza", "Tech", &["Rust"]),
            new_profile("Bruno Lima", "Tech", &["Go"]),
        ]);
        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
