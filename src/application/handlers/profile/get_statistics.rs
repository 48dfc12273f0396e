//! GetStatisticsHandler - Query handler for directory-wide statistics.

use std::sync::Arc;

use crate::domain::profile::{ProfileError, ProfileStatistics};
use crate::ports::ProfileReader;

/// Handler computing statistics from one full scan.
pub struct GetStatisticsHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetStatisticsHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<ProfileStatistics, ProfileError> {
        let profiles = self.reader.list_all().await?;
        Ok(ProfileStatistics::from_profiles(&profiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::profile::test_support::{sample_store, FailingProfileStore};

    #[tokio::test]
    async fn summarizes_the_store() {
        let stats = GetStatisticsHandler::new(sample_store()).handle().await.unwrap();

        assert_eq!(stats.total_profiles, 3);
        assert_eq!(stats.total_areas, 2);
        assert_eq!(stats.total_cities, 2);
        assert_eq!(stats.total_technologies, 4);
        assert_eq!(stats.profiles_by_area.get("Tech"), Some(2));

        let order: Vec<&str> = stats.profiles_by_area.iter().map(|(area, _)| area).collect();
        assert_eq!(order, vec!["Tech", "Design"]);
    }

    #[tokio::test]
    async fn reader_failure_is_infrastructure() {
        let result = GetStatisticsHandler::new(Arc::new(FailingProfileStore))
            .handle()
            .await;
        assert!(matches!(result, Err(ProfileError::Infrastructure(_))));
    }
}
