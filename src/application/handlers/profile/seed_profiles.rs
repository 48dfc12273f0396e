//! SeedProfilesHandler - Command handler for bulk-loading fixture profiles.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::profile::{NewProfile, Profile, ProfileError};
use crate::ports::{ProfileReader, ProfileRepository};

/// Number of stored profiles echoed back for verification.
pub const SEED_SAMPLE_SIZE: usize = 5;

/// Command to load a batch of profiles.
#[derive(Debug, Clone)]
pub struct SeedProfilesCommand {
    /// Records in source order. `Err` carries why a record could not be read.
    pub records: Vec<Result<NewProfile, String>>,
    /// Keep the current contents instead of clearing the store first.
    pub keep_existing: bool,
}

/// Outcome of a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Profiles removed before loading.
    pub removed: u64,
    pub inserted: usize,
    /// Records that were unreadable or failed validation.
    pub rejected: usize,
    /// Inserted profiles per area, sorted by area.
    pub by_area: BTreeMap<String, usize>,
    /// Store size after loading.
    pub total_stored: u64,
    /// First stored profiles, in listing order.
    pub sample: Vec<Profile>,
}

impl SeedReport {
    /// Share of records inserted, as a percentage. Zero for an empty batch.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.inserted + self.rejected;
        if attempted == 0 {
            return 0.0;
        }
        self.inserted as f64 / attempted as f64 * 100.0
    }
}

/// Handler for seeding the store.
///
/// Each record is validated; unreadable and invalid ones are logged and
/// skipped. Store failures abort the run.
pub struct SeedProfilesHandler {
    repository: Arc<dyn ProfileRepository>,
    reader: Arc<dyn ProfileReader>,
}

impl SeedProfilesHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, reader: Arc<dyn ProfileReader>) -> Self {
        Self { repository, reader }
    }

    pub async fn handle(&self, cmd: SeedProfilesCommand) -> Result<SeedReport, ProfileError> {
        let removed = if cmd.keep_existing {
            0
        } else {
            let removed = self.repository.delete_all().await?;
            tracing::info!(removed, "store cleared");
            removed
        };

        let total = cmd.records.len();
        let mut inserted = 0;
        let mut rejected = 0;
        let mut by_area = BTreeMap::new();

        for (index, record) in cmd.records.into_iter().enumerate() {
            let position = index + 1;
            let profile = match record {
                Ok(profile) => profile,
                Err(reason) => {
                    rejected += 1;
                    tracing::warn!(position, total, error = %reason, "record unreadable");
                    continue;
                }
            };
            if let Err(e) = profile.validate() {
                rejected += 1;
                tracing::warn!(position, total, name = %profile.name, error = %e, "record rejected");
                continue;
            }

            let stored = self.repository.create(profile).await?;
            inserted += 1;
            *by_area.entry(stored.area.clone()).or_insert(0) += 1;
            tracing::info!(
                position,
                total,
                profile_id = %stored.id,
                name = %stored.name,
                role = %stored.role,
                "record inserted"
            );
        }

        let total_stored = self.reader.count().await?;
        let sample = self.reader.list(0, SEED_SAMPLE_SIZE).await?;

        Ok(SeedReport {
            removed,
            inserted,
            rejected,
            by_area,
            total_stored,
            sample,
        })
    }
}
