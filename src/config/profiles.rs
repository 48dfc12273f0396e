//! Profile query configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::profile::DEFAULT_CURRENT_YEAR;

/// Tunables for profile listing and experience arithmetic
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesConfig {
    /// Year used as the end of ongoing positions
    #[serde(default = "default_current_year")]
    pub current_year: i32,

    /// Page size when the request gives none
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound for a requested page size
    #[serde(default = "default_page_size")]
    pub max_page_size: usize,
}

impl ProfilesConfig {
    /// Resolves a requested page size into `1..=max_page_size`.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1900..=9999).contains(&self.current_year) {
            return Err(ValidationError::InvalidCurrentYear);
        }
        if self.max_page_size == 0
            || self.default_page_size == 0
            || self.default_page_size > self.max_page_size
        {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(())
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            current_year: default_current_year(),
            default_page_size: default_page_size(),
            max_page_size: default_page_size(),
        }
    }
}

fn default_current_year() -> i32 {
    DEFAULT_CURRENT_YEAR
}

fn default_page_size() -> usize {
    100
}
