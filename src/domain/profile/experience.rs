//! Experience duration arithmetic

use super::errors::ProfileError;
use super::profile::{Experience, Profile};

/// `end` values that mark a position the professional still holds.
pub const CURRENT_POSITION_MARKERS: [&str; 2] = ["Atual", "Current"];

/// Year treated as "now" when none is configured.
pub const DEFAULT_CURRENT_YEAR: i32 = 2024;

/// Year at the start of a `"YYYY-..."` string.
fn leading_year(value: &str) -> Option<i32> {
    value.split('-').next()?.trim().parse().ok()
}

impl Experience {
    pub fn is_current(&self) -> bool {
        CURRENT_POSITION_MARKERS.contains(&self.end.as_str())
    }

    /// Whole years between start and end, by calendar year only.
    ///
    /// Not clamped: an end before the start yields a negative value.
    pub fn duration_years(&self, current_year: i32) -> Result<i32, ProfileError> {
        let start = leading_year(&self.start)
            .ok_or_else(|| ProfileError::malformed_date(&self.company, &self.start))?;

        let end = if self.is_current() {
            current_year
        } else {
            leading_year(&self.end)
                .ok_or_else(|| ProfileError::malformed_date(&self.company, &self.end))?
        };

        Ok(end - start)
    }
}

/// Sum of all experience durations of a profile.
///
/// A malformed date fails the whole computation instead of being skipped.
pub fn total_experience_years(profile: &Profile, current_year: i32) -> Result<i32, ProfileError> {
    profile
        .experiences
        .iter()
        .try_fold(0, |total, exp| {
            exp.duration_years(current_year).map(|years| total + years)
        })
}
