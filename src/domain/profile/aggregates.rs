//! Aggregates computed over the full profile set.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeSet;

use super::profile::Profile;

fn sorted_unique<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values.cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Distinct areas, ascending.
pub fn unique_areas(profiles: &[Profile]) -> Vec<String> {
    sorted_unique(profiles.iter().map(|p| &p.area))
}

/// Distinct locations, ascending.
pub fn unique_locations(profiles: &[Profile]) -> Vec<String> {
    sorted_unique(profiles.iter().map(|p| &p.location))
}

/// Distinct technical skills across every profile, ascending.
pub fn unique_technologies(profiles: &[Profile]) -> Vec<String> {
    sorted_unique(profiles.iter().flat_map(|p| p.technical_skills.iter()))
}

/// Profile count per area, keyed in first-seen order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaCounts {
    entries: Vec<(String, usize)>,
}

impl AreaCounts {
    fn increment(&mut self, area: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == area) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((area.to_string(), 1)),
        }
    }

    pub fn get(&self, area: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == area)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of profiles counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for AreaCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

pub fn count_by_area(profiles: &[Profile]) -> AreaCounts {
    let mut counts = AreaCounts::default();
    for profile in profiles {
        counts.increment(&profile.area);
    }
    counts
}

/// Directory-wide summary numbers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProfileStatistics {
    pub total_profiles: usize,
    pub total_areas: usize,
    pub total_cities: usize,
    pub total_technologies: usize,
    pub profiles_by_area: AreaCounts,
}

impl ProfileStatistics {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        Self {
            total_profiles: profiles.len(),
            total_areas: unique_areas(profiles).len(),
            total_cities: unique_locations(profiles).len(),
            total_technologies: unique_technologies(profiles).len(),
            profiles_by_area: count_by_area(profiles),
        }
    }
}
