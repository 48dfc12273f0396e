//! Predicate filters over a working set of profiles.
//!
//! Every filter consumes the candidate list and returns the members that
//! match, preserving input order.

use super::errors::ProfileError;
use super::experience::total_experience_years;
use super::proficiency::proficiency_rank;
use super::profile::Profile;

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any technical skill contains `technology`, ignoring case.
pub fn has_technology(profile: &Profile, technology: &str) -> bool {
    profile
        .technical_skills
        .iter()
        .any(|skill| contains_ignore_case(skill, technology))
}

/// True when the profile lists `language` (case-insensitive) at or above
/// `min_level`. The first entry naming the language decides.
pub fn speaks(profile: &Profile, language: &str, min_level: Option<&str>) -> bool {
    let wanted = language.to_lowercase();
    let required = min_level.filter(|level| !level.is_empty()).map(proficiency_rank);

    profile
        .languages
        .iter()
        .filter(|entry| entry.language.to_lowercase() == wanted)
        .any(|entry| match required {
            Some(required) => proficiency_rank(&entry.level) >= required,
            None => true,
        })
}

pub fn profiles_with_technology(profiles: Vec<Profile>, technology: &str) -> Vec<Profile> {
    profiles
        .into_iter()
        .filter(|p| has_technology(p, technology))
        .collect()
}

/// Profiles whose total experience is at least `min_years`.
///
/// Fails on the first profile carrying a malformed experience date.
pub fn profiles_with_min_experience(
    profiles: Vec<Profile>,
    min_years: i32,
    current_year: i32,
) -> Result<Vec<Profile>, ProfileError> {
    let mut matching = Vec::new();
    for profile in profiles {
        if total_experience_years(&profile, current_year)? >= min_years {
            matching.push(profile);
        }
    }
    Ok(matching)
}

pub fn profiles_by_language(
    profiles: Vec<Profile>,
    language: &str,
    min_level: Option<&str>,
) -> Vec<Profile> {
    profiles
        .into_iter()
        .filter(|p| speaks(p, language, min_level))
        .collect()
}
