//! Profile module - Professional profiles and the queries over them.
//!
//! A profile is a résumé-like record: scalar identity fields plus ordered
//! collections of skills, experiences, education, projects, certifications,
//! languages and interests.
//!
//! # Query engine
//!
//! Search, filtering and aggregation are pure functions over a working set
//! handed in by the caller. None of them touches the store or mutates its
//! input.
//!
//! - [`search`] - text/area/city criteria, pagination, then technology
//! - [`profiles_with_technology`], [`profiles_with_min_experience`],
//!   [`profiles_by_language`] - single-criterion filters
//! - [`unique_areas`], [`unique_locations`], [`unique_technologies`],
//!   [`count_by_area`], [`ProfileStatistics`] - aggregates
//!
//! # Domain Invariants
//!
//! 1. A profile id is assigned by the store, never changes, never gets reused
//! 2. Partial updates replace collections wholesale
//! 3. Unknown proficiency labels rank below Basic
//! 4. Experience durations are not clamped at zero

mod aggregates;
mod errors;
mod experience;
mod filters;
mod proficiency;
#[allow(clippy::module_inception)]
pub(crate) mod profile;
mod search;
mod validation;

pub use aggregates::{
    count_by_area, unique_areas, unique_locations, unique_technologies, AreaCounts,
    ProfileStatistics,
};
pub use errors::ProfileError;
pub use experience::{total_experience_years, CURRENT_POSITION_MARKERS, DEFAULT_CURRENT_YEAR};
pub use filters::{
    has_technology, profiles_by_language, profiles_with_min_experience,
    profiles_with_technology, speaks,
};
pub use proficiency::{proficiency_rank, ProficiencyLevel};
pub use profile::{Education, Experience, LanguageSkill, NewProfile, Profile, ProfileUpdate, Project};
pub use search::{search, ProfileSearch};
pub use validation::{
    AREA_LENGTH, LOCATION_LENGTH, NAME_LENGTH, ROLE_LENGTH, SUMMARY_MIN_LENGTH,
};
