//! Profile command and query handlers.
//!
//! Commands go through `ProfileRepository`, queries through `ProfileReader`.
//! Filtering and aggregation run over a full scan from the reader.

mod create_profile;
mod delete_profile;
mod find_by_experience;
mod find_by_language;
mod find_by_technology;
mod get_profile;
mod get_statistics;
mod list_facets;
mod list_profiles;
mod seed_profiles;
mod update_profile;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler};
pub use delete_profile::{DeleteProfileCommand, DeleteProfileHandler};
pub use find_by_experience::{FindByExperienceHandler, FindByExperienceQuery};
pub use find_by_language::{FindByLanguageHandler, FindByLanguageQuery};
pub use find_by_technology::{FindByTechnologyHandler, FindByTechnologyQuery};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use get_statistics::GetStatisticsHandler;
pub use list_facets::{Facet, ListFacetHandler, ListFacetQuery};
pub use list_profiles::{ListProfilesHandler, ListProfilesQuery};
pub use seed_profiles::{SeedProfilesCommand, SeedProfilesHandler, SeedReport, SEED_SAMPLE_SIZE};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
