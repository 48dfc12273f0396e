//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;

pub use profile::{
    // Commands
    CreateProfileCommand, CreateProfileHandler,
    DeleteProfileCommand, DeleteProfileHandler,
    SeedProfilesCommand, SeedProfilesHandler, SeedReport,
    UpdateProfileCommand, UpdateProfileHandler,
    // Queries
    Facet, ListFacetHandler, ListFacetQuery,
    FindByExperienceHandler, FindByExperienceQuery,
    FindByLanguageHandler, FindByLanguageQuery,
    FindByTechnologyHandler, FindByTechnologyQuery,
    GetProfileHandler, GetProfileQuery,
    GetStatisticsHandler,
    ListProfilesHandler, ListProfilesQuery,
};
