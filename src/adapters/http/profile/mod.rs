//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateProfileRequest, ErrorResponse, ExperienceQuery, LanguageQuery, ListProfilesQuery,
    ProfileResponse, StatisticsResponse, UpdateProfileRequest,
};
pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
