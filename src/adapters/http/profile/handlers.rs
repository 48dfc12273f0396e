//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::profile::{
    CreateProfileCommand, CreateProfileHandler, DeleteProfileCommand, DeleteProfileHandler,
    Facet, FindByExperienceHandler, FindByExperienceQuery, FindByLanguageHandler,
    FindByLanguageQuery, FindByTechnologyHandler, FindByTechnologyQuery, GetProfileHandler,
    GetProfileQuery, GetStatisticsHandler, ListFacetHandler, ListFacetQuery,
    ListProfilesHandler, ListProfilesQuery as ListProfilesAppQuery, UpdateProfileCommand,
    UpdateProfileHandler,
};
use crate::config::ProfilesConfig;
use crate::domain::foundation::ProfileId;
use crate::domain::profile::{NewProfile, ProfileError};
use crate::ports::{ProfileReader, ProfileRepository};

use super::dto::{
    profile_list, CreateProfileRequest, ErrorResponse, ExperienceQuery, LanguageQuery,
    ListProfilesQuery, ProfileResponse, StatisticsResponse, UpdateProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    create_handler: Arc<CreateProfileHandler>,
    update_handler: Arc<UpdateProfileHandler>,
    delete_handler: Arc<DeleteProfileHandler>,
    get_handler: Arc<GetProfileHandler>,
    list_handler: Arc<ListProfilesHandler>,
    facet_handler: Arc<ListFacetHandler>,
    statistics_handler: Arc<GetStatisticsHandler>,
    technology_handler: Arc<FindByTechnologyHandler>,
    experience_handler: Arc<FindByExperienceHandler>,
    language_handler: Arc<FindByLanguageHandler>,
    config: ProfilesConfig,
}

impl ProfileHandlers {
    /// Wires every profile handler onto the given store ports.
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        reader: Arc<dyn ProfileReader>,
        config: ProfilesConfig,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateProfileHandler::new(repository.clone())),
            update_handler: Arc::new(UpdateProfileHandler::new(
                repository.clone(),
                reader.clone(),
            )),
            delete_handler: Arc::new(DeleteProfileHandler::new(repository)),
            get_handler: Arc::new(GetProfileHandler::new(reader.clone())),
            list_handler: Arc::new(ListProfilesHandler::new(reader.clone())),
            facet_handler: Arc::new(ListFacetHandler::new(reader.clone())),
            statistics_handler: Arc::new(GetStatisticsHandler::new(reader.clone())),
            technology_handler: Arc::new(FindByTechnologyHandler::new(reader.clone())),
            experience_handler: Arc::new(FindByExperienceHandler::new(
                reader.clone(),
                config.current_year,
            )),
            language_handler: Arc::new(FindByLanguageHandler::new(reader)),
            config,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/profiles - Validate and store a new profile
pub async fn create_profile(
    State(handlers): State<ProfileHandlers>,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejection(rejection),
    };

    let profile: NewProfile = req.into();
    if let Err(e) = profile.validate() {
        tracing::warn!(field = e.field(), error = %e, "rejected profile");
        return handle_profile_error(e.into());
    }

    match handlers
        .create_handler
        .handle(CreateProfileCommand { profile })
        .await
    {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles - List profiles, or search when any criterion is given
pub async fn list_profiles(
    State(handlers): State<ProfileHandlers>,
    Query(query_params): Query<ListProfilesQuery>,
) -> Response {
    let limit = handlers.config.page_size(query_params.limit);
    let query = ListProfilesAppQuery {
        search: query_params.into_search(limit),
    };

    match handlers.list_handler.handle(query).await {
        Ok(profiles) => (StatusCode::OK, Json(profile_list(profiles))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles/:id - Get profile details
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    Path(profile_id): Path<String>,
) -> Response {
    let profile_id = match parse_profile_id(&profile_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetProfileQuery { profile_id })
        .await
    {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

/// PUT /api/profiles/:id - Overwrite the supplied fields
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    Path(profile_id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Response {
    let profile_id = match parse_profile_id(&profile_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = UpdateProfileCommand {
        profile_id,
        update: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

/// DELETE /api/profiles/:id - Hard-delete a profile
pub async fn delete_profile(
    State(handlers): State<ProfileHandlers>,
    Path(profile_id): Path<String>,
) -> Response {
    let profile_id = match parse_profile_id(&profile_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteProfileCommand { profile_id })
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => handle_profile_error(ProfileError::not_found(profile_id)),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles/technology/:technology
pub async fn profiles_by_technology(
    State(handlers): State<ProfileHandlers>,
    Path(technology): Path<String>,
) -> Response {
    match handlers
        .technology_handler
        .handle(FindByTechnologyQuery { technology })
        .await
    {
        Ok(profiles) => (StatusCode::OK, Json(profile_list(profiles))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles/experience?min_years=N
pub async fn profiles_by_experience(
    State(handlers): State<ProfileHandlers>,
    Query(query_params): Query<ExperienceQuery>,
) -> Response {
    let query = FindByExperienceQuery {
        min_years: query_params.min_years,
    };

    match handlers.experience_handler.handle(query).await {
        Ok(profiles) => (StatusCode::OK, Json(profile_list(profiles))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles/language/:language?min_level=L
pub async fn profiles_by_language(
    State(handlers): State<ProfileHandlers>,
    Path(language): Path<String>,
    Query(query_params): Query<LanguageQuery>,
) -> Response {
    let query = FindByLanguageQuery {
        language,
        min_level: query_params.min_level,
    };

    match handlers.language_handler.handle(query).await {
        Ok(profiles) => (StatusCode::OK, Json(profile_list(profiles))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/areas
pub async fn list_areas(State(handlers): State<ProfileHandlers>) -> Response {
    list_facet(&handlers, Facet::Areas).await
}

/// GET /api/cities
pub async fn list_cities(State(handlers): State<ProfileHandlers>) -> Response {
    list_facet(&handlers, Facet::Cities).await
}

/// GET /api/technologies
pub async fn list_technologies(State(handlers): State<ProfileHandlers>) -> Response {
    list_facet(&handlers, Facet::Technologies).await
}

async fn list_facet(handlers: &ProfileHandlers, facet: Facet) -> Response {
    match handlers.facet_handler.handle(ListFacetQuery { facet }).await {
        Ok(values) => (StatusCode::OK, Json(values)).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/statistics
pub async fn get_statistics(State(handlers): State<ProfileHandlers>) -> Response {
    match handlers.statistics_handler.handle().await {
        Ok(stats) => {
            let response: StatisticsResponse = stats.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_profile_id(raw: &str) -> Result<ProfileId, Response> {
    raw.parse::<ProfileId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid profile ID")),
        )
            .into_response()
    })
}

fn handle_rejection(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "malformed profile payload");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_profile_error(error: ProfileError) -> Response {
    match error {
        ProfileError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Profile", &id.to_string())),
        )
            .into_response(),
        ProfileError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        ProfileError::MalformedExperienceDate { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ProfileError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "profile operation failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(msg)),
            )
                .into_response()
        }
    }
}
