//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Request bodies and query strings also accept the Portuguese names used by
//! the web client.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{
    AreaCounts, Education, Experience, LanguageSkill, NewProfile, Profile, ProfileSearch,
    ProfileStatistics, ProfileUpdate, Project,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "foto")]
    pub photo: String,
    #[serde(alias = "cargo")]
    pub role: String,
    #[serde(alias = "resumo")]
    pub summary: String,
    #[serde(alias = "localizacao")]
    pub location: String,
    pub area: String,
    #[serde(alias = "habilidades_tecnicas")]
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    #[serde(alias = "experiencias")]
    pub experiences: Vec<Experience>,
    #[serde(alias = "formacao")]
    pub education: Vec<Education>,
    #[serde(default, alias = "projetos")]
    pub projects: Vec<Project>,
    #[serde(default, alias = "certificacoes")]
    pub certifications: Vec<String>,
    #[serde(alias = "idiomas")]
    pub languages: Vec<LanguageSkill>,
    #[serde(default, alias = "area_interesses")]
    pub areas_of_interest: Vec<String>,
}

impl From<CreateProfileRequest> for NewProfile {
    fn from(req: CreateProfileRequest) -> Self {
        Self {
            name: req.name,
            photo: req.photo,
            role: req.role,
            summary: req.summary,
            location: req.location,
            area: req.area,
            technical_skills: req.technical_skills,
            soft_skills: req.soft_skills,
            experiences: req.experiences,
            education: req.education,
            projects: req.projects,
            certifications: req.certifications,
            languages: req.languages,
            areas_of_interest: req.areas_of_interest,
        }
    }
}

/// Request to update a profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "foto")]
    pub photo: Option<String>,
    #[serde(default, alias = "cargo")]
    pub role: Option<String>,
    #[serde(default, alias = "resumo")]
    pub summary: Option<String>,
    #[serde(default, alias = "localizacao")]
    pub location: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, alias = "habilidades_tecnicas")]
    pub technical_skills: Option<Vec<String>>,
    #[serde(default)]
    pub soft_skills: Option<Vec<String>>,
    #[serde(default, alias = "experiencias")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default, alias = "formacao")]
    pub education: Option<Vec<Education>>,
    #[serde(default, alias = "projetos")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, alias = "certificacoes")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, alias = "idiomas")]
    pub languages: Option<Vec<LanguageSkill>>,
    #[serde(default, alias = "area_interesses")]
    pub areas_of_interest: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            photo: req.photo,
            role: req.role,
            summary: req.summary,
            location: req.location,
            area: req.area,
            technical_skills: req.technical_skills,
            soft_skills: req.soft_skills,
            experiences: req.experiences,
            education: req.education,
            projects: req.projects,
            certifications: req.certifications,
            languages: req.languages,
            areas_of_interest: req.areas_of_interest,
        }
    }
}

/// Query parameters for listing and searching profiles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProfilesQuery {
    #[serde(default, alias = "busca")]
    pub search: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, alias = "cidade")]
    pub city: Option<String>,
    #[serde(default, alias = "tecnologia")]
    pub technology: Option<String>,
    #[serde(default, alias = "skip")]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListProfilesQuery {
    /// Builds search criteria with an already resolved page size.
    pub fn into_search(self, limit: usize) -> ProfileSearch {
        ProfileSearch {
            text: self.search,
            area: self.area,
            city: self.city,
            technology: self.technology,
            offset: self.offset.unwrap_or(0),
            limit,
        }
    }
}

/// Query parameters for the minimum-experience filter.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceQuery {
    #[serde(default)]
    pub min_years: i32,
}

/// Query parameters for the language filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default, alias = "nivel_minimo")]
    pub min_level: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full profile for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub photo: String,
    pub role: String,
    pub summary: String,
    pub location: String,
    pub area: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    pub areas_of_interest: Vec<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.as_i64(),
            name: profile.name,
            photo: profile.photo,
            role: profile.role,
            summary: profile.summary,
            location: profile.location,
            area: profile.area,
            technical_skills: profile.technical_skills,
            soft_skills: profile.soft_skills,
            experiences: profile.experiences,
            education: profile.education,
            projects: profile.projects,
            certifications: profile.certifications,
            languages: profile.languages,
            areas_of_interest: profile.areas_of_interest,
        }
    }
}

/// Converts a list of domain profiles into response DTOs.
pub fn profile_list(profiles: Vec<Profile>) -> Vec<ProfileResponse> {
    profiles.into_iter().map(ProfileResponse::from).collect()
}

/// Directory-wide statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsResponse {
    pub total_profiles: usize,
    pub total_areas: usize,
    pub total_cities: usize,
    pub total_technologies: usize,
    /// Area to profile count, in first-seen order.
    pub profiles_by_area: AreaCounts,
}

impl From<ProfileStatistics> for StatisticsResponse {
    fn from(stats: ProfileStatistics) -> Self {
        Self {
            total_profiles: stats.total_profiles,
            total_areas: stats.total_areas,
            total_cities: stats.total_cities,
            total_technologies: stats.total_technologies,
            profiles_by_area: stats.profiles_by_area,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }
}
