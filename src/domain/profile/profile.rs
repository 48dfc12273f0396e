//! Profile record and its nested value objects

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProfileId;

/// A position held by the professional.
///
/// `start` is an ISO-like `"YYYY-..."` string; `end` is either the same
/// format or a current-position marker (see [`super::experience`]).
///
/// Deserialization also accepts the Portuguese field names of the legacy
/// dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(alias = "empresa")]
    pub company: String,
    #[serde(alias = "cargo")]
    pub role: String,
    #[serde(alias = "inicio")]
    pub start: String,
    #[serde(alias = "fim")]
    pub end: String,
    #[serde(default, alias = "descricao")]
    pub description: String,
}

/// A completed course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(alias = "curso")]
    pub course: String,
    #[serde(alias = "instituicao")]
    pub institution: String,
    #[serde(alias = "ano")]
    pub year: i32,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, alias = "descricao")]
    pub description: String,
}

/// A spoken language and the self-declared proficiency label.
///
/// The label is kept verbatim; ranking happens through
/// [`super::proficiency_rank`] so unknown labels survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(alias = "idioma")]
    pub language: String,
    #[serde(alias = "nivel")]
    pub level: String,
}

/// Fields of a profile that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    #[serde(default)]
    pub photo: String,
    pub role: String,
    pub summary: String,
    pub location: String,
    pub area: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub areas_of_interest: Vec<String>,
}

impl NewProfile {
    /// Attaches the id the store assigned.
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            photo: self.photo,
            role: self.role,
            summary: self.summary,
            location: self.location,
            area: self.area,
            technical_skills: self.technical_skills,
            soft_skills: self.soft_skills,
            experiences: self.experiences,
            education: self.education,
            projects: self.projects,
            certifications: self.certifications,
            languages: self.languages,
            areas_of_interest: self.areas_of_interest,
        }
    }
}

/// A stored professional profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
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

/// Partial update of a profile.
///
/// Every `Some` field overwrites the stored value; collections are replaced
/// wholesale, never merged. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub technical_skills: Option<Vec<String>>,
    pub soft_skills: Option<Vec<String>>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<LanguageSkill>>,
    pub areas_of_interest: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites the supplied fields of `profile`.
    pub fn apply_to(self, profile: &mut Profile) {
        fn replace<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        replace(&mut profile.name, self.name);
        replace(&mut profile.photo, self.photo);
        replace(&mut profile.role, self.role);
        replace(&mut profile.summary, self.summary);
        replace(&mut profile.location, self.location);
        replace(&mut profile.area, self.area);
        replace(&mut profile.technical_skills, self.technical_skills);
        replace(&mut profile.soft_skills, self.soft_skills);
        replace(&mut profile.experiences, self.experiences);
        replace(&mut profile.education, self.education);
        replace(&mut profile.projects, self.projects);
        replace(&mut profile.certifications, self.certifications);
        replace(&mut profile.languages, self.languages);
        replace(&mut profile.areas_of_interest, self.areas_of_interest);
    }
}
