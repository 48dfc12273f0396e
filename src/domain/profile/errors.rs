//! Profile-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, ValidationError};

/// Profile-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile has the given id.
    NotFound(ProfileId),
    /// Boundary validation rejected the input.
    ValidationFailed { field: String, message: String },
    /// An experience start/end does not begin with a parseable year.
    MalformedExperienceDate { company: String, value: String },
    /// Store or other infrastructure failure.
    Infrastructure(String),
}

impl ProfileError {
    pub fn not_found(id: ProfileId) -> Self {
        ProfileError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn malformed_date(company: impl Into<String>, value: impl Into<String>) -> Self {
        ProfileError::MalformedExperienceDate {
            company: company.into(),
            value: value.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::NotFound(_) => ErrorCode::ProfileNotFound,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::MalformedExperienceDate { .. } => ErrorCode::MalformedExperienceDate,
            ProfileError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProfileError::NotFound(id) => format!("Profile with id {} not found", id),
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::MalformedExperienceDate { company, value } => format!(
                "Experience at '{}' has a date without a leading year: '{}'",
                company, value
            ),
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange => ProfileError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::ProfileNotFound => match err.profile_id() {
                Some(id) => ProfileError::NotFound(id),
                None => ProfileError::Infrastructure(err.to_string()),
            },
            _ => ProfileError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
