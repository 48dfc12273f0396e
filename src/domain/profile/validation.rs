//! Boundary validation for incoming profiles.
//!
//! The record service trusts its input; callers at the edge (HTTP, seed)
//! run these checks before handing a profile over.

use crate::domain::foundation::ValidationError;

use super::profile::NewProfile;

pub const NAME_LENGTH: (i32, i32) = (3, 200);
pub const ROLE_LENGTH: (i32, i32) = (3, 200);
pub const LOCATION_LENGTH: (i32, i32) = (3, 100);
pub const AREA_LENGTH: (i32, i32) = (3, 100);
pub const SUMMARY_MIN_LENGTH: i32 = 10;

fn check_length(field: &str, value: &str, (min, max): (i32, i32)) -> Result<(), ValidationError> {
    let len = value.chars().count() as i32;
    if len == 0 {
        return Err(ValidationError::empty_field(field));
    }
    if len < min || len > max {
        return Err(ValidationError::out_of_range(field, min, max, len));
    }
    Ok(())
}

fn check_non_empty<T>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

impl NewProfile {
    /// Checks scalar lengths and required collections, reporting the first
    /// violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, NAME_LENGTH)?;
        check_length("role", &self.role, ROLE_LENGTH)?;

        let summary_len = self.summary.chars().count() as i32;
        if summary_len == 0 {
            return Err(ValidationError::empty_field("summary"));
        }
        if summary_len < SUMMARY_MIN_LENGTH {
            return Err(ValidationError::too_short(
                "summary",
                SUMMARY_MIN_LENGTH,
                summary_len,
            ));
        }

        check_length("location", &self.location, LOCATION_LENGTH)?;
        check_length("area", &self.area, AREA_LENGTH)?;

        check_non_empty("technical_skills", &self.technical_skills)?;
        check_non_empty("soft_skills", &self.soft_skills)?;
        check_non_empty("experiences", &self.experiences)?;
        check_non_empty("education", &self.education)?;
        check_non_empty("languages", &self.languages)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::profile::test_support::new_profile;

    #[test]
    fn valid_profile_passes() {
        assert!(new_profile("Ana Souza", "Tech", &["Rust"]).validate().is_ok());
    }

    #[test]
    fn short_name_is_out_of_range() {
        let p = new_profile("Al", "Tech", &["Rust"]);
        assert_eq!(
            p.validate(),
            Err(ValidationError::out_of_range("name", 3, 200, 2))
        );
    }

    #[test]
    fn empty_name_is_empty_field() {
        let p = new_profile("", "Tech", &["Rust"]);
        assert_eq!(p.validate(), Err(ValidationError::empty_field("name")));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // three characters, four bytes
        let mut p = new_profile("Zoë", "Tech", &["Rust"]);
        p.area = "TIã".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn short_summary_is_rejected() {
        let mut p = new_profile("Ana Souza", "Tech", &["Rust"]);
        p.summary = "Too short".to_string();
        assert_eq!(p.validate(), Err(ValidationError::too_short("summary", 10, 9)));
    }

    #[test]
    fn long_area_is_rejected() {
        let mut p = new_profile("Ana Souza", "Tech", &["Rust"]);
        p.area = "x".repeat(101);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange { field, actual: 101, .. }) if field == "area"
        ));
    }

    #[test]
    fn missing_required_collections_are_rejected() {
        let p = new_profile("Ana Souza", "Tech", &[]);
        assert_eq!(
            p.validate(),
            Err(ValidationError::empty_field("technical_skills"))
        );

        let mut p = new_profile("Ana Souza", "Tech", &["Rust"]);
        p.languages.clear();
        assert_eq!(p.validate(), Err(ValidationError::empty_field("languages")));
    }

    #[test]
    fn optional_collections_may_be_empty() {
        let mut p = new_profile("Ana Souza", "Tech", &["Rust"]);
        p.projects.clear();
        p.certifications.clear();
        p.areas_of_interest.clear();
        assert!(p.validate().is_ok());
    }
}
