//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned identifier of a professional profile.
///
/// Ids are allocated by the profile store on creation and are never reused,
/// even after the profile they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(i64);

impl ProfileId {
    /// Wraps a raw id read back from the store.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_id_parses_from_string() {
        let id: ProfileId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn profile_id_rejects_non_numeric() {
        assert!("abc".parse::<ProfileId>().is_err());
    }

    #[test]
    fn profile_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ProfileId::from_i64(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn profile_ids_order_by_value() {
        assert!(ProfileId::from_i64(1) < ProfileId::from_i64(2));
    }
}
