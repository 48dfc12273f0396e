//! Multi-criteria profile search.
//!
//! Criteria are applied in a fixed order: text, area and city narrow the
//! candidates, then the page window is cut, and only then is the technology
//! criterion applied to the page. A technology search can therefore return
//! fewer than `limit` results even when further matches exist past the
//! window.

use super::filters::{contains_ignore_case, has_technology};
use super::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSearch {
    /// Matched as a substring of name, role or summary, ignoring case.
    pub text: Option<String>,
    /// Exact, case-sensitive area.
    pub area: Option<String>,
    /// Exact, case-sensitive location.
    pub city: Option<String>,
    /// Matched as a substring of any technical skill, ignoring case.
    pub technology: Option<String>,
    pub offset: usize,
    pub limit: usize,
}

/// Empty criteria count as absent.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

impl ProfileSearch {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            text: None,
            area: None,
            city: None,
            technology: None,
            offset,
            limit,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// True when at least one criterion is set.
    pub fn has_criteria(&self) -> bool {
        active(&self.text).is_some()
            || active(&self.area).is_some()
            || active(&self.city).is_some()
            || active(&self.technology).is_some()
    }

    fn matches_text(&self, profile: &Profile) -> bool {
        match active(&self.text) {
            Some(text) => {
                contains_ignore_case(&profile.name, text)
                    || contains_ignore_case(&profile.role, text)
                    || contains_ignore_case(&profile.summary, text)
            }
            None => true,
        }
    }

    fn matches_area(&self, profile: &Profile) -> bool {
        active(&self.area).map_or(true, |area| profile.area == area)
    }

    fn matches_city(&self, profile: &Profile) -> bool {
        active(&self.city).map_or(true, |city| profile.location == city)
    }

    /// Runs the search over the full candidate set.
    pub fn apply(&self, profiles: Vec<Profile>) -> Vec<Profile> {
        let page = profiles
            .into_iter()
            .filter(|p| self.matches_text(p) && self.matches_area(p) && self.matches_city(p))
            .skip(self.offset)
            .take(self.limit);

        match active(&self.technology) {
            Some(technology) => page.filter(|p| has_technology(p, technology)).collect(),
            None => page.collect(),
        }
    }
}

/// Free-function form of [`ProfileSearch::apply`].
pub fn search(profiles: Vec<Profile>, criteria: &ProfileSearch) -> Vec<Profile> {
    criteria.apply(profiles)
}
