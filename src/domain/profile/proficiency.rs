//! Language proficiency ordering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered proficiency levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Basic,
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 5] = [
        ProficiencyLevel::Basic,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Fluent,
        ProficiencyLevel::Native,
    ];

    /// Parses a level label.
    ///
    /// Accepts the English labels and the Portuguese ones used by the seed
    /// fixture. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Basic" | "Básico" => Some(Self::Basic),
            "Intermediate" | "Intermediário" => Some(Self::Intermediate),
            "Advanced" | "Avançado" => Some(Self::Advanced),
            "Fluent" | "Fluente" => Some(Self::Fluent),
            "Native" | "Nativo" => Some(Self::Native),
            _ => None,
        }
    }

    /// Ordinal rank, 1 for Basic through 5 for Native.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Fluent => 4,
            Self::Native => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Fluent => "Fluent",
            Self::Native => "Native",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank of a stored level label. Labels outside the known set rank 0,
/// below Basic.
pub fn proficiency_rank(label: &str) -> u8 {
    ProficiencyLevel::from_label(label)
        .map(|level| level.rank())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declared_order() {
        let ranks: Vec<u8> = ProficiencyLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert!(ProficiencyLevel::Basic < ProficiencyLevel::Native);
    }

    #[test]
    fn english_and_portuguese_labels_rank_equally() {
        assert_eq!(proficiency_rank("Advanced"), proficiency_rank("Avançado"));
        assert_eq!(proficiency_rank("Native"), proficiency_rank("Nativo"));
        assert_eq!(proficiency_rank("Intermediário"), 2);
    }

    #[test]
    fn unknown_label_ranks_zero() {
        assert_eq!(proficiency_rank("Expert"), 0);
        assert_eq!(proficiency_rank(""), 0);
        // matching is exact
        assert_eq!(proficiency_rank("fluent"), 0);
    }

    #[test]
    fn label_round_trips_through_parser() {
        for level in ProficiencyLevel::ALL {
            assert_eq!(ProficiencyLevel::from_label(level.label()), Some(level));
        }
    }
}
