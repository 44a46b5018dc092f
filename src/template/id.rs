//! Clarification template identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Identifier of a clarification question template
///
/// The string form returned by [`as_str`](Self::as_str) is the wire and storage
/// key. Parsing is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClarificationTemplateId {
    // Episode-structural
    EpisodeSameOrDifferent,
    TemporalRelation,

    // Clinically referential
    Location,
    Laterality,
}

/// What a clarification question is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    /// Establishes episode identity or ordering, not a clinical fact
    EpisodeStructural,
    /// Extracts a clinical detail that holds whichever episode it lands in
    ClinicallyReferential,
}

impl ClarificationTemplateId {
    /// All identifiers in declaration order
    pub const ALL: [ClarificationTemplateId; 4] = [
        ClarificationTemplateId::EpisodeSameOrDifferent,
        ClarificationTemplateId::TemporalRelation,
        ClarificationTemplateId::Location,
        ClarificationTemplateId::Laterality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EpisodeSameOrDifferent => "clarify_episode_same_or_different",
            Self::TemporalRelation => "clarify_temporal_relation",
            Self::Location => "clarify_location",
            Self::Laterality => "clarify_laterality",
        }
    }

    pub fn category(&self) -> TemplateCategory {
        match self {
            Self::EpisodeSameOrDifferent | Self::TemporalRelation => {
                TemplateCategory::EpisodeStructural
            }
            Self::Location | Self::Laterality => TemplateCategory::ClinicallyReferential,
        }
    }

    /// Look up an identifier by its exact wire value
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for ClarificationTemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ClarificationTemplateId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ValidationError::invalid(s))
    }
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EpisodeStructural => "episode_structural",
            Self::ClinicallyReferential => "clinically_referential",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
