//! Forced resolution policies
//!
//! When clarification runs past its attempt limit the episode is resolved by
//! force, using one of these policies. The wire value is injected verbatim
//! into the Response Parser replay prompt and is not overridable there.
//! Choosing a policy belongs to the episode hypothesis manager.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unrecognized forced resolution policy value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid forced resolution policy: '{value}'. Must be one of: {}", valid.join(", "))]
pub struct PolicyParseError {
    pub value: String,
    pub valid: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForcedResolutionPolicy {
    /// Treat the input as a new, distinct episode
    Separation,
    /// Merge into the existing active episode of the same symptom class
    Continuity,
    /// Extract into a write-only limbo episode with low confidence
    Isolation,
}

impl ForcedResolutionPolicy {
    pub const ALL: [ForcedResolutionPolicy; 3] = [
        ForcedResolutionPolicy::Separation,
        ForcedResolutionPolicy::Continuity,
        ForcedResolutionPolicy::Isolation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Separation => "separation_protocol",
            Self::Continuity => "continuity_protocol",
            Self::Isolation => "isolation_protocol",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Separation => {
                "Treat input as a new, distinct episode; do not link to prior episodes."
            }
            Self::Continuity => {
                "Merge input into the existing active episode; only allowed when an \
                 episode of the same symptom class exists. Temporal language is \
                 progression, not a new event."
            }
            Self::Isolation => {
                "Extract data into a limbo episode; all fields low confidence with \
                 ambiguous provenance. Limbo episodes are write-only."
            }
        }
    }
}

impl fmt::Display for ForcedResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ForcedResolutionPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PolicyParseError {
                value: s.to_string(),
                valid: Self::ALL.iter().map(|p| p.as_str()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policies() {
        assert_eq!(
            "separation_protocol".parse::<ForcedResolutionPolicy>(),
            Ok(ForcedResolutionPolicy::Separation)
        );
        assert_eq!(
            "isolation_protocol".parse::<ForcedResolutionPolicy>(),
            Ok(ForcedResolutionPolicy::Isolation)
        );
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = "merge".parse::<ForcedResolutionPolicy>().unwrap_err();
        assert_eq!(err.value, "merge");
        assert_eq!(
            err.to_string(),
            "invalid forced resolution policy: 'merge'. Must be one of: \
             separation_protocol, continuity_protocol, isolation_protocol"
        );
    }

    #[test]
    fn test_display_matches_wire_value() {
        for policy in ForcedResolutionPolicy::ALL {
            assert_eq!(policy.to_string(), policy.as_str());
            assert!(!policy.description().is_empty());
        }
    }
}
