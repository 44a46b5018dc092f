//! Template registry: replay policy per clarification template
//!
//! This module is the single source of truth for replay policy. The policy is
//! an exhaustive match over [`ClarificationTemplateId`], so every identifier
//! that parses has exactly one policy and nothing else does.

use tracing::trace;

use crate::error::{LookupError, ValidationError};

use super::id::{ClarificationTemplateId, TemplateCategory};
use super::text;

/// Everything the registry knows about one template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub id: ClarificationTemplateId,
    /// Whether the user's answer may be replayed to the Response Parser
    /// after episode resolution
    pub replayable: bool,
    pub category: TemplateCategory,
    /// Question pattern with `{mention_N}` placeholders
    pub text: &'static str,
}

impl ClarificationTemplateId {
    /// Replay policy for this template
    pub fn is_replayable(&self) -> bool {
        match self {
            // Episode-structural: the answer only means something for the
            // episode hypothesis it was asked under
            Self::EpisodeSameOrDifferent => false,
            Self::TemporalRelation => false,

            Self::Location => true,
            Self::Laterality => true,
        }
    }

    pub fn definition(&self) -> TemplateDefinition {
        TemplateDefinition {
            id: *self,
            replayable: self.is_replayable(),
            category: self.category(),
            text: text::pattern(*self),
        }
    }
}

/// Replay policy for a template identifier
///
/// The caller is expected to have validated `template_id` already (see
/// [`validate_template_id`]); an unknown identifier is a [`LookupError`].
pub fn is_replayable(template_id: &str) -> Result<bool, LookupError> {
    let id = ClarificationTemplateId::from_wire(template_id)
        .ok_or_else(|| LookupError::not_found(template_id))?;
    let replayable = id.is_replayable();
    trace!(template_id, replayable, "replay policy lookup");
    Ok(replayable)
}

/// Check that an identifier from an untrusted source names a registered template
pub fn validate_template_id(template_id: &str) -> Result<(), ValidationError> {
    template_id.parse::<ClarificationTemplateId>().map(|_| ())
}

/// All registered identifiers in declaration order
pub fn template_ids() -> impl Iterator<Item = ClarificationTemplateId> {
    ClarificationTemplateId::ALL.into_iter()
}

/// Full definition of every registered template
pub fn definitions() -> impl Iterator<Item = TemplateDefinition> {
    template_ids().map(|id| id.definition())
}

/// Identifiers whose answers may be replayed
pub fn replayable_ids() -> impl Iterator<Item = ClarificationTemplateId> {
    template_ids().filter(|id| id.is_replayable())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_values() {
        assert_eq!(is_replayable("clarify_episode_same_or_different"), Ok(false));
        assert_eq!(is_replayable("clarify_temporal_relation"), Ok(false));
        assert_eq!(is_replayable("clarify_location"), Ok(true));
        assert_eq!(is_replayable("clarify_laterality"), Ok(true));
    }

    #[test]
    fn test_unknown_id_is_lookup_error() {
        for bad in ["clarify_bogus", "", "CLARIFY_LOCATION"] {
            assert_eq!(is_replayable(bad), Err(LookupError::not_found(bad)));
        }
    }

    #[test]
    fn test_validate_known_and_unknown() {
        for id in template_ids() {
            assert!(validate_template_id(id.as_str()).is_ok());
        }
        assert!(matches!(
            validate_template_id("clarify_bogus"),
            Err(ValidationError::InvalidTemplateId { .. })
        ));
    }

    #[test]
    fn test_policy_follows_category() {
        for def in definitions() {
            assert_eq!(
                def.replayable,
                def.category == TemplateCategory::ClinicallyReferential,
                "{}",
                def.id
            );
        }
    }

    #[test]
    fn test_replayable_ids() {
        let ids: Vec<_> = replayable_ids().collect();
        assert_eq!(
            ids,
            vec![
                ClarificationTemplateId::Location,
                ClarificationTemplateId::Laterality
            ]
        );
    }
}
