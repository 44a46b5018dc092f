//! Clarification Registry - replay policy for clinical clarification questions
//!
//! The dialogue pipeline asks clarification questions drawn from a closed set
//! of templates. Once the episode a user's answer belongs to is resolved, the
//! answer may be replayed to the Response Parser, but only if its template is
//! replayable. This crate is the single source of truth for that decision.
//!
//! # Example
//!
//! ```rust
//! use clarification_registry::{is_replayable, validate_template_id, ValidationError};
//!
//! // Untrusted input: validate first
//! validate_template_id("clarify_laterality").unwrap();
//! assert!(is_replayable("clarify_laterality").unwrap());
//!
//! let err = validate_template_id("clarify_bogus").unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidTemplateId { .. }));
//! assert!(err.to_string().contains("clarify_location"));
//! ```

pub mod error;
pub mod manifest;
pub mod policy;
pub mod replay;
pub mod template;

pub use error::{LookupError, ValidationError};
pub use manifest::{ManifestError, ManifestMismatch, PolicyManifest};
pub use policy::{ForcedResolutionPolicy, PolicyParseError};
pub use replay::{select_replayable, ClarificationTurn, Transcript, TranscriptError};
pub use template::{
    definitions, is_replayable, render, replayable_ids, template_ids, template_text,
    validate_template_id, ClarificationTemplateId, RenderError, TemplateCategory,
    TemplateDefinition,
};

use thiserror::Error;

/// Any error this crate can produce
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Policy(#[from] PolicyParseError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_keeps_kind() {
        let err: RegistryError = validate_template_id("x").unwrap_err().into();
        assert!(matches!(err, RegistryError::Validation(_)));

        let err: RegistryError = is_replayable("x").unwrap_err().into();
        assert!(matches!(err, RegistryError::Lookup(_)));
        assert_eq!(err.to_string(), "template_id not found: 'x'");
    }

    #[test]
    fn test_root_surface_lists_registry() {
        assert_eq!(definitions().count(), 4);
        let replayable: Vec<_> = replayable_ids().map(|id| id.as_str()).collect();
        assert_eq!(replayable, vec!["clarify_location", "clarify_laterality"]);
    }

    #[test]
    fn test_types_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClarificationTemplateId>();
        assert_send_sync::<TemplateDefinition>();
        assert_send_sync::<LookupError>();
        assert_send_sync::<ValidationError>();
    }
}
