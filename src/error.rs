//! Error types for template lookup and validation
//!
//! The registry distinguishes two failure kinds:
//!
//! - [`LookupError`] comes from the direct query paths ([`crate::is_replayable`],
//!   [`crate::template_text`]). Callers are expected to have validated the
//!   identifier already, so hitting it is a bug on the caller's side.
//! - [`ValidationError`] comes from [`crate::validate_template_id`] and from
//!   parsing an identifier. It is meant to be shown to whoever sent the value.

use thiserror::Error;

/// Identifier absent from the registry on a direct lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("template_id not found: '{template_id}'")]
    NotFound { template_id: String },
}

impl LookupError {
    pub fn not_found(template_id: impl Into<String>) -> Self {
        Self::NotFound {
            template_id: template_id.into(),
        }
    }

    /// The identifier that was looked up
    pub fn template_id(&self) -> &str {
        match self {
            Self::NotFound { template_id } => template_id,
        }
    }
}

/// Untrusted identifier rejected by validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid template_id: '{template_id}'. Must be one of: {}", valid_ids.join(", "))]
    InvalidTemplateId {
        template_id: String,
        valid_ids: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Create an invalid identifier error listing every registered identifier
    pub fn invalid(template_id: impl Into<String>) -> Self {
        Self::InvalidTemplateId {
            template_id: template_id.into(),
            valid_ids: crate::template::template_ids().map(|id| id.as_str()).collect(),
        }
    }

    /// The rejected value
    pub fn template_id(&self) -> &str {
        match self {
            Self::InvalidTemplateId { template_id, .. } => template_id,
        }
    }

    /// Every identifier the registry would have accepted
    pub fn valid_ids(&self) -> &[&'static str] {
        match self {
            Self::InvalidTemplateId { valid_ids, .. } => valid_ids,
        }
    }
}
