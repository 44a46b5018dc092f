//! Clarification templates and their replay policy
//!
//! Every clarification question the dialogue pipeline can ask is drawn from a
//! closed set of templates. Each template carries:
//!
//! - a stable wire identifier (`clarify_location`, ...)
//! - a replay policy: whether the user's answer may be forwarded to the
//!   Response Parser once the episode it belongs to has been resolved
//! - a question pattern with `{mention_N}` placeholders
//!
//! # Example
//!
//! ```rust
//! use clarification_registry::template::{is_replayable, validate_template_id};
//!
//! validate_template_id("clarify_location").unwrap();
//! assert!(is_replayable("clarify_location").unwrap());
//! assert!(!is_replayable("clarify_temporal_relation").unwrap());
//! ```

mod id;
mod registry;
mod text;

pub use id::{ClarificationTemplateId, TemplateCategory};
pub use registry::{
    definitions, is_replayable, replayable_ids, template_ids, validate_template_id,
    TemplateDefinition,
};
pub use text::{render, template_text, RenderError};
