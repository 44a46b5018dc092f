//! Question text patterns and placeholder rendering
//!
//! Patterns use `{name}` placeholders. The rendered text (placeholders filled)
//! is what gets stored on the clarification turn and later replayed.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::error::LookupError;

use super::id::ClarificationTemplateId;

/// Errors that can occur while rendering a question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No value supplied for a placeholder the pattern uses
    #[error("missing value for placeholder '{placeholder}' in template {template_id}")]
    MissingPlaceholder {
        template_id: ClarificationTemplateId,
        placeholder: String,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub(crate) fn pattern(id: ClarificationTemplateId) -> &'static str {
    match id {
        ClarificationTemplateId::EpisodeSameOrDifferent => {
            "You mentioned {mention_1} and {mention_2}. \
             Are these the same episode or different episodes?"
        }
        ClarificationTemplateId::TemporalRelation => {
            "Did {mention_1} happen before, after, or at the same time as {mention_2}?"
        }
        ClarificationTemplateId::Location => "Where exactly was {mention_1} located?",
        ClarificationTemplateId::Laterality => {
            "Was {mention_1} on the left side, right side, or both?"
        }
    }
}

/// Question pattern for a template identifier
pub fn template_text(template_id: &str) -> Result<&'static str, LookupError> {
    ClarificationTemplateId::from_wire(template_id)
        .map(pattern)
        .ok_or_else(|| LookupError::not_found(template_id))
}

impl ClarificationTemplateId {
    pub fn text(&self) -> &'static str {
        pattern(*self)
    }

    /// Placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for segment in segments(self.text()) {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Fill placeholders from a name -> value map
    ///
    /// Values for names the pattern does not use are ignored.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.text().len());
        for segment in segments(self.text()) {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Placeholder(name) => {
                    let value = values.get(name).ok_or_else(|| RenderError::MissingPlaceholder {
                        template_id: *self,
                        placeholder: name.to_string(),
                    })?;
                    out.push_str(value);
                }
            }
        }
        debug!(template_id = %self, "rendered clarification question");
        Ok(out)
    }

    /// Fill `mention_1`, `mention_2`, ... from positional values
    pub fn render_mentions<S: AsRef<str>>(&self, mentions: &[S]) -> Result<String, RenderError> {
        let values: HashMap<String, String> = mentions
            .iter()
            .enumerate()
            .map(|(i, m)| (format!("mention_{}", i + 1), m.as_ref().to_string()))
            .collect();
        self.render(&values)
    }
}

/// Render a question for an identifier string
pub fn render(template_id: &str, values: &HashMap<String, String>) -> Result<String, RenderError> {
    let id = ClarificationTemplateId::from_wire(template_id)
        .ok_or_else(|| LookupError::not_found(template_id))?;
    id.render(values)
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Split a pattern into literal runs and `{name}` placeholders
///
/// A `{` not followed by an identifier and `}` is kept as literal text.
fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after.find('}');
        let name = close.map(|c| &after[..c]);

        match name {
            Some(name) if is_placeholder_name(name) => {
                if open > 0 {
                    out.push(Segment::Literal(&rest[..open]));
                }
                out.push(Segment::Placeholder(name));
                rest = &after[name.len() + 1..];
            }
            _ => {
                out.push(Segment::Literal(&rest[..open + 1]));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    out
}

fn is_placeholder_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
