//! Selecting clarification turns for replay
//!
//! After an episode is resolved, only answers to replayable templates are
//! forwarded to the Response Parser. Answers to episode-structural questions
//! are dropped here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::LookupError;
use crate::template::is_replayable;

/// Errors that can occur when loading a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Failed to read transcript file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse transcript TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One question/answer exchange from a clarification phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationTurn {
    /// Wire identifier of the template the question was rendered from
    pub template_id: String,
    /// The question exactly as shown to the user
    pub rendered_text: String,
    /// The user's verbatim answer
    pub user_response: String,
}

impl ClarificationTurn {
    pub fn new(
        template_id: impl Into<String>,
        rendered_text: impl Into<String>,
        user_response: impl Into<String>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            rendered_text: rendered_text.into(),
            user_response: user_response.into(),
        }
    }

    pub fn is_replayable(&self) -> Result<bool, LookupError> {
        is_replayable(&self.template_id)
    }
}

/// The clarification turns of one resolved episode
///
/// Stored as TOML with one `[[turns]]` table per exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub turns: Vec<ClarificationTurn>,
}

impl Transcript {
    pub fn from_file(path: &Path) -> Result<Self, TranscriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, TranscriptError> {
        Ok(toml::from_str(content)?)
    }

    pub fn replayable_turns(&self) -> Result<Vec<&ClarificationTurn>, LookupError> {
        select_replayable(&self.turns)
    }
}

/// Keep the turns whose template is replayable, in their original order
///
/// A turn with an unregistered template id is a [`LookupError`]; such turns
/// are never silently dropped.
pub fn select_replayable(turns: &[ClarificationTurn]) -> Result<Vec<&ClarificationTurn>, LookupError> {
    let mut selected = Vec::with_capacity(turns.len());
    for (index, turn) in turns.iter().enumerate() {
        if turn.is_replayable()? {
            selected.push(turn);
        } else {
            debug!(index, template_id = %turn.template_id, "turn excluded from replay");
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Vec<ClarificationTurn> {
        vec![
            ClarificationTurn::new(
                "clarify_episode_same_or_different",
                "You mentioned the headache and the migraine. Are these the same episode or different episodes?",
                "same one",
            ),
            ClarificationTurn::new(
                "clarify_location",
                "Where exactly was the headache located?",
                "behind my left eye",
            ),
            ClarificationTurn::new(
                "clarify_temporal_relation",
                "Did the headache happen before, after, or at the same time as the nausea?",
                "before",
            ),
            ClarificationTurn::new(
                "clarify_laterality",
                "Was the headache on the left side, right side, or both?",
                "left",
            ),
        ]
    }

    #[test]
    fn test_select_keeps_referential_turns_in_order() {
        let turns = transcript();
        let selected = select_replayable(&turns).unwrap();
        let ids: Vec<_> = selected.iter().map(|t| t.template_id.as_str()).collect();
        assert_eq!(ids, vec!["clarify_location", "clarify_laterality"]);
    }

    #[test]
    fn test_transcript_from_toml() {
        let transcript = Transcript::from_str(
            r#"
[[turns]]
template_id = "clarify_temporal_relation"
rendered_text = "Did the cough happen before, after, or at the same time as the fever?"
user_response = "after"

[[turns]]
template_id = "clarify_location"
rendered_text = "Where exactly was the cough located?"
user_response = "in my chest"
"#,
        )
        .expect("Should parse");
        assert_eq!(transcript.turns.len(), 2);

        let replay = transcript.replayable_turns().unwrap();
        assert_eq!(replay.len(), 1);
        assert_eq!(replay[0].user_response, "in my chest");
    }

    #[test]
    fn test_transcript_missing_field() {
        let result = Transcript::from_str("[[turns]]\ntemplate_id = \"clarify_location\"");
        assert!(matches!(result, Err(TranscriptError::ParseError(_))));
    }

    #[test]
    fn test_select_empty() {
        assert!(select_replayable(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_select_unknown_template_fails() {
        let mut turns = transcript();
        turns.push(ClarificationTurn::new("clarify_bogus", "?", "x"));
        assert_eq!(
            select_replayable(&turns),
            Err(LookupError::not_found("clarify_bogus"))
        );
    }
}
