//! Policy manifests
//!
//! Downstream stages sometimes ship their own copy of the replay policy. A
//! manifest is that copy in TOML form:
//!
//! ```toml
//! [metadata]
//! name = "response-parser"
//!
//! [replayable]
//! clarify_episode_same_or_different = false
//! clarify_temporal_relation = false
//! clarify_location = true
//! clarify_laterality = true
//! ```
//!
//! Manifests are only ever checked against the compiled-in registry. Policy is
//! never loaded from one.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::template::{definitions, template_ids, ClarificationTemplateId};

/// Errors that can occur when loading or writing a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read policy manifest: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse policy manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize policy manifest: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// A replay policy table claimed by some other component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// template id -> replayable
    pub replayable: BTreeMap<String, bool>,
}

#[derive(Serialize, Deserialize)]
struct TomlManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    replayable: BTreeMap<String, bool>,
}

#[derive(Serialize, Deserialize)]
struct TomlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// A disagreement between a manifest and the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestMismatch {
    /// Manifest names a template the registry does not have
    UnknownTemplate { template_id: String },
    /// Registry template absent from the manifest
    MissingTemplate { template_id: ClarificationTemplateId },
    PolicyDiffers {
        template_id: ClarificationTemplateId,
        expected: bool,
        found: bool,
    },
}

impl fmt::Display for ManifestMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTemplate { template_id } => {
                write!(f, "unknown template '{}'", template_id)
            }
            Self::MissingTemplate { template_id } => {
                write!(f, "template '{}' missing from manifest", template_id)
            }
            Self::PolicyDiffers {
                template_id,
                expected,
                found,
            } => write!(
                f,
                "template '{}': manifest says replayable = {}, registry says {}",
                template_id, found, expected
            ),
        }
    }
}

impl PolicyManifest {
    /// Load a manifest from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a manifest from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;

        Ok(PolicyManifest {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            replayable: parsed.replayable,
        })
    }

    /// The manifest the registry itself would publish
    pub fn from_registry() -> Self {
        PolicyManifest {
            name: Some(env!("CARGO_PKG_NAME").to_string()),
            description: None,
            replayable: definitions()
                .map(|def| (def.id.as_str().to_string(), def.replayable))
                .collect(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ManifestError> {
        let metadata = if self.name.is_some() || self.description.is_some() {
            Some(TomlMetadata {
                name: self.name.clone(),
                description: self.description.clone(),
            })
        } else {
            None
        };
        let out = TomlManifest {
            metadata,
            replayable: self.replayable.clone(),
        };
        Ok(toml::to_string(&out)?)
    }

    /// Compare against the registry; an empty result means full agreement
    pub fn verify(&self) -> Vec<ManifestMismatch> {
        let mut mismatches = Vec::new();

        for id in template_ids() {
            let expected = id.is_replayable();
            match self.replayable.get(id.as_str()) {
                None => mismatches.push(ManifestMismatch::MissingTemplate { template_id: id }),
                Some(&found) if found != expected => {
                    mismatches.push(ManifestMismatch::PolicyDiffers {
                        template_id: id,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
        }

        for key in self.replayable.keys() {
            if ClarificationTemplateId::from_wire(key).is_none() {
                mismatches.push(ManifestMismatch::UnknownTemplate {
                    template_id: key.clone(),
                });
            }
        }

        let name = self.name.as_deref().unwrap_or("<unnamed>");
        if mismatches.is_empty() {
            debug!(manifest = name, "policy manifest agrees with registry");
        } else {
            warn!(
                manifest = name,
                mismatches = mismatches.len(),
                "policy manifest disagrees with registry"
            );
        }
        mismatches
    }
}
