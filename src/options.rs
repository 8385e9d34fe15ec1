//! Build options
//!
//! Every field has a default so callers only spell out what they change.
//! Options can also be loaded from JSON with camelCase keys, e.g.
//! `{ "exclusionTag": "@private", "exclusionScope": "docComment" }`.

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Doc-comment tag that hides an export from the generated index
pub const DEFAULT_EXCLUSION_TAG: &str = "@internalexport";

/// Where the exclusion marker is looked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionScope {
    /// Match `/** ... <tag> ... <name>` anywhere in the file text.
    ///
    /// A tagged comment earlier in the file can hide any later export whose
    /// name appears after the tag.
    #[default]
    File,
    /// Match only against the doc comment(s) directly above the export statement
    DocComment,
}

/// Options recognised by the index builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexOptions {
    /// Marker text recognising internal-only exports
    pub exclusion_tag: String,
    /// Text region the marker is matched against
    pub exclusion_scope: ExclusionScope,
    /// Extension of the source files enumerated by discovery (without the dot)
    pub source_extension: String,
    /// Extension written into the emitted import paths (without the dot)
    pub module_extension: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            exclusion_tag: DEFAULT_EXCLUSION_TAG.to_string(),
            exclusion_scope: ExclusionScope::File,
            source_extension: "ts".to_string(),
            module_extension: "js".to_string(),
        }
    }
}

impl IndexOptions {
    /// Load options from a JSON document, then validate them
    pub fn from_json_str(json: &str) -> Result<Self, IndexError> {
        let options: IndexOptions = serde_json::from_str(json)
            .map_err(|e| IndexError::InvalidOptions(format!("malformed options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_exclusion_tag(mut self, tag: impl Into<String>) -> Self {
        self.exclusion_tag = tag.into();
        self
    }

    pub fn with_exclusion_scope(mut self, scope: ExclusionScope) -> Self {
        self.exclusion_scope = scope;
        self
    }

    pub fn with_extensions(mut self, source: impl Into<String>, module: impl Into<String>) -> Self {
        self.source_extension = source.into();
        self.module_extension = module.into();
        self
    }

    /// Reject options that would make the pipeline meaningless
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.exclusion_tag.trim().is_empty() {
            return Err(IndexError::InvalidOptions(
                "exclusion tag must not be empty".to_string(),
            ));
        }

        for (field, ext) in [
            ("sourceExtension", &self.source_extension),
            ("moduleExtension", &self.module_extension),
        ] {
            if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(IndexError::InvalidOptions(format!(
                    "{} must be a bare extension like 'ts', got '{}'",
                    field, ext
                )));
            }
        }

        Ok(())
    }
}
