//! Internal-export exclusion
//!
//! An export is hidden from the index when a `/** ... */` block carries the
//! exclusion tag followed, possibly several lines later, by the export name.

use crate::error::IndexError;
use crate::extractors::base::ExportedDeclaration;
use crate::options::{ExclusionScope, IndexOptions};
use regex::Regex;

/// Decides which exported declarations are internal-only
#[derive(Debug, Clone)]
pub struct InternalExportFilter {
    tag: String,
    scope: ExclusionScope,
}

impl InternalExportFilter {
    pub fn new(tag: impl Into<String>, scope: ExclusionScope) -> Self {
        Self {
            tag: tag.into(),
            scope,
        }
    }

    pub fn from_options(options: &IndexOptions) -> Self {
        Self::new(options.exclusion_tag.clone(), options.exclusion_scope)
    }

    /// `/**`, the tag, then the name; `.` spans newlines
    pub fn pattern_for(&self, name: &str) -> Result<Regex, IndexError> {
        let pattern = format!(
            r"(?s)/\*\*.+?{}.+?{}",
            regex::escape(&self.tag),
            regex::escape(name)
        );
        Regex::new(&pattern)
            .map_err(|e| IndexError::InvalidOptions(format!("exclusion pattern for '{}': {}", name, e)))
    }

    /// Check a declaration against the file text (or its own doc comment)
    ///
    /// Multi-binding variable statements are tested by their joined name, so
    /// the whole statement is kept or dropped together.
    pub fn is_internal(
        &self,
        declaration: &ExportedDeclaration,
        content: &str,
    ) -> Result<bool, IndexError> {
        let haystack = match self.scope {
            ExclusionScope::File => content,
            ExclusionScope::DocComment => match declaration.doc_comment.as_deref() {
                Some(doc) => doc,
                None => return Ok(false),
            },
        };

        Ok(self.pattern_for(&declaration.name)?.is_match(haystack))
    }
}
