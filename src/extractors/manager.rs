//! ExtractorManager - Public API for export extraction
//!
//! Handles file reading and parsing, then delegates to the TypeScript extractor.
//! A manager is shared across rayon workers; each call builds its own parser.

use crate::error::IndexError;
use crate::extractors::base::FileExports;
use crate::extractors::typescript::{InternalExportFilter, TypeScriptExtractor};
use crate::options::IndexOptions;
use std::path::Path;
use tree_sitter::Parser;

/// Manager for export extraction
pub struct ExtractorManager {
    filter: InternalExportFilter,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new(&IndexOptions::default())
    }
}

impl ExtractorManager {
    pub fn new(options: &IndexOptions) -> Self {
        Self {
            filter: InternalExportFilter::from_options(options),
        }
    }

    /// Read a file from disk and extract its exports
    ///
    /// `file_path` is the root-relative path recorded in the result.
    pub fn extract_file(
        &self,
        absolute_path: &Path,
        file_path: &str,
    ) -> Result<FileExports, IndexError> {
        let content =
            std::fs::read_to_string(absolute_path).map_err(|source| IndexError::Read {
                path: file_path.to_string(),
                source,
            })?;

        self.extract_exports(file_path, &content)
    }

    /// Extract exports from file content
    pub fn extract_exports(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<FileExports, IndexError> {
        let language = crate::language::detect_language_from_path(file_path);

        // Create parser for the language
        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(language)?;

        parser.set_language(&tree_sitter_language).map_err(|e| {
            anyhow::anyhow!("Failed to set parser language for {}: {}", language, e)
        })?;

        // Parse the file
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse file: {}", file_path))?;

        let extractor =
            TypeScriptExtractor::new(language.to_string(), file_path.to_string(), content.to_string());

        // tree-sitter recovers from syntax errors; the index must not
        if let Some(error_node) = extractor.base().find_first_error(&tree.root_node()) {
            let position = error_node.start_position();
            return Err(IndexError::Parse {
                path: file_path.to_string(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        let exports = extractor.extract_exports(&tree, &self.filter)?;

        tracing::debug!(
            "Extracted {} symbols and {} types from {} file: {}",
            exports.symbols.len(),
            exports.types.len(),
            language,
            file_path
        );
        Ok(exports)
    }
}
