//! TypeScript export extractor
//!
//! - **exports**: top-level export declaration selection and symbol/type classification
//! - **exclusion**: internal-only export filtering by doc-comment tag

pub mod exclusion;
mod exports;

pub use exclusion::InternalExportFilter;

use crate::error::IndexError;
use crate::extractors::base::{BaseExtractor, ExportedDeclaration, FileExports};
use tracing::debug;
use tree_sitter::Tree;

/// Main TypeScript extractor
pub struct TypeScriptExtractor {
    base: BaseExtractor,
}

impl TypeScriptExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    /// All exported declarations, before any exclusion
    pub fn extract_export_declarations(
        &self,
        tree: &Tree,
    ) -> Result<Vec<ExportedDeclaration>, IndexError> {
        exports::extract_export_declarations(self, tree)
    }

    /// Exported symbols and types with internal-only exports removed
    pub fn extract_exports(
        &self,
        tree: &Tree,
        filter: &InternalExportFilter,
    ) -> Result<FileExports, IndexError> {
        let mut file_exports = FileExports::new(self.base.file_path.clone());

        for declaration in self.extract_export_declarations(tree)? {
            if filter.is_internal(&declaration, &self.base.content)? {
                debug!(
                    "Skipping internal {} export '{}' ({}) at {}:{}",
                    declaration.kind,
                    declaration.name,
                    declaration.node_kind,
                    self.base.file_path,
                    declaration.start_line
                );
                continue;
            }
            file_exports.push(declaration.kind, declaration.name);
        }

        Ok(file_exports)
    }

    /// Get immutable reference to base extractor (for sub-modules)
    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
