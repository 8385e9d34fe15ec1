//! Re-export line synthesis
//!
//! One `export { .. } from '..';` line per file with symbols and one
//! `export type { .. } from '..';` line per file with types.

use crate::extractors::{ExportKind, FileExports};
use crate::utils::paths::{relative_to_dir, rewrite_extension};

/// A synthesized re-export statement and the file it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    /// Root-relative source path
    pub path: String,
    pub line: String,
}

/// How source paths turn into import specifiers
#[derive(Debug, Clone)]
pub struct LineSynthesizer {
    /// Root-relative directory of the target file, `/` separated
    target_dir: String,
    source_extension: String,
    module_extension: String,
}

impl LineSynthesizer {
    pub fn new(
        target_dir: impl Into<String>,
        source_extension: impl Into<String>,
        module_extension: impl Into<String>,
    ) -> Self {
        Self {
            target_dir: target_dir.into(),
            source_extension: source_extension.into(),
            module_extension: module_extension.into(),
        }
    }

    /// Import specifier for a source file, relative to the target directory
    pub fn module_specifier(&self, path: &str) -> String {
        let module_path = rewrite_extension(path, &self.source_extension, &self.module_extension);
        relative_to_dir(&module_path, &self.target_dir)
    }

    fn line_for(&self, kind: ExportKind, names: &[String], path: &str) -> String {
        format!(
            "{} {} }} from '{}';",
            kind.statement_prefix(),
            names.join(", "),
            self.module_specifier(path)
        )
    }

    /// Build every line, ordered by source path
    ///
    /// Symbol lines are accumulated before type lines, so for one file the
    /// symbol line stays first after the stable path sort.
    pub fn synthesize(&self, exports: &[FileExports]) -> Vec<ExportLine> {
        let mut lines: Vec<ExportLine> = [ExportKind::Symbol, ExportKind::Type]
            .into_iter()
            .flat_map(move |kind| {
                exports
                    .iter()
                    .filter(move |file| !file.names(kind).is_empty())
                    .map(move |file| ExportLine {
                        path: file.path.clone(),
                        line: self.line_for(kind, file.names(kind), &file.path),
                    })
            })
            .collect();

        lines.sort_by(|a, b| a.path.cmp(&b.path));
        lines
    }
}
