// Base Extractor Types
//
// Data structures passed from the extractor to line synthesis.

use serde::{Deserialize, Serialize};

/// Which re-export form a declaration ends up in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Value-level export: class, function, variable
    Symbol,
    /// Type-level export: type alias, interface, namespace/module
    Type,
}

impl ExportKind {
    /// Opening of the re-export statement for this kind
    pub fn statement_prefix(&self) -> &'static str {
        match self {
            ExportKind::Symbol => "export {",
            ExportKind::Type => "export type {",
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::Symbol => write!(f, "symbol"),
            ExportKind::Type => write!(f, "type"),
        }
    }
}

/// One exported declaration found at the top level of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDeclaration {
    /// Exported name; several variable bindings are joined with `,`
    pub name: String,
    pub kind: ExportKind,
    /// tree-sitter node kind of the declaration (e.g. `class_declaration`)
    pub node_kind: String,
    /// Start line number (1-based)
    pub start_line: usize,
    /// Doc comment(s) directly above the export statement
    pub doc_comment: Option<String>,
}

/// Exports of a single source file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileExports {
    /// Path relative to the build root, `/` separated
    pub path: String,
    /// Exported classes, functions and variables, in source order
    pub symbols: Vec<String>,
    /// Exported type aliases, interfaces and namespaces, in source order
    pub types: Vec<String>,
}

impl FileExports {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Names collected for one export kind
    pub fn names(&self, kind: ExportKind) -> &[String] {
        match kind {
            ExportKind::Symbol => &self.symbols,
            ExportKind::Type => &self.types,
        }
    }

    /// Record a name, ignoring repeats (function overloads share one name)
    pub fn push(&mut self, kind: ExportKind, name: String) {
        let names = match kind {
            ExportKind::Symbol => &mut self.symbols,
            ExportKind::Type => &mut self.types,
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }

    /// A file without exports contributes nothing to the index
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.types.is_empty()
    }
}
