// Base Extractor Types and Helpers
//
// - types.rs: FileExports, ExportedDeclaration, ExportKind
// - extractor.rs: BaseExtractor (text and doc-comment helpers)
// - tree_methods.rs: Tree navigation and error lookup

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{ExportKind, ExportedDeclaration, FileExports};
