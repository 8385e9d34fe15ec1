//! Export Extractors Module
//!
//! Tree-sitter based extraction of top-level exports from TypeScript files.
//!
//! # Architecture
//!
//! - `base` - shared types (`FileExports`, `ExportKind`) and `BaseExtractor` helpers
//! - `manager` - `ExtractorManager`, reads and parses files
//! - `typescript` - export classification and internal-export exclusion

pub mod base;
pub mod manager;
pub mod typescript;

// Re-export the public API
pub use base::{ExportKind, ExportedDeclaration, FileExports};
pub use manager::ExtractorManager;
pub use typescript::InternalExportFilter;
