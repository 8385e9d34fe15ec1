// Index Builder - tree-sitter powered barrel file generation for TypeScript
//
// Scans a directory for TypeScript sources, collects their top-level exports and
// writes a single `index.ts` re-exporting them. Files are parsed in parallel;
// the index is only rewritten when its set of export lines changes.

pub mod builder;
pub mod discovery;
pub mod error;
pub mod extractors;
pub mod language;
pub mod options;
pub mod synthesis;
pub mod utils;
pub mod writer;

pub use builder::{build_index, BuildReport, IndexBuilder};
pub use discovery::{matchers, PathMatcher};
pub use error::IndexError;
pub use extractors::{ExportKind, FileExports};
pub use options::{ExclusionScope, IndexOptions};
pub use synthesis::ExportLine;
pub use writer::WriteResult;
