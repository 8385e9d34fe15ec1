//! Error type shared by every stage of an index build.
//!
//! Every failure is fatal for the run: the builder propagates the first error
//! and never writes a partial index.

use std::path::PathBuf;

/// Errors produced while building an index file
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A discovered source file could not be read
    #[error("failed to read source file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The source file contains malformed syntax
    #[error("failed to parse '{path}': syntax error at line {line}, column {column}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
    },

    /// An export statement wraps a declaration that is neither a symbol nor a type
    #[error("unsupported export declaration '{kind}' in '{path}' at line {line}")]
    UnsupportedDeclaration {
        path: String,
        kind: String,
        line: usize,
    },

    /// Recursive file enumeration failed
    #[error("file discovery failed: {0}")]
    Discovery(String),

    /// Filesystem failure outside of source reading (root, target directory, target file)
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rejected configuration
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The tree-sitter grammar could not be loaded
    #[error(transparent)]
    Language(#[from] anyhow::Error),
}

impl From<glob::PatternError> for IndexError {
    fn from(err: glob::PatternError) -> Self {
        IndexError::Discovery(err.to_string())
    }
}

impl From<glob::GlobError> for IndexError {
    fn from(err: glob::GlobError) -> Self {
        IndexError::Discovery(err.to_string())
    }
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_declaration_message_names_kind_and_file() {
        let err = IndexError::UnsupportedDeclaration {
            path: "lib/colors.ts".to_string(),
            kind: "enum_declaration".to_string(),
            line: 3,
        };

        let message = err.to_string();
        assert!(message.contains("enum_declaration"));
        assert!(message.contains("lib/colors.ts"));
        assert!(message.contains("line 3"));
    }

    #[test]
    fn test_glob_pattern_error_becomes_discovery_error() {
        let pattern_err = glob::Pattern::new("a/***").unwrap_err();
        let err: IndexError = pattern_err.into();
        assert!(matches!(err, IndexError::Discovery(_)));
    }
}
