//! Language Support - tree-sitter grammar selection
//!
//! ALL grammar configuration goes here so the extractor and its tests agree on
//! which parser handles which file.

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
///
/// # Supported Languages
///
/// **typescript**: `.ts`, `.mts`, `.cts`
/// **tsx**: `.tsx`
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: typescript, tsx",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        _ => None,
    }
}

/// Detect language from a file path, defaulting to plain TypeScript
///
/// Discovery can be pointed at any extension, so unknown extensions fall back
/// to the TypeScript grammar rather than failing the run.
pub fn detect_language_from_path(file_path: &str) -> &'static str {
    let extension = file_path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    detect_language_from_extension(extension).unwrap_or("typescript")
}
