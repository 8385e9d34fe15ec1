// BaseExtractor implementation
//
// Holds the file being extracted and the text helpers every extraction step needs.

use tracing::debug;
use tree_sitter::Node;

/// Base implementation shared by language extractors
pub struct BaseExtractor {
    pub language: String,
    /// Root-relative Unix-style path
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        // Callers already hand us root-relative paths; just normalize separators
        let file_path = crate::utils::paths::normalize_separators(&file_path);

        debug!("BaseExtractor: {} ({})", file_path, language);

        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// 1-based line a node starts on
    pub fn line_of(&self, node: &Node) -> usize {
        node.start_position().row + 1
    }

    /// Find the `/** ... */` comment block directly above a node
    ///
    /// Consecutive doc comments are joined top to bottom. Plain `//` and `/* */`
    /// comments end the search, as does any other statement.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut comments = Vec::new();

        let mut current = node.prev_named_sibling();
        while let Some(sibling) = current {
            if sibling.kind() != "comment" {
                break;
            }

            let comment_text = self.get_node_text(&sibling);
            if !comment_text.trim_start().starts_with("/**") {
                break;
            }

            comments.push(comment_text);
            current = sibling.prev_named_sibling();
        }

        if comments.is_empty() {
            None
        } else {
            // Reverse to get original order (top to bottom)
            comments.reverse();
            Some(comments.join("\n"))
        }
    }
}
