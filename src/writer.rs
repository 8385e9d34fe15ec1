//! Idempotent index writer.
//!
//! The target is rewritten only when its set of `export` lines differs from
//! the freshly synthesized one, so unchanged builds leave the file (and its
//! modification time) alone.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::IndexError;

/// Fixed lines at the top of every generated index
pub const HEADER_LINES: [&str; 3] = [
    "/* eslint-disable simple-import-sort/exports */",
    "/* eslint-disable max-len */",
    "/* auto generated */",
];

/// Only lines starting with this take part in the comparison
const EXPORT_KEYWORD: &str = "export";

/// Marker of type-only re-export lines
const TYPE_EXPORT_MARKER: &str = "export type";

/// Added to the rank of type-only lines
const TYPE_EXPORT_PENALTY: usize = 1000;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The target was created or replaced
    Written,
    /// The existing export lines already match
    Unchanged,
}

/// Writes the generated index to its target path
#[derive(Debug, Clone)]
pub struct IndexWriter {
    target: PathBuf,
}

impl IndexWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Export lines currently in the target; empty when it does not exist
    pub fn existing_lines(&self) -> Result<Vec<String>, IndexError> {
        if !self.target.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.target).map_err(|e| IndexError::io(&self.target, e))?;

        Ok(content
            .lines()
            .filter(|line| line.starts_with(EXPORT_KEYWORD))
            .map(str::to_string)
            .collect())
    }

    /// Write `lines` unless the target already holds the same set
    pub fn write(&self, lines: &[String]) -> Result<WriteResult, IndexError> {
        // The directory is created even when nothing gets written
        if let Some(parent) = self.target.parent() {
            fs::create_dir_all(parent).map_err(|e| IndexError::io(parent, e))?;
        }

        let existing = self.existing_lines()?;
        if same_entries(lines, &existing) {
            debug!("Index unchanged: {}", self.target.display());
            return Ok(WriteResult::Unchanged);
        }

        fs::write(&self.target, render(lines)).map_err(|e| IndexError::io(&self.target, e))?;

        info!(
            "📋 Index updated: {} ({} export lines)",
            self.target.display(),
            lines.len()
        );
        Ok(WriteResult::Written)
    }
}

/// Unordered comparison: same count, and every new line already exists
pub fn same_entries(new_lines: &[String], existing: &[String]) -> bool {
    new_lines.len() == existing.len() && new_lines.iter().all(|line| existing.contains(line))
}

/// Display rank, sorted descending: longer lines first
///
/// Type-only lines get a fixed bonus, so they form their own band above the
/// symbol lines.
pub fn display_rank(line: &str) -> usize {
    let length = line.chars().count();
    if line.contains(TYPE_EXPORT_MARKER) {
        length + TYPE_EXPORT_PENALTY
    } else {
        length
    }
}

/// Full file content: header, lines by descending rank, trailing newline
pub fn render(lines: &[String]) -> String {
    let mut ordered: Vec<&str> = lines.iter().map(String::as_str).collect();
    ordered.sort_by(|a, b| display_rank(b).cmp(&display_rank(a)));

    let mut output: Vec<&str> = HEADER_LINES.to_vec();
    output.extend(ordered);
    output.push("");
    output.join("\n")
}
