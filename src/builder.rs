//! Index build orchestration
//!
//! Discovery → parallel extraction → synthesis → idempotent write.
//!
//! # Concurrency
//! Accepted files are read and parsed on rayon's global pool. Results are
//! gathered in discovery order and the first failure aborts the whole run
//! before anything is written, so the output never depends on completion order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::discovery::{discover, PathMatcher};
use crate::error::IndexError;
use crate::extractors::{ExtractorManager, FileExports};
use crate::options::IndexOptions;
use crate::synthesis::LineSynthesizer;
use crate::utils::paths::{canonical_root, to_relative_unix_style};
use crate::writer::{IndexWriter, WriteResult};

/// Summary of one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Absolute path of the index file
    pub target: PathBuf,
    /// Files enumerated below the target directory
    pub scanned: usize,
    /// Files accepted by the matchers
    pub matched: usize,
    /// Synthesized export lines, in source path order
    pub lines: Vec<String>,
    pub result: WriteResult,
}

/// Build (or refresh) the index file `target_file`, relative to `root`
///
/// Files below the target's directory are enumerated, and those accepted by
/// at least one matcher contribute their exports.
pub fn build_index(
    root: &Path,
    target_file: impl AsRef<Path>,
    matchers: &[&dyn PathMatcher],
    options: &IndexOptions,
) -> Result<BuildReport, IndexError> {
    options.validate()?;

    let root = canonical_root(root)?;
    let target = root.join(target_file.as_ref());
    let target_dir = target
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.clone());
    let target_dir_relative = to_relative_unix_style(&target_dir, &root)?;

    let discovery = discover(&root, &target_dir, &options.source_extension, matchers)?;

    let manager = ExtractorManager::new(options);
    let exports: Vec<FileExports> = discovery
        .files
        .par_iter()
        .map(|file| manager.extract_file(&file.absolute, &file.path))
        .collect::<Result<_, _>>()?;

    let synthesizer = LineSynthesizer::new(
        target_dir_relative,
        options.source_extension.as_str(),
        options.module_extension.as_str(),
    );
    let lines: Vec<String> = synthesizer
        .synthesize(&exports)
        .into_iter()
        .map(|export_line| export_line.line)
        .collect();
    debug!(
        "Synthesized {} export lines from {} files",
        lines.len(),
        exports.len()
    );

    let result = IndexWriter::new(&target).write(&lines)?;

    Ok(BuildReport {
        target,
        scanned: discovery.scanned,
        matched: discovery.files.len(),
        lines,
        result,
    })
}

/// Fluent front end for [`build_index`]
///
/// ```no_run
/// use index_builder::{matchers, IndexBuilder};
///
/// let report = IndexBuilder::new(".", "src/index.ts")
///     .matcher(matchers::except("src/index.ts"))
///     .build()?;
/// println!("{:?}", report.result);
/// # Ok::<(), index_builder::IndexError>(())
/// ```
pub struct IndexBuilder {
    root: PathBuf,
    target_file: PathBuf,
    matchers: Vec<Box<dyn PathMatcher>>,
    options: IndexOptions,
}

impl IndexBuilder {
    pub fn new(root: impl Into<PathBuf>, target_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            target_file: target_file.into(),
            matchers: Vec::new(),
            options: IndexOptions::default(),
        }
    }

    /// Add a matcher; a file is used when any matcher accepts it
    pub fn matcher(mut self, matcher: impl PathMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn options(mut self, options: IndexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self) -> Result<BuildReport, IndexError> {
        let matchers: Vec<&dyn PathMatcher> = self.matchers.iter().map(|m| m.as_ref()).collect();
        build_index(&self.root, &self.target_file, &matchers, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::matchers;
    use crate::options::ExclusionScope;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn export_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("export"))
            .map(str::to_string)
            .collect()
    }

    fn ts_except_index(path: &str) -> bool {
        path.ends_with(".ts") && path != "lib/index.ts"
    }

    #[test]
    fn test_end_to_end_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export const X = 1; export type Y = string;\n");
        write(root, "lib/b.ts", "/** @internalexport skip */ export function skip(){}\n");

        let report = build_index(root, "lib/index.ts", &[&ts_except_index], &IndexOptions::default())
            .unwrap();

        assert_eq!(report.result, WriteResult::Written);
        assert_eq!(report.matched, 2);

        let index = root.join("lib/index.ts");
        let content = fs::read_to_string(&index).unwrap();
        assert_eq!(
            content,
            "/* eslint-disable simple-import-sort/exports */\n\
             /* eslint-disable max-len */\n\
             /* auto generated */\n\
             export type { Y } from './a.js';\n\
             export { X } from './a.js';\n"
        );
        assert!(!content.contains("skip"));
    }

    fn copy_samples(from: &Path, to: &Path) {
        for entry in fs::read_dir(from).unwrap() {
            let entry = entry.unwrap();
            let destination = to.join(entry.file_name());
            if entry.file_type().unwrap().is_dir() {
                fs::create_dir_all(&destination).unwrap();
                copy_samples(&entry.path(), &destination);
            } else {
                fs::copy(entry.path(), destination).unwrap();
            }
        }
    }

    #[test]
    fn test_sample_project() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let samples = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_samples/barrel");
        copy_samples(&samples, root);

        let sources: Vec<Box<dyn PathMatcher>> = vec![
            Box::new(matchers::extension("ts")),
            Box::new(matchers::except("lib/index.ts")),
            Box::new(|path: &str| !path.ends_with(".test.ts")),
        ];
        let report = IndexBuilder::new(root, "lib/index.ts")
            .matcher(matchers::all_of(sources))
            .build()
            .unwrap();

        assert_eq!(report.scanned, 3);
        assert_eq!(report.matched, 2);
        assert_eq!(
            report.lines,
            vec![
                "export { DEFAULT_RADIUS } from './shapes/shape.js';",
                "export type { Shape, Circle, Square } from './shapes/shape.js';",
                "export { Store, createStore } from './store.js';",
                "export type { StoreOptions } from './store.js';",
            ]
        );
        assert!(!fs::read_to_string(&report.target).unwrap().contains("resetItems"));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export function load() {}\nexport interface Shape {}\n");
        write(root, "lib/sub/b.ts", "export class Store {}\n");

        let builder = IndexBuilder::new(root, "lib/index.ts").matcher(ts_except_index);

        let first = builder.build().unwrap();
        assert_eq!(first.result, WriteResult::Written);

        let index = root.join("lib/index.ts");
        let modified_before = fs::metadata(&index).unwrap().modified().unwrap();
        let content_before = fs::read_to_string(&index).unwrap();

        let second = builder.build().unwrap();
        assert_eq!(second.result, WriteResult::Unchanged);
        assert_eq!(fs::metadata(&index).unwrap().modified().unwrap(), modified_before);
        assert_eq!(fs::read_to_string(&index).unwrap(), content_before);

        let mut lines = export_lines(&index);
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "export type { Shape } from './a.js';",
                "export { Store } from './sub/b.js';",
                "export { load } from './a.js';",
            ]
        );
    }

    #[test]
    fn test_source_change_triggers_rewrite() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export const A = 1;\n");

        let builder = IndexBuilder::new(root, "lib/index.ts").matcher(ts_except_index);
        builder.build().unwrap();

        write(root, "lib/b.ts", "export const B = 2;\n");
        let report = builder.build().unwrap();

        assert_eq!(report.result, WriteResult::Written);
        assert_eq!(
            report.lines,
            vec!["export { A } from './a.js';", "export { B } from './b.js';"]
        );
    }

    #[test]
    fn test_unsupported_declaration_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export const A = 1;\n");
        write(root, "lib/colors.ts", "export enum Color { Red, Green }\n");

        let result = build_index(root, "lib/index.ts", &[&ts_except_index], &IndexOptions::default());

        assert!(matches!(result, Err(IndexError::UnsupportedDeclaration { .. })));
        assert!(!root.join("lib/index.ts").exists());
    }

    #[test]
    fn test_failure_keeps_previous_index() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export const A = 1;\n");

        let builder = IndexBuilder::new(root, "lib/index.ts").matcher(ts_except_index);
        builder.build().unwrap();
        let before = fs::read_to_string(root.join("lib/index.ts")).unwrap();

        write(root, "lib/broken.ts", "export const = ;\n");
        let result = builder.build();

        assert!(matches!(result, Err(IndexError::Parse { .. })));
        assert_eq!(fs::read_to_string(root.join("lib/index.ts")).unwrap(), before);
    }

    #[test]
    fn test_files_outside_target_directory_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "lib/a.ts", "export const A = 1;\n");
        write(root, "other/b.ts", "export const B = 1;\n");

        let report = IndexBuilder::new(root, "lib/index.ts")
            .matcher(ts_except_index)
            .matcher(|_: &str| true)
            .build()
            .unwrap();

        assert_eq!(report.scanned, 1);
        assert_eq!(report.lines, vec!["export { A } from './a.js';"]);
    }

    #[test]
    fn test_target_at_root_and_custom_options() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "src/a.mts", "/** @private a */\nexport const a = 1;\nexport const b = 2;\n");

        let options = IndexOptions::default()
            .with_exclusion_tag("@private")
            .with_exclusion_scope(ExclusionScope::DocComment)
            .with_extensions("mts", "mjs");
        let report = IndexBuilder::new(root, "index.mts")
            .matcher(matchers::except("index.mts"))
            .options(options)
            .build()
            .unwrap();

        assert_eq!(report.lines, vec!["export { b } from './src/a.mjs';"]);
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = build_index(
            &temp_dir.path().join("missing"),
            "lib/index.ts",
            &[&ts_except_index],
            &IndexOptions::default(),
        );

        assert!(matches!(result, Err(IndexError::Io { .. })));
    }

    #[test]
    fn test_invalid_options_rejected_before_touching_disk() {
        let temp_dir = TempDir::new().unwrap();
        let options = IndexOptions::default().with_exclusion_tag("");

        let result = build_index(temp_dir.path(), "lib/index.ts", &[&ts_except_index], &options);

        assert!(matches!(result, Err(IndexError::InvalidOptions(_))));
        assert!(!temp_dir.path().join("lib").exists());
    }
}
