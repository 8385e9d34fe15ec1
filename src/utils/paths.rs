// Path Conversion Utilities
//
// Discovery hands out native paths; everything downstream (predicates, FileExports,
// emitted import specifiers) works on relative Unix-style paths.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::IndexError;

/// Replace Windows separators with `/`
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Convert a path under `base` to a relative Unix-style path (with `/` separators)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use index_builder::utils::paths::to_relative_unix_style;
///
/// let relative = to_relative_unix_style(
///     Path::new("/home/dev/project/lib/a.ts"),
///     Path::new("/home/dev/project"),
/// ).unwrap();
/// assert_eq!(relative, "lib/a.ts");
/// ```
pub fn to_relative_unix_style(path: &Path, base: &Path) -> Result<String, IndexError> {
    let relative = path.strip_prefix(base).map_err(|_| {
        IndexError::Discovery(format!(
            "File path '{}' is not within root '{}'",
            path.display(),
            base.display()
        ))
    })?;

    let path_str = relative.to_str().ok_or_else(|| {
        IndexError::Discovery(format!(
            "File path '{}' is not valid UTF-8",
            path.display()
        ))
    })?;

    // On Unix, MAIN_SEPARATOR is already '/', so this is a no-op
    Ok(if MAIN_SEPARATOR == '\\' {
        normalize_separators(path_str)
    } else {
        path_str.to_string()
    })
}

/// Resolve the build root to an absolute, symlink-free path
///
/// Canonicalized Windows paths get a `\\?\` prefix that glob patterns and
/// `strip_prefix` comparisons do not expect, so it is removed again.
pub fn canonical_root(root: &Path) -> Result<PathBuf, IndexError> {
    let canonical = root.canonicalize().map_err(|e| IndexError::io(root, e))?;
    Ok(strip_unc_prefix(&canonical))
}

#[cfg(windows)]
fn strip_unc_prefix(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    match path_str.strip_prefix(r"\\?\") {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}

#[cfg(not(windows))]
fn strip_unc_prefix(path: &Path) -> PathBuf {
    path.to_path_buf()
}

/// Swap a trailing `.{from}` extension for `.{to}`
///
/// Paths without the extension are returned unchanged.
pub fn rewrite_extension(path: &str, from: &str, to: &str) -> String {
    match path.strip_suffix(from) {
        Some(stem) if stem.ends_with('.') => format!("{}{}", stem, to),
        _ => path.to_string(),
    }
}

/// Make a root-relative path relative to `dir` (also root-relative)
///
/// The leading `dir` segment collapses into `.`, so `lib/sub/a.js` under
/// `lib` becomes `./sub/a.js`. An empty `dir` means the root itself.
pub fn relative_to_dir(path: &str, dir: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        return format!("./{}", path.trim_start_matches("./"));
    }

    match path.strip_prefix(dir) {
        Some(rest) if rest.starts_with('/') => format!(".{}", rest),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_absolute_to_relative() {
        let root = PathBuf::from("/home/dev/project");
        let absolute = PathBuf::from("/home/dev/project/lib/sub/a.ts");

        let result = to_relative_unix_style(&absolute, &root).unwrap();

        assert_eq!(result, "lib/sub/a.ts");
    }

    #[test]
    fn test_file_outside_root_rejected() {
        let root = PathBuf::from("/home/dev/project");
        let outside = PathBuf::from("/etc/passwd");

        let result = to_relative_unix_style(&outside, &root);

        assert!(result.is_err(), "Should reject files outside root");
        assert!(result.unwrap_err().to_string().contains("not within root"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = PathBuf::from("/home/dev/project");
        let absolute = root.join("lib").join(OsStr::from_bytes(b"bad\xff.ts"));

        let result = to_relative_unix_style(&absolute, &root);

        match result {
            Err(IndexError::Discovery(message)) => assert!(message.contains("not valid UTF-8")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_windows_separators() {
        assert_eq!(normalize_separators(r"lib\sub\a.ts"), "lib/sub/a.ts");
        assert_eq!(normalize_separators("lib/sub/a.ts"), "lib/sub/a.ts");
    }

    #[test]
    fn test_rewrite_extension_only_touches_suffix() {
        assert_eq!(rewrite_extension("lib/a.ts", "ts", "js"), "lib/a.js");
        assert_eq!(rewrite_extension("lib/types.d.ts", "ts", "js"), "lib/types.d.js");
        assert_eq!(rewrite_extension("lib/tsconfig.json", "ts", "js"), "lib/tsconfig.json");
        // "ts" must be a whole extension, not the tail of one
        assert_eq!(rewrite_extension("lib/a.mts", "ts", "js"), "lib/a.mts");
    }

    #[test]
    fn test_relative_to_dir() {
        assert_eq!(relative_to_dir("lib/sub/a.js", "lib"), "./sub/a.js");
        assert_eq!(relative_to_dir("lib/a.js", "lib/"), "./a.js");
        assert_eq!(relative_to_dir("a.js", ""), "./a.js");
        // A directory that merely shares a prefix is not the target directory
        assert_eq!(relative_to_dir("library/a.js", "lib"), "library/a.js");
    }
}
