//! Deterministic module discovery under an output file's directory.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use globwalk::{FileType, GlobWalkerBuilder};

/// Leading character that marks a file as private to its directory; such
/// files never appear in a generated class.
pub const PRIVATE_MARKER: char = '_';

/// The directory an output path is scanned from (its parent, or `.`).
pub(crate) fn scan_root(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Discover module files under the output file's directory.
///
/// Extensions select `**/*.{ext}` patterns (or everything when empty);
/// private-marker files, configured ignore globs, and the output file itself
/// are excluded. Results are sorted so downstream processing never depends
/// on walk order.
pub fn discover(output: &Path, extensions: &[String], ignores: &[String]) -> Result<Vec<PathBuf>> {
    let base = scan_root(output);

    let mut patterns: Vec<String> = if extensions.is_empty() {
        vec!["**/*".to_string()]
    } else {
        extensions
            .iter()
            .map(|ext| format!("**/*.{ext}"))
            .collect()
    };
    patterns.push(format!("!**/{PRIVATE_MARKER}*"));
    patterns.extend(ignores.iter().map(|pattern| format!("!{pattern}")));

    let walker = GlobWalkerBuilder::from_patterns(&base, &patterns)
        .file_type(FileType::FILE)
        .build()
        .wrap_err_with(|| format!("invalid discovery patterns for '{}'", output.display()))?;

    let self_path = output.file_name().map(|name| base.join(name));

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| Some(path.as_path()) != self_path.as_deref())
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn test_discovers_matching_extensions_recursively() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        touch(&root.join("userService.ts"));
        touch(&root.join("services/admin/roleService.ts"));
        touch(&root.join("notes.md"));

        let files = discover(
            &root.join("index.ts"),
            &["ts".to_string()],
            &[],
        )
        .unwrap();

        assert_eq!(
            files,
            vec![
                root.join("services/admin/roleService.ts"),
                root.join("userService.ts"),
            ]
        );
    }

    #[test]
    fn test_empty_extensions_include_everything() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        touch(&root.join("a.ts"));
        touch(&root.join("b.md"));

        let files = discover(&root.join("index.ts"), &[], &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_private_marker_files_are_excluded() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        touch(&root.join("_internal.ts"));
        touch(&root.join("nested/_helper.ts"));
        touch(&root.join("nested/service.ts"));

        let files = discover(&root.join("index.ts"), &["ts".to_string()], &[]).unwrap();
        assert_eq!(files, vec![root.join("nested/service.ts")]);
    }

    #[test]
    fn test_ignore_patterns_are_excluded() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        touch(&root.join("keep.ts"));
        touch(&root.join("legacy/old.ts"));

        let files = discover(
            &root.join("index.ts"),
            &["ts".to_string()],
            &["legacy/**".to_string()],
        )
        .unwrap();

        assert_eq!(files, vec![root.join("keep.ts")]);
    }

    #[test]
    fn test_output_file_is_excluded_from_its_own_scan() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        let output = root.join("index.ts");
        touch(&output);
        touch(&root.join("service.ts"));

        let files = discover(&output, &["ts".to_string()], &[]).unwrap();
        assert_eq!(files, vec![root.join("service.ts")]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let files = discover(
            &temp.path().join("absent/index.ts"),
            &["ts".to_string()],
            &[],
        )
        .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_results_are_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        touch(&root.join("zeta.ts"));
        touch(&root.join("alpha.ts"));
        touch(&root.join("midway.ts"));

        let files = discover(&root.join("index.ts"), &["ts".to_string()], &[]).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
