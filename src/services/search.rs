//! Recursive free-text search over the asset tree.
//!
//! Walks the root directory, considers only files with searchable text
//! extensions, and matches the query case-insensitively against both the
//! file path and individual lines. Files that cannot be opened or are not
//! valid UTF-8 are silently skipped. Results follow traversal order.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::SEARCH_EXTENSIONS;

/// Caps applied while scanning.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum line hits reported per matched file.
    pub max_hits_per_file: usize,
    /// Stop scanning once this many files have matched.
    pub max_files: usize,
}

/// A single matched line within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    /// 1-based line number.
    pub line_number: usize,
    /// Raw line content.
    pub content: String,
}

/// A matched file with its collected line hits.
///
/// A file whose path matches the query counts as matched even when no
/// line hits were found, so `hits` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// Path of the matched file.
    pub path: PathBuf,
    /// Up to `max_hits_per_file` line hits.
    pub hits: Vec<LineHit>,
}

/// Outcome of a scan: the matched files plus whether the file cap cut
/// the walk short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Matched files in traversal order.
    pub matches: Vec<FileMatch>,
    /// True when scanning stopped at the file cap; remaining files were
    /// never examined, so the results may be incomplete.
    pub truncated: bool,
}

/// Scans `root` for files whose path or content contains `query`.
///
/// The comparison is case-insensitive on both sides. Path matching uses
/// the path relative to `root`, so the location of the root itself never
/// influences results.
#[must_use]
pub fn search_assets(root: &Path, query: &str, limits: SearchLimits) -> SearchResults {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    let mut truncated = false;

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if matches.len() >= limits.max_files {
            truncated = true;
            break;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_searchable_extension(path) {
            continue;
        }
        // Unreadable or non-UTF-8 files are not searchable text
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };

        let relative = path.strip_prefix(root).unwrap_or(path);
        let path_matched = relative.to_string_lossy().to_lowercase().contains(&needle);

        let mut hits = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if hits.len() >= limits.max_hits_per_file {
                break;
            }
            if line.to_lowercase().contains(&needle) {
                hits.push(LineHit {
                    line_number: index + 1,
                    content: line.to_string(),
                });
            }
        }

        if path_matched || !hits.is_empty() {
            matches.push(FileMatch {
                path: path.to_path_buf(),
                hits,
            });
        }
    }

    SearchResults { matches, truncated }
}

/// Whether the file carries one of the searchable text extensions.
fn has_searchable_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SEARCH_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LIMITS: SearchLimits = SearchLimits {
        max_hits_per_file: 5,
        max_files: 10,
    };

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_line_hit_with_line_number() {
        let dir = TempDir::new().unwrap();
        write(&dir, "notes.md", "intro\nsecond\nBorder token guidance\n");

        let results = search_assets(dir.path(), "border", LIMITS);
        assert_eq!(results.matches.len(), 1);
        assert_eq!(results.matches[0].hits.len(), 1);
        assert_eq!(results.matches[0].hits[0].line_number, 3);
        assert_eq!(results.matches[0].hits[0].content, "Border token guidance");
    }

    #[test]
    fn test_case_insensitive_both_sides() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "UPPER CASE HIT\n");

        let results = search_assets(dir.path(), "case hit", LIMITS);
        assert_eq!(results.matches.len(), 1);
    }

    #[test]
    fn test_path_match_without_line_hits() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tokens/border-styles.md", "nothing relevant here\n");

        let results = search_assets(dir.path(), "border", LIMITS);
        assert_eq!(results.matches.len(), 1);
        assert!(results.matches[0].hits.is_empty());
    }

    #[test]
    fn test_root_location_does_not_match() {
        // A query occurring in the root's own absolute path must not turn
        // every file under it into a path match.
        let dir = TempDir::new().unwrap();
        write(&dir, "notes.md", "nothing relevant here\n");

        let root_name = dir
            .path()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(search_assets(dir.path(), &root_name, LIMITS).matches.is_empty());
        assert!(search_assets(dir.path(), "tmp", LIMITS).matches.is_empty());
    }

    #[test]
    fn test_extension_filter() {
        let dir = TempDir::new().unwrap();
        write(&dir, "skip.rs", "border\n");
        write(&dir, "keep.json", "border\n");

        let results = search_assets(dir.path(), "border", LIMITS);
        assert_eq!(results.matches.len(), 1);
        assert!(results.matches[0].path.ends_with("keep.json"));
    }

    #[test]
    fn test_max_hits_per_file_cap() {
        let dir = TempDir::new().unwrap();
        write(&dir, "many.txt", &"border\n".repeat(20));

        let limits = SearchLimits {
            max_hits_per_file: 3,
            max_files: 10,
        };
        let results = search_assets(dir.path(), "border", limits);
        assert_eq!(results.matches[0].hits.len(), 3);
    }

    #[test]
    fn test_max_files_cap_reports_truncation() {
        let dir = TempDir::new().unwrap();
        for i in 0..6 {
            write(&dir, &format!("f{i}.txt"), "border\n");
        }

        let limits = SearchLimits {
            max_hits_per_file: 5,
            max_files: 2,
        };
        let results = search_assets(dir.path(), "border", limits);
        assert_eq!(results.matches.len(), 2);
        assert!(results.truncated);
    }

    #[test]
    fn test_under_cap_not_truncated() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "border\n");

        let results = search_assets(dir.path(), "border", LIMITS);
        assert_eq!(results.matches.len(), 1);
        assert!(!results.truncated);
    }

    #[test]
    fn test_non_utf8_file_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("binary.txt"), [0xFF, 0xFE, 0x00, 0x62]).unwrap();
        write(&dir, "ok.txt", "border\n");

        let results = search_assets(dir.path(), "border", LIMITS);
        assert_eq!(results.matches.len(), 1);
        assert!(results.matches[0].path.ends_with("ok.txt"));
    }

    #[test]
    fn test_no_matches() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "nothing\n");

        let results = search_assets(dir.path(), "zzz-not-there", LIMITS);
        assert!(results.matches.is_empty());
        assert!(!results.truncated);
    }
}
