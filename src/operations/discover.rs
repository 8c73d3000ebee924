// Member Discovery
// Finds member files (models, diagrams, to-do lists) under a project directory

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::MemberKind;
use crate::utilities::PatternMatcher;

/// A member file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredMember {
    /// File name, used as the raw member name
    pub file_name: String,
    pub kind: MemberKind,
    /// Full path to the file
    pub path: PathBuf,
}

/// Walks a project directory looking for member files
#[derive(Debug, Clone, Default)]
pub struct MemberScanner {
    excludes: PatternMatcher,
}

impl MemberScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exclude patterns
    pub fn with_excludes<I: IntoIterator<Item = String>>(mut self, patterns: I) -> Self {
        self.excludes.extend(patterns);
        self
    }

    /// Scan `root` for files whose extension matches a built-in member kind.
    ///
    /// Excludes are matched against paths relative to `root`. Results are
    /// sorted by path.
    pub fn scan(&self, root: &Path) -> Result<Vec<DiscoveredMember>> {
        let mut found = Vec::new();

        if !root.exists() {
            log::warn!("Project directory does not exist: {}", root.display());
            return Ok(found);
        }

        let walker = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                let relative = e.path().strip_prefix(root).unwrap_or(e.path());
                !self.excludes.should_exclude(relative)
            });

        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(kind) = MemberKind::from_path(path) else {
                continue;
            };
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("Skipping member file with non UTF-8 name: {}", path.display());
                continue;
            };

            log::debug!("Found {} member {}", kind, path.display());
            found.push(DiscoveredMember {
                file_name: file_name.to_string(),
                kind,
                path: path.to_path_buf(),
            });
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<x/>\n").unwrap();
    }

    #[test]
    fn test_scan_finds_member_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "P.xmi");
        touch(&dir, "diagrams/P_class.pgml");
        touch(&dir, "diagrams/notes.txt");
        touch(&dir, "P.todo");

        let found = MemberScanner::new().scan(dir.path()).unwrap();
        let names: Vec<&str> = found.iter().map(|m| m.file_name.as_str()).collect();

        assert_eq!(names, vec!["P.todo", "P.xmi", "P_class.pgml"]);
        assert_eq!(found[0].kind, MemberKind::TodoList);
        assert_eq!(found[2].kind, MemberKind::Diagram);
        assert_eq!(found[2].path, dir.path().join("diagrams/P_class.pgml"));
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "P.xmi");
        touch(&dir, "target/P.xmi");
        touch(&dir, "drafts_old/P_a.pgml");

        let found = MemberScanner::new()
            .with_excludes(vec!["target".to_string(), "drafts*".to_string()])
            .scan(dir.path())
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, dir.path().join("P.xmi"));
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let found = MemberScanner::new().scan(&dir.path().join("nope")).unwrap();
        assert!(found.is_empty());
    }
}
