//! Manifest file access
//!
//! A manifest is a plain text file with one dependency specifier per
//! line. Lines are compared verbatim after whitespace trimming; lines
//! starting with `#` are comments. No specifier syntax is parsed.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RequpError, Result};

/// Default manifest file name, resolved against the current directory
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Handle to a manifest file on disk
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Resolve the manifest path, falling back to `requirements.txt`
    /// in the current working directory
    pub fn resolve(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the manifest's parent directory if it does not exist.
    ///
    /// Idempotent; a relative path with no directory component needs
    /// no preparation.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RequpError::DirCreateFailed {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// Read the set of entries already present in the manifest.
    ///
    /// Returns an empty set when the file does not exist. Lines are
    /// trimmed; empty lines and `#` comments are skipped.
    pub fn existing_entries(&self) -> Result<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| RequpError::ManifestReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    /// Append entries to the manifest, one newline-terminated line each.
    ///
    /// The file is created if absent and opened once for the whole batch.
    pub fn append_entries<'a, I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| RequpError::ManifestAppendFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        for entry in entries {
            writeln!(file, "{entry}").map_err(|e| RequpError::ManifestAppendFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_path() {
        let manifest = Manifest::resolve(None);
        assert_eq!(manifest.path(), Path::new("requirements.txt"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let manifest = Manifest::resolve(Some(PathBuf::from("./deps/requirements.txt")));
        assert_eq!(manifest.path(), Path::new("./deps/requirements.txt"));
    }

    #[test]
    fn test_existing_entries_missing_file() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::resolve(Some(temp.path().join("requirements.txt")));
        assert!(manifest.existing_entries().unwrap().is_empty());
    }

    #[test]
    fn test_existing_entries_skips_comments_and_blanks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        std::fs::write(&path, "requests\n# comment\n\n  flask  \n").unwrap();

        let manifest = Manifest::resolve(Some(path));
        let entries = manifest.existing_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("requests"));
        assert!(entries.contains("flask"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_ancestors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep/nested/requirements.txt");
        let manifest = Manifest::resolve(Some(path.clone()));

        manifest.ensure_parent_dir().unwrap();
        assert!(path.parent().unwrap().is_dir());

        // Second call is a no-op
        manifest.ensure_parent_dir().unwrap();
    }

    #[test]
    fn test_ensure_parent_dir_bare_filename() {
        let manifest = Manifest::resolve(None);
        assert!(manifest.ensure_parent_dir().is_ok());
    }

    #[test]
    fn test_append_entries_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        let manifest = Manifest::resolve(Some(path.clone()));

        manifest.append_entries(["flask", "requests"]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "flask\nrequests\n");
    }

    #[test]
    fn test_append_entries_preserves_existing_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        std::fs::write(&path, "requests\n# comment\n").unwrap();

        let manifest = Manifest::resolve(Some(path.clone()));
        manifest.append_entries(["flask"]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "requests\n# comment\nflask\n");
    }
}
