//! YAML front-matter insertion for markdown documents.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontMatterOutcome {
    Inserted,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatterReport {
    pub path: PathBuf,
    pub outcome: FrontMatterOutcome,
}

/// Whether `content` already opens with a front-matter fence.
pub fn has_front_matter(content: &str) -> bool {
    content.trim_start().starts_with("---")
}

/// Render the metadata template for `date`.
pub fn render_template(date: NaiveDate) -> String {
    format!(
        "---\n\
         title: [Document Title]\n\
         version: 1.0\n\
         date: {}\n\
         authors: [Your Name, Team]\n\
         reviewers: [Reviewer Name, Board]\n\
         infoCode: [DOC-CODE]\n\
         status: DRAFT\n\
         extensions: []\n\
         ---\n",
        date.format("%Y-%m-%d")
    )
}

/// Prepends the metadata template to documents that lack one.
#[derive(Debug, Clone, Copy)]
pub struct FrontMatterInserter {
    date: NaiveDate,
}

impl Default for FrontMatterInserter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontMatterInserter {
    /// Inserter stamping today's local date.
    pub fn new() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub const fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Template plus a blank line, then the original content.
    ///
    /// Returns `None` when the content already has front matter.
    pub fn apply(&self, content: &str) -> Option<String> {
        if has_front_matter(content) {
            return None;
        }
        Some(format!("{}\n{content}", render_template(self.date)))
    }

    /// Rewrite the file in place if it lacks front matter.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<FrontMatterReport, FrontMatterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FrontMatterError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let outcome = match self.apply(&content) {
            Some(updated) => {
                fs::write(path, updated).map_err(|source| FrontMatterError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
                FrontMatterOutcome::Inserted
            }
            None => FrontMatterOutcome::AlreadyPresent,
        };

        debug!(path = %path.display(), ?outcome, "Front matter checked");
        Ok(FrontMatterReport {
            path: path.to_path_buf(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inserter() -> FrontMatterInserter {
        FrontMatterInserter::for_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn test_detects_existing_front_matter() {
        assert!(has_front_matter("---\ntitle: x\n---\nbody"));
        assert!(has_front_matter("\n\n  ---\ntitle: x\n---\n"));
        assert!(!has_front_matter("# Heading\n---\n"));
        assert!(!has_front_matter(""));
    }

    #[test]
    fn test_apply_prepends_template_and_blank_line() {
        let updated = inserter().apply("# Heading\n").unwrap();
        assert!(updated.starts_with("---\ntitle: [Document Title]\nversion: 1.0\ndate: 2024-03-15\n"));
        assert!(updated.ends_with("extensions: []\n---\n\n# Heading\n"));
    }

    #[test]
    fn test_apply_leaves_existing_front_matter() {
        assert!(inserter().apply("---\ntitle: kept\n---\n").is_none());
    }

    #[test]
    fn test_process_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "Body text\n").unwrap();

        let first = inserter().process_file(&path).unwrap();
        assert_eq!(first.outcome, FrontMatterOutcome::Inserted);
        let after_first = fs::read_to_string(&path).unwrap();

        let second = inserter().process_file(&path).unwrap();
        assert_eq!(second.outcome, FrontMatterOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = inserter().process_file("/nonexistent/notes.md");
        assert!(matches!(result, Err(FrontMatterError::Read { .. })));
    }
}
