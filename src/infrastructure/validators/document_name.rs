//! Canonical document-name validation.
//!
//! A valid name looks like `XYZ-12-345-6789-REP-001-v2.5.pdf`: a part
//! number (`XYZ-12-345-6789`), a document type of 2-6 capitals, an optional
//! three-digit sequence, a version (`vX.Y`, or `rNN` from r01 to r99) and a
//! short lowercase extension. Only the base name of a path is checked.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

const DOCUMENT_NAME_PATTERN: &str = concat!(
    r"^(?P<npn>[A-Z0-9]{2,5}-[0-9]{2}-[0-9]{3}-[0-9]{4})-",
    r"(?P<doc_type>[A-Z]{2,6})",
    r"(?:-(?P<seq>[0-9]{3}))?",
    r"-(?P<version>v[0-9]+\.[0-9]+|r[0-9][1-9]|r[1-9][0-9])\.",
    r"(?P<ext>[a-z0-9]{1,5})$",
);

/// Components of a valid document name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentName {
    pub npn: String,
    pub doc_type: String,
    pub sequence: Option<String>,
    pub version: String,
    pub extension: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LintOutcome {
    Ok,
    Invalid,
}

/// Result of checking one file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Base name that was checked
    pub name: String,
    pub outcome: LintOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<DocumentName>,
}

impl LintReport {
    pub const fn is_ok(&self) -> bool {
        matches!(self.outcome, LintOutcome::Ok)
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            LintOutcome::Ok => write!(f, "✔ {} : OK", self.name),
            LintOutcome::Invalid => write!(f, "✖ {} : INVALID", self.name),
        }
    }
}

/// Validates file names against the canonical pattern.
#[derive(Debug, Clone)]
pub struct DocumentNameValidator {
    pattern: Regex,
}

impl DocumentNameValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(DOCUMENT_NAME_PATTERN)?,
        })
    }

    /// Parse a bare file name, `None` if it does not match.
    pub fn parse(&self, name: &str) -> Option<DocumentName> {
        let caps = self.pattern.captures(name)?;
        let group = |key: &str| caps.name(key).map(|m| m.as_str().to_string());
        Some(DocumentName {
            npn: group("npn")?,
            doc_type: group("doc_type")?,
            sequence: group("seq"),
            version: group("version")?,
            extension: group("ext")?,
        })
    }

    /// Check the base name of `path`.
    pub fn check(&self, path: impl AsRef<Path>) -> LintReport {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
            .into_owned();
        let parsed = self.parse(&name);
        LintReport {
            outcome: if parsed.is_some() {
                LintOutcome::Ok
            } else {
                LintOutcome::Invalid
            },
            name,
            parsed,
        }
    }

    /// Check every path, preserving order.
    pub fn check_all<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<LintReport> {
        paths.iter().map(|path| self.check(path)).collect()
    }
}
