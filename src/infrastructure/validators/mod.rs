//! File name validators

pub mod document_name;

pub use document_name::{DocumentName, DocumentNameValidator, LintOutcome, LintReport};
