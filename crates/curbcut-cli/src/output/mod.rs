//! Output formatters for validation results
//!
//! The core engine reports violations against node ids, which mean nothing
//! outside the document they came from. The check command resolves each
//! violation into a [`FileViolation`] with a path and source position, and
//! the formatters here consume those.

use curbcut_core::tree::Document;
use curbcut_core::violation::{Impact, Violation};

pub mod json;
pub mod pretty;
pub mod sarif;

/// A violation resolved against the file it was found in.
#[derive(Debug, Clone)]
pub struct FileViolation {
    pub rule_id: &'static str,
    pub impact: Impact,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub help: Option<String>,
    pub help_url: Option<&'static str>,
}

impl FileViolation {
    /// Elements synthesized during parsing carry no span; those resolve to
    /// line 1, column 1.
    pub fn resolve(violation: &Violation, doc: &Document, file: &str) -> Self {
        let span = doc.span(violation.node);
        Self {
            rule_id: violation.rule_id,
            impact: violation.impact,
            message: violation.message.clone(),
            file: file.to_string(),
            line: span.map(|s| s.line).unwrap_or(1),
            column: span.map(|s| s.column).unwrap_or(1),
            help: violation.help.clone(),
            help_url: violation.help_url,
        }
    }
}
