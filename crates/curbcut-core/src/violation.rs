//! Violation reporting for validation results
//!
//! Violations are plain data. A check that finds a problem describes it and
//! moves on; nothing in the engine turns a finding into an error.

use crate::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How badly a violation degrades the experience of assistive-technology
/// users, from blocking (`Critical`) down to polish (`Minor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl Impact {
    pub fn level(&self) -> u8 {
        match self {
            Impact::Critical => 4,
            Impact::Serious => 3,
            Impact::Moderate => 2,
            Impact::Minor => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in the document.
///
/// `rule_id` is stable across releases; tooling may key suppressions and
/// dashboards on it. `node` identifies the offending element in the
/// document that was validated and is meaningless against any other tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule_id: &'static str,
    pub impact: Impact,
    pub message: String,
    pub node: NodeId,
    pub help: Option<String>,
    pub help_url: Option<&'static str>,
}

impl Violation {
    pub fn new(
        rule_id: &'static str,
        impact: Impact,
        message: impl Into<String>,
        node: NodeId,
    ) -> Self {
        Self {
            rule_id,
            impact,
            message: message.into(),
            node,
            help: None,
            help_url: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_help_url(mut self, url: &'static str) -> Self {
        self.help_url = Some(url);
        self
    }
}
