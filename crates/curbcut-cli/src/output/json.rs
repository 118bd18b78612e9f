//! JSON output formatter for violation display
//!
//! Provides structured JSON and NDJSON output formats for programmatic integration.

use crate::output::FileViolation;
use curbcut_core::checks::{CheckCategory, CheckRegistry};
use curbcut_core::violation::Impact;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub metadata: JsonMetadata,
    pub summary: JsonSummary,
    pub violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
pub struct JsonMetadata {
    pub curbcut_version: &'static str,
    pub working_directory: String,
    pub analyzed_path: String,
}

#[derive(Serialize)]
pub struct JsonSummary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_violations: usize,
    pub by_impact: ImpactCounts,
    pub by_category: CategoryCounts,
}

#[derive(Serialize)]
pub struct ImpactCounts {
    pub critical: usize,
    pub serious: usize,
    pub moderate: usize,
    pub minor: usize,
}

#[derive(Serialize)]
pub struct CategoryCounts {
    pub aria: usize,
    pub structure: usize,
}

#[derive(Serialize)]
pub struct JsonViolation {
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub impact: String,
    pub message: String,
    pub location: JsonLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<&'static str>,
}

#[derive(Serialize)]
pub struct JsonLocation {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum NdjsonRecord {
    #[serde(rename = "metadata")]
    Metadata(JsonMetadata),
    #[serde(rename = "violation")]
    Violation(JsonViolation),
    #[serde(rename = "summary")]
    Summary(JsonSummary),
}

pub struct JsonFormatter<'a> {
    registry: Option<&'a CheckRegistry>,
}

impl<'a> JsonFormatter<'a> {
    pub fn new() -> Self {
        Self { registry: None }
    }

    pub fn with_registry(registry: &'a CheckRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    pub fn format(
        &self,
        violations: &[FileViolation],
        total_files: usize,
        analyzed_path: &str,
    ) -> String {
        let output = self.build_output(violations, total_files, analyzed_path);
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_ndjson<W: Write>(
        &self,
        violations: &[FileViolation],
        total_files: usize,
        analyzed_path: &str,
        writer: &mut W,
    ) -> io::Result<()> {
        let metadata = self.build_metadata(analyzed_path);
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&NdjsonRecord::Metadata(metadata))?
        )?;

        for violation in violations {
            let record = self.convert_violation(violation);
            writeln!(
                writer,
                "{}",
                serde_json::to_string(&NdjsonRecord::Violation(record))?
            )?;
        }

        let summary = self.build_summary(violations, total_files);
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&NdjsonRecord::Summary(summary))?
        )?;

        Ok(())
    }

    fn build_output(
        &self,
        violations: &[FileViolation],
        total_files: usize,
        analyzed_path: &str,
    ) -> JsonOutput {
        JsonOutput {
            version: "1.0",
            metadata: self.build_metadata(analyzed_path),
            summary: self.build_summary(violations, total_files),
            violations: violations
                .iter()
                .map(|v| self.convert_violation(v))
                .collect(),
        }
    }

    fn build_metadata(&self, analyzed_path: &str) -> JsonMetadata {
        JsonMetadata {
            curbcut_version: env!("CARGO_PKG_VERSION"),
            working_directory: std::env::current_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            analyzed_path: analyzed_path.to_string(),
        }
    }

    fn build_summary(&self, violations: &[FileViolation], total_files: usize) -> JsonSummary {
        let mut by_impact = ImpactCounts {
            critical: 0,
            serious: 0,
            moderate: 0,
            minor: 0,
        };
        let mut by_category = CategoryCounts {
            aria: 0,
            structure: 0,
        };
        let mut files_with_issues: HashMap<&str, bool> = HashMap::new();

        for violation in violations {
            match violation.impact {
                Impact::Critical => by_impact.critical += 1,
                Impact::Serious => by_impact.serious += 1,
                Impact::Moderate => by_impact.moderate += 1,
                Impact::Minor => by_impact.minor += 1,
            }

            if let Some(category) = self.get_category(violation.rule_id) {
                match category {
                    CheckCategory::Aria => by_category.aria += 1,
                    CheckCategory::Structure => by_category.structure += 1,
                }
            }

            files_with_issues.insert(&violation.file, true);
        }

        JsonSummary {
            total_files,
            files_with_issues: files_with_issues.len(),
            total_violations: violations.len(),
            by_impact,
            by_category,
        }
    }

    fn convert_violation(&self, violation: &FileViolation) -> JsonViolation {
        let (check_name, category) = self.get_check_info(violation.rule_id);

        JsonViolation {
            rule_id: violation.rule_id.to_string(),
            check_name,
            category,
            impact: violation.impact.as_str().to_string(),
            message: violation.message.clone(),
            location: JsonLocation {
                file: violation.file.clone(),
                line: violation.line,
                column: violation.column,
            },
            help: violation.help.clone(),
            help_url: violation.help_url,
        }
    }

    fn get_check_info(&self, rule_id: &str) -> (Option<String>, Option<String>) {
        if let Some(registry) = self.registry {
            if let Some(check) = registry.check_for_rule(rule_id) {
                let metadata = check.metadata();
                let category = match metadata.category {
                    CheckCategory::Aria => "aria",
                    CheckCategory::Structure => "structure",
                };
                return (Some(metadata.name.to_string()), Some(category.to_string()));
            }
        }
        (None, None)
    }

    fn get_category(&self, rule_id: &str) -> Option<CheckCategory> {
        self.registry
            .and_then(|r| r.check_for_rule(rule_id))
            .map(|check| check.metadata().category)
    }
}

impl Default for JsonFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curbcut_core::engine::ValidationEngine;

    fn sample_violation() -> FileViolation {
        FileViolation {
            rule_id: "image-alt",
            impact: Impact::Critical,
            message: "Image has no text alternative".to_string(),
            file: "page.html".to_string(),
            line: 10,
            column: 3,
            help: Some("Add an alt attribute describing the image".to_string()),
            help_url: None,
        }
    }

    #[test]
    fn format_produces_valid_json() {
        let formatter = JsonFormatter::new();
        let violations = vec![sample_violation()];

        let output = formatter.format(&violations, 5, "./pages");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version"], "1.0");
        assert!(parsed["metadata"].is_object());
        assert!(parsed["summary"].is_object());
        assert!(parsed["violations"].is_array());
    }

    #[test]
    fn format_includes_metadata() {
        let formatter = JsonFormatter::new();
        let violations = vec![];

        let output = formatter.format(&violations, 10, "./site");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["metadata"]["curbcut_version"].is_string());
        assert_eq!(parsed["metadata"]["analyzed_path"], "./site");
    }

    #[test]
    fn format_includes_summary() {
        let formatter = JsonFormatter::new();
        let violations = vec![
            FileViolation {
                rule_id: "image-alt",
                impact: Impact::Critical,
                message: "Missing alt".to_string(),
                file: "a.html".to_string(),
                line: 1,
                column: 1,
                help: None,
                help_url: None,
            },
            FileViolation {
                rule_id: "heading-skipped-level",
                impact: Impact::Moderate,
                message: "Skipped level".to_string(),
                file: "a.html".to_string(),
                line: 2,
                column: 1,
                help: None,
                help_url: None,
            },
            FileViolation {
                rule_id: "link-name",
                impact: Impact::Serious,
                message: "Empty link".to_string(),
                file: "b.html".to_string(),
                line: 1,
                column: 1,
                help: None,
                help_url: None,
            },
        ];

        let output = formatter.format(&violations, 10, "./site");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["total_files"], 10);
        assert_eq!(parsed["summary"]["files_with_issues"], 2);
        assert_eq!(parsed["summary"]["total_violations"], 3);
        assert_eq!(parsed["summary"]["by_impact"]["critical"], 1);
        assert_eq!(parsed["summary"]["by_impact"]["serious"], 1);
        assert_eq!(parsed["summary"]["by_impact"]["moderate"], 1);
    }

    #[test]
    fn format_includes_violation_details() {
        let formatter = JsonFormatter::new();
        let violations = vec![sample_violation()];

        let output = formatter.format(&violations, 1, "./pages");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let violation = &parsed["violations"][0];
        assert_eq!(violation["rule_id"], "image-alt");
        assert_eq!(violation["impact"], "critical");
        assert_eq!(violation["message"], "Image has no text alternative");
        assert_eq!(violation["location"]["file"], "page.html");
        assert_eq!(violation["location"]["line"], 10);
        assert_eq!(violation["location"]["column"], 3);
        assert_eq!(
            violation["help"],
            "Add an alt attribute describing the image"
        );
    }

    #[test]
    fn registry_enrichment_adds_check_name_and_category() {
        let engine = ValidationEngine::new();
        let formatter = JsonFormatter::with_registry(engine.registry());
        let violations = vec![sample_violation()];

        let output = formatter.format(&violations, 1, "./pages");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let violation = &parsed["violations"][0];
        assert_eq!(violation["check_name"], "Images must have alternative text");
        assert_eq!(violation["category"], "structure");
        assert_eq!(parsed["summary"]["by_category"]["structure"], 1);
    }

    #[test]
    fn without_registry_enrichment_fields_are_omitted() {
        let formatter = JsonFormatter::new();
        let violations = vec![sample_violation()];

        let output = formatter.format(&violations, 1, "./pages");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let violation = &parsed["violations"][0];
        assert!(violation.get("check_name").is_none());
        assert!(violation.get("category").is_none());
    }

    #[test]
    fn ndjson_format_produces_lines() {
        let formatter = JsonFormatter::new();
        let violations = vec![sample_violation()];
        let mut output = Vec::new();

        formatter
            .format_ndjson(&violations, 5, "./pages", &mut output)
            .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(lines.len(), 3);

        let metadata: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(metadata["type"], "metadata");

        let violation: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(violation["type"], "violation");

        let summary: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(summary["type"], "summary");
    }

    #[test]
    fn empty_violations_produces_valid_output() {
        let formatter = JsonFormatter::new();
        let violations: Vec<FileViolation> = vec![];

        let output = formatter.format(&violations, 0, ".");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["total_violations"], 0);
        assert!(parsed["violations"].as_array().unwrap().is_empty());
    }
}
