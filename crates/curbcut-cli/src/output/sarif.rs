//! SARIF output formatter for GitHub Code Scanning
//!
//! Provides SARIF 2.1.0 output format for integration with GitHub Code Scanning
//! and other analysis tools that support the SARIF standard.

use crate::output::FileViolation;
use curbcut_core::checks::{CheckCategory, CheckRegistry};
use curbcut_core::violation::Impact;
use serde::Serialize;
use std::collections::BTreeSet;

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://json.schemastore.org/sarif-2.1.0.json";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifOutput {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub version: &'static str,
    pub runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<SarifArtifact>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifDriver {
    pub name: &'static str,
    pub semantic_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_uri: Option<&'static str>,
    pub rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub short_description: SarifMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<SarifMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<SarifMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
    pub default_configuration: SarifRuleConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SarifRuleProperties>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRuleConfiguration {
    pub level: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRuleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
    pub partial_fingerprints: SarifPartialFingerprints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SarifResultProperties>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifArtifactLocation {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_base_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: usize,
    pub start_column: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPartialFingerprints {
    #[serde(rename = "primaryLocationLineHash")]
    pub primary_location_line_hash: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifArtifact {
    pub location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResultProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

pub struct SarifFormatter<'a> {
    registry: Option<&'a CheckRegistry>,
}

impl<'a> SarifFormatter<'a> {
    pub fn new() -> Self {
        Self { registry: None }
    }

    pub fn with_registry(registry: &'a CheckRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    pub fn format(&self, violations: &[FileViolation]) -> String {
        let output = self.build_output(violations);
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn build_output(&self, violations: &[FileViolation]) -> SarifOutput {
        let rule_ids: BTreeSet<&str> = violations.iter().map(|v| v.rule_id).collect();
        let rules = rule_ids.iter().map(|&id| self.build_rule(id)).collect();
        let results = violations.iter().map(|v| self.convert_result(v)).collect();
        let artifacts = build_artifacts(violations);

        SarifOutput {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "Curbcut",
                        semantic_version: env!("CARGO_PKG_VERSION"),
                        information_uri: Some("https://github.com/kzn-tools/curbcut"),
                        rules,
                    },
                },
                results,
                artifacts,
            }],
        }
    }

    fn build_rule(&self, rule_id: &str) -> SarifRule {
        if let Some(registry) = self.registry {
            if let Some(check) = registry.check_for_rule(rule_id) {
                let metadata = check.metadata();
                let tags = match metadata.category {
                    CheckCategory::Aria => {
                        vec!["accessibility".to_string(), "aria".to_string()]
                    }
                    CheckCategory::Structure => {
                        vec!["accessibility".to_string(), "structure".to_string()]
                    }
                };

                return SarifRule {
                    id: rule_id.to_string(),
                    name: Some(metadata.name.to_string()),
                    short_description: SarifMessage {
                        text: metadata.name.to_string(),
                    },
                    full_description: Some(SarifMessage {
                        text: metadata.description.to_string(),
                    }),
                    help: Some(SarifMessage {
                        text: metadata.description.to_string(),
                    }),
                    help_uri: metadata.help_url.map(|u| u.to_string()),
                    default_configuration: SarifRuleConfiguration {
                        level: impact_to_level(metadata.impact),
                    },
                    properties: Some(SarifRuleProperties {
                        precision: Some("high".to_string()),
                        tags,
                    }),
                };
            }
        }

        SarifRule {
            id: rule_id.to_string(),
            name: None,
            short_description: SarifMessage {
                text: rule_id.to_string(),
            },
            full_description: None,
            help: None,
            help_uri: None,
            default_configuration: SarifRuleConfiguration {
                level: "warning".to_string(),
            },
            properties: None,
        }
    }

    fn convert_result(&self, violation: &FileViolation) -> SarifResult {
        let locations = vec![SarifLocation {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: normalize_path(&violation.file),
                    uri_base_id: Some("%SRCROOT%".to_string()),
                },
                region: SarifRegion {
                    start_line: violation.line,
                    start_column: violation.column,
                },
            },
        }];

        let fingerprint = generate_fingerprint(violation.rule_id, &violation.file, violation.line);

        let properties = violation.help.as_ref().map(|help| SarifResultProperties {
            help: Some(help.clone()),
        });

        SarifResult {
            rule_id: violation.rule_id.to_string(),
            level: impact_to_level(violation.impact),
            message: SarifMessage {
                text: violation.message.clone(),
            },
            locations,
            partial_fingerprints: SarifPartialFingerprints {
                primary_location_line_hash: fingerprint,
            },
            properties,
        }
    }
}

impl Default for SarifFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_artifacts(violations: &[FileViolation]) -> Vec<SarifArtifact> {
    let files: BTreeSet<&str> = violations.iter().map(|v| v.file.as_str()).collect();
    files
        .into_iter()
        .map(|file| SarifArtifact {
            location: SarifArtifactLocation {
                uri: normalize_path(file),
                uri_base_id: Some("%SRCROOT%".to_string()),
            },
        })
        .collect()
}

fn impact_to_level(impact: Impact) -> String {
    match impact {
        Impact::Critical | Impact::Serious => "error",
        Impact::Moderate => "warning",
        Impact::Minor => "note",
    }
    .to_string()
}

fn normalize_path(path: &str) -> String {
    path.trim_start_matches("./").to_string()
}

fn generate_fingerprint(rule_id: &str, file: &str, line: usize) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    rule_id.hash(&mut hasher);
    file.hash(&mut hasher);
    line.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}
