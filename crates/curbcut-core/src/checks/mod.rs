//! Check system for accessibility validation
//!
//! Provides ARIA and structural checks for analyzing semantic element trees.

pub mod aria_idref;
pub mod aria_props;
pub mod aria_role;
pub mod button_name;
pub mod details_summary;
pub mod dialog_modal;
pub mod fieldset_legend;
pub mod form_label;
pub mod heading_order;
pub mod helpers;
pub mod iframe_title;
pub mod image_alt;
pub mod landmarks;
pub mod link_text;
pub mod media_captions;
pub mod table_structure;

pub use aria_idref::AriaIdRefs;
pub use aria_props::AriaProperties;
pub use aria_role::AriaRole;
pub use button_name::ButtonName;
pub use details_summary::DetailsSummary;
pub use dialog_modal::DialogModal;
pub use fieldset_legend::FieldsetLegend;
pub use form_label::FormFieldLabel;
pub use heading_order::HeadingOrder;
pub use iframe_title::IframeTitle;
pub use image_alt::ImageAltText;
pub use landmarks::LandmarkStructure;
pub use link_text::LinkName;
pub use media_captions::MediaCaptions;
pub use table_structure::TableStructure;

use crate::config::{ChecksConfig, ConfigError};
use crate::idrefs::IdRegistry;
use crate::name::{resolve_name, AccessibleName};
use crate::tree::{Document, NodeId};
use crate::violation::{Impact, Violation};
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    Aria,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CheckCategory,
    pub impact: Impact,
    /// Violation ids this check can report.
    pub rules: &'static [&'static str],
    pub help_url: Option<&'static str>,
}

pub trait Check: Send + Sync {
    fn metadata(&self) -> &CheckMetadata;
    fn run(&self, ctx: &CheckContext) -> Vec<Violation>;
}

/// Everything a check may consult while scanning one document.
pub struct CheckContext<'a> {
    pub doc: &'a Document,
    pub ids: &'a IdRegistry,
    pub settings: &'a CheckSettings,
}

impl<'a> CheckContext<'a> {
    pub fn new(doc: &'a Document, ids: &'a IdRegistry, settings: &'a CheckSettings) -> Self {
        Self { doc, ids, settings }
    }

    /// Accessible name of an element, resolved against this document.
    pub fn name(&self, id: NodeId) -> AccessibleName {
        resolve_name(self.doc, self.ids, id)
    }
}

/// Link text that conveys nothing out of context.
pub const DEFAULT_GENERIC_LINK_WORDS: &[&str] =
    &["click here", "here", "more", "read more", "learn more", "link"];

/// Tunable options shared by the battery, resolved from configuration.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Attribute names that mark an image decorative in addition to `alt=""`.
    pub decorative_markers: Vec<String>,
    /// Lowercased phrases flagged as generic link text.
    pub generic_link_words: Vec<String>,
    /// Link names matching any of these patterns are never flagged generic.
    pub link_text_allowlist: Vec<Regex>,
    /// Extra heading levels a document may skip downward without a violation.
    pub heading_max_skip: u32,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            decorative_markers: Vec::new(),
            generic_link_words: DEFAULT_GENERIC_LINK_WORDS
                .iter()
                .map(|word| (*word).to_string())
                .collect(),
            link_text_allowlist: Vec::new(),
            heading_max_skip: 0,
        }
    }
}

impl CheckSettings {
    pub fn from_config(config: &ChecksConfig) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        settings
            .decorative_markers
            .extend(config.image_alt.markers.iter().map(|m| m.to_lowercase()));
        settings
            .generic_link_words
            .extend(config.link_text.words.iter().map(|w| w.to_lowercase()));
        for pattern in &config.link_text.allowlist {
            let regex = Regex::new(pattern).map_err(|err| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;
            settings.link_text_allowlist.push(regex);
        }
        if let Some(max_skip) = config.heading_order.max_skip {
            settings.heading_max_skip = max_skip;
        }

        Ok(settings)
    }
}

pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
    disabled: HashSet<String>,
    impact_overrides: HashMap<String, Impact>,
    aria_enabled: bool,
    structure_enabled: bool,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            disabled: HashSet::new(),
            impact_overrides: HashMap::new(),
            aria_enabled: true,
            structure_enabled: true,
        }
    }

    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn configure(&mut self, config: &ChecksConfig) {
        self.disabled.clear();
        self.impact_overrides.clear();

        for check_ref in &config.disabled {
            self.disabled.insert(check_ref.clone());
        }

        for (check_ref, impact) in &config.impact {
            self.impact_overrides.insert(check_ref.clone(), *impact);
        }

        self.aria_enabled = config.aria.unwrap_or(true);
        self.structure_enabled = config.structure.unwrap_or(true);
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Run every enabled check in registration order. Each check's own
    /// violations keep their document-order emission.
    pub fn run_all(&self, ctx: &CheckContext) -> Vec<Violation> {
        self.checks
            .iter()
            .filter(|check| self.should_run_check(check.as_ref()))
            .flat_map(|check| {
                let mut violations = check.run(ctx);
                // A disabled entry may name a single violation id rather
                // than a whole check.
                violations.retain(|v| !self.disabled.contains(v.rule_id));
                self.apply_impact_overrides(check.as_ref(), &mut violations);
                violations
            })
            .collect()
    }

    fn should_run_check(&self, check: &dyn Check) -> bool {
        let metadata = check.metadata();

        if !self.aria_enabled && metadata.category == CheckCategory::Aria {
            return false;
        }
        if !self.structure_enabled && metadata.category == CheckCategory::Structure {
            return false;
        }

        !self.is_check_disabled(metadata)
    }

    fn is_check_disabled(&self, metadata: &CheckMetadata) -> bool {
        self.disabled.contains(metadata.id) || self.disabled.contains(metadata.name)
    }

    fn apply_impact_overrides(&self, check: &dyn Check, violations: &mut [Violation]) {
        let metadata = check.metadata();

        for violation in violations.iter_mut() {
            let override_impact = self
                .impact_overrides
                .get(violation.rule_id)
                .or_else(|| self.impact_overrides.get(metadata.id));

            if let Some(impact) = override_impact {
                violation.impact = *impact;
            }
        }
    }

    pub fn is_check_enabled(&self, id_or_name: &str) -> bool {
        if let Some(check) = self
            .get_check(id_or_name)
            .or_else(|| self.get_check_by_name(id_or_name))
        {
            self.should_run_check(check)
        } else {
            false
        }
    }

    pub fn get_check(&self, id: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.metadata().id == id)
            .map(|c| c.as_ref())
    }

    pub fn get_check_by_name(&self, name: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.metadata().name == name)
            .map(|c| c.as_ref())
    }

    /// The check that reports a given violation id, accepting a check id
    /// as well.
    pub fn check_for_rule(&self, rule_id: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| {
                let metadata = c.metadata();
                metadata.id == rule_id || metadata.rules.contains(&rule_id)
            })
            .map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Number of checks that would run under the current configuration.
    pub fn enabled_checks(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| self.should_run_check(check.as_ref()))
            .count()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[macro_export]
macro_rules! declare_check {
    (
        $name:ident,
        id = $id:literal,
        name = $check_name:literal,
        description = $desc:literal,
        category = $cat:ident,
        impact = $impact:ident,
        rules = [$($rule:literal),+ $(,)?]
        $(, help_url = $url:literal)?
    ) => {
        pub struct $name {
            metadata: $crate::checks::CheckMetadata,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    metadata: $crate::checks::CheckMetadata {
                        id: $id,
                        name: $check_name,
                        description: $desc,
                        category: $crate::checks::CheckCategory::$cat,
                        impact: $crate::violation::Impact::$impact,
                        rules: &[$($rule),+],
                        help_url: declare_check!(@help_url $($url)?),
                    },
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
    (@help_url $url:literal) => { Some($url) };
    (@help_url) => { None };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;

    struct TestCheck {
        metadata: CheckMetadata,
        violations_to_return: Vec<Violation>,
    }

    impl TestCheck {
        fn new(id: &'static str) -> Self {
            Self {
                metadata: CheckMetadata {
                    id,
                    name: "Test check",
                    description: "A test check",
                    category: CheckCategory::Structure,
                    impact: Impact::Moderate,
                    rules: &[],
                    help_url: None,
                },
                violations_to_return: Vec::new(),
            }
        }

        fn with_name(mut self, name: &'static str) -> Self {
            self.metadata.name = name;
            self
        }

        fn with_category(mut self, category: CheckCategory) -> Self {
            self.metadata.category = category;
            self
        }

        fn with_violation(mut self, violation: Violation) -> Self {
            self.violations_to_return.push(violation);
            self
        }
    }

    impl Check for TestCheck {
        fn metadata(&self) -> &CheckMetadata {
            &self.metadata
        }

        fn run(&self, _ctx: &CheckContext) -> Vec<Violation> {
            self.violations_to_return.clone()
        }
    }

    fn test_doc() -> Document {
        Document::from_roots(vec![Element::new("div")])
    }

    #[test]
    fn check_has_required_metadata() {
        let check = TestCheck::new("test-check");
        let metadata = check.metadata();

        assert_eq!(metadata.id, "test-check");
        assert_eq!(metadata.name, "Test check");
        assert_eq!(metadata.description, "A test check");
        assert_eq!(metadata.category, CheckCategory::Structure);
        assert_eq!(metadata.impact, Impact::Moderate);
        assert!(metadata.help_url.is_none());
    }

    #[test]
    fn registry_contains_all_checks() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-a")));
        registry.register(Box::new(TestCheck::new("check-b")));
        registry.register(Box::new(TestCheck::new("check-c")));

        let checks: Vec<_> = registry.checks().collect();

        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].metadata().id, "check-a");
        assert_eq!(checks[1].metadata().id, "check-b");
        assert_eq!(checks[2].metadata().id, "check-c");
    }

    #[test]
    fn run_all_collects_violations_in_registration_order() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-b").with_violation(
            Violation::new("rule-b", Impact::Serious, "Issue B", node),
        )));
        registry.register(Box::new(TestCheck::new("check-a").with_violation(
            Violation::new("rule-a", Impact::Minor, "Issue A", node),
        )));

        let violations = registry.run_all(&ctx);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].rule_id, "rule-b");
        assert_eq!(violations[1].rule_id, "rule-a");
    }

    #[test]
    fn registry_get_check_finds_by_id() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-a")));
        registry.register(Box::new(TestCheck::new("check-b")));

        let check = registry.get_check("check-b");

        assert!(check.is_some());
        assert_eq!(check.unwrap().metadata().id, "check-b");
    }

    #[test]
    fn registry_get_check_returns_none_for_unknown() {
        let registry = CheckRegistry::new();

        assert!(registry.get_check("unknown").is_none());
    }

    #[test]
    fn registry_len_returns_count() {
        let mut registry = CheckRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());

        registry.register(Box::new(TestCheck::new("check-a")));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn disabled_check_not_executed() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("noisy-check").with_violation(
            Violation::new("noisy-rule", Impact::Minor, "noise", node),
        )));

        let config = ChecksConfig {
            disabled: vec!["noisy-check".to_string()],
            ..Default::default()
        };
        registry.configure(&config);

        assert!(registry.run_all(&ctx).is_empty());
    }

    #[test]
    fn disabled_entry_may_name_a_single_violation_id() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(
            TestCheck::new("two-rule-check")
                .with_violation(Violation::new("keep-me", Impact::Minor, "kept", node))
                .with_violation(Violation::new("drop-me", Impact::Minor, "dropped", node)),
        ));

        let config = ChecksConfig {
            disabled: vec!["drop-me".to_string()],
            ..Default::default()
        };
        registry.configure(&config);

        let violations = registry.run_all(&ctx);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "keep-me");
    }

    #[test]
    fn all_checks_active_by_default() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-a").with_violation(
            Violation::new("rule-a", Impact::Minor, "A", node),
        )));
        registry.register(Box::new(TestCheck::new("check-b").with_violation(
            Violation::new("rule-b", Impact::Minor, "B", node),
        )));

        registry.configure(&ChecksConfig::default());

        assert_eq!(registry.run_all(&ctx).len(), 2);
    }

    #[test]
    fn disable_category() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(
            TestCheck::new("aria-check")
                .with_category(CheckCategory::Aria)
                .with_violation(Violation::new("aria-rule", Impact::Minor, "aria", node)),
        ));
        registry.register(Box::new(
            TestCheck::new("structure-check")
                .with_category(CheckCategory::Structure)
                .with_violation(Violation::new("structure-rule", Impact::Minor, "str", node)),
        ));

        let config = ChecksConfig {
            aria: Some(false),
            ..Default::default()
        };
        registry.configure(&config);

        let violations = registry.run_all(&ctx);

        assert_eq!(violations.len(), 1, "only the structure check should run");
        assert_eq!(violations[0].rule_id, "structure-rule");
    }

    #[test]
    fn override_impact_by_violation_id() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-a").with_violation(
            Violation::new("rule-a", Impact::Minor, "A", node),
        )));

        let mut impact = HashMap::new();
        impact.insert("rule-a".to_string(), Impact::Critical);
        let config = ChecksConfig {
            impact,
            ..Default::default()
        };
        registry.configure(&config);

        let violations = registry.run_all(&ctx);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].impact, Impact::Critical);
    }

    #[test]
    fn override_impact_by_check_id() {
        let doc = test_doc();
        let node = doc.elements().next().unwrap();
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(
            TestCheck::new("check-a")
                .with_violation(Violation::new("rule-a", Impact::Minor, "A", node))
                .with_violation(Violation::new("rule-b", Impact::Minor, "B", node)),
        ));

        let mut impact = HashMap::new();
        impact.insert("check-a".to_string(), Impact::Serious);
        let config = ChecksConfig {
            impact,
            ..Default::default()
        };
        registry.configure(&config);

        let violations = registry.run_all(&ctx);

        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.impact == Impact::Serious));
    }

    #[test]
    fn is_check_enabled_respects_configuration() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(TestCheck::new("check-a")));
        registry.register(Box::new(TestCheck::new("check-b")));

        let config = ChecksConfig {
            disabled: vec!["check-b".to_string()],
            ..Default::default()
        };
        registry.configure(&config);

        assert!(registry.is_check_enabled("check-a"));
        assert!(!registry.is_check_enabled("check-b"));
    }

    #[test]
    fn get_check_by_name_finds_check() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(
            TestCheck::new("check-a").with_name("Elements must be labelled"),
        ));

        let check = registry.get_check_by_name("Elements must be labelled");

        assert!(check.is_some());
        assert_eq!(check.unwrap().metadata().id, "check-a");
    }

    #[test]
    fn settings_from_config_extends_defaults() {
        let config = ChecksConfig {
            link_text: crate::config::LinkTextConfig {
                words: vec!["Click This".to_string()],
                allowlist: vec!["^skip .*".to_string()],
            },
            image_alt: crate::config::ImageAltConfig {
                markers: vec!["data-decorative".to_string()],
            },
            heading_order: crate::config::HeadingOrderConfig { max_skip: Some(1) },
            ..Default::default()
        };

        let settings = CheckSettings::from_config(&config).unwrap();

        assert!(settings.generic_link_words.contains(&"click this".to_string()));
        assert!(settings.generic_link_words.contains(&"here".to_string()));
        assert_eq!(settings.decorative_markers, vec!["data-decorative"]);
        assert_eq!(settings.link_text_allowlist.len(), 1);
        assert!(settings.link_text_allowlist[0].is_match("skip to content"));
        assert_eq!(settings.heading_max_skip, 1);
    }

    #[test]
    fn settings_from_config_rejects_invalid_pattern() {
        let config = ChecksConfig {
            link_text: crate::config::LinkTextConfig {
                words: Vec::new(),
                allowlist: vec!["[unclosed".to_string()],
            },
            ..Default::default()
        };

        let err = CheckSettings::from_config(&config).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    declare_check!(
        MacroTestCheck,
        id = "macro-test",
        name = "Macro test",
        description = "Tests the declare_check! macro",
        category = Structure,
        impact = Minor,
        rules = ["macro-test-finding"]
    );

    impl Check for MacroTestCheck {
        fn metadata(&self) -> &CheckMetadata {
            &self.metadata
        }

        fn run(&self, _ctx: &CheckContext) -> Vec<Violation> {
            Vec::new()
        }
    }

    #[test]
    fn declare_check_macro_creates_check() {
        let check = MacroTestCheck::new();
        let metadata = check.metadata();

        assert_eq!(metadata.id, "macro-test");
        assert_eq!(metadata.name, "Macro test");
        assert_eq!(metadata.description, "Tests the declare_check! macro");
        assert_eq!(metadata.category, CheckCategory::Structure);
        assert_eq!(metadata.impact, Impact::Minor);
        assert_eq!(metadata.rules, ["macro-test-finding"]);
        assert!(metadata.help_url.is_none());
    }

    declare_check!(
        MacroTestCheckWithUrl,
        id = "macro-test-url",
        name = "Macro test with url",
        description = "Tests the declare_check! macro with a help url",
        category = Aria,
        impact = Serious,
        rules = ["macro-test-url-finding"],
        help_url = "https://example.com/checks/macro-test-url"
    );

    impl Check for MacroTestCheckWithUrl {
        fn metadata(&self) -> &CheckMetadata {
            &self.metadata
        }

        fn run(&self, _ctx: &CheckContext) -> Vec<Violation> {
            Vec::new()
        }
    }

    #[test]
    fn declare_check_macro_with_help_url() {
        let check = MacroTestCheckWithUrl::new();
        let metadata = check.metadata();

        assert_eq!(metadata.id, "macro-test-url");
        assert_eq!(metadata.category, CheckCategory::Aria);
        assert_eq!(metadata.impact, Impact::Serious);
        assert_eq!(
            metadata.help_url,
            Some("https://example.com/checks/macro-test-url")
        );
    }

    #[test]
    fn check_for_rule_resolves_violation_and_check_ids() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MacroTestCheck::new()));
        registry.register(Box::new(MacroTestCheckWithUrl::new()));

        let by_violation = registry.check_for_rule("macro-test-finding").unwrap();
        assert_eq!(by_violation.metadata().id, "macro-test");

        let by_id = registry.check_for_rule("macro-test-url").unwrap();
        assert_eq!(by_id.metadata().id, "macro-test-url");

        assert!(registry.check_for_rule("unknown-finding").is_none());
    }
}
