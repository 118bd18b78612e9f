//! Validation engine: builds the shared context and runs the battery
//!
//! The engine owns a [`CheckRegistry`] loaded with the full battery. One
//! `validate` call builds the ID registry for the document, hands every
//! enabled check the same context, and aggregates their findings into a
//! [`ValidationReport`]. Findings are data; only an empty document is an
//! error.

use thiserror::Error;
use tracing::debug;

use crate::checks::{
    AriaIdRefs, AriaProperties, AriaRole, ButtonName, CheckContext, CheckRegistry, CheckSettings,
    DetailsSummary, DialogModal, FieldsetLegend, FormFieldLabel, HeadingOrder, IframeTitle,
    ImageAltText, LandmarkStructure, LinkName, MediaCaptions, TableStructure,
};
use crate::config::{Config, ConfigError};
use crate::idrefs::IdRegistry;
use crate::tree::Document;
use crate::violation::{Impact, Violation};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("document has no elements to validate")]
    EmptyDocument,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub elements_checked: usize,
    pub checks_run: usize,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation counts per impact, critical first.
    pub fn count_by_impact(&self) -> [(Impact, usize); 4] {
        let mut counts = [
            (Impact::Critical, 0),
            (Impact::Serious, 0),
            (Impact::Moderate, 0),
            (Impact::Minor, 0),
        ];
        for violation in &self.violations {
            for entry in counts.iter_mut() {
                if entry.0 == violation.impact {
                    entry.1 += 1;
                }
            }
        }
        counts
    }
}

pub struct ValidationEngine {
    registry: CheckRegistry,
    settings: CheckSettings,
}

impl ValidationEngine {
    /// Engine with the full battery and default settings.
    pub fn new() -> Self {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(ImageAltText::new()));
        registry.register(Box::new(ButtonName::new()));
        registry.register(Box::new(FormFieldLabel::new()));
        registry.register(Box::new(HeadingOrder::new()));
        registry.register(Box::new(LinkName::new()));
        registry.register(Box::new(IframeTitle::new()));
        registry.register(Box::new(FieldsetLegend::new()));
        registry.register(Box::new(DetailsSummary::new()));
        registry.register(Box::new(TableStructure::new()));
        registry.register(Box::new(MediaCaptions::new()));
        registry.register(Box::new(LandmarkStructure::new()));
        registry.register(Box::new(DialogModal::new()));
        registry.register(Box::new(AriaRole::new()));
        registry.register(Box::new(AriaProperties::new()));
        registry.register(Box::new(AriaIdRefs::new()));

        Self {
            registry,
            settings: CheckSettings::default(),
        }
    }

    /// Engine configured from a loaded config file.
    pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
        let mut engine = Self::new();
        engine.registry.configure(&config.checks);
        engine.settings = CheckSettings::from_config(&config.checks)?;
        Ok(engine)
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn validate(&self, doc: &Document) -> Result<ValidationReport, EngineError> {
        if doc.is_empty() {
            return Err(EngineError::EmptyDocument);
        }

        let ids = IdRegistry::build(doc);
        let ctx = CheckContext::new(doc, &ids, &self.settings);
        let violations = self.registry.run_all(&ctx);
        let elements_checked = doc.elements().count();
        let checks_run = self.registry.enabled_checks();

        debug!(
            elements = elements_checked,
            checks = checks_run,
            violations = violations.len(),
            "document validated"
        );

        Ok(ValidationReport {
            violations,
            elements_checked,
            checks_run,
        })
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
