//! details-summary check: disclosure widgets need a visible trigger

use crate::checks::helpers::has_element_child;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::{Impact, Violation};

declare_check!(
    DetailsSummary,
    id = "details-summary",
    name = "Disclosure widgets need a summary",
    description = "A details element needs a summary child; the fallback label is generic",
    category = Structure,
    impact = Moderate,
    rules = ["details-summary"]
);

impl Check for DetailsSummary {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            if doc.tag(id) != "details" {
                continue;
            }
            if has_element_child(doc, id, "summary") {
                continue;
            }
            violations.push(
                Violation::new(
                    "details-summary",
                    Impact::Moderate,
                    format!(
                        "{} has no summary; it will be announced as \"Details\"",
                        doc.describe(id)
                    ),
                    id,
                )
                .with_help("Add a <summary> describing what the section reveals"),
            );
        }

        violations
    }
}
