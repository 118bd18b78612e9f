//! fieldset-legend check: grouped form controls need a group label

use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::{Impact, Violation};

declare_check!(
    FieldsetLegend,
    id = "fieldset-legend",
    name = "Fieldsets should have a legend",
    description = "A fieldset needs a legend as its first element child",
    category = Structure,
    impact = Moderate,
    rules = ["fieldset-legend"]
);

impl Check for FieldsetLegend {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            if doc.tag(id) != "fieldset" {
                continue;
            }

            let mut children = doc.element_children(id);
            match children.next() {
                Some(first) if doc.tag(first) == "legend" => continue,
                _ => {}
            }

            let has_misplaced_legend = doc
                .element_children(id)
                .any(|child| doc.tag(child) == "legend");
            let message = if has_misplaced_legend {
                format!(
                    "{} has a legend, but it must be the first element child",
                    doc.describe(id)
                )
            } else {
                format!("{} has no legend", doc.describe(id))
            };

            violations.push(
                Violation::new("fieldset-legend", Impact::Moderate, message, id)
                    .with_help("Put a <legend> first inside the fieldset"),
            );
        }

        violations
    }
}
