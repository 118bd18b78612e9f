//! button-name check: buttons must have discernible text

use crate::checks::helpers::{explicit_role, input_type};
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::AttrValue;
use crate::violation::{Impact, Violation};

declare_check!(
    ButtonName,
    id = "button-name",
    name = "Buttons must have discernible text",
    description = "Buttons need text content, a label, or an ARIA name",
    category = Structure,
    impact = Critical,
    rules = ["button-name"]
);

impl Check for ButtonName {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            let tag = doc.tag(id);
            let is_target = match tag {
                "button" => true,
                "input" => match input_type(doc, id).as_deref() {
                    // Submit and reset buttons have user-agent default labels.
                    Some("submit") | Some("reset") => continue,
                    Some("button") => {
                        if doc.attr_literal(id, "value").is_some_and(|v| !v.trim().is_empty())
                            || matches!(doc.attr(id, "value"), Some(AttrValue::Dynamic))
                        {
                            continue;
                        }
                        true
                    }
                    _ => false,
                },
                _ => explicit_role(doc, id) == Some("button"),
            };

            if is_target && !ctx.name(id).is_present() {
                violations.push(
                    Violation::new(
                        "button-name",
                        Impact::Critical,
                        format!("{} has no accessible name", doc.describe(id)),
                        id,
                    )
                    .with_help("Add text content, a value, or aria-label"),
                );
            }
        }

        violations
    }
}
