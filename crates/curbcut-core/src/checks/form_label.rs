//! form-field-label check: form fields must have labels
//!
//! A placeholder disappears as soon as the user types and is never a
//! substitute for a label.

use crate::checks::helpers::input_type;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

/// Input types handled by other checks or invisible to users.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "button", "submit", "reset", "image"];

fn is_labelable_field(doc: &Document, id: NodeId) -> Option<bool> {
    match doc.tag(id) {
        "select" | "textarea" => Some(true),
        "input" => {
            // An unknowable type cannot be classified.
            if matches!(doc.attr(id, "type"), Some(AttrValue::Dynamic)) {
                return None;
            }
            let ty = input_type(doc, id).unwrap_or_else(|| "text".to_string());
            Some(!EXEMPT_INPUT_TYPES.contains(&ty.as_str()))
        }
        _ => Some(false),
    }
}

declare_check!(
    FormFieldLabel,
    id = "form-field-label",
    name = "Form fields must have labels",
    description = "Inputs, selects, and textareas need an associated label or ARIA name",
    category = Structure,
    impact = Critical,
    rules = ["form-label"],
    help_url = "https://www.w3.org/WAI/tutorials/forms/labels/"
);

impl Check for FormFieldLabel {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            match is_labelable_field(doc, id) {
                Some(true) => {}
                _ => continue,
            }
            if ctx.name(id).is_present() {
                continue;
            }

            let has_placeholder = doc.has_attr(id, "placeholder");
            let violation = Violation::new(
                "form-label",
                Impact::Critical,
                format!("{} has no label", doc.describe(id)),
                id,
            );
            let violation = if has_placeholder {
                violation.with_help(
                    "A placeholder is not a label; associate a <label> or add aria-label",
                )
            } else {
                violation.with_help("Associate a <label> with this field")
            };
            violations.push(violation);
        }

        violations
    }
}
