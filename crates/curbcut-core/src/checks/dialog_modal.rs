//! dialog-modal check: dialogs must be named and marked modal
//!
//! An open dialog that is not flagged `aria-modal` leaves the background
//! page in the reading order, and an unnamed dialog announces as nothing
//! when focus moves into it.

use crate::checks::helpers::explicit_role;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::{Impact, Violation};

/// Inline tags that cannot host dialog semantics.
const INLINE_TAGS: &[&str] = &["span", "a", "b", "i"];

declare_check!(
    DialogModal,
    id = "dialog-modal",
    name = "Dialogs must be named and marked modal",
    description = "Open dialogs carry aria-modal and an accessible name",
    category = Structure,
    impact = Serious,
    rules = ["dialog-invalid-role", "dialog-missing-modal", "dialog-name"],
    help_url = "https://www.w3.org/WAI/ARIA/apg/patterns/dialog-modal/"
);

impl Check for DialogModal {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            let tag = doc.tag(id);
            let role = explicit_role(doc, id);
            let has_dialog_role = matches!(role, Some("dialog") | Some("alertdialog"));
            if tag != "dialog" && !has_dialog_role {
                continue;
            }

            if has_dialog_role && INLINE_TAGS.contains(&tag) {
                violations.push(
                    Violation::new(
                        "dialog-invalid-role",
                        Impact::Serious,
                        format!(
                            "{} puts a dialog role on an inline <{}> element",
                            doc.describe(id),
                            tag
                        ),
                        id,
                    )
                    .with_help("Use a <dialog> element or a block container such as <div>"),
                );
                continue;
            }

            // A closed <dialog> is not rendered, so only open dialogs and
            // explicit dialog roles need the modal flag.
            let open = tag == "dialog" && doc.has_attr(id, "open");
            if (open || has_dialog_role) && !doc.has_attr(id, "aria-modal") {
                violations.push(
                    Violation::new(
                        "dialog-missing-modal",
                        Impact::Serious,
                        format!("{} is an open dialog without aria-modal", doc.describe(id)),
                        id,
                    )
                    .with_help("Set aria-modal=\"true\" so the background is removed from the reading order"),
                );
            }

            if !ctx.name(id).is_present() {
                violations.push(
                    Violation::new(
                        "dialog-name",
                        Impact::Serious,
                        format!("{} has no accessible name", doc.describe(id)),
                        id,
                    )
                    .with_help("Label the dialog with aria-labelledby pointing at its heading, or aria-label"),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckSettings;
    use crate::idrefs::IdRegistry;
    use crate::tree::{Document, Element};

    fn run_dialogs(roots: Vec<Element>) -> Vec<Violation> {
        let doc = Document::from_roots(roots);
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);
        DialogModal::new().run(&ctx)
    }

    #[test]
    fn open_dialog_without_modal_is_flagged() {
        let violations = run_dialogs(vec![Element::new("dialog")
            .attr("open", "")
            .attr("aria-label", "Settings")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "dialog-missing-modal");
    }

    #[test]
    fn open_modal_dialog_passes() {
        let violations = run_dialogs(vec![Element::new("dialog")
            .attr("open", "")
            .attr("aria-modal", "true")
            .attr("aria-label", "Settings")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn closed_dialog_does_not_need_modal() {
        let violations = run_dialogs(vec![
            Element::new("dialog").attr("aria-label", "Settings")
        ]);

        assert!(violations.is_empty());
    }

    #[test]
    fn closed_dialog_still_needs_a_name() {
        let violations = run_dialogs(vec![Element::new("dialog")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "dialog-name");
    }

    #[test]
    fn explicit_dialog_role_needs_modal_and_name() {
        let violations = run_dialogs(vec![Element::new("div").attr("role", "dialog")]);

        let ids: Vec<_> = violations.iter().map(|v| v.rule_id).collect();
        assert_eq!(ids, vec!["dialog-missing-modal", "dialog-name"]);
    }

    #[test]
    fn alertdialog_with_modal_and_name_passes() {
        let violations = run_dialogs(vec![Element::new("div")
            .attr("role", "alertdialog")
            .attr("aria-modal", "true")
            .attr("aria-label", "Unsaved changes")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn bound_modal_attribute_counts_as_present() {
        let violations = run_dialogs(vec![Element::new("div")
            .attr("role", "dialog")
            .dynamic_attr("aria-modal")
            .attr("aria-label", "Settings")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn dialog_role_on_span_is_invalid() {
        let violations = run_dialogs(vec![Element::new("span").attr("role", "dialog")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "dialog-invalid-role");
    }

    #[test]
    fn alertdialog_role_on_anchor_is_invalid() {
        let violations = run_dialogs(vec![Element::new("a")
            .attr("href", "#")
            .attr("role", "alertdialog")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "dialog-invalid-role");
    }

    #[test]
    fn labelledby_name_satisfies_the_name_requirement() {
        let violations = run_dialogs(vec![
            Element::new("dialog")
                .attr("open", "")
                .attr("aria-modal", "true")
                .attr("aria-labelledby", "dlg-title")
                .child(Element::new("h2").attr("id", "dlg-title").text("Confirm")),
        ]);

        assert!(violations.is_empty());
    }
}
