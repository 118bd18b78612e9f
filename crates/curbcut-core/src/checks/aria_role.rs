//! aria-role check: role attributes must resolve to valid, usable roles
//!
//! Thin adapter over [`crate::aria::validate_role`], which carries the
//! actual taxonomy logic. Keeping it behind the check trait lets role
//! findings be disabled and re-weighted like any other check.

use crate::aria;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::Violation;

declare_check!(
    AriaRole,
    id = "aria-role",
    name = "Role attributes must resolve to valid roles",
    description = "Roles exist, are concrete, fit their host element, and carry their required properties",
    category = Aria,
    impact = Critical,
    rules = [
        "aria-invalid-role",
        "aria-abstract-role",
        "aria-deprecated-role",
        "aria-role-on-wrong-element",
        "aria-redundant-role",
        "aria-conflicting-semantics",
        "aria-missing-context-role",
        "aria-missing-required-property"
    ],
    help_url = "https://www.w3.org/TR/wai-aria-1.2/#role_definitions"
);

impl Check for AriaRole {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        ctx.doc
            .elements()
            .flat_map(|id| aria::validate_role(ctx.doc, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckSettings;
    use crate::idrefs::IdRegistry;
    use crate::tree::{Document, Element};

    fn run_roles(roots: Vec<Element>) -> Vec<Violation> {
        let doc = Document::from_roots(roots);
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);
        AriaRole::new().run(&ctx)
    }

    #[test]
    fn reports_role_findings_across_the_document() {
        let violations = run_roles(vec![
            Element::new("div").attr("role", "buton"),
            Element::new("span").attr("role", "widget"),
        ]);

        let ids: Vec<_> = violations.iter().map(|v| v.rule_id).collect();
        assert_eq!(ids, vec!["aria-invalid-role", "aria-abstract-role"]);
    }

    #[test]
    fn valid_roles_produce_nothing() {
        let violations = run_roles(vec![
            Element::new("div").attr("role", "navigation"),
            Element::new("span").attr("role", "button").attr("tabindex", "0"),
        ]);

        assert!(violations.is_empty());
    }
}
