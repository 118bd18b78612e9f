//! iframe-title check: frames must describe their content

use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::{Impact, Violation};

declare_check!(
    IframeTitle,
    id = "iframe-title",
    name = "Frames must have an accessible title",
    description = "Each iframe needs a title or ARIA name describing its content",
    category = Structure,
    impact = Serious,
    rules = ["iframe-title"]
);

impl Check for IframeTitle {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            if doc.tag(id) != "iframe" {
                continue;
            }
            if ctx.name(id).is_present() {
                continue;
            }
            violations.push(
                Violation::new(
                    "iframe-title",
                    Impact::Serious,
                    format!("{} has no title", doc.describe(id)),
                    id,
                )
                .with_help("Add a title attribute describing the embedded content"),
            );
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

    fn run_iframe_title(roots: Vec<Element>) -> Vec<Violation> {
        let doc = Document::from_roots(roots);
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);
        IframeTitle::new().run(&ctx)
    }

    #[test]
    fn untitled_iframe_is_flagged() {
        let violations =
            run_iframe_title(vec![Element::new("iframe").attr("src", "https://maps.example")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "iframe-title");
        assert_eq!(violations[0].impact, Impact::Serious);
    }

    #[test]
    fn titled_iframe_passes() {
        let violations = run_iframe_title(vec![Element::new("iframe")
            .attr("src", "https://maps.example")
            .attr("title", "Office location map")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn whitespace_title_is_flagged() {
        let violations = run_iframe_title(vec![Element::new("iframe").attr("title", "  ")]);

        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn aria_label_counts() {
        let violations = run_iframe_title(vec![Element::new("iframe")
            .attr("aria-label", "Payment form")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn dynamic_title_passes() {
        let violations = run_iframe_title(vec![Element::new("iframe").dynamic_attr("title")]);

        assert!(violations.is_empty());
    }
}
