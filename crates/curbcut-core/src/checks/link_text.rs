//! link-name check: links must have discernible, meaningful text
//!
//! Two findings share this check: a link with no name at all, and a link
//! whose entire name is a generic phrase that conveys nothing when read
//! out of context ("click here" in a list of twenty links).

use crate::checks::helpers::explicit_role;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::{Impact, Violation};

declare_check!(
    LinkName,
    id = "link-name",
    name = "Links must have discernible text",
    description = "Links need an accessible name that makes sense out of context",
    category = Structure,
    impact = Critical,
    rules = ["link-name", "link-text-generic"]
);

impl Check for LinkName {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            let is_link = match doc.tag(id) {
                "a" => doc.has_attr(id, "href"),
                _ => explicit_role(doc, id) == Some("link"),
            };
            if !is_link {
                continue;
            }

            let name = ctx.name(id);
            if !name.is_present() {
                violations.push(
                    Violation::new(
                        "link-name",
                        Impact::Critical,
                        format!("{} has no accessible name", doc.describe(id)),
                        id,
                    )
                    .with_help("Add link text or aria-label"),
                );
                continue;
            }

            // A dynamic name cannot be judged for generic wording.
            let Some(text) = name.text() else {
                continue;
            };
            let normalized = text.trim().to_lowercase();
            if !ctx.settings.generic_link_words.contains(&normalized) {
                continue;
            }
            if ctx
                .settings
                .link_text_allowlist
                .iter()
                .any(|pattern| pattern.is_match(&normalized))
            {
                continue;
            }

            violations.push(
                Violation::new(
                    "link-text-generic",
                    Impact::Minor,
                    format!("Link text \"{}\" does not describe the destination", text.trim()),
                    id,
                )
                .with_help("Describe where the link goes, e.g. \"Read the pricing guide\""),
            );
        }

        violations
    }
}
