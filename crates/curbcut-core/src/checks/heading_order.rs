//! heading-order check: heading levels must not skip downward
//!
//! Screen reader users navigate by heading outline; a jump from h1 to h3
//! reads as a missing section. Rising back up any number of levels is
//! fine.

use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

/// The outline level a heading element exposes, or `None` when the
/// element is not a heading or its level is unknowable.
fn heading_level(doc: &Document, id: NodeId) -> Option<u32> {
    let tag_level = match doc.tag(id) {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    };

    match doc.attr(id, "role") {
        Some(AttrValue::Dynamic) => return None,
        Some(AttrValue::Literal(role)) => {
            if role.split_whitespace().next() != Some("heading") {
                // Any other explicit role removes the heading semantics.
                return None;
            }
            return Some(aria_level(doc, id)?.unwrap_or_else(|| tag_level.unwrap_or(2)));
        }
        None => {}
    }

    let tag_level = tag_level?;
    match aria_level(doc, id) {
        Some(Some(level)) => Some(level),
        Some(None) => Some(tag_level),
        None => None,
    }
}

/// Outer `None`: dynamic value, level unknowable. Inner `None`: attribute
/// absent or unparseable.
fn aria_level(doc: &Document, id: NodeId) -> Option<Option<u32>> {
    match doc.attr(id, "aria-level") {
        Some(AttrValue::Dynamic) => None,
        Some(AttrValue::Literal(value)) => {
            Some(value.trim().parse::<u32>().ok().filter(|level| *level >= 1))
        }
        None => Some(None),
    }
}

declare_check!(
    HeadingOrder,
    id = "heading-order",
    name = "Heading levels should only increase by one",
    description = "Heading levels must not skip when descending the outline",
    category = Structure,
    impact = Moderate,
    rules = ["heading-skipped-level"],
    help_url = "https://www.w3.org/WAI/tutorials/page-structure/headings/"
);

impl Check for HeadingOrder {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let max_skip = ctx.settings.heading_max_skip;
        let mut violations = Vec::new();
        let mut previous: Option<u32> = None;

        for id in doc.elements() {
            let Some(level) = heading_level(doc, id) else {
                continue;
            };

            if let Some(prev) = previous {
                if level > prev + 1 + max_skip {
                    violations.push(
                        Violation::new(
                            "heading-skipped-level",
                            Impact::Moderate,
                            format!("Heading level {} follows heading level {}", level, prev),
                            id,
                        )
                        .with_help("Use heading levels that increase one step at a time"),
                    );
                }
            }
            previous = Some(level);
        }

        violations
    }
}
