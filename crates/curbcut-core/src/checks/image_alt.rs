//! image-alt-text check: images must have text alternatives
//!
//! Covers `<img>`, elements carrying `role="img"`, and `input[type=image]`.
//! An image is decorative when it carries `alt=""` with no overriding role,
//! `role="presentation"`/`"none"`, or one of the configured marker
//! attributes. Decorative images pass unless they are focusable.

use crate::checks::helpers::{explicit_role, input_type, is_focusable, is_presentational};
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::AttrValue;
use crate::violation::{Impact, Violation};

declare_check!(
    ImageAltText,
    id = "image-alt-text",
    name = "Images must have alternative text",
    description = "Images need an alt attribute, an ARIA name, or decorative marking",
    category = Structure,
    impact = Critical,
    rules = ["image-alt"],
    help_url = "https://www.w3.org/WAI/tutorials/images/"
);

impl Check for ImageAltText {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            match doc.tag(id) {
                "img" => {}
                "input" if input_type(doc, id).as_deref() == Some("image") => {
                    if doc.attr_literal(id, "alt").is_some_and(|alt| !alt.trim().is_empty())
                        || matches!(doc.attr(id, "alt"), Some(AttrValue::Dynamic))
                        || ctx.name(id).is_present()
                    {
                        continue;
                    }
                    violations.push(
                        Violation::new(
                            "image-alt",
                            Impact::Critical,
                            format!("Image button {} has no alt text", doc.describe(id)),
                            id,
                        )
                        .with_help("Add alt text describing the button's action"),
                    );
                    continue;
                }
                _ => {
                    if explicit_role(doc, id) == Some("img") && !ctx.name(id).is_present() {
                        violations.push(
                            Violation::new(
                                "image-alt",
                                Impact::Critical,
                                format!(
                                    "{} has role \"img\" but no accessible name",
                                    doc.describe(id)
                                ),
                                id,
                            )
                            .with_help("Add aria-label or aria-labelledby"),
                        );
                    }
                    continue;
                }
            }

            // <img> handling from here on.
            if matches!(doc.attr(id, "alt"), Some(AttrValue::Dynamic)) {
                continue;
            }

            let alt = doc.attr_literal(id, "alt");
            let role = explicit_role(doc, id);
            let has_marker = ctx
                .settings
                .decorative_markers
                .iter()
                .any(|marker| doc.has_attr(id, marker));
            let empty_alt_decorative =
                alt == Some("") && (role.is_none() || is_presentational(doc, id));

            if is_presentational(doc, id) || has_marker || empty_alt_decorative {
                if is_focusable(doc, id) {
                    violations.push(
                        Violation::new(
                            "image-alt",
                            Impact::Critical,
                            format!(
                                "Decorative image {} is focusable and will be announced as unlabelled",
                                doc.describe(id)
                            ),
                            id,
                        )
                        .with_help("Remove it from the tab order, or give it alt text"),
                    );
                }
                continue;
            }

            match alt {
                Some(text) if !text.trim().is_empty() => {}
                Some("") => {
                    // Only reachable with an explicit non-presentational role.
                    violations.push(
                        Violation::new(
                            "image-alt",
                            Impact::Critical,
                            format!(
                                "{} has alt=\"\" but exposes role \"{}\"",
                                doc.describe(id),
                                role.unwrap_or_default()
                            ),
                            id,
                        )
                        .with_help("Remove the role, or provide real alt text"),
                    );
                }
                Some(_) => {
                    violations.push(
                        Violation::new(
                            "image-alt",
                            Impact::Critical,
                            format!(
                                "{} has an alt attribute containing only whitespace",
                                doc.describe(id)
                            ),
                            id,
                        )
                        .with_help("Use alt=\"\" for decorative images, or describe the image"),
                    );
                }
                None => {
                    if !ctx.name(id).is_present() {
                        violations.push(
                            Violation::new(
                                "image-alt",
                                Impact::Critical,
                                format!("{} is missing an alt attribute", doc.describe(id)),
                                id,
                            )
                            .with_help("Add alt text describing the image, or alt=\"\" if decorative"),
                        );
                    }
                }
            }
        }

        violations
    }
}
