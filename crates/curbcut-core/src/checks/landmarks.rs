//! landmark-structure check: landmarks must be unique and labelled
//!
//! Landmarks are the page's navigation skeleton. One main region, named
//! regions, and distinguishable repeated landmarks keep the rotor menu
//! usable.

use std::collections::HashSet;

use crate::aria::{self, EffectiveRole, RoleKind};
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::NodeId;
use crate::violation::{Impact, Violation};

declare_check!(
    LandmarkStructure,
    id = "landmark-structure",
    name = "Landmarks must be unique and labelled",
    description = "One main landmark, named regions, and no indistinguishable duplicates",
    category = Structure,
    impact = Moderate,
    rules = [
        "landmark-multiple-main",
        "landmark-region-name",
        "landmark-duplicate-unnamed"
    ],
    help_url = "https://www.w3.org/WAI/ARIA/apg/practices/landmark-regions/"
);

impl Check for LandmarkStructure {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();
        let mut seen_main = false;
        let mut unnamed_seen: HashSet<(&'static str, Option<NodeId>)> = HashSet::new();

        for id in doc.elements() {
            let EffectiveRole::Known(def) = aria::effective_role(doc, id) else {
                continue;
            };
            if def.kind != RoleKind::Landmark {
                continue;
            }
            let named = ctx.name(id).is_present();

            if def.name == "main" {
                if seen_main {
                    violations.push(
                        Violation::new(
                            "landmark-multiple-main",
                            Impact::Moderate,
                            format!("{} is a second main landmark", doc.describe(id)),
                            id,
                        )
                        .with_help("Keep one main landmark per page"),
                    );
                }
                seen_main = true;
                continue;
            }

            if def.name == "region" {
                if !named {
                    violations.push(
                        Violation::new(
                            "landmark-region-name",
                            Impact::Moderate,
                            format!("{} is a region landmark with no name", doc.describe(id)),
                            id,
                        )
                        .with_help("Label the region with aria-label or aria-labelledby"),
                    );
                }
                continue;
            }

            // Unnamed duplicates of the remaining landmark kinds, scoped
            // to siblings. main and region have their own findings above.
            if !named && !unnamed_seen.insert((def.name, doc.parent(id))) {
                violations.push(
                    Violation::new(
                        "landmark-duplicate-unnamed",
                        Impact::Minor,
                        format!(
                            "{} repeats an unnamed \"{}\" landmark at the same level",
                            doc.describe(id),
                            def.name
                        ),
                        id,
                    )
                    .with_help("Give each repeated landmark a distinguishing label"),
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

    fn run_landmarks(roots: Vec<Element>) -> Vec<Violation> {
        let doc = Document::from_roots(roots);
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);
        LandmarkStructure::new().run(&ctx)
    }

    #[test]
    fn single_main_passes() {
        let violations = run_landmarks(vec![Element::new("main").text("Content")]);

        assert!(violations.is_empty());
    }

    #[test]
    fn second_main_is_flagged() {
        let doc = Document::from_roots(vec![
            Element::new("main").attr("id", "first"),
            Element::new("main").attr("id", "second"),
        ]);
        let ids = IdRegistry::build(&doc);
        let settings = CheckSettings::default();
        let ctx = CheckContext::new(&doc, &ids, &settings);

        let violations = LandmarkStructure::new().run(&ctx);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "landmark-multiple-main");
        assert_eq!(doc.html_id(violations[0].node), Some("second"));
    }

    #[test]
    fn role_main_counts_toward_main_uniqueness() {
        let violations = run_landmarks(vec![
            Element::new("main"),
            Element::new("div").attr("role", "main"),
        ]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "landmark-multiple-main");
    }

    #[test]
    fn unnamed_region_is_flagged() {
        let violations = run_landmarks(vec![Element::new("section").text("Stuff")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "landmark-region-name");
    }

    #[test]
    fn named_region_passes() {
        let violations = run_landmarks(vec![
            Element::new("section").attr("aria-label", "Related articles")
        ]);

        assert!(violations.is_empty());
    }

    #[test]
    fn explicit_region_role_is_covered() {
        let violations = run_landmarks(vec![Element::new("div").attr("role", "region")]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "landmark-region-name");
    }

    #[test]
    fn duplicate_unnamed_navigation_is_flagged_on_the_second() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("nav"))
            .child(Element::new("nav"))]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "landmark-duplicate-unnamed");
        assert!(violations[0].message.contains("navigation"));
    }

    #[test]
    fn named_duplicates_pass() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("nav").attr("aria-label", "Primary"))
            .child(Element::new("nav").attr("aria-label", "Footer"))]);

        assert!(violations.is_empty());
    }

    #[test]
    fn one_named_one_unnamed_passes() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("nav").attr("aria-label", "Primary"))
            .child(Element::new("nav"))]);

        assert!(violations.is_empty());
    }

    #[test]
    fn duplicates_at_different_levels_pass() {
        let violations = run_landmarks(vec![
            Element::new("div").child(Element::new("nav")),
            Element::new("footer").child(Element::new("nav")),
        ]);

        // The two navs have different parents; the footer is a lone
        // contentinfo landmark.
        assert!(violations.is_empty());
    }

    #[test]
    fn different_kinds_at_the_same_level_pass() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("nav"))
            .child(Element::new("aside"))]);

        assert!(violations.is_empty());
    }

    #[test]
    fn three_unnamed_duplicates_yield_two_violations() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("nav"))
            .child(Element::new("nav"))
            .child(Element::new("nav"))]);

        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .all(|v| v.rule_id == "landmark-duplicate-unnamed"));
    }

    #[test]
    fn implicit_landmarks_from_tags_are_recognized() {
        let violations = run_landmarks(vec![Element::new("div")
            .child(Element::new("header"))
            .child(Element::new("header"))]);

        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("banner"));
    }
}
