//! aria-props check: aria-* attributes must be known, allowed, and well-formed
//!
//! Thin adapter over [`crate::aria::validate_properties`].

use crate::aria;
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::violation::Violation;

declare_check!(
    AriaProperties,
    id = "aria-props",
    name = "ARIA attributes must be known, allowed, and well-formed",
    description = "aria-* attributes exist in the vocabulary, fit the element's role, and carry valid values",
    category = Aria,
    impact = Critical,
    rules = [
        "aria-invalid-property",
        "aria-invalid-property-value",
        "aria-property-not-allowed-with-role",
        "aria-property-discouraged",
        "aria-deprecated-property"
    ],
    help_url = "https://www.w3.org/TR/wai-aria-1.2/#state_prop_def"
);

impl Check for AriaProperties {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        ctx.doc
            .elements()
            .flat_map(|id| aria::validate_properties(ctx.doc, id))
            .collect()
    }
}
