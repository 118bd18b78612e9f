//! aria-idref check: ID references must point at real elements
//!
//! Thin adapter over [`crate::idrefs::validate`], reusing the registry
//! the engine already built for name resolution.

use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::idrefs;
use crate::violation::Violation;

declare_check!(
    AriaIdRefs,
    id = "aria-idref",
    name = "ARIA ID references must point at existing elements",
    description = "Every id named by an IDREF-valued aria-* attribute exists in the document",
    category = Aria,
    impact = Serious,
    rules = ["aria-invalid-id-reference"],
    help_url = "https://www.w3.org/TR/wai-aria-1.2/#propcharacteristic_value"
);

impl Check for AriaIdRefs {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        idrefs::validate(ctx.doc, ctx.ids)
    }
}
