//! Per-element role and property validation
//!
//! Pure functions: one element in, violations out. Nothing here looks at
//! siblings; context rules walk the ancestor chain only.

use crate::aria::{self, PropertyDefinition, PropertyValueType, RoleDefinition, RoleKind};
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

/// Host tags whose native semantics are interactive.
const INTERACTIVE_TAGS: &[&str] = &["button", "input", "select", "textarea", "summary"];

/// Properties that do nothing on an unroled generic element.
const WIDGET_STATE_PROPS: &[&str] = &["aria-checked", "aria-selected", "aria-expanded"];

/// The role an element exposes, as far as static analysis can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRole {
    Known(&'static RoleDefinition),
    None,
    /// A dynamic `role` value, or an explicit role that did not resolve.
    /// Checks that depend on the role stay silent.
    Unknown,
}

/// Resolve the role an element exposes: the first token of a valid
/// explicit `role` attribute, otherwise the host tag's implicit role.
pub fn effective_role(doc: &Document, id: NodeId) -> EffectiveRole {
    match doc.attr(id, "role") {
        Some(AttrValue::Dynamic) => EffectiveRole::Unknown,
        Some(AttrValue::Literal(value)) => match value.split_whitespace().next() {
            None => implicit_of(doc, id),
            Some(token) => match aria::role(token) {
                Some(def) if !def.is_abstract() => EffectiveRole::Known(def),
                _ => EffectiveRole::Unknown,
            },
        },
        None => implicit_of(doc, id),
    }
}

fn implicit_of(doc: &Document, id: NodeId) -> EffectiveRole {
    let type_attr = doc.attr_literal(id, "type");
    match aria::implicit_role(doc.tag(id), type_attr).and_then(aria::role) {
        Some(def) => EffectiveRole::Known(def),
        None => EffectiveRole::None,
    }
}

/// Validate an element's `role` attribute and the required properties of
/// its explicit role.
///
/// An unknown role produces exactly one violation and suppresses the
/// downstream role checks for the element; piling missing-property
/// findings onto a role that does not exist helps nobody.
pub fn validate_role(doc: &Document, id: NodeId) -> Vec<Violation> {
    let mut violations = Vec::new();

    let value = match doc.attr(id, "role") {
        None | Some(AttrValue::Dynamic) => return violations,
        Some(AttrValue::Literal(value)) => value,
    };
    let Some(token) = value.split_whitespace().next() else {
        // role="" exposes no role at all
        return violations;
    };

    let def = match aria::role(token) {
        None => {
            violations.push(
                Violation::new(
                    "aria-invalid-role",
                    Impact::Critical,
                    format!("{} has unknown role \"{}\"", doc.describe(id), token),
                    id,
                )
                .with_help("Use a role defined by WAI-ARIA 1.2"),
            );
            return violations;
        }
        Some(def) if def.is_abstract() => {
            violations.push(
                Violation::new(
                    "aria-abstract-role",
                    Impact::Critical,
                    format!(
                        "{} uses abstract role \"{}\", which must not appear in content",
                        doc.describe(id),
                        token
                    ),
                    id,
                )
                .with_help("Replace the abstract role with one of its concrete subclasses"),
            );
            return violations;
        }
        Some(def) => def,
    };

    if def.deprecated {
        violations.push(Violation::new(
            "aria-deprecated-role",
            Impact::Minor,
            format!(
                "{} uses role \"{}\", which is deprecated in ARIA 1.2",
                doc.describe(id),
                token
            ),
            id,
        ));
    }

    let tag = doc.tag(id);
    if !def.allowed_on.allows(tag) {
        violations.push(
            Violation::new(
                "aria-role-on-wrong-element",
                Impact::Serious,
                format!("role \"{}\" is not allowed on <{}>", token, tag),
                id,
            )
            .with_help(format!(
                "Move the role to one of: {}",
                allowed_tag_list(def)
            )),
        );
    }

    let implicit = aria::implicit_role(tag, doc.attr_literal(id, "type"));
    let redundant = implicit == Some(def.name);
    if redundant {
        violations.push(Violation::new(
            "aria-redundant-role",
            Impact::Minor,
            format!(
                "Redundant role \"{}\" on <{}>; the element already has this role implicitly",
                token, tag
            ),
            id,
        ));
    }

    if is_interactive_host(doc, id) && !redundant && is_structural(def) {
        violations.push(
            Violation::new(
                "aria-conflicting-semantics",
                Impact::Serious,
                format!(
                    "role \"{}\" hides the interactive semantics of <{}> from assistive technology",
                    token, tag
                ),
                id,
            )
            .with_help("Remove the role, or use a non-interactive host element"),
        );
    }

    if !def.required_context.is_empty() && !context_satisfied(doc, id, def.required_context) {
        violations.push(
            Violation::new(
                "aria-missing-context-role",
                Impact::Serious,
                format!(
                    "role \"{}\" requires an ancestor with role {}",
                    token,
                    name_list(def.required_context)
                ),
                id,
            )
            .with_help(format!(
                "Wrap {} in an element exposing {}",
                doc.describe(id),
                name_list(def.required_context)
            )),
        );
    }

    // Native hosts supply the states of their own implicit role, so a
    // redundant explicit role needs nothing extra.
    if !redundant {
        for group in def.required_props {
            let satisfied = group.iter().any(|prop| doc.has_attr(id, prop));
            if !satisfied {
                violations.push(
                    Violation::new(
                        "aria-missing-required-property",
                        Impact::Critical,
                        format!(
                            "role \"{}\" on {} is missing required property {}",
                            token,
                            doc.describe(id),
                            name_list(group)
                        ),
                        id,
                    )
                    .with_help(format!("Add {}", name_list(group))),
                );
            }
        }
    }

    violations
}

/// Validate every `aria-*` attribute on an element: the property must
/// exist, fit the element's effective role, and carry a well-typed value.
pub fn validate_properties(doc: &Document, id: NodeId) -> Vec<Violation> {
    let mut violations = Vec::new();
    let role = effective_role(doc, id);

    for attr in doc.attrs(id) {
        if !attr.name.starts_with("aria-") {
            continue;
        }

        let def = match aria::property(&attr.name) {
            None => {
                violations.push(
                    Violation::new(
                        "aria-invalid-property",
                        Impact::Critical,
                        format!(
                            "{} has unknown ARIA attribute \"{}\"",
                            doc.describe(id),
                            attr.name
                        ),
                        id,
                    )
                    .with_help("Check the attribute name against WAI-ARIA 1.2"),
                );
                continue;
            }
            Some(def) => def,
        };

        if def.deprecated {
            violations.push(Violation::new(
                "aria-deprecated-property",
                Impact::Minor,
                format!(
                    "\"{}\" is deprecated in ARIA 1.2 and ignored by assistive technology",
                    attr.name
                ),
                id,
            ));
        }

        if !def.global {
            match role {
                EffectiveRole::Known(role_def) if !role_def.allows_property(def.name) => {
                    violations.push(Violation::new(
                        "aria-property-not-allowed-with-role",
                        Impact::Serious,
                        format!(
                            "\"{}\" is not supported on role \"{}\"",
                            attr.name, role_def.name
                        ),
                        id,
                    ));
                }
                EffectiveRole::None
                    if WIDGET_STATE_PROPS.contains(&attr.name.as_str())
                        && matches!(doc.tag(id), "div" | "span") =>
                {
                    violations.push(
                        Violation::new(
                            "aria-property-discouraged",
                            Impact::Moderate,
                            format!(
                                "\"{}\" does nothing on {} without a role",
                                attr.name,
                                doc.describe(id)
                            ),
                            id,
                        )
                        .with_help("Give the element a widget role, or drop the state"),
                    );
                }
                _ => {}
            }
        }

        if let AttrValue::Literal(value) = &attr.value {
            if !value_is_valid(def, value) {
                violations.push(Violation::new(
                    "aria-invalid-property-value",
                    Impact::Serious,
                    format!(
                        "\"{}\" has invalid value \"{}\" ({})",
                        attr.name,
                        value,
                        expected_text(def)
                    ),
                    id,
                ));
            }
        }
    }

    violations
}

fn is_interactive_host(doc: &Document, id: NodeId) -> bool {
    let tag = doc.tag(id);
    if tag == "a" {
        return doc.has_attr(id, "href");
    }
    if tag == "input" {
        return doc.attr_literal(id, "type") != Some("hidden");
    }
    INTERACTIVE_TAGS.contains(&tag)
}

fn is_structural(def: &RoleDefinition) -> bool {
    matches!(
        def.kind,
        RoleKind::Structure | RoleKind::Landmark | RoleKind::LiveRegion
    )
}

fn context_satisfied(doc: &Document, id: NodeId, required: &[&str]) -> bool {
    for ancestor in doc.ancestors(id) {
        match doc.attr(ancestor, "role") {
            // An unknowable ancestor role may be the one we need.
            Some(AttrValue::Dynamic) => return true,
            Some(AttrValue::Literal(value)) => {
                if let Some(token) = value.split_whitespace().next() {
                    if required.contains(&token) {
                        return true;
                    }
                    continue;
                }
            }
            None => {}
        }
        let type_attr = doc.attr_literal(ancestor, "type");
        if let Some(implicit) = aria::implicit_role(doc.tag(ancestor), type_attr) {
            if required.contains(&implicit) {
                return true;
            }
        }
    }
    false
}

fn value_is_valid(def: &PropertyDefinition, value: &str) -> bool {
    let trimmed = value.trim();
    match def.value_type {
        PropertyValueType::Boolean => {
            if def.allowed_values.is_empty() {
                token_in(trimmed, &["true", "false"])
            } else {
                token_in(trimmed, def.allowed_values)
            }
        }
        PropertyValueType::Tristate => token_in(trimmed, &["true", "false", "mixed", "undefined"]),
        PropertyValueType::Integer => trimmed.parse::<i64>().is_ok(),
        PropertyValueType::Number => !trimmed.is_empty() && trimmed.parse::<f64>().is_ok(),
        PropertyValueType::Token => token_in(trimmed, def.allowed_values),
        PropertyValueType::TokenList => {
            !trimmed.is_empty()
                && trimmed
                    .split_whitespace()
                    .all(|token| token_in(token, def.allowed_values))
        }
        PropertyValueType::IdRef | PropertyValueType::IdRefList | PropertyValueType::String => {
            !trimmed.is_empty()
        }
    }
}

fn token_in(token: &str, allowed: &[&str]) -> bool {
    allowed.iter().any(|t| t.eq_ignore_ascii_case(token))
}

fn expected_text(def: &PropertyDefinition) -> String {
    match def.value_type {
        PropertyValueType::Boolean => {
            if def.allowed_values.is_empty() {
                "expected true or false".to_string()
            } else {
                format!("expected one of: {}", def.allowed_values.join(", "))
            }
        }
        PropertyValueType::Tristate => "expected true, false, or mixed".to_string(),
        PropertyValueType::Integer => "expected an integer".to_string(),
        PropertyValueType::Number => "expected a number".to_string(),
        PropertyValueType::Token | PropertyValueType::TokenList => {
            format!("expected one of: {}", def.allowed_values.join(", "))
        }
        PropertyValueType::IdRef | PropertyValueType::IdRefList => {
            "expected an element id".to_string()
        }
        PropertyValueType::String => "expected non-empty text".to_string(),
    }
}

fn allowed_tag_list(def: &RoleDefinition) -> String {
    match def.allowed_on {
        crate::aria::AllowedOn::Any => "any element".to_string(),
        crate::aria::AllowedOn::Tags(tags) => tags.join(", "),
    }
}

fn name_list(names: &[&str]) -> String {
    names.join(" or ")
}
