//! WAI-ARIA 1.2 knowledge base
//!
//! Static tables describing roles, properties, and the implicit roles of
//! host-language elements, with exact-match lookups. The tables never
//! change at runtime; the lookup indices are built once on first use.

mod props;
mod roles;
mod validate;

pub use validate::{effective_role, validate_properties, validate_role, EffectiveRole};

use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Widget,
    Structure,
    Landmark,
    LiveRegion,
    Window,
    Abstract,
}

/// Host tags a role may be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedOn {
    Any,
    Tags(&'static [&'static str]),
}

impl AllowedOn {
    pub fn allows(&self, tag: &str) -> bool {
        match self {
            AllowedOn::Any => true,
            AllowedOn::Tags(tags) => tags.contains(&tag),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub kind: RoleKind,
    /// OR-groups: at least one property of every group must be present
    /// when the role is used explicitly.
    pub required_props: &'static [&'static [&'static str]],
    /// Role-specific properties permitted beyond the global set.
    pub allowed_props: &'static [&'static str],
    pub allowed_on: AllowedOn,
    /// Roles an ancestor must expose. Empty when unconstrained.
    pub required_context: &'static [&'static str],
    pub deprecated: bool,
    /// Whether the role takes its accessible name from descendant text.
    pub name_from_content: bool,
}

impl RoleDefinition {
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, RoleKind::Abstract)
    }

    /// Whether a non-global property is listed for this role, either as
    /// supported or as required.
    pub fn allows_property(&self, name: &str) -> bool {
        self.allowed_props.contains(&name)
            || self
                .required_props
                .iter()
                .any(|group| group.contains(&name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyValueType {
    Boolean,
    Tristate,
    IdRef,
    IdRefList,
    String,
    Token,
    TokenList,
    Integer,
    Number,
}

#[derive(Debug)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub value_type: PropertyValueType,
    /// Valid tokens for `Token`/`TokenList` types, and the extra tokens a
    /// `Boolean` property admits beyond true/false.
    pub allowed_values: &'static [&'static str],
    pub global: bool,
    pub deprecated: bool,
}

/// Exact-match role lookup. Role tokens are case-sensitive.
pub fn role(name: &str) -> Option<&'static RoleDefinition> {
    role_index().get(name).copied()
}

/// Exact-match property lookup.
pub fn property(name: &str) -> Option<&'static PropertyDefinition> {
    property_index().get(name).copied()
}

pub fn is_global(name: &str) -> bool {
    property(name).is_some_and(|p| p.global)
}

/// The role a host tag carries with no `role` attribute. `input`
/// dispatches on its `type` attribute; a missing or unknown type maps
/// like `type="text"`.
pub fn implicit_role(tag: &str, type_attr: Option<&str>) -> Option<&'static str> {
    if tag == "input" {
        let ty = type_attr.unwrap_or("text").to_ascii_lowercase();
        if roles::NO_ROLE_INPUT_TYPES.contains(&ty.as_str()) {
            return None;
        }
        return roles::INPUT_TYPE_ROLES
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, r)| *r)
            .or(Some("textbox"));
    }
    roles::IMPLICIT_ROLES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, r)| *r)
}

/// All role definitions, concrete and abstract.
pub fn all_roles() -> impl Iterator<Item = &'static RoleDefinition> {
    roles::ROLES.iter()
}

/// All property definitions.
pub fn all_properties() -> impl Iterator<Item = &'static PropertyDefinition> {
    props::PROPERTIES.iter()
}

fn role_index() -> &'static HashMap<&'static str, &'static RoleDefinition> {
    static INDEX: OnceLock<HashMap<&'static str, &'static RoleDefinition>> = OnceLock::new();
    INDEX.get_or_init(|| roles::ROLES.iter().map(|r| (r.name, r)).collect())
}

fn property_index() -> &'static HashMap<&'static str, &'static PropertyDefinition> {
    static INDEX: OnceLock<HashMap<&'static str, &'static PropertyDefinition>> = OnceLock::new();
    INDEX.get_or_init(|| props::PROPERTIES.iter().map(|p| (p.name, p)).collect())
}
