//! ARIA state and property definitions

use super::{PropertyDefinition, PropertyValueType};

const fn prop(name: &'static str, value_type: PropertyValueType) -> PropertyDefinition {
    PropertyDefinition {
        name,
        value_type,
        allowed_values: &[],
        global: false,
        deprecated: false,
    }
}

const fn global(name: &'static str, value_type: PropertyValueType) -> PropertyDefinition {
    PropertyDefinition {
        global: true,
        ..prop(name, value_type)
    }
}

use PropertyValueType::{Boolean, IdRef, IdRefList, Integer, Number, String, Token, TokenList, Tristate};

pub(crate) static PROPERTIES: &[PropertyDefinition] = &[
    prop("aria-activedescendant", IdRef),
    global("aria-atomic", Boolean),
    PropertyDefinition {
        allowed_values: &["inline", "list", "both", "none"],
        ..prop("aria-autocomplete", Token)
    },
    global("aria-busy", Boolean),
    prop("aria-checked", Tristate),
    prop("aria-colcount", Integer),
    prop("aria-colindex", Integer),
    prop("aria-colspan", Integer),
    global("aria-controls", IdRefList),
    PropertyDefinition {
        allowed_values: &["page", "step", "location", "date", "time", "true", "false"],
        ..global("aria-current", Token)
    },
    global("aria-describedby", IdRefList),
    global("aria-details", IdRef),
    prop("aria-disabled", Boolean),
    PropertyDefinition {
        allowed_values: &["copy", "execute", "link", "move", "none", "popup"],
        deprecated: true,
        ..global("aria-dropeffect", TokenList)
    },
    prop("aria-errormessage", IdRef),
    PropertyDefinition {
        allowed_values: &["true", "false", "undefined"],
        ..prop("aria-expanded", Boolean)
    },
    global("aria-flowto", IdRefList),
    PropertyDefinition {
        allowed_values: &["true", "false", "undefined"],
        deprecated: true,
        ..global("aria-grabbed", Boolean)
    },
    PropertyDefinition {
        allowed_values: &["false", "true", "menu", "listbox", "tree", "grid", "dialog"],
        ..prop("aria-haspopup", Token)
    },
    PropertyDefinition {
        allowed_values: &["true", "false", "undefined"],
        ..global("aria-hidden", Boolean)
    },
    PropertyDefinition {
        allowed_values: &["grammar", "false", "spelling", "true"],
        ..prop("aria-invalid", Token)
    },
    global("aria-keyshortcuts", String),
    global("aria-label", String),
    global("aria-labelledby", IdRefList),
    prop("aria-level", Integer),
    PropertyDefinition {
        allowed_values: &["assertive", "off", "polite"],
        ..global("aria-live", Token)
    },
    prop("aria-modal", Boolean),
    prop("aria-multiline", Boolean),
    prop("aria-multiselectable", Boolean),
    PropertyDefinition {
        allowed_values: &["horizontal", "vertical", "undefined"],
        ..prop("aria-orientation", Token)
    },
    global("aria-owns", IdRefList),
    prop("aria-placeholder", String),
    prop("aria-posinset", Integer),
    prop("aria-pressed", Tristate),
    prop("aria-readonly", Boolean),
    PropertyDefinition {
        allowed_values: &["additions", "all", "removals", "text"],
        ..global("aria-relevant", TokenList)
    },
    prop("aria-required", Boolean),
    global("aria-roledescription", String),
    prop("aria-rowcount", Integer),
    prop("aria-rowindex", Integer),
    prop("aria-rowspan", Integer),
    PropertyDefinition {
        allowed_values: &["true", "false", "undefined"],
        ..prop("aria-selected", Boolean)
    },
    prop("aria-setsize", Integer),
    PropertyDefinition {
        allowed_values: &["ascending", "descending", "none", "other"],
        ..prop("aria-sort", Token)
    },
    prop("aria-valuemax", Number),
    prop("aria-valuemin", Number),
    prop("aria-valuenow", Number),
    prop("aria-valuetext", String),
];
