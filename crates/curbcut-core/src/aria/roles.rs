//! ARIA role definitions and host-language implicit roles
//!
//! One entry per WAI-ARIA 1.2 role, concrete and abstract, in
//! alphabetical order. Landmark roles carry host-tag restrictions;
//! everything else may sit on any element.

use super::{AllowedOn, RoleDefinition, RoleKind};

const fn base(name: &'static str, kind: RoleKind) -> RoleDefinition {
    RoleDefinition {
        name,
        kind,
        required_props: &[],
        allowed_props: &[],
        allowed_on: AllowedOn::Any,
        required_context: &[],
        deprecated: false,
        name_from_content: false,
    }
}

use RoleKind::{Abstract, Landmark, LiveRegion, Structure, Widget, Window};

pub(crate) static ROLES: &[RoleDefinition] = &[
    base("alert", LiveRegion),
    RoleDefinition {
        allowed_props: &["aria-modal"],
        ..base("alertdialog", Window)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-errormessage",
            "aria-expanded",
            "aria-haspopup",
            "aria-invalid",
        ],
        ..base("application", Structure)
    },
    RoleDefinition {
        allowed_props: &["aria-posinset", "aria-setsize"],
        ..base("article", Structure)
    },
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["header", "div", "section", "body"]),
        ..base("banner", Landmark)
    },
    base("blockquote", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-pressed",
        ],
        name_from_content: true,
        ..base("button", Widget)
    },
    RoleDefinition {
        required_context: &["figure", "grid", "table", "treegrid"],
        ..base("caption", Structure)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-colindex",
            "aria-colspan",
            "aria-rowindex",
            "aria-rowspan",
        ],
        required_context: &["row"],
        name_from_content: true,
        ..base("cell", Structure)
    },
    RoleDefinition {
        required_props: &[&["aria-checked"]],
        allowed_props: &[
            "aria-disabled",
            "aria-errormessage",
            "aria-expanded",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
        ],
        name_from_content: true,
        ..base("checkbox", Widget)
    },
    base("code", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-colindex",
            "aria-colspan",
            "aria-expanded",
            "aria-readonly",
            "aria-required",
            "aria-rowindex",
            "aria-rowspan",
            "aria-selected",
            "aria-sort",
        ],
        required_context: &["row"],
        name_from_content: true,
        ..base("columnheader", Structure)
    },
    RoleDefinition {
        required_props: &[&["aria-controls"], &["aria-expanded"]],
        allowed_props: &[
            "aria-activedescendant",
            "aria-autocomplete",
            "aria-disabled",
            "aria-errormessage",
            "aria-haspopup",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
        ],
        ..base("combobox", Widget)
    },
    base("command", Abstract),
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["aside", "div", "section"]),
        ..base("complementary", Landmark)
    },
    base("composite", Abstract),
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["footer", "div", "section", "body"]),
        ..base("contentinfo", Landmark)
    },
    base("definition", Structure),
    base("deletion", Structure),
    RoleDefinition {
        allowed_props: &["aria-modal"],
        ..base("dialog", Window)
    },
    RoleDefinition {
        deprecated: true,
        ..base("directory", Structure)
    },
    base("document", Structure),
    base("emphasis", Structure),
    base("feed", Structure),
    base("figure", Structure),
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["form", "div", "section"]),
        ..base("form", Landmark)
    },
    base("generic", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-colcount",
            "aria-disabled",
            "aria-multiselectable",
            "aria-readonly",
            "aria-rowcount",
        ],
        ..base("grid", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-colindex",
            "aria-colspan",
            "aria-disabled",
            "aria-errormessage",
            "aria-expanded",
            "aria-haspopup",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
            "aria-rowindex",
            "aria-rowspan",
            "aria-selected",
        ],
        required_context: &["row"],
        name_from_content: true,
        ..base("gridcell", Widget)
    },
    RoleDefinition {
        allowed_props: &["aria-activedescendant", "aria-disabled"],
        ..base("group", Structure)
    },
    RoleDefinition {
        required_props: &[&["aria-level"]],
        name_from_content: true,
        ..base("heading", Structure)
    },
    base("img", Structure),
    base("input", Abstract),
    base("insertion", Structure),
    base("landmark", Abstract),
    RoleDefinition {
        allowed_props: &["aria-disabled", "aria-expanded", "aria-haspopup"],
        name_from_content: true,
        ..base("link", Widget)
    },
    base("list", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-errormessage",
            "aria-expanded",
            "aria-invalid",
            "aria-multiselectable",
            "aria-orientation",
            "aria-readonly",
            "aria-required",
        ],
        ..base("listbox", Widget)
    },
    RoleDefinition {
        allowed_props: &["aria-level", "aria-posinset", "aria-setsize"],
        required_context: &["directory", "list"],
        ..base("listitem", Structure)
    },
    base("log", LiveRegion),
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["main", "div", "section", "article", "body"]),
        ..base("main", Landmark)
    },
    base("marquee", LiveRegion),
    base("math", Structure),
    RoleDefinition {
        allowed_props: &["aria-activedescendant", "aria-disabled", "aria-orientation"],
        ..base("menu", Widget)
    },
    RoleDefinition {
        allowed_props: &["aria-activedescendant", "aria-disabled", "aria-orientation"],
        ..base("menubar", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-posinset",
            "aria-setsize",
        ],
        required_context: &["group", "menu", "menubar"],
        name_from_content: true,
        ..base("menuitem", Widget)
    },
    RoleDefinition {
        required_props: &[&["aria-checked"]],
        allowed_props: &[
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-posinset",
            "aria-setsize",
        ],
        required_context: &["group", "menu", "menubar"],
        name_from_content: true,
        ..base("menuitemcheckbox", Widget)
    },
    RoleDefinition {
        required_props: &[&["aria-checked"]],
        allowed_props: &[
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-posinset",
            "aria-setsize",
        ],
        required_context: &["group", "menu", "menubar"],
        name_from_content: true,
        ..base("menuitemradio", Widget)
    },
    RoleDefinition {
        required_props: &[&["aria-valuenow"]],
        allowed_props: &["aria-valuemax", "aria-valuemin", "aria-valuetext"],
        ..base("meter", Structure)
    },
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["nav", "div", "section", "aside"]),
        ..base("navigation", Landmark)
    },
    base("none", Structure),
    base("note", Structure),
    RoleDefinition {
        required_props: &[&["aria-selected"]],
        allowed_props: &[
            "aria-checked",
            "aria-disabled",
            "aria-posinset",
            "aria-setsize",
        ],
        required_context: &["group", "listbox"],
        name_from_content: true,
        ..base("option", Widget)
    },
    base("paragraph", Structure),
    base("presentation", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        ..base("progressbar", Widget)
    },
    RoleDefinition {
        required_props: &[&["aria-checked"]],
        allowed_props: &["aria-disabled", "aria-posinset", "aria-setsize"],
        name_from_content: true,
        ..base("radio", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-errormessage",
            "aria-invalid",
            "aria-orientation",
            "aria-readonly",
            "aria-required",
        ],
        ..base("radiogroup", Widget)
    },
    base("range", Abstract),
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["section", "div", "main", "aside", "form", "article"]),
        ..base("region", Landmark)
    },
    base("roletype", Abstract),
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-colindex",
            "aria-disabled",
            "aria-expanded",
            "aria-level",
            "aria-posinset",
            "aria-rowindex",
            "aria-selected",
            "aria-setsize",
        ],
        required_context: &["grid", "rowgroup", "table", "treegrid"],
        name_from_content: true,
        ..base("row", Structure)
    },
    RoleDefinition {
        required_context: &["grid", "table", "treegrid"],
        ..base("rowgroup", Structure)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-colindex",
            "aria-colspan",
            "aria-expanded",
            "aria-readonly",
            "aria-required",
            "aria-rowindex",
            "aria-rowspan",
            "aria-selected",
            "aria-sort",
        ],
        required_context: &["row"],
        name_from_content: true,
        ..base("rowheader", Structure)
    },
    RoleDefinition {
        required_props: &[&["aria-controls"], &["aria-valuenow"]],
        allowed_props: &[
            "aria-disabled",
            "aria-orientation",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuetext",
        ],
        ..base("scrollbar", Widget)
    },
    RoleDefinition {
        allowed_on: AllowedOn::Tags(&["form", "div", "section", "aside", "nav"]),
        ..base("search", Landmark)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-autocomplete",
            "aria-disabled",
            "aria-errormessage",
            "aria-haspopup",
            "aria-invalid",
            "aria-multiline",
            "aria-placeholder",
            "aria-readonly",
            "aria-required",
        ],
        ..base("searchbox", Widget)
    },
    base("section", Abstract),
    base("sectionhead", Abstract),
    base("select", Abstract),
    RoleDefinition {
        allowed_props: &[
            "aria-disabled",
            "aria-orientation",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        ..base("separator", Structure)
    },
    RoleDefinition {
        required_props: &[&["aria-valuenow"]],
        allowed_props: &[
            "aria-disabled",
            "aria-errormessage",
            "aria-haspopup",
            "aria-invalid",
            "aria-orientation",
            "aria-readonly",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuetext",
        ],
        ..base("slider", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-errormessage",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        ..base("spinbutton", Widget)
    },
    base("status", LiveRegion),
    base("strong", Structure),
    base("structure", Abstract),
    base("subscript", Structure),
    base("superscript", Structure),
    RoleDefinition {
        required_props: &[&["aria-checked"]],
        allowed_props: &[
            "aria-disabled",
            "aria-errormessage",
            "aria-expanded",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
        ],
        name_from_content: true,
        ..base("switch", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-posinset",
            "aria-selected",
            "aria-setsize",
        ],
        required_context: &["tablist"],
        name_from_content: true,
        ..base("tab", Widget)
    },
    RoleDefinition {
        allowed_props: &["aria-colcount", "aria-rowcount"],
        ..base("table", Structure)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-multiselectable",
            "aria-orientation",
        ],
        ..base("tablist", Widget)
    },
    base("tabpanel", Widget),
    base("term", Structure),
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-autocomplete",
            "aria-disabled",
            "aria-errormessage",
            "aria-haspopup",
            "aria-invalid",
            "aria-multiline",
            "aria-placeholder",
            "aria-readonly",
            "aria-required",
        ],
        ..base("textbox", Widget)
    },
    base("time", Structure),
    base("timer", LiveRegion),
    RoleDefinition {
        allowed_props: &["aria-activedescendant", "aria-disabled", "aria-orientation"],
        ..base("toolbar", Structure)
    },
    RoleDefinition {
        name_from_content: true,
        ..base("tooltip", Structure)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-disabled",
            "aria-errormessage",
            "aria-invalid",
            "aria-multiselectable",
            "aria-orientation",
            "aria-required",
        ],
        ..base("tree", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-activedescendant",
            "aria-colcount",
            "aria-disabled",
            "aria-errormessage",
            "aria-invalid",
            "aria-multiselectable",
            "aria-orientation",
            "aria-readonly",
            "aria-required",
            "aria-rowcount",
        ],
        ..base("treegrid", Widget)
    },
    RoleDefinition {
        allowed_props: &[
            "aria-checked",
            "aria-disabled",
            "aria-expanded",
            "aria-haspopup",
            "aria-level",
            "aria-posinset",
            "aria-selected",
            "aria-setsize",
        ],
        required_context: &["group", "tree"],
        name_from_content: true,
        ..base("treeitem", Widget)
    },
    base("widget", Abstract),
    base("window", Abstract),
];

/// Implicit role of a host tag with no `role` attribute. `input` is
/// handled separately through [`INPUT_TYPE_ROLES`].
pub(crate) static IMPLICIT_ROLES: &[(&str, &str)] = &[
    ("a", "link"),
    ("article", "article"),
    ("aside", "complementary"),
    ("button", "button"),
    ("caption", "caption"),
    ("datalist", "listbox"),
    ("dd", "definition"),
    ("details", "group"),
    ("dfn", "term"),
    ("dialog", "dialog"),
    ("dt", "term"),
    ("fieldset", "group"),
    ("figure", "figure"),
    ("footer", "contentinfo"),
    ("form", "form"),
    ("h1", "heading"),
    ("h2", "heading"),
    ("h3", "heading"),
    ("h4", "heading"),
    ("h5", "heading"),
    ("h6", "heading"),
    ("header", "banner"),
    ("hr", "separator"),
    ("html", "document"),
    ("img", "img"),
    ("li", "listitem"),
    ("main", "main"),
    ("math", "math"),
    ("menu", "list"),
    ("meter", "meter"),
    ("nav", "navigation"),
    ("ol", "list"),
    ("optgroup", "group"),
    ("option", "option"),
    ("output", "status"),
    ("p", "paragraph"),
    ("progress", "progressbar"),
    ("search", "search"),
    ("section", "region"),
    ("select", "combobox"),
    ("table", "table"),
    ("tbody", "rowgroup"),
    ("td", "cell"),
    ("textarea", "textbox"),
    ("tfoot", "rowgroup"),
    ("th", "columnheader"),
    ("thead", "rowgroup"),
    ("time", "time"),
    ("tr", "row"),
    ("ul", "list"),
];

/// Implicit roles of `input` elements by `type`. Unknown types behave
/// like text inputs, matching the host language's fallback.
pub(crate) static INPUT_TYPE_ROLES: &[(&str, &str)] = &[
    ("button", "button"),
    ("checkbox", "checkbox"),
    ("email", "textbox"),
    ("image", "button"),
    ("number", "spinbutton"),
    ("radio", "radio"),
    ("range", "slider"),
    ("reset", "button"),
    ("search", "searchbox"),
    ("submit", "button"),
    ("tel", "textbox"),
    ("text", "textbox"),
    ("url", "textbox"),
];

/// `input` types that expose no role at all.
pub(crate) static NO_ROLE_INPUT_TYPES: &[&str] = &[
    "color",
    "date",
    "datetime-local",
    "file",
    "hidden",
    "month",
    "password",
    "time",
    "week",
];
