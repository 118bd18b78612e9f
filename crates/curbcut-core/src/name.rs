//! Accessible name resolution
//!
//! A trimmed-down text-alternative computation: enough of the real
//! algorithm to decide whether a control is announced as *something*,
//! and what that something is. Steps apply in precedence order and the
//! first one that yields a candidate wins.

use crate::aria::{self, EffectiveRole};
use crate::idrefs::IdRegistry;
use crate::tree::{AttrValue, Document, NodeId};

/// Form controls that participate in `<label>` association.
const LABELABLE_TAGS: &[&str] = &["input", "select", "textarea", "meter", "output", "progress"];

/// Which naming step produced the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    LabelledBy,
    AriaLabel,
    Label,
    Contents,
    Title,
    None,
}

/// The outcome of name resolution for one element.
///
/// `text` is `None` in two situations: no step produced a name
/// (`source` is `NameSource::None`), or a naming attribute was dynamic
/// and the text is unknowable (`source` records which step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleName {
    pub text: Option<String>,
    pub source: NameSource,
}

impl AccessibleName {
    fn from_text(text: String, source: NameSource) -> Self {
        Self { text: Some(text), source }
    }

    fn unknowable(source: NameSource) -> Self {
        Self { text: None, source }
    }

    fn missing() -> Self {
        Self { text: None, source: NameSource::None }
    }

    /// True when the element has a name, including an unknowable dynamic
    /// one. Checks that require a name must accept a dynamic name.
    pub fn is_present(&self) -> bool {
        self.source != NameSource::None
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Resolve the accessible name of an element.
pub fn resolve_name(doc: &Document, registry: &IdRegistry, id: NodeId) -> AccessibleName {
    match doc.attr(id, "aria-labelledby") {
        Some(AttrValue::Dynamic) => return AccessibleName::unknowable(NameSource::LabelledBy),
        Some(AttrValue::Literal(value)) => {
            // Referenced elements contribute plain text content; the
            // computation never recurses through their own labels.
            let text = value
                .split_whitespace()
                .filter_map(|token| registry.lookup(token))
                .map(|target| doc.text_content(target))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !text.is_empty() {
                return AccessibleName::from_text(text, NameSource::LabelledBy);
            }
        }
        None => {}
    }

    match doc.attr(id, "aria-label") {
        Some(AttrValue::Dynamic) => return AccessibleName::unknowable(NameSource::AriaLabel),
        Some(AttrValue::Literal(value)) if !value.trim().is_empty() => {
            return AccessibleName::from_text(value.trim().to_string(), NameSource::AriaLabel);
        }
        _ => {}
    }

    if LABELABLE_TAGS.contains(&doc.tag(id)) {
        if let Some(text) = host_label_text(doc, id) {
            return AccessibleName::from_text(text, NameSource::Label);
        }
    }

    if let EffectiveRole::Known(def) = aria::effective_role(doc, id) {
        if def.name_from_content {
            let text = doc.text_content(id);
            if !text.is_empty() {
                return AccessibleName::from_text(text, NameSource::Contents);
            }
        }
    }

    match doc.attr(id, "title") {
        Some(AttrValue::Dynamic) => return AccessibleName::unknowable(NameSource::Title),
        Some(AttrValue::Literal(value)) if !value.trim().is_empty() => {
            return AccessibleName::from_text(value.trim().to_string(), NameSource::Title);
        }
        _ => {}
    }

    AccessibleName::missing()
}

/// Text of an associated `<label>`: a `for` attribute matching the
/// control's id, or a wrapping label ancestor. Empty labels count as no
/// label.
fn host_label_text(doc: &Document, id: NodeId) -> Option<String> {
    if let Some(html_id) = doc.html_id(id) {
        for node in doc.elements() {
            if doc.tag(node) == "label" && doc.attr_literal(node, "for") == Some(html_id) {
                let text = doc.text_content(node);
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }

    doc.ancestors(id)
        .find(|&ancestor| doc.tag(ancestor) == "label")
        .map(|label| doc.text_content(label))
        .filter(|text| !text.is_empty())
}
