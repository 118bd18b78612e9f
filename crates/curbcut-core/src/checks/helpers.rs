//! Shared helper functions for check implementations.
//!
//! This module provides common element queries that are used across
//! multiple checks.

use crate::tree::{Document, NodeId};

/// First token of a literal `role` attribute, if any. Dynamic role
/// values yield `None`; callers that must distinguish them use
/// `Document::attr` directly.
pub fn explicit_role<'a>(doc: &'a Document, id: NodeId) -> Option<&'a str> {
    doc.attr_literal(id, "role")
        .and_then(|value| value.split_whitespace().next())
}

/// True for elements explicitly removed from the accessibility tree.
pub fn is_presentational(doc: &Document, id: NodeId) -> bool {
    matches!(explicit_role(doc, id), Some("presentation") | Some("none"))
}

/// True when a literal `tabindex` puts the element in the tab order.
/// A dynamic `tabindex` is not provably focusable and returns false.
pub fn is_focusable(doc: &Document, id: NodeId) -> bool {
    doc.attr_literal(id, "tabindex")
        .and_then(|value| value.trim().parse::<i32>().ok())
        .is_some_and(|index| index >= 0)
}

/// Lowercased literal `type` attribute of an `<input>`.
pub fn input_type(doc: &Document, id: NodeId) -> Option<String> {
    doc.attr_literal(id, "type")
        .map(|value| value.to_ascii_lowercase())
}

/// All element descendants of `root` in document order, excluding
/// `root` itself.
pub fn descendant_elements(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = doc.element_children(root).collect();
    stack.reverse();
    while let Some(id) = stack.pop() {
        out.push(id);
        let mut children: Vec<NodeId> = doc.element_children(id).collect();
        children.reverse();
        stack.extend(children);
    }
    out
}

/// True when `id` has a direct element child with the given tag.
pub fn has_element_child(doc: &Document, id: NodeId, tag: &str) -> bool {
    doc.element_children(id).any(|child| doc.tag(child) == tag)
}
