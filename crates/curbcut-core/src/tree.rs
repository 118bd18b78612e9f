//! Semantic element tree
//!
//! This module provides the engine's input model: a tree of elements and
//! text nodes with source-ordered attributes. Hosts build it through the
//! `Element` builder or the HTML adapter.

use id_arena::{Arena, Id};

pub type NodeId = Id<Node>;

/// Position of a node in the original source, when the host knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub line: usize,
    pub column: usize,
}

/// An attribute value as seen by the host.
///
/// `Dynamic` marks a value the host could not resolve statically, such as
/// a template interpolation or a bound attribute. A dynamic value counts
/// as present; its text is unknowable and value checks skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Literal(String),
    Dynamic,
}

impl AttrValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            AttrValue::Literal(value) => Some(value),
            AttrValue::Dynamic => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, AttrValue::Dynamic)
    }
}

/// A single attribute. Names are stored lowercase; order is source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String, attrs: Vec<Attr> },
    Text(String),
}

#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub span: Option<SourceSpan>,
}

enum Piece {
    Element(Element),
    Text(String),
}

/// Fluent builder for one element and its subtree.
///
/// ```
/// use curbcut_core::tree::{Document, Element};
///
/// let doc = Document::from_roots(vec![
///     Element::new("button")
///         .attr("id", "save")
///         .text("Save"),
/// ]);
/// assert_eq!(doc.elements().count(), 1);
/// ```
pub struct Element {
    tag: String,
    attrs: Vec<Attr>,
    pieces: Vec<Piece>,
    span: Option<SourceSpan>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            pieces: Vec::new(),
            span: None,
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name: name.to_ascii_lowercase(),
            value: AttrValue::Literal(value.into()),
        });
        self
    }

    pub fn dynamic_attr(mut self, name: &str) -> Self {
        self.attrs.push(Attr {
            name: name.to_ascii_lowercase(),
            value: AttrValue::Dynamic,
        });
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.pieces.push(Piece::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.pieces.push(Piece::Element(child));
        self
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.span = Some(SourceSpan { line, column });
        self
    }
}

/// An immutable document tree over an id arena.
pub struct Document {
    arena: Arena<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn from_roots(roots: Vec<Element>) -> Self {
        let mut doc = Self {
            arena: Arena::new(),
            roots: Vec::new(),
        };
        for root in roots {
            let id = doc.insert(root, None);
            doc.roots.push(id);
        }
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let Element {
            tag,
            attrs,
            pieces,
            span,
        } = element;

        let id = self.arena.alloc_with_id(|id| Node {
            id,
            kind: NodeKind::Element { tag, attrs },
            parent,
            children: Vec::new(),
            span,
        });

        if let Some(parent_id) = parent {
            self.arena[parent_id].children.push(id);
        }

        for piece in pieces {
            match piece {
                Piece::Element(child) => {
                    self.insert(child, Some(id));
                }
                Piece::Text(text) => {
                    let text_id = self.arena.alloc_with_id(|text_id| Node {
                        id: text_id,
                        kind: NodeKind::Text(text),
                        parent: Some(id),
                        children: Vec::new(),
                        span: None,
                    });
                    self.arena[id].children.push(text_id);
                }
            }
        }

        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.arena[id].kind, NodeKind::Element { .. })
    }

    /// Tag name of an element, lowercase. Empty for text nodes.
    pub fn tag(&self, id: NodeId) -> &str {
        match &self.arena[id].kind {
            NodeKind::Element { tag, .. } => tag,
            NodeKind::Text(_) => "",
        }
    }

    pub fn attrs(&self, id: NodeId) -> &[Attr] {
        match &self.arena[id].kind {
            NodeKind::Element { attrs, .. } => attrs,
            NodeKind::Text(_) => &[],
        }
    }

    /// Attribute lookup, ASCII-case-insensitive on the name. First
    /// occurrence wins when the source repeats an attribute.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&AttrValue> {
        self.attrs(id)
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| &a.value)
    }

    /// The attribute's literal text. `None` when absent or dynamic.
    pub fn attr_literal(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attr(id, name).and_then(AttrValue::as_literal)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// The element's literal `id` attribute, if any.
    pub fn html_id(&self, id: NodeId) -> Option<&str> {
        self.attr_literal(id, "id")
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    /// Strict ancestors, parent first, root last.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: self.arena[id].parent,
        }
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena[id].children.iter().copied()
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(|&c| self.is_element(c))
    }

    /// All elements in document order (depth-first, pre-order).
    pub fn elements(&self) -> Elements<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        Elements { doc: self, stack }
    }

    /// Descendant text, whitespace-normalized: runs of whitespace collapse
    /// to a single space and the ends are trimmed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut raw = String::new();
        self.collect_text(id, &mut raw);
        let mut out = String::with_capacity(raw.len());
        for word in raw.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = &self.arena[id];
        match &node.kind {
            NodeKind::Text(text) => {
                out.push(' ');
                out.push_str(text);
            }
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub fn span(&self, id: NodeId) -> Option<SourceSpan> {
        self.arena[id].span
    }

    /// Short rendering of a node for messages, like `<button id="save">`.
    pub fn describe(&self, id: NodeId) -> String {
        match &self.arena[id].kind {
            NodeKind::Element { tag, .. } => match self.html_id(id) {
                Some(html_id) => format!("<{tag} id=\"{html_id}\">"),
                None => format!("<{tag}>"),
            },
            NodeKind::Text(_) => "#text".to_string(),
        }
    }
}

pub struct Ancestors<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.arena[id].parent;
        Some(id)
    }
}

pub struct Elements<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Elements<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.doc.arena[id];
            for &child in node.children.iter().rev() {
                self.stack.push(child);
            }
            if matches!(node.kind, NodeKind::Element { .. }) {
                return Some(id);
            }
        }
        None
    }
}
