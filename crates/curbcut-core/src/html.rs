//! HTML adapter: raw markup in, semantic tree out
//!
//! Wraps `scraper` parsing and maps template syntax onto the tree's
//! dynamic-attribute model: moustache interpolations and framework
//! bindings become [`AttrValue::Dynamic`] so the checks judge only what
//! the markup actually pins down.
//!
//! [`AttrValue::Dynamic`]: crate::tree::AttrValue::Dynamic

use scraper::node::Node;
use scraper::{ElementRef, Html};

use crate::tree::{Document, Element};

/// Subtrees whose content never reaches assistive technology.
const INERT_TAGS: &[&str] = &["script", "style", "template"];

/// Parses HTML text into a [`Document`].
///
/// The parser synthesizes the `html`/`head`/`body` shell around fragments;
/// synthesized elements carry no source span.
pub fn parse_document(source: &str) -> Document {
    let html = Html::parse_document(source);
    let mut locator = LineLocator::new(source);

    let mut roots = Vec::new();
    for child in html.tree.root().children() {
        if let Some(element) = ElementRef::wrap(child) {
            roots.push(build_element(element, &mut locator));
        }
    }

    Document::from_roots(roots)
}

fn build_element(element: ElementRef<'_>, locator: &mut LineLocator) -> Element {
    let tag = element.value().name();
    let mut built = Element::new(tag);

    if let Some((line, column)) = locator.locate(tag) {
        built = built.at(line, column);
    }

    for (name, value) in element.value().attrs() {
        built = match dynamic_name(name, value) {
            Some(exposed) => built.dynamic_attr(exposed),
            None => built.attr(name, value),
        };
    }

    if INERT_TAGS.contains(&tag) {
        return built;
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            built = built.child(build_element(child_element, locator));
        } else if let Node::Text(text) = child.value() {
            built = built.text(&*text.text);
        }
    }

    built
}

/// Recognizes template syntax. Returns the attribute name to expose when
/// the value cannot be known statically.
fn dynamic_name<'a>(name: &'a str, value: &str) -> Option<&'a str> {
    if let Some(stripped) = name.strip_prefix("v-bind:") {
        return Some(stripped);
    }
    if let Some(stripped) = name.strip_prefix(':') {
        if !stripped.is_empty() {
            return Some(stripped);
        }
    }
    // v-model drives the control's value from component state.
    if name == "v-model" || name.starts_with("v-model.") {
        return Some("value");
    }
    if let Some(open) = value.find("{{") {
        if value[open..].contains("}}") {
            return Some(name);
        }
    }
    None
}

/// Estimates source positions by scanning the raw text alongside the
/// build. The parser does not report positions; walking the text for the
/// next `<tag` occurrence in document order is accurate enough for
/// reporting.
struct LineLocator<'a> {
    source: &'a [u8],
    line_starts: Vec<usize>,
    cursor: usize,
}

impl<'a> LineLocator<'a> {
    fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            source: source.as_bytes(),
            line_starts,
            cursor: 0,
        }
    }

    /// Next opening of `tag` at or after the previous match, as a
    /// 1-based (line, column) pair.
    fn locate(&mut self, tag: &str) -> Option<(usize, usize)> {
        let tag = tag.as_bytes();
        let mut i = self.cursor;
        while i + tag.len() < self.source.len() {
            if self.source[i] == b'<'
                && self.source[i + 1..i + 1 + tag.len()].eq_ignore_ascii_case(tag)
                && ends_tag_name(self.source.get(i + 1 + tag.len()).copied())
            {
                self.cursor = i + 1;
                return Some(self.position(i));
            }
            i += 1;
        }
        None
    }

    fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;
        (line, column)
    }
}

fn ends_tag_name(byte: Option<u8>) -> bool {
    matches!(
        byte,
        None | Some(b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'>')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeId;

    fn first(doc: &Document, tag: &str) -> NodeId {
        doc.elements()
            .find(|&id| doc.tag(id) == tag)
            .unwrap_or_else(|| panic!("no <{tag}> in document"))
    }

    #[test]
    fn builds_elements_and_attributes() {
        let doc = parse_document(r#"<div id="app"><img src="logo.png" alt="Logo"></div>"#);

        let img = first(&doc, "img");
        assert_eq!(doc.attr_literal(img, "alt"), Some("Logo"));
        assert_eq!(doc.attr_literal(img, "src"), Some("logo.png"));
        assert_eq!(doc.tag(doc.parent(img).unwrap()), "div");
    }

    #[test]
    fn document_shell_is_synthesized_without_spans() {
        let doc = parse_document("<p>hi</p>");

        let tags: Vec<_> = doc.elements().map(|id| doc.tag(id).to_string()).collect();
        assert_eq!(tags, vec!["html", "head", "body", "p"]);
        assert!(doc.span(first(&doc, "html")).is_none());
        assert!(doc.span(first(&doc, "p")).is_some());
    }

    #[test]
    fn moustache_values_become_dynamic() {
        let doc = parse_document(r#"<img src="x.png" alt="{{caption}}">"#);

        let img = first(&doc, "img");
        assert!(doc.attr(img, "alt").unwrap().is_dynamic());
        assert_eq!(doc.attr_literal(img, "src"), Some("x.png"));
    }

    #[test]
    fn colon_prefix_is_stripped_and_dynamic() {
        let doc = parse_document(r#"<button :aria-label="label()">Save</button>"#);

        let button = first(&doc, "button");
        assert!(doc.attr(button, "aria-label").unwrap().is_dynamic());
        assert!(!doc.has_attr(button, ":aria-label"));
    }

    #[test]
    fn v_bind_prefix_is_stripped_and_dynamic() {
        let doc = parse_document(r#"<button v-bind:aria-expanded="open">Menu</button>"#);

        let button = first(&doc, "button");
        assert!(doc.attr(button, "aria-expanded").unwrap().is_dynamic());
    }

    #[test]
    fn v_model_binds_the_value_attribute() {
        let doc = parse_document(r#"<input v-model="query">"#);

        let input = first(&doc, "input");
        assert!(doc.attr(input, "value").unwrap().is_dynamic());
    }

    #[test]
    fn script_text_is_not_document_text() {
        let doc = parse_document(r#"<div><script>let a = "words";</script></div>"#);

        let div = first(&doc, "div");
        assert_eq!(doc.text_content(div), "");
    }

    #[test]
    fn template_subtrees_are_inert() {
        let doc = parse_document(r#"<div><template><img src="x.png"></template></div>"#);

        assert!(doc.elements().all(|id| doc.tag(id) != "img"));
    }

    #[test]
    fn mixed_text_and_markup_collects_in_order() {
        let doc = parse_document(r#"<a href="/docs">Read the <b>docs</b></a>"#);

        let a = first(&doc, "a");
        assert_eq!(doc.text_content(a), "Read the docs");
    }

    #[test]
    fn spans_reflect_source_lines() {
        let source = "<main>\n  <img src=\"a.png\" alt=\"A\">\n</main>\n";
        let doc = parse_document(source);

        let main = first(&doc, "main");
        let img = first(&doc, "img");
        assert_eq!(doc.span(main).map(|s| (s.line, s.column)), Some((1, 1)));
        assert_eq!(doc.span(img).map(|s| (s.line, s.column)), Some((2, 3)));
    }

    #[test]
    fn repeated_tags_advance_through_the_source() {
        let source = "<img src=\"a.png\" alt=\"A\">\n<img src=\"b.png\" alt=\"B\">\n";
        let doc = parse_document(source);

        let lines: Vec<_> = doc
            .elements()
            .filter(|&id| doc.tag(id) == "img")
            .map(|id| doc.span(id).unwrap().line)
            .collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn uppercase_source_tags_are_located() {
        let source = "<DIV>\n<IMG src=\"x.png\" alt=\"y\">\n</DIV>";
        let doc = parse_document(source);

        let img = first(&doc, "img");
        assert_eq!(doc.span(img).map(|s| s.line), Some(2));
    }

    #[test]
    fn similar_tag_prefixes_do_not_match() {
        // <i> must not claim the <img> opening.
        let source = "<p><img src=\"x.png\" alt=\"y\"> <i>note</i></p>";
        let doc = parse_document(source);

        let i = first(&doc, "i");
        assert_eq!(doc.span(i).map(|s| s.column), Some(30));
    }
}
