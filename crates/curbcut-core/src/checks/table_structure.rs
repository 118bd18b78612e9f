//! table-structure check: data tables must be navigable
//!
//! Applies to tables that keep their table semantics. A table that uses
//! headers on both axes needs `scope` on every header cell so cell
//! announcements pick the right ones.

use crate::checks::helpers::{descendant_elements, has_element_child};
use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

declare_check!(
    TableStructure,
    id = "table-structure",
    name = "Data tables must be marked up correctly",
    description = "Data tables need a caption, header cells, and scope on two-axis headers",
    category = Structure,
    impact = Serious,
    rules = ["table-caption", "table-missing-header", "th-missing-scope"]
);

impl Check for TableStructure {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            if doc.tag(id) != "table" {
                continue;
            }
            match doc.attr(id, "role") {
                Some(AttrValue::Dynamic) => continue,
                Some(AttrValue::Literal(role))
                    if role.split_whitespace().next() != Some("table") =>
                {
                    continue;
                }
                _ => {}
            }

            if !has_element_child(doc, id, "caption") && !ctx.name(id).is_present() {
                violations.push(
                    Violation::new(
                        "table-caption",
                        Impact::Moderate,
                        format!("{} has no caption", doc.describe(id)),
                        id,
                    )
                    .with_help("Add a <caption>, or label the table with aria-label"),
                );
            }

            let descendants = descendant_elements(doc, id);
            let header_cells: Vec<NodeId> = descendants
                .iter()
                .copied()
                .filter(|&cell| doc.tag(cell) == "th")
                .collect();

            if header_cells.is_empty() {
                violations.push(
                    Violation::new(
                        "table-missing-header",
                        Impact::Serious,
                        format!("{} has no header cells", doc.describe(id)),
                        id,
                    )
                    .with_help("Mark header cells with <th>"),
                );
                continue;
            }

            if has_both_header_axes(doc, &descendants) {
                for cell in header_cells {
                    if !doc.has_attr(cell, "scope") {
                        violations.push(
                            Violation::new(
                                "th-missing-scope",
                                Impact::Moderate,
                                format!(
                                    "{} needs a scope attribute in a two-axis table",
                                    doc.describe(cell)
                                ),
                                cell,
                            )
                            .with_help("Add scope=\"col\" or scope=\"row\""),
                        );
                    }
                }
            }
        }

        violations
    }
}

/// True when the table has a header row (all cells `th`) and at least
/// one body row led by a `th` row header.
fn has_both_header_axes(doc: &Document, descendants: &[NodeId]) -> bool {
    let mut has_header_row = false;
    let mut has_row_header = false;

    for &row in descendants.iter().filter(|&&n| doc.tag(n) == "tr") {
        let cells: Vec<NodeId> = doc
            .element_children(row)
            .filter(|&cell| matches!(doc.tag(cell), "th" | "td"))
            .collect();
        if cells.is_empty() {
            continue;
        }
        if cells.iter().all(|&cell| doc.tag(cell) == "th") {
            has_header_row = true;
        } else if doc.tag(cells[0]) == "th" {
            has_row_header = true;
        }
    }

    has_header_row && has_row_header
}
