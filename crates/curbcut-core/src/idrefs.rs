//! ID reference integrity
//!
//! ARIA relationship properties (`aria-labelledby`, `aria-controls` and
//! friends) point at other elements by id. A reference that resolves to
//! nothing is silently ignored by assistive technology, which makes the
//! mistake invisible to the author.

use std::collections::HashMap;

use crate::aria::{self, PropertyValueType};
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

/// Every literal `id` in a document. First occurrence wins, matching how
/// browsers resolve duplicate ids.
#[derive(Debug)]
pub struct IdRegistry {
    map: HashMap<String, NodeId>,
    has_dynamic: bool,
}

impl IdRegistry {
    pub fn build(doc: &Document) -> Self {
        let mut map: HashMap<String, NodeId> = HashMap::new();
        let mut has_dynamic = false;

        for node in doc.elements() {
            match doc.attr(node, "id") {
                Some(AttrValue::Dynamic) => has_dynamic = true,
                Some(AttrValue::Literal(value)) if !value.is_empty() => {
                    map.entry(value.clone()).or_insert(node);
                }
                _ => {}
            }
        }

        Self { map, has_dynamic }
    }

    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.map.get(id).copied()
    }

    /// True when at least one element carries an id the engine cannot
    /// know statically. Dangling-reference reporting is unsound in that
    /// case: the missing target may be the dynamic one.
    pub fn has_dynamic_ids(&self) -> bool {
        self.has_dynamic
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Check every IdRef/IdRefList property in the document against the
/// registry.
pub fn validate(doc: &Document, registry: &IdRegistry) -> Vec<Violation> {
    let mut violations = Vec::new();
    if registry.has_dynamic_ids() {
        return violations;
    }

    for node in doc.elements() {
        for attr in doc.attrs(node) {
            if !attr.name.starts_with("aria-") {
                continue;
            }
            let Some(def) = aria::property(&attr.name) else {
                continue;
            };
            if !matches!(
                def.value_type,
                PropertyValueType::IdRef | PropertyValueType::IdRefList
            ) {
                continue;
            }
            let AttrValue::Literal(value) = &attr.value else {
                continue;
            };

            for token in value.split_whitespace() {
                if registry.lookup(token).is_none() {
                    violations.push(
                        Violation::new(
                            "aria-invalid-id-reference",
                            Impact::Serious,
                            format!(
                                "\"{}\" on {} references \"{}\", which matches no element id",
                                attr.name,
                                doc.describe(node),
                                token
                            ),
                            node,
                        )
                        .with_help(format!(
                            "Add id=\"{}\" to the target element, or fix the reference",
                            token
                        )),
                    );
                }
            }
        }
    }

    violations
}
