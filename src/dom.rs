//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` node handles. A [`NodeRef`] is a live
//! handle into a [`Document`]: the document owns the tree and uses interior
//! mutability, so handles stay valid while nodes are detached and
//! re-inserted. Handles are borrowed per call and never stored.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Node Information ===

/// Check whether the node is an element with the given tag name
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<StrTendril> {
    node.attr(name)
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Navigation ===

/// Get the immediate parent if it is an element
///
/// The document node and detached nodes have no parent element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Get the closest ancestor-or-self element with the given tag
#[must_use]
pub fn closest_with_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    let mut current = Some(*node);
    while let Some(n) = current {
        if has_tag(&n, tag) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

/// Get direct element children, skipping text and comment nodes
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Get all element descendants in document order
#[must_use]
pub fn element_descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select("*").nodes().to_vec()
}

/// Check whether `node` currently sits directly under `parent`
#[must_use]
pub fn is_child_of(node: &NodeRef, parent: &NodeRef) -> bool {
    node.parent().is_some_and(|p| p.id == parent.id)
}

/// Query all elements by CSS selector, in document order
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Vec<NodeRef<'a>> {
    doc.select(selector).nodes().to_vec()
}

// === Tree Manipulation ===

/// Detach a node from its parent, keeping it alive for re-insertion
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}

/// Move `node` to be the previous sibling of `reference`
///
/// Like DOM `insertBefore`, a node that is still attached elsewhere is
/// taken out of its old position first.
#[inline]
pub fn insert_before(reference: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    reference.insert_before(node);
}

/// Move `node` to be the last child of `parent`
#[inline]
pub fn append_child(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}
