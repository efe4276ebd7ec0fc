//! Moves post nodes into sorted order inside their container.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::dom;
use crate::error::{Error, Result};
use crate::sorter::ViewRecord;

/// Reorders `posts` inside `parent` and returns how many were placed.
///
/// The anchor is the slot of the earliest post among the container's
/// element children. After the posts are detached, the block is inserted
/// before whichever element now occupies that slot, or appended when the
/// slot is past the end. Siblings that are not posts keep their relative
/// order. Posts that already left `parent` skip the detach step; inserting
/// them still moves them back under `parent`.
///
/// # Example
///
/// ```rust
/// use rs_instasort::{dom, reorder, sorter, Options};
///
/// let doc = dom::parse(r#"<div id="feed">
///     <article id="a">5 views</article><article id="b">9 views</article>
/// </div>"#);
/// let group = sorter::top_parent_group(&doc, &Options::default()).unwrap();
/// let moved = reorder::reorder_within_parent(&group.parent, &group.posts)?;
/// assert_eq!(moved, 2);
/// # Ok::<(), rs_instasort::Error>(())
/// ```
pub fn reorder_within_parent(parent: &NodeRef, posts: &[ViewRecord]) -> Result<usize> {
    if posts.is_empty() {
        return Ok(0);
    }
    if !parent.is_element() {
        return Err(Error::DomError(format!(
            "container {:?} is not an element",
            parent.id
        )));
    }

    let targets: HashSet<NodeId> = posts.iter().map(|p| p.element.id).collect();
    let children = dom::element_children(parent);
    let anchor = children
        .iter()
        .position(|c| targets.contains(&c.id))
        .unwrap_or(children.len());

    for post in posts {
        if dom::is_child_of(&post.element, parent) {
            dom::detach(&post.element);
        } else {
            log::warn!("post {:?} left its container before reordering", post.element.id);
        }
    }

    let reference = dom::element_children(parent).get(anchor).copied();
    for post in posts {
        match &reference {
            Some(node) => dom::insert_before(node, &post.element),
            None => dom::append_child(parent, &post.element),
        }
    }

    Ok(posts.len())
}
