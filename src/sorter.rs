//! View records, grouping by container, and ordering.
//!
//! Only posts that share one immediate parent are ever reordered together.
//! The largest such group is the active group; everything else on the page
//! is left alone.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use dom_query::{Document, NodeId, NodeRef};

use crate::dom;
use crate::extractor::{extract_views, find_post_roots};
use crate::options::Options;

/// One post with its parsed view count.
#[derive(Clone, Copy)]
pub struct ViewRecord<'a> {
    /// Live handle to the post root.
    pub element: NodeRef<'a>,

    /// Parsed view count, always positive once the record is grouped.
    pub views: f64,

    /// Position in scan order, used only to break ties.
    pub index: usize,
}

/// Records that share one immediate parent container.
#[derive(Clone)]
pub struct PostGroup<'a> {
    /// The shared parent element.
    pub parent: NodeRef<'a>,

    /// Members, in discovery order until sorted.
    pub posts: Vec<ViewRecord<'a>>,
}

impl fmt::Debug for ViewRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRecord")
            .field("element", &self.element.id)
            .field("views", &self.views)
            .field("index", &self.index)
            .finish()
    }
}

impl fmt::Debug for PostGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostGroup")
            .field("parent", &self.parent.id)
            .field("posts", &self.posts)
            .finish()
    }
}

impl PostGroup<'_> {
    /// Number of posts in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the group has no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Builds records for `roots` and pairs each with its parent element.
///
/// Records with no positive count or no parent are dropped here, so every
/// returned record satisfies the grouping invariant.
#[must_use]
pub fn collect_records<'a>(
    roots: &[NodeRef<'a>],
    options: &Options,
) -> Vec<(ViewRecord<'a>, NodeRef<'a>)> {
    roots
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let views = extract_views(element, options);
            if views <= 0.0 {
                return None;
            }
            let parent = dom::parent_element(element)?;
            Some((
                ViewRecord {
                    element: *element,
                    views,
                    index,
                },
                parent,
            ))
        })
        .collect()
}

/// Partitions records by parent identity.
///
/// Groups come back in the order their parent was first seen; members keep
/// their input order.
#[must_use]
pub fn group_by_parent<'a>(records: Vec<(ViewRecord<'a>, NodeRef<'a>)>) -> Vec<PostGroup<'a>> {
    let mut slots: HashMap<NodeId, usize> = HashMap::new();
    let mut groups: Vec<PostGroup<'a>> = Vec::new();

    for (record, parent) in records {
        let slot = *slots.entry(parent.id).or_insert_with(|| {
            groups.push(PostGroup {
                parent,
                posts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].posts.push(record);
    }

    groups
}

/// Picks the group with the most members.
///
/// On equal sizes the first group in the input wins.
#[must_use]
pub fn largest_group(groups: Vec<PostGroup<'_>>) -> Option<PostGroup<'_>> {
    let mut best: Option<PostGroup<'_>> = None;
    for group in groups {
        if group.is_empty() {
            continue;
        }
        if best.as_ref().is_none_or(|b| group.len() > b.len()) {
            best = Some(group);
        }
    }
    best
}

/// Orders records by views descending, then by discovery index ascending.
pub fn sort_records(records: &mut [ViewRecord<'_>]) {
    records.sort_by(compare_records);
}

/// Two-key comparator behind [`sort_records`].
#[must_use]
pub fn compare_records(a: &ViewRecord<'_>, b: &ViewRecord<'_>) -> Ordering {
    b.views
        .total_cmp(&a.views)
        .then_with(|| a.index.cmp(&b.index))
}

/// Finds the active group and sorts it.
///
/// Returns `None` when the page has no post with a detectable view count.
#[must_use]
pub fn top_parent_group<'a>(doc: &'a Document, options: &Options) -> Option<PostGroup<'a>> {
    let roots = find_post_roots(doc, options);
    if roots.is_empty() {
        return None;
    }

    let records = collect_records(&roots, options);
    log::debug!(
        "{} of {} post roots have a view count",
        records.len(),
        roots.len()
    );

    let groups = group_by_parent(records);
    let mut group = largest_group(groups)?;
    sort_records(&mut group.posts);
    Some(group)
}
