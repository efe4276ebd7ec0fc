//! Post discovery and view-count extraction.
//!
//! Finds the post roots on a feed page and reads one view count per post,
//! preferring explicit accessibility labels over free text.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef};

use crate::count::parse_count;
use crate::dom;
use crate::options::Options;
use crate::patterns::{HAS_DIGIT, VIEW_COUNT_TEXT, VIEW_KEYWORD};

/// Finds candidate post roots in document order.
///
/// Every element matching `options.candidate_selector` is normalized to its
/// closest `options.root_tag` ancestor (or itself), then duplicates are
/// dropped so each physical post appears once.
///
/// # Example
///
/// ```rust
/// use rs_instasort::{dom, extractor, Options};
///
/// let doc = dom::parse(r#"
///     <main>
///         <article><div role="button" tabindex="0">tile</div></article>
///         <article>second</article>
///     </main>
/// "#);
/// let roots = extractor::find_post_roots(&doc, &Options::default());
/// assert_eq!(roots.len(), 2);
/// ```
#[must_use]
pub fn find_post_roots<'a>(doc: &'a Document, options: &Options) -> Vec<NodeRef<'a>> {
    let candidates = dom::query_selector_all(doc, &options.candidate_selector);

    let mut seen: HashSet<NodeId> = HashSet::with_capacity(candidates.len());
    let mut roots = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let root = dom::closest_with_tag(&candidate, &options.root_tag).unwrap_or(candidate);
        if seen.insert(root.id) {
            roots.push(root);
        }
    }

    log::debug!(
        "found {} post roots for selector {:?}",
        roots.len(),
        options.candidate_selector
    );
    roots
}

/// Reads the view count of one post, `0.0` when none is found.
///
/// Explicit counters come first: descendants whose `aria-label` or
/// `data-testid` carries one of the configured keywords. Their label (or
/// text, when the label is missing) must mention views/plays and contain a
/// digit. Otherwise the first "N views"/"N plays" phrase in the post's text
/// is used.
///
/// A label mentions views when it matches "views"/"plays" or contains one of
/// the configured keywords, so localized labels ("Aufrufe: 5") are read once
/// their keyword is configured.
#[must_use]
pub fn extract_views(element: &NodeRef, options: &Options) -> f64 {
    for node in dom::element_descendants(element) {
        if !is_explicit_counter(&node, options) {
            continue;
        }

        let text = dom::get_attribute(&node, "aria-label")
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| dom::text_content(&node));
        if text.is_empty() {
            continue;
        }

        if mentions_views(&text, options) && HAS_DIGIT.is_match(&text) {
            let views = parse_count(&text);
            if views > 0.0 {
                return views;
            }
        }
    }

    let all_text = dom::text_content(element);
    if let Some(found) = VIEW_COUNT_TEXT.find(&all_text) {
        let views = parse_count(found.as_str());
        if views > 0.0 {
            return views;
        }
    }

    0.0
}

/// Whether a node is marked as a view counter by its `aria-label` or `data-testid`.
fn is_explicit_counter(node: &NodeRef, options: &Options) -> bool {
    attribute_contains_any(node, "aria-label", &options.label_keywords)
        || attribute_contains_any(node, "data-testid", &options.testid_keywords)
}

fn mentions_views(text: &str, options: &Options) -> bool {
    VIEW_KEYWORD.is_match(text)
        || contains_any(text, &options.label_keywords)
        || contains_any(text, &options.testid_keywords)
}

fn attribute_contains_any(node: &NodeRef, name: &str, keywords: &[String]) -> bool {
    let Some(value) = dom::get_attribute(node, name) else {
        return false;
    };
    contains_any(&value, keywords)
}

fn contains_any(value: &str, keywords: &[String]) -> bool {
    let value = value.to_lowercase();
    keywords
        .iter()
        .any(|k| !k.is_empty() && value.contains(&k.to_lowercase()))
}
