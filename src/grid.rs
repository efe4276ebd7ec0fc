//! Grid row redistribution for the reels tab.
//!
//! The reels grid renders tiles in fixed-width rows, each row its own
//! container. Sorting inside one row only shuffles three tiles, so in grid
//! mode the tiles of every sibling row are sorted together and the rows are
//! refilled in order.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{extract_views, find_post_roots};
use crate::options::Options;
use crate::sorter::{collect_records, sort_records, PostGroup, ViewRecord};

/// Finds the row containers of the grid `group` lives in.
///
/// With `options.row_selector` set, candidate rows are whatever it matches.
/// Otherwise they are the element children of the group parent's own
/// parent, which is how the reels grid nests rows inside one grid
/// container. Either way a candidate only counts as a row when it directly
/// holds at least one counted post, so footers and other siblings never
/// receive tiles.
#[must_use]
pub fn find_rows<'a>(
    doc: &'a Document,
    group: &PostGroup<'a>,
    options: &Options,
) -> Vec<NodeRef<'a>> {
    let candidates = match options.row_selector.as_deref() {
        Some(selector) => dom::query_selector_all(doc, selector),
        None => dom::parent_element(&group.parent)
            .map(|grid| dom::element_children(&grid))
            .unwrap_or_default(),
    };

    let holders: HashSet<NodeId> = collect_records(&find_post_roots(doc, options), options)
        .into_iter()
        .map(|(_, parent)| parent.id)
        .collect();

    let total = candidates.len();
    let rows: Vec<NodeRef<'a>> = candidates
        .into_iter()
        .filter(|row| holders.contains(&row.id))
        .collect();

    if rows.len() < total {
        log::debug!(
            "skipped {} row candidates without counted posts",
            total - rows.len()
        );
    }
    rows
}

/// Collects the counted tiles of every row, in reading order.
///
/// Tiles without a view count are not part of the result and stay where
/// they are.
#[must_use]
pub fn collect_tiles<'a>(rows: &[NodeRef<'a>], options: &Options) -> Vec<ViewRecord<'a>> {
    rows.iter()
        .flat_map(|row| dom::element_children(row))
        .enumerate()
        .filter_map(|(index, element)| {
            let views = extract_views(&element, options);
            (views > 0.0).then_some(ViewRecord {
                element,
                views,
                index,
            })
        })
        .collect()
}

/// Sorts the tiles of all `rows` together and refills the rows in order.
///
/// Each row but the last receives `row_size` tiles; the last row takes the
/// remainder. Returns the number of tiles placed.
pub fn redistribute_rows(rows: &[NodeRef], row_size: usize, options: &Options) -> Result<usize> {
    if row_size == 0 {
        return Err(Error::InvalidOptions("row_size must be at least 1".to_string()));
    }
    let Some(last_row) = rows.last() else {
        return Ok(0);
    };

    let mut tiles = collect_tiles(rows, options);
    sort_records(&mut tiles);

    for tile in &tiles {
        dom::detach(&tile.element);
    }

    for (i, tile) in tiles.iter().enumerate() {
        let row = rows.get(i / row_size).unwrap_or(last_row);
        dom::append_child(row, &tile.element);
    }

    log::debug!(
        "redistributed {} tiles over {} rows of {}",
        tiles.len(),
        rows.len(),
        row_size
    );
    Ok(tiles.len())
}
