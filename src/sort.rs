//! Top-level sort flow and request dispatch.
//!
//! Every entry point here returns a [`Response`]; failures inside the flow
//! are logged and turned into failure responses. The tree is not rolled
//! back when a move fails halfway.

use dom_query::Document;

use crate::error::{Error, Result};
use crate::grid::{find_rows, redistribute_rows};
use crate::message::{Request, Response};
use crate::options::Options;
use crate::reorder::reorder_within_parent;
use crate::sorter::top_parent_group;

/// Counts from a completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortSummary {
    pub posts_found: usize,
    pub posts_sorted: usize,
}

/// Sorts the active group of `doc` by views and reorders the tree.
pub(crate) fn sort_by_views(doc: &Document, options: &Options) -> Response {
    match try_sort(doc, options) {
        Ok(Some(summary)) => {
            log::info!(
                "sorted {} of {} posts by views",
                summary.posts_sorted,
                summary.posts_found
            );
            Response::sorted(summary.posts_found, summary.posts_sorted)
        }
        Ok(None) => {
            log::info!("no posts with detectable views");
            Response::no_posts()
        }
        Err(err) => failure(&err, options),
    }
}

fn try_sort(doc: &Document, options: &Options) -> Result<Option<SortSummary>> {
    options.validate()?;
    options.check_site()?;

    let Some(group) = top_parent_group(doc, options) else {
        return Ok(None);
    };

    if let Some(row_size) = options.row_size {
        let rows = find_rows(doc, &group, options);
        if rows.len() > 1 {
            let placed = redistribute_rows(&rows, row_size, options)?;
            return Ok(Some(SortSummary {
                posts_found: group.len(),
                posts_sorted: placed,
            }));
        }
    }

    let moved = reorder_within_parent(&group.parent, &group.posts)?;
    Ok(Some(SortSummary {
        posts_found: group.len(),
        posts_sorted: moved,
    }))
}

/// Reports the number of grid rows around the active group.
pub(crate) fn log_reel_rows(doc: &Document, options: &Options) -> Response {
    let counted = options.validate().and_then(|()| options.check_site()).map(|()| {
        top_parent_group(doc, options).map_or(0, |group| find_rows(doc, &group, options).len())
    });

    match counted {
        Ok(rows) => {
            log::info!("found {rows} reel rows");
            Response::rows(rows)
        }
        Err(err) => failure(&err, options),
    }
}

/// Handles one decoded request.
pub(crate) fn handle_request(doc: &Document, request: Request, options: &Options) -> Response {
    log::debug!("handling {request:?}");
    match request {
        Request::SortByViews => sort_by_views(doc, options),
        Request::LogReelRows => log_reel_rows(doc, options),
    }
}

/// Decodes a JSON request and handles it.
pub(crate) fn handle_message(doc: &Document, message: &str, options: &Options) -> Response {
    match Request::from_json(message) {
        Ok(request) => handle_request(doc, request, options),
        Err(err) => {
            log::warn!("rejected request {message:?}: {err}");
            Response::rejected(&err)
        }
    }
}

fn failure(err: &Error, options: &Options) -> Response {
    if let Error::UnsupportedSite(host) = err {
        log::warn!("refusing to sort {host}; expected {}", options.target_host);
        return Response::wrong_site(&options.target_host);
    }
    log::error!("Error sorting by views: {err}");
    Response::error(err)
}
