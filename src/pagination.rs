//! Limit/offset pagination with an `all` escape hatch.
//!
//! `limit` and `offset` are read as raw strings and never reject a
//! request: a malformed or non-positive `limit` falls back to the
//! configured default, a malformed `offset` becomes `0`, and windows that
//! run past the end of the sequence are clamped. `limit=all` returns the
//! whole sequence and ignores `offset`.

use axum::extract::Query;
use axum::http::Uri;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use utoipa::{IntoParams, ToSchema};

use crate::config::Settings;
use crate::constants::{LIMIT_ALL, LIMIT_QUERY_PARAM, OFFSET_QUERY_PARAM};

/// Raw `limit`/`offset` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Maximum number of items to return, or `all`
    pub limit: Option<String>,
    /// Index of the first item to return
    pub offset: Option<String>,
}

impl PaginationQuery {
    #[must_use]
    pub fn new(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    /// Read the parameters from a request URI. An unparsable query string
    /// yields empty parameters.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<Self>::try_from_uri(uri)
            .map(|Query(query)| query)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// `limit=all`
    All,
    Bounded(usize),
    /// No `limit` given and no default configured
    Unbounded,
}

/// A resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: PageLimit,
    pub offset: usize,
}

impl PageRequest {
    /// The part of `items` covered by this window.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        match self.limit {
            PageLimit::All => items,
            PageLimit::Unbounded => &items[start..],
            PageLimit::Bounded(limit) => {
                let end = start.saturating_add(limit).min(items.len());
                &items[start..end]
            }
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Page<T> {
    /// Total number of items before pagination
    pub count: usize,
    /// Link to the following window, if any
    pub next: Option<String>,
    /// Link to the preceding window, if any
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffsetPagination {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

impl Default for LimitOffsetPagination {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl LimitOffsetPagination {
    #[must_use]
    pub fn new(default_limit: Option<usize>, max_limit: Option<usize>) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.default_page_limit, settings.max_page_limit)
    }

    /// Resolve raw query parameters into a window.
    #[must_use]
    pub fn page_request(&self, query: &PaginationQuery) -> PageRequest {
        let raw_limit = query.limit.as_deref().map(str::trim);
        if raw_limit == Some(LIMIT_ALL) {
            return PageRequest {
                limit: PageLimit::All,
                offset: 0,
            };
        }

        let limit = raw_limit
            .and_then(parse_count)
            .filter(|&n| n > 0)
            .or(self.default_limit)
            .map(|n| self.max_limit.map_or(n, |max| n.min(max)));

        let offset = query
            .offset
            .as_deref()
            .and_then(|raw| parse_count(raw.trim()))
            .unwrap_or(0);

        PageRequest {
            limit: limit.map_or(PageLimit::Unbounded, PageLimit::Bounded),
            offset,
        }
    }

    /// Slice `items` according to the query parameters.
    #[must_use]
    pub fn paginate_queryset<'a, T>(&self, items: &'a [T], query: &PaginationQuery) -> &'a [T] {
        let request = self.page_request(query);
        let page = request.window(items);
        tracing::debug!(
            limit = ?request.limit,
            offset = request.offset,
            count = items.len(),
            returned = page.len(),
            "paginated"
        );
        page
    }

    /// Slice `items` and wrap the window in a [`Page`] with navigation links
    /// built from `uri`.
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T], query: &PaginationQuery, uri: &Uri) -> Page<T> {
        let request = self.page_request(query);
        let results = request.window(items).to_vec();
        let count = items.len();

        let (next, previous) = match request.limit {
            PageLimit::Bounded(limit) => (
                next_link(uri, limit, request.offset, count),
                previous_link(uri, limit, request.offset),
            ),
            PageLimit::All | PageLimit::Unbounded => (None, None),
        };

        Page {
            count,
            next,
            previous,
            results,
        }
    }
}

/// Parse a non-negative count. Values too large for `usize` saturate.
fn parse_count(raw: &str) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}

fn next_link(uri: &Uri, limit: usize, offset: usize, count: usize) -> Option<String> {
    let next_offset = offset.saturating_add(limit);
    (next_offset < count).then(|| with_window(uri, limit, Some(next_offset)))
}

fn previous_link(uri: &Uri, limit: usize, offset: usize) -> Option<String> {
    if offset == 0 {
        return None;
    }
    if offset <= limit {
        return Some(with_window(uri, limit, None));
    }
    Some(with_window(uri, limit, Some(offset - limit)))
}

/// Rebuild `uri` with `limit`/`offset` replaced, keeping other query parameters.
fn with_window(uri: &Uri, limit: usize, offset: Option<usize>) -> String {
    let mut pairs: Vec<String> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            key != LIMIT_QUERY_PARAM && key != OFFSET_QUERY_PARAM
        })
        .map(str::to_string)
        .collect();

    pairs.push(format!("{LIMIT_QUERY_PARAM}={limit}"));
    if let Some(offset) = offset {
        pairs.push(format!("{OFFSET_QUERY_PARAM}={offset}"));
    }

    let base = match (uri.scheme_str(), uri.authority()) {
        (Some(scheme), Some(authority)) => format!("{scheme}://{authority}{}", uri.path()),
        _ => uri.path().to_string(),
    };

    format!("{base}?{}", pairs.join("&"))
}
