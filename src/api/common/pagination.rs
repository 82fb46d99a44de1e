//
//  atlassian-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Atlassian API Responses
//!
//! Each product reports "is there another page" differently:
//!
//! | Product | Strategy |
//! |---------|----------|
//! | Confluence | `_links.next` relative URL carrying a `cursor` (or `start`) |
//! | Bitbucket | absolute `next` URL |
//! | Assets AQL | `startAt` / `maxResults` / `total` / `isLast` |
//! | Assets navlist | `page` / `pageSize` |
//!
//! The page types implement [`Paginated`], which collapses all of them into a
//! single [`Continuation`]. The client never follows pages on its own; the
//! caller decides whether and how to fetch the next one.
//!
//! # Example
//!
//! ```rust
//! use atlassian_client::api::common::{Continuation, Paginated};
//!
//! fn report<P: Paginated>(page: &P) {
//!     let Continuation { has_more, next } = page.continuation();
//!     if has_more {
//!         println!("more results at {:?}", next);
//!     }
//! }
//! ```

use url::Url;

/// The "next page" indicator of a paginated response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Continuation {
    /// Whether another page exists.
    pub has_more: bool,

    /// Opaque token for the next page: a cursor, an offset, a page number or
    /// a URL depending on the endpoint.
    pub next: Option<String>,
}

impl Continuation {
    /// A continuation that reports no further pages.
    pub fn done() -> Self {
        Self::default()
    }

    /// A continuation pointing at `next`.
    pub fn more(next: impl Into<String>) -> Self {
        Self {
            has_more: true,
            next: Some(next.into()),
        }
    }

    /// Builds a continuation from an optional "next" link.
    pub fn from_link(next: Option<&str>) -> Self {
        match next {
            Some(link) if !link.is_empty() => Self::more(link),
            _ => Self::done(),
        }
    }

    /// Builds a continuation for offset pagination.
    ///
    /// More results exist while `start + returned < total`; the next token is
    /// the offset of the following page.
    pub fn from_offset(start: u64, returned: u64, total: u64) -> Self {
        match start.checked_add(returned) {
            Some(next) if returned > 0 && next < total => Self::more(next.to_string()),
            _ => Self::done(),
        }
    }

    /// Builds a continuation for page-number pagination.
    ///
    /// More results exist while the last item of `page` sits before `total`;
    /// the next token is `page + 1`.
    pub fn from_page(page: u64, last_index: u64, total: u64) -> Self {
        match page.checked_add(1) {
            Some(next) if last_index < total => Self::more(next.to_string()),
            _ => Self::done(),
        }
    }

    /// Builds a continuation for an offset page that also carries a "next"
    /// link. The page must have returned items and the offset must advance.
    pub fn from_linked_offset(next: Option<&str>, start: u64, returned: u64) -> Self {
        if next.map_or(true, str::is_empty) || returned == 0 {
            return Self::done();
        }
        match start.checked_add(returned) {
            Some(offset) => Self::more(offset.to_string()),
            None => Self::done(),
        }
    }
}

/// Implemented by every page type returned by the resource services.
pub trait Paginated {
    /// Returns the single-step transition to the next page.
    fn continuation(&self) -> Continuation;

    /// Shorthand for `continuation().has_more`.
    fn has_next(&self) -> bool {
        self.continuation().has_more
    }
}

/// Extracts the `cursor` query parameter from a Confluence `_links.next`
/// link, which is usually relative (`/rest/api/search?cursor=...`).
///
/// Returns `None` when the link does not carry a cursor.
pub fn cursor_from_link(link: &str) -> Option<String> {
    let base = Url::parse("https://placeholder.invalid/").ok()?;
    let url = base.join(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "cursor")
        .map(|(_, value)| value.into_owned())
}
