//
//  atlassian-client
//  api/confluence/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Confluence content, search and property types.
//!
//! # Pagination
//!
//! Confluence pages carry a `_links.next` link. Search results use a cursor
//! embedded in that link; the other listings use `start`/`limit` offsets.
//! Both are surfaced through [`Paginated`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::common::{cursor_from_link, Continuation, Paginated};

/// Hypermedia links attached to Confluence responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub base: Option<String>,
    pub context: Option<String>,
    pub next: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub webui: Option<String>,
}

/// Optional filters of a CQL content search.
///
/// Empty strings, `false` and zero are left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct SearchContentOptions {
    /// `cqlcontext`: the space, content or user context of the query.
    pub context: String,
    pub cursor: String,
    pub next: bool,
    pub prev: bool,
    pub limit: u64,
    pub start: u64,
    pub include_archived_spaces: bool,
    pub exclude_current_spaces: bool,
    pub site_permission_type_filter: String,
    pub excerpt: String,
    pub expand: Vec<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    pub start: u64,
    pub limit: u64,
    pub size: u64,
    pub total_size: u64,
    pub cql_query: String,
    pub search_duration: u64,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Paginated for SearchPage {
    fn continuation(&self) -> Continuation {
        match self.links.as_ref().and_then(|l| l.next.as_deref()) {
            Some(next) => match cursor_from_link(next) {
                Some(cursor) => Continuation::more(cursor),
                None => Continuation::from_link(Some(next)),
            },
            None => Continuation::done(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub content: Option<Content>,
    pub user: Option<User>,
    pub space: Option<Space>,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub entity_type: String,
    pub last_modified: String,
    pub friendly_last_modified: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: String,
    pub account_type: String,
    pub email: String,
    pub public_name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub id: i64,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

/// A page, blog post, comment or attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub title: String,
    pub space: Option<Space>,
    pub version: Option<ContentVersion>,
    pub children: Option<ContentChildren>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentVersion {
    pub by: Option<User>,
    pub number: u64,
    pub when: String,
    pub message: String,
    pub minor_edit: bool,
}

/// Offset-paginated list of content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPage {
    pub results: Vec<Content>,
    pub start: u64,
    pub limit: u64,
    pub size: u64,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Paginated for ContentPage {
    fn continuation(&self) -> Continuation {
        let next = self.links.as_ref().and_then(|l| l.next.as_deref());
        Continuation::from_linked_offset(next, self.start, self.size)
    }
}

/// Direct children of a piece of content, grouped by type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentChildren {
    pub attachment: Option<ContentPage>,
    pub comment: Option<ContentPage>,
    pub page: Option<ContentPage>,
    pub blogpost: Option<ContentPage>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

/// Options for copying a page or a page hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOptions {
    pub copy_attachments: bool,
    pub copy_permissions: bool,
    pub copy_properties: bool,
    pub copy_labels: bool,
    pub copy_custom_contents: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub destination_page_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title_options: Option<CopyTitleOption>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub page_title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyTitleOption {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub replace: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub search: String,
}

/// A long running task started by a hierarchy copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub links: Option<TaskLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLinks {
    pub status: String,
}

/// Filters for listing content.
#[derive(Debug, Clone, Default)]
pub struct GetContentOptions {
    /// `type`: `page`, `blogpost`, ...
    pub context_type: String,
    pub space_key: String,
    pub title: String,
    pub trigger: String,
    pub order_by: String,
    pub status: Vec<String>,
    pub expand: Vec<String>,
    /// Only blog posts published on this day.
    pub posting_day: Option<NaiveDate>,
}

/// A content property: a JSON value stored under a key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentProperty {
    pub id: String,
    pub key: String,
    pub value: serde_json::Value,
    pub version: Option<ContentVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPropertyPage {
    pub results: Vec<ContentProperty>,
    pub start: u64,
    pub limit: u64,
    pub size: u64,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Paginated for ContentPropertyPage {
    fn continuation(&self) -> Continuation {
        let next = self.links.as_ref().and_then(|l| l.next.as_deref());
        Continuation::from_linked_offset(next, self.start, self.size)
    }
}

/// Body for creating a content property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPropertyPayload {
    pub key: String,
    pub value: serde_json::Value,
}
