//
//  atlassian-client
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Query String Builder
//!
//! Endpoints take a relative path plus optional query parameters. The
//! parameters are kept in a sorted map so the encoded query string is
//! deterministic, and every helper decides whether an unset value is left
//! out entirely. Empty keys are never emitted as `key=`.
//!
//! Values are encoded with `application/x-www-form-urlencoded` rules:
//! spaces become `+`, and reserved characters such as `,`, `=` and `"` are
//! percent-encoded.
//!
//! ## Example
//!
//! ```rust
//! use atlassian_client::api::query::{with_query, QueryParams};
//!
//! let mut query = QueryParams::new();
//! query.set_list("expand", &["attachment", "comments"]);
//! query.set_nonzero("parentVersion", 12);
//! query.set_str("cursor", "");
//!
//! assert_eq!(
//!     with_query("wiki/rest/api/content/1/child", &query),
//!     "wiki/rest/api/content/1/child?expand=attachment%2Ccomments&parentVersion=12"
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

/// Sorted, encoded-on-demand set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` unconditionally.
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets `key` unless `value` is empty.
    pub fn set_str(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    /// Sets `key` when `value` is `Some`.
    pub fn set_opt<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Sets `key` to `true` or `false`.
    pub fn set_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Sets `key=true` only when `value` is true.
    pub fn set_flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.set_bool(key, true);
        }
        self
    }

    /// Sets `key` unless `value` is zero.
    pub fn set_nonzero(&mut self, key: &str, value: u64) -> &mut Self {
        if value != 0 {
            self.set(key, value);
        }
        self
    }

    /// Joins `values` with `,` and sets `key`, unless there are no values.
    pub fn set_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.set_str(key, &joined)
    }

    /// Whether no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the raw (unencoded) value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Encodes the parameters, keys in alphabetical order.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Appends the encoded `query` to `path`, adding `?` only when needed.
pub fn with_query(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.encode())
    }
}
