//
//  atlassian-client
//  api/bitbucket/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud permission types.
//!
//! # Pagination
//!
//! Bitbucket Cloud wraps list results in a page object:
//!
//! ```json
//! {
//!     "values": [...],
//!     "page": 1,
//!     "pagelen": 10,
//!     "size": 42,
//!     "next": "https://api.bitbucket.org/2.0/...?page=2"
//! }
//! ```
//!
//! The `next` URL is absolute and can be handed straight back to the
//! request factory.

use serde::{Deserialize, Serialize};

use crate::api::common::{Continuation, Paginated};

/// A page of Bitbucket Cloud results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in the current page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,

    /// Current page number (1-indexed).
    #[serde(default)]
    pub page: Option<u32>,

    /// Number of items per page.
    #[serde(default)]
    pub pagelen: Option<u32>,

    /// Total number of items across all pages.
    #[serde(default)]
    pub size: Option<u32>,

    /// URL of the next page. `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page. `None` on the first page.
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Paginated for Page<T> {
    fn continuation(&self) -> Continuation {
        Continuation::from_link(self.next.as_deref())
    }
}

/// A user as embedded in permission records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub uuid: String,
    pub display_name: String,
    pub account_id: Option<String>,
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceRef {
    pub uuid: String,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryRef {
    pub uuid: String,
    pub name: String,
    pub full_name: String,
}

/// A user's permission on a workspace.
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::bitbucket::WorkspaceMembership;
///
/// let json = r#"{"permission": "owner", "user": {"display_name": "Jane"}}"#;
/// let membership: WorkspaceMembership = serde_json::from_str(json).unwrap();
/// assert_eq!(membership.permission, "owner");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceMembership {
    /// `owner`, `collaborator` or `member`.
    pub permission: String,
    pub user: Option<User>,
    pub workspace: Option<WorkspaceRef>,
    pub added_on: Option<String>,
    pub last_accessed: Option<String>,
}

/// A user's permission on one repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryPermission {
    /// `admin`, `write` or `read`.
    pub permission: String,
    pub user: Option<User>,
    pub repository: Option<RepositoryRef>,
}
