//
//  atlassian-client
//  api/bitbucket/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud REST API v2.0.
//!
//! Point the client at `https://api.bitbucket.org` to use these services;
//! every path starts with `2.0/`.

pub mod models;
pub mod workspace_permissions;

pub use models::{Page, RepositoryPermission, WorkspaceMembership};
pub use workspace_permissions::WorkspacePermissionService;
