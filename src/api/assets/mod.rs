//
//  atlassian-client
//  api/assets/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira Service Management Assets.
//!
//! Assets lives under `jsm/assets/workspace/{workspaceId}/v1/`; the
//! workspace id is required by every operation.

pub mod models;
pub mod object;

pub use object::ObjectService;
