//
//  atlassian-client
//  api/jira/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira Cloud REST API.
//!
//! Services are bound to an API version at construction: `"2"` uses plain
//! text rich fields, `"3"` uses Atlassian Document Format.

pub mod attachment;
pub mod issue;
pub mod models;

pub use attachment::AttachmentService;
pub use issue::IssueService;
pub use models::{Attachment, AttachmentMetadata, CustomFields, IssueCreated, IssueFields, IssueScheme, UpdateOperations};
