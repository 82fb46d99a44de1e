//
//  atlassian-client
//  api/confluence/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Confluence Cloud REST API (`wiki/rest/api`).
//!
//! # Services
//!
//! - [`SearchService`]: CQL search over content and users
//! - [`ContentService`]: list and load content
//! - [`ChildrenDescendantsService`]: page trees and copies
//! - [`ContentPropertyService`]: properties attached to content

pub mod children;
pub mod content;
pub mod models;
pub mod property;
pub mod search;

pub use children::ChildrenDescendantsService;
pub use content::ContentService;
pub use models::*;
pub use property::ContentPropertyService;
pub use search::SearchService;
