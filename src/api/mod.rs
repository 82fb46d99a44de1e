//
//  atlassian-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP core shared by every Atlassian product and
//! the resource services built on top of it.
//!
//! ## Supported Products
//!
//! - **Jira**: issues and attachments (`rest/api/{2|3}`)
//! - **Confluence**: search, content, properties, page trees (`wiki/rest/api`)
//! - **Assets**: objects (`jsm/assets/workspace/{id}/v1`)
//! - **Bitbucket Cloud**: workspace permissions (`2.0/workspaces`)
//!
//! ## Architecture
//!
//! Every service call follows the same five steps:
//!
//! 1. validate required identifiers ([`validate`])
//! 2. build the endpoint and query string ([`query`], [`Endpoint`])
//! 3. encode the body ([`payload`])
//! 4. build the request ([`Connector::new_request`])
//! 5. invoke it and decode the envelope ([`Connector::call`], [`Response`])
//!
//! Services depend on the [`Connector`] trait, implemented by [`Client`].
//! The client in turn depends on an [`HttpTransport`], implemented by
//! [`ReqwestTransport`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use atlassian_client::api::{Client, ReqwestTransport, RequestContext};
//! use atlassian_client::api::assets::ObjectService;
//! use atlassian_client::auth::Credentials;
//!
//! # async fn run() -> Result<(), atlassian_client::api::ApiError> {
//! let client = Client::new(
//!     Arc::new(ReqwestTransport::new()?),
//!     "https://example.atlassian.net",
//!     Credentials::default().with_basic_auth("mail@example.com", "api-token"),
//! )?;
//!
//! let objects = ObjectService::new(Arc::new(client));
//! let (object, response) = objects
//!     .get(&RequestContext::background(), "workspace-uuid", "1")
//!     .await?;
//! println!("{} -> {:?}", response.code, object.label);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]. Use [`ApiError::kind`] to tell
//! validation, construction, transport, status and decode failures apart,
//! and [`ApiError::response`] to reach the envelope when one exists.

/// Core HTTP client: request factory and transport invoker.
pub mod client;

/// Shared types: sentinel errors and pagination.
pub mod common;

pub mod connector;
pub mod context;
pub mod endpoint;
pub mod payload;
pub mod query;
pub mod response;
pub mod transport;
pub mod validate;

/// Jira Service Management Assets services.
pub mod assets;

/// Bitbucket Cloud services.
pub mod bitbucket;

/// Confluence Cloud services.
pub mod confluence;

/// Jira Cloud services.
pub mod jira;

#[cfg(test)]
pub(crate) mod mock;

pub use client::Client;
pub use common::{ApiError, Continuation, ErrorKind, Paginated, Required};
pub use connector::Connector;
pub use context::RequestContext;
pub use endpoint::Endpoint;
pub use payload::{Multipart, PayloadReader};
pub use query::QueryParams;
pub use response::Response;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
