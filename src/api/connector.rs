//
//  atlassian-client
//  api/connector.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The seam between resource services and the HTTP core.
//!
//! Services never hold a [`Client`](crate::api::Client) directly; they hold an
//! `Arc<dyn Connector>`. Production code passes the client, tests pass a
//! recording double and assert on the exact requests a service builds.

use async_trait::async_trait;
use reqwest::Method;

use crate::api::common::ApiError;
use crate::api::context::RequestContext;
use crate::api::payload::PayloadReader;
use crate::api::response::Response;
use crate::api::transport::HttpRequest;

/// Request factory plus transport invoker, as seen by resource services.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Builds a request for `endpoint` bound to `ctx`.
    ///
    /// `content_type` overrides the default `application/json` used when a
    /// payload is present.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UrlParse`] when `endpoint` cannot be resolved
    /// - [`ApiError::CreateRequest`] when a header cannot be built
    fn new_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        payload: Option<PayloadReader>,
    ) -> Result<HttpRequest, ApiError>;

    /// Builds a form submission (multipart upload) request.
    ///
    /// Always sets `content_type` and `X-Atlassian-Token: no-check`.
    fn new_form_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: &str,
        payload: PayloadReader,
    ) -> Result<HttpRequest, ApiError>;

    /// Executes `request` exactly once and returns the envelope.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response was received
    /// - [`ApiError::InvalidStatusCode`] for codes outside `[200, 300)`
    /// - [`ApiError::Body`] when the body could not be read
    async fn call(&self, request: HttpRequest) -> Result<Response, ApiError>;
}
