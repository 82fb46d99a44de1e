//
//  atlassian-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport Boundary
//!
//! The client never talks to the network directly. It builds an
//! [`HttpRequest`] and hands it to an injected [`HttpTransport`], which
//! returns an [`HttpResponse`] whose body is read separately. This is the
//! seam used by tests to plug in stubs.
//!
//! [`ReqwestTransport`] is the production implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use atlassian_client::api::{Client, ReqwestTransport};
//! use atlassian_client::auth::Credentials;
//!
//! let transport = Arc::new(ReqwestTransport::new()?);
//! let client = Client::new(transport, "https://example.atlassian.net", Credentials::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

use crate::api::context::RequestContext;

/// Errors raised before an HTTP response is available, or while reading
/// its body.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, redirect or timeout failure reported by reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The request context was cancelled while the call was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// The request context deadline passed while the call was in flight.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

/// A fully-addressed HTTP request, bound to the [`RequestContext`] it was
/// created with.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, already resolved against the site.
    pub url: Url,
    /// Request headers (`Accept`, `Content-Type`, auth, user agent).
    pub headers: HeaderMap,
    /// Encoded body, if any.
    pub body: Option<Bytes>,
    /// Cancellation and deadline scope of the call.
    pub context: RequestContext,
}

impl HttpRequest {
    /// Returns the context this request is bound to.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// The body of an [`HttpResponse`], read on demand.
#[derive(Debug)]
pub enum ResponseBody {
    /// Body already in memory.
    Buffered(Bytes),
    /// Body still to be read from a reqwest response.
    Pending(reqwest::Response),
    /// The transport already knows the body cannot be read.
    Failed(TransportError),
}

impl ResponseBody {
    /// Reads the entire body into memory.
    pub async fn read(self) -> Result<Bytes, TransportError> {
        match self {
            Self::Buffered(bytes) => Ok(bytes),
            Self::Pending(response) => Ok(response.bytes().await?),
            Self::Failed(err) => Err(err),
        }
    }
}

/// What the transport returns once the remote service answered.
#[derive(Debug)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// Final URL of the exchange, after redirects.
    pub url: Url,
    /// Method of the request that produced this response.
    pub method: Method,
    /// Response headers.
    pub headers: HeaderMap,
    /// Unread body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a response with an empty buffered body.
    pub fn new(status: StatusCode, url: Url, method: Method) -> Self {
        Self {
            status,
            url,
            method,
            headers: HeaderMap::new(),
            body: ResponseBody::Buffered(Bytes::new()),
        }
    }

    /// Replaces the body with the given bytes.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = ResponseBody::Buffered(body.into());
        self
    }
}

/// Executes one HTTP request. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns the response head plus an unread body.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's defaults.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
        })
    }

    /// Creates a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            ..
        } = request;

        let mut builder = self.http.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        Ok(HttpResponse {
            status: response.status(),
            url: response.url().clone(),
            method,
            headers: response.headers().clone(),
            body: ResponseBody::Pending(response),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffered_body_reads_back() {
        let url = Url::parse("https://example.atlassian.net/wiki/rest/api/space").unwrap();
        let response = HttpResponse::new(StatusCode::OK, url, Method::GET).with_body("{}");

        assert_eq!(response.body.read().await.unwrap(), Bytes::from_static(b"{}"));
    }

    #[tokio::test]
    async fn test_failed_body_surfaces_error() {
        let body = ResponseBody::Failed(TransportError::Other("connection reset".into()));
        let err = body.read().await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }
}
