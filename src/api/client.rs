//
//  atlassian-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for Atlassian APIs
//!
//! This module provides the core client shared by every resource service.
//! It resolves endpoints against the configured site, attaches headers and
//! credentials, executes requests through the injected transport and turns
//! the answer into a [`Response`] envelope or a classified [`ApiError`].
//!
//! ## Features
//!
//! - Relative endpoint resolution against the site (absolute URLs pass through)
//! - `Accept`, `Content-Type`, `X-Atlassian-Token` and `User-Agent` headers
//! - Basic or bearer authentication from an injected provider
//! - Per-call cancellation and deadlines through [`RequestContext`]
//! - No retries: each request is sent exactly once

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::payload::{PayloadReader, JSON_CONTENT_TYPE};
use crate::api::response::{extract_api_message, Response};
use crate::api::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::auth::Authentication;

/// Header that disables the XSRF check on form submissions.
pub const ATLASSIAN_TOKEN_HEADER: &str = "x-atlassian-token";

/// The shared HTTP client for one Atlassian site.
///
/// The client is immutable after construction and safe to share between
/// tasks; wrap it in an `Arc` and hand clones to the resource services.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use atlassian_client::api::{Client, ReqwestTransport};
/// use atlassian_client::auth::Credentials;
///
/// let credentials = Credentials::default()
///     .with_basic_auth("mail@example.com", "api-token");
///
/// let client = Client::new(
///     Arc::new(ReqwestTransport::new()?),
///     "https://example.atlassian.net",
///     credentials,
/// )?;
/// assert_eq!(client.site().as_str(), "https://example.atlassian.net/");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Client {
    /// Base URL, always ending in `/`
    site: Url,
    /// The injected transport
    transport: Arc<dyn HttpTransport>,
    /// The injected authentication provider
    auth: Arc<dyn Authentication>,
}

impl Client {
    /// Creates a client for `site`.
    ///
    /// A trailing `/` is appended to `site` when missing, so relative
    /// endpoints resolve underneath it.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Missing`] with [`Required::Site`] when `site` is empty
    /// - [`ApiError::UrlParse`] when `site` is not an absolute URL
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        site: &str,
        auth: impl Authentication + 'static,
    ) -> Result<Self, ApiError> {
        Self::with_authentication(transport, site, Arc::new(auth))
    }

    /// Like [`Client::new`], with a shared authentication provider.
    pub fn with_authentication(
        transport: Arc<dyn HttpTransport>,
        site: &str,
        auth: Arc<dyn Authentication>,
    ) -> Result<Self, ApiError> {
        let site = site.trim();
        if site.is_empty() {
            return Err(ApiError::Missing(Required::Site));
        }

        let site = if site.ends_with('/') {
            Url::parse(site)?
        } else {
            Url::parse(&format!("{}/", site))?
        };

        Ok(Self {
            site,
            transport,
            auth,
        })
    }

    /// The base URL every relative endpoint is resolved against.
    pub fn site(&self) -> &Url {
        &self.site
    }

    fn resolve(&self, endpoint: &str) -> Result<Url, ApiError> {
        Ok(self.site.join(endpoint)?)
    }

    /// Headers shared by both request variants: accept, credentials and
    /// user agent.
    fn base_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(basic) = self.auth.basic_auth() {
            let mut value = header_value(AUTHORIZATION, &basic.header_value())?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else if let Some(token) = self.auth.bearer_token() {
            let mut value = header_value(AUTHORIZATION, &format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(user_agent) = self.auth.user_agent() {
            headers.insert(USER_AGENT, header_value(USER_AGENT, user_agent)?);
        }

        Ok(headers)
    }
}

fn header_value(name: HeaderName, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiError::CreateRequest(format!("invalid value for header {}", name)))
}

#[async_trait]
impl Connector for Client {
    fn new_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        payload: Option<PayloadReader>,
    ) -> Result<HttpRequest, ApiError> {
        let url = self.resolve(endpoint)?;
        let mut headers = self.base_headers()?;

        if payload.is_some() {
            let content_type = content_type
                .filter(|value| !value.is_empty())
                .unwrap_or(JSON_CONTENT_TYPE);
            headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE, content_type)?);
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body: payload.map(PayloadReader::into_bytes),
            context: ctx.clone(),
        })
    }

    fn new_form_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: &str,
        payload: PayloadReader,
    ) -> Result<HttpRequest, ApiError> {
        let url = self.resolve(endpoint)?;
        let mut headers = self.base_headers()?;

        headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE, content_type)?);
        headers.insert(
            HeaderName::from_static(ATLASSIAN_TOKEN_HEADER),
            HeaderValue::from_static("no-check"),
        );

        Ok(HttpRequest {
            method,
            url,
            headers,
            body: Some(payload.into_bytes()),
            context: ctx.clone(),
        })
    }

    async fn call(&self, request: HttpRequest) -> Result<Response, ApiError> {
        let ctx = request.context().clone();
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let HttpResponse {
            status,
            url,
            method,
            headers,
            body,
        } = ctx.run(self.transport.execute(request)).await?;

        let mut response = Response {
            code: status.as_u16(),
            endpoint: url.to_string(),
            method: method.to_string(),
            headers,
            bytes: Bytes::new(),
            api: None,
        };

        if !response.is_success() {
            // Best effort: the error body only feeds diagnostics.
            if let Ok(bytes) = ctx.run(body.read()).await {
                response.api = extract_api_message(&bytes);
                response.bytes = bytes;
            }

            warn!(
                code = response.code,
                method = %response.method,
                endpoint = %response.endpoint,
                "request returned a non-success status"
            );
            return Err(ApiError::InvalidStatusCode(Box::new(response)));
        }

        match ctx.run(body.read()).await {
            Ok(bytes) => response.bytes = bytes,
            Err(source) => {
                return Err(ApiError::Body {
                    response: Box::new(response),
                    source,
                })
            }
        }

        debug!(code = response.code, bytes = response.bytes.len(), "request completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use reqwest::StatusCode;
    use serde::Deserialize;

    use super::*;
    use crate::api::common::ErrorKind;
    use crate::api::transport::{ResponseBody, TransportError};
    use crate::auth::Credentials;

    /// Answers every request with a fixed status and body, echoing the
    /// request URL and method back like a real server would.
    struct StubTransport {
        status: StatusCode,
        body: &'static str,
        delay: Option<Duration>,
        executed: AtomicUsize,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status: StatusCode::from_u16(status).unwrap(),
                body,
                delay: None,
                executed: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                status: StatusCode::OK,
                body: "{}",
                delay: Some(delay),
                executed: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.executed.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let response = HttpResponse::new(self.status, request.url.clone(), request.method.clone())
                .with_body(self.body);
            self.seen.lock().unwrap().push(request);
            Ok(response)
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl HttpTransport for FailingTransport {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Other("connection refused".into()))
        }
    }

    struct BrokenBodyTransport;

    #[async_trait]
    impl HttpTransport for BrokenBodyTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut response = HttpResponse::new(StatusCode::OK, request.url, request.method);
            response.body = ResponseBody::Failed(TransportError::Other("connection reset".into()));
            Ok(response)
        }
    }

    #[derive(Debug, Deserialize)]
    struct Created {
        id: String,
    }

    fn client_with(transport: Arc<dyn HttpTransport>, credentials: Credentials) -> Client {
        Client::new(transport, "https://example.atlassian.net", credentials).unwrap()
    }

    #[test]
    fn test_site_gets_trailing_slash() {
        let client = client_with(StubTransport::new(200, "{}"), Credentials::default());
        assert_eq!(client.site().as_str(), "https://example.atlassian.net/");
    }

    #[test]
    fn test_site_validation() {
        let err = Client::new(StubTransport::new(200, "{}"), "", Credentials::default()).err().unwrap();
        assert!(matches!(err, ApiError::Missing(Required::Site)));

        let err = Client::new(StubTransport::new(200, "{}"), "example.atlassian.net", Credentials::default())
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::UrlParse(_)));
    }

    #[test]
    fn test_relative_and_absolute_endpoints() {
        let client = client_with(StubTransport::new(200, "{}"), Credentials::default());
        let ctx = RequestContext::background();

        let request = client
            .new_request(&ctx, Method::GET, "rest/api/2/issue/DEV-1?fields=summary", None, None)
            .unwrap();
        assert_eq!(request.url.as_str(), "https://example.atlassian.net/rest/api/2/issue/DEV-1?fields=summary");

        let request = client
            .new_request(&ctx, Method::GET, "https://api.bitbucket.org/2.0/user", None, None)
            .unwrap();
        assert_eq!(request.url.as_str(), "https://api.bitbucket.org/2.0/user");
    }

    #[test]
    fn test_unparseable_endpoint() {
        let client = client_with(StubTransport::new(200, "{}"), Credentials::default());
        let err = client
            .new_request(&RequestContext::background(), Method::GET, "http://[::1", None, None)
            .unwrap_err();
        assert!(matches!(err, ApiError::UrlParse(_)));
    }

    #[test]
    fn test_json_request_headers() {
        let credentials = Credentials::default()
            .with_basic_auth("mail@example.com", "token")
            .with_user_agent("curl/7.54.0");
        let client = client_with(StubTransport::new(200, "{}"), credentials);

        let request = client
            .new_request(
                &RequestContext::background(),
                Method::POST,
                "wiki/rest/api/content/80412692/property",
                None,
                Some(PayloadReader::from_bytes(r#"{"key":"key"}"#)),
            )
            .unwrap();

        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("authorization"), Some("Basic bWFpbEBleGFtcGxlLmNvbTp0b2tlbg=="));
        assert_eq!(request.header("user-agent"), Some("curl/7.54.0"));
        assert_eq!(request.header(ATLASSIAN_TOKEN_HEADER), None);
        assert_eq!(request.body.as_deref(), Some(&br#"{"key":"key"}"#[..]));
    }

    #[test]
    fn test_no_body_means_no_content_type() {
        let client = client_with(StubTransport::new(200, "{}"), Credentials::default().with_bearer_token("pat"));
        let request = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/myself", Some("text/plain"), None)
            .unwrap();

        assert_eq!(request.header("content-type"), None);
        assert_eq!(request.header("authorization"), Some("Bearer pat"));
        assert_eq!(request.header("user-agent"), None);
    }

    #[test]
    fn test_form_request_headers() {
        let client = client_with(StubTransport::new(200, "{}"), Credentials::default());
        let request = client
            .new_form_request(
                &RequestContext::background(),
                Method::POST,
                "rest/api/2/issue/DEV-1/attachments",
                "multipart/form-data; boundary=xyz",
                PayloadReader::from_bytes("--xyz--"),
            )
            .unwrap();

        assert_eq!(request.header("content-type"), Some("multipart/form-data; boundary=xyz"));
        assert_eq!(request.header("x-atlassian-token"), Some("no-check"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[test]
    fn test_invalid_header_is_a_creation_error() {
        let client = client_with(
            StubTransport::new(200, "{}"),
            Credentials::default().with_user_agent("bad\nagent"),
        );
        let err = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/myself", None, None)
            .unwrap_err();

        assert!(matches!(err, ApiError::CreateRequest(_)));
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[tokio::test]
    async fn test_call_decodes_success() {
        let transport = StubTransport::new(201, r#"{"id":"1"}"#);
        let client = client_with(transport.clone(), Credentials::default());

        let request = client
            .new_request(&RequestContext::background(), Method::POST, "rest/api/2/issue", None, None)
            .unwrap();
        let (created, response) = client.call(request).await.unwrap().into_json::<Created>().unwrap();

        assert_eq!(created.id, "1");
        assert_eq!(response.code, 201);
        assert_eq!(response.method, "POST");
        assert_eq!(response.endpoint, "https://example.atlassian.net/rest/api/2/issue");
        assert_eq!(response.bytes.as_ref(), br#"{"id":"1"}"#);
        assert_eq!(transport.executed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_call_rejects_error_status_with_envelope() {
        let transport = StubTransport::new(404, r#"{"errorMessages":["Issue does not exist"],"errors":{}}"#);
        let client = client_with(transport.clone(), Credentials::default());

        let request = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/issue/NOPE-1", None, None)
            .unwrap();
        let err = client.call(request).await.unwrap_err();

        let response = err.response().expect("envelope on status errors");
        assert_eq!(response.code, 404);
        assert_eq!(response.endpoint, "https://example.atlassian.net/rest/api/2/issue/NOPE-1");
        assert_eq!(response.api.as_deref(), Some("Issue does not exist"));
        assert!(matches!(err, ApiError::InvalidStatusCode(_)));
        assert_eq!(transport.executed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_call_malformed_json_keeps_envelope() {
        let client = client_with(StubTransport::new(200, "{\"id\":"), Credentials::default());
        let request = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/issue/DEV-1", None, None)
            .unwrap();

        let err = client.call(request).await.unwrap().into_json::<Created>().unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.response().map(|r| r.code), Some(200));
    }

    #[tokio::test]
    async fn test_call_raw_bytes_without_decoding() {
        let client = client_with(StubTransport::new(204, ""), Credentials::default());
        let request = client
            .new_request(&RequestContext::background(), Method::DELETE, "rest/api/2/issue/DEV-1", None, None)
            .unwrap();

        let response = client.call(request).await.unwrap();
        assert_eq!(response.code, 204);
        assert!(response.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_envelope() {
        let client = client_with(Arc::new(FailingTransport), Credentials::default());
        let request = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/myself", None, None)
            .unwrap();

        let err = client.call(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Other(_))));
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn test_body_read_failure_keeps_envelope() {
        let client = client_with(Arc::new(BrokenBodyTransport), Credentials::default());
        let request = client
            .new_request(&RequestContext::background(), Method::GET, "rest/api/2/myself", None, None)
            .unwrap();

        let err = client.call(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Body { .. }));
        assert_eq!(err.response().map(|r| r.code), Some(200));
    }

    #[tokio::test]
    async fn test_cancelled_context_aborts_call() {
        let client = client_with(StubTransport::slow(Duration::from_secs(30)), Credentials::default());
        let ctx = RequestContext::background();
        let request = client
            .new_request(&ctx, Method::GET, "rest/api/2/myself", None, None)
            .unwrap();

        ctx.cancel();
        let err = client.call(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_aborts_call() {
        let client = client_with(StubTransport::slow(Duration::from_secs(30)), Credentials::default());
        let ctx = RequestContext::background().with_timeout(Duration::from_millis(100));
        let request = client
            .new_request(&ctx, Method::GET, "rest/api/2/myself", None, None)
            .unwrap();

        let err = client.call(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::DeadlineExceeded)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_calls_are_independent() {
        let transport = StubTransport::new(200, "{}");
        let client = Arc::new(client_with(transport.clone(), Credentials::default()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                let ctx = RequestContext::background();
                let endpoint = format!("rest/api/2/issue/DEV-{}", i);
                let request = client.new_request(&ctx, Method::GET, &endpoint, None, None)?;
                let response = client.call(request).await?;
                Ok::<_, ApiError>((i, response))
            }));
        }

        for handle in handles {
            let (i, response) = handle.await.unwrap().unwrap();
            assert_eq!(
                response.endpoint,
                format!("https://example.atlassian.net/rest/api/2/issue/DEV-{}", i)
            );
            assert_eq!(response.code, 200);
        }
        assert_eq!(transport.executed.load(Ordering::SeqCst), 16);
        assert_eq!(transport.seen.lock().unwrap().len(), 16);
    }
}
