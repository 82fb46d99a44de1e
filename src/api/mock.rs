//
//  atlassian-client
//  api/mock.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Recording [`Connector`] double for resource service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

use crate::api::common::ApiError;
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::payload::PayloadReader;
use crate::api::response::Response;
use crate::api::transport::HttpRequest;

const MOCK_SITE: &str = "https://mock.atlassian.net/";

/// What a service passed to the request factory.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub endpoint: String,
    pub content_type: Option<String>,
    pub body: Option<Bytes>,
    pub form: bool,
}

impl RecordedRequest {
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body.as_ref().and_then(|b| serde_json::from_slice(b).ok())
    }
}

pub(crate) struct MockConnector {
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
    status: u16,
    body: Bytes,
    fail_request: bool,
}

impl MockConnector {
    fn build(status: u16, body: &'static str, fail_request: bool) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            status,
            body: Bytes::from_static(body.as_bytes()),
            fail_request,
        })
    }

    /// Answers every call with status 200 and `body`.
    pub fn responding(body: &'static str) -> Arc<Self> {
        Self::build(200, body, false)
    }

    /// Answers every call with a non-success `status`.
    pub fn rejecting(status: u16, body: &'static str) -> Arc<Self> {
        Self::build(status, body, false)
    }

    /// Fails every request factory call with `CreateRequest`.
    pub fn failing_request() -> Arc<Self> {
        Self::build(200, "{}", true)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was built")
    }

    /// Number of invoker calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        body: Option<Bytes>,
        form: bool,
    ) -> Result<HttpRequest, ApiError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.clone(),
            endpoint: endpoint.to_string(),
            content_type: content_type.map(str::to_string),
            body: body.clone(),
            form,
        });

        if self.fail_request {
            return Err(ApiError::CreateRequest("mocked failure".into()));
        }

        Ok(HttpRequest {
            method,
            url: Url::parse(MOCK_SITE)?.join(endpoint)?,
            headers: HeaderMap::new(),
            body,
            context: ctx.clone(),
        })
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn new_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        payload: Option<PayloadReader>,
    ) -> Result<HttpRequest, ApiError> {
        self.record(ctx, method, endpoint, content_type, payload.map(PayloadReader::into_bytes), false)
    }

    fn new_form_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        content_type: &str,
        payload: PayloadReader,
    ) -> Result<HttpRequest, ApiError> {
        self.record(ctx, method, endpoint, Some(content_type), Some(payload.into_bytes()), true)
    }

    async fn call(&self, request: HttpRequest) -> Result<Response, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = Response::new(self.status, request.url.as_str(), request.method.as_str())
            .with_bytes(self.body.clone());

        if !response.is_success() {
            return Err(ApiError::InvalidStatusCode(Box::new(response)));
        }
        Ok(response)
    }
}
