//
//  atlassian-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Small builder used by the resource services to describe one call:
//! method, path, query string and body. It drives a [`Connector`] through
//! the request factory and the invoker so every service shares the same
//! five-step flow.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::common::ApiError;
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::payload::{transform_struct_to_reader, Multipart, PayloadReader};
use crate::api::query::{with_query, QueryParams};
use crate::api::response::Response;
use crate::api::transport::HttpRequest;

#[derive(Debug, Clone)]
enum Body {
    Empty,
    Json(PayloadReader),
    Form { content_type: String, payload: PayloadReader },
}

/// One API call, ready to be sent through a [`Connector`].
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::{Endpoint, QueryParams};
///
/// let mut query = QueryParams::new();
/// query.set_bool("asc", true);
///
/// let endpoint = Endpoint::get("jsm/assets/workspace/ws/v1/object/1/history").query(query);
/// assert_eq!(endpoint.path(), "jsm/assets/workspace/ws/v1/object/1/history?asc=true");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    path: String,
    query: QueryParams,
    body: Body,
}

impl Endpoint {
    /// An endpoint with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: Body::Empty,
        }
    }

    /// A `GET` endpoint.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A `POST` endpoint.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// A `PUT` endpoint.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// A `DELETE` endpoint.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replaces the query string parameters.
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Fails like [`transform_struct_to_reader`]: a missing payload is
    /// [`ApiError::NilPayload`].
    pub fn json<T: Serialize + ?Sized>(mut self, payload: Option<&T>) -> Result<Self, ApiError> {
        self.body = Body::Json(transform_struct_to_reader(payload)?);
        Ok(self)
    }

    /// Attaches a multipart form body; the request goes through
    /// [`Connector::new_form_request`].
    pub fn multipart(mut self, multipart: Multipart) -> Self {
        self.body = Body::Form {
            content_type: multipart.content_type(),
            payload: multipart.into_payload(),
        };
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The relative endpoint including the encoded query string.
    pub fn path(&self) -> String {
        with_query(&self.path, &self.query)
    }

    /// Runs the request factory step.
    pub fn build(self, connector: &dyn Connector, ctx: &RequestContext) -> Result<HttpRequest, ApiError> {
        let path = self.path();
        match self.body {
            Body::Empty => connector.new_request(ctx, self.method, &path, None, None),
            Body::Json(payload) => connector.new_request(ctx, self.method, &path, None, Some(payload)),
            Body::Form { content_type, payload } => {
                connector.new_form_request(ctx, self.method, &path, &content_type, payload)
            }
        }
    }

    /// Builds and invokes the request, returning the raw envelope.
    pub async fn send(self, connector: &dyn Connector, ctx: &RequestContext) -> Result<Response, ApiError> {
        let request = self.build(connector, ctx)?;
        connector.call(request).await
    }

    /// Builds and invokes the request, then decodes the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        self,
        connector: &dyn Connector,
        ctx: &RequestContext,
    ) -> Result<(T, Response), ApiError> {
        self.send(connector, ctx).await?.into_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::mock::MockConnector;

    #[test]
    fn test_path_without_query() {
        assert_eq!(Endpoint::delete("rest/api/2/issue/DEV-1").path(), "rest/api/2/issue/DEV-1");
    }

    #[tokio::test]
    async fn test_json_body_reaches_factory() {
        let mock = MockConnector::responding(r#"{"id":"7"}"#);
        let body = json!({"qlQuery": "objectType = Office"});

        let (value, response) = Endpoint::post("object/aql")
            .json(Some(&body))
            .unwrap()
            .fetch::<serde_json::Value>(mock.as_ref(), &RequestContext::background())
            .await
            .unwrap();

        assert_eq!(value["id"], "7");
        assert_eq!(response.code, 200);

        let recorded = mock.last();
        assert_eq!(recorded.method, Method::POST);
        assert_eq!(recorded.content_type, None);
        assert!(!recorded.form);
        assert_eq!(recorded.body_json(), Some(body));
    }

    #[tokio::test]
    async fn test_multipart_uses_form_request() {
        let mock = MockConnector::responding("[]");
        Endpoint::post("rest/api/2/issue/DEV-1/attachments")
            .multipart(Multipart::file("file", "a.txt", b"abc"))
            .send(mock.as_ref(), &RequestContext::background())
            .await
            .unwrap();

        let recorded = mock.last();
        assert!(recorded.form);
        assert!(recorded
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data; boundary=")));
    }

    #[tokio::test]
    async fn test_factory_failure_skips_call() {
        let mock = MockConnector::failing_request();
        let err = Endpoint::get("rest/api/2/myself")
            .send(mock.as_ref(), &RequestContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::CreateRequest(_)));
        assert_eq!(mock.calls(), 0);
    }
}
