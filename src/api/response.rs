//
//  atlassian-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Envelope
//!
//! Every exchange that reached the remote service produces a [`Response`],
//! whether it succeeded or not. The envelope carries the status code, the
//! resolved endpoint, the method and the raw body bytes; decoding into a
//! typed value happens at the call site with [`Response::into_json`].

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::api::common::ApiError;

/// The uniform result of one HTTP exchange.
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::Response;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Created { id: String }
///
/// let response = Response::new(201, "https://example.atlassian.net/rest/api/2/issue", "POST")
///     .with_bytes(r#"{"id":"1"}"#);
/// let (created, response) = response.into_json::<Created>()?;
///
/// assert_eq!(created.id, "1");
/// assert_eq!(response.code, 201);
/// # Ok::<(), atlassian_client::api::ApiError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Numeric status code.
    pub code: u16,

    /// Resolved endpoint URL of the exchange.
    pub endpoint: String,

    /// HTTP method of the exchange.
    pub method: String,

    /// Response headers.
    pub headers: HeaderMap,

    /// Raw body bytes. Empty when the body was never read.
    pub bytes: Bytes,

    /// Error message reported by the service in a failed response body.
    pub api: Option<String>,
}

impl Response {
    /// Creates an envelope without headers or body.
    pub fn new(code: u16, endpoint: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            code,
            endpoint: endpoint.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    /// Replaces the body bytes.
    pub fn with_bytes(mut self, bytes: impl Into<Bytes>) -> Self {
        self.bytes = bytes.into();
        self
    }

    /// The status code as a [`StatusCode`].
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code).ok()
    }

    /// Whether the status code lies in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// The body as UTF-8 text, lossily converted.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Decodes the body into `T` and returns it together with the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`], carrying this envelope, when the body is
    /// not valid JSON for `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<(T, Response), ApiError> {
        match serde_json::from_slice::<T>(&self.bytes) {
            Ok(value) => Ok((value, self)),
            Err(source) => Err(ApiError::Decode {
                response: Box::new(self),
                source,
            }),
        }
    }
}

/// Extracts a human readable message from an Atlassian error body.
///
/// The products report errors in different shapes:
///
/// ```json
/// {"errorMessages": ["Issue does not exist"], "errors": {}}
/// {"errorMessages": [], "errors": {"summary": "You must specify a summary"}}
/// {"statusCode": 404, "message": "No content found with id 42"}
/// {"type": "error", "error": {"message": "Repository not found"}}
/// ```
///
/// Returns `None` when none of them match.
pub fn extract_api_message(body: &[u8]) -> Option<String> {
    let json = serde_json::from_slice::<serde_json::Value>(body).ok()?;

    // Jira / Assets: {"errorMessages": [...], "errors": {...}}
    let mut messages: Vec<String> = json
        .get("errorMessages")
        .and_then(|m| m.as_array())
        .map(|arr| arr.iter().filter_map(|m| m.as_str()).map(str::to_string).collect())
        .unwrap_or_default();

    if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
        for (field, message) in errors {
            if let Some(message) = message.as_str() {
                messages.push(format!("{}: {}", field, message));
            }
        }
    }

    if !messages.is_empty() {
        return Some(messages.join("; "));
    }

    // Bitbucket: {"type": "error", "error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    // Confluence: {"message": "..."}
    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
