//
//  atlassian-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for every Atlassian product
//!
//! This module provides the error catalogue shared by the Jira, Confluence,
//! Bitbucket and Assets services, plus the pagination types re-exported from
//! the [`pagination`] submodule.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Required`] - The identifier or field a validation error refers to
//! - [`ErrorKind`] - Coarse classification used to branch on error families
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use atlassian_client::api::common::{ApiError, Required};
//!
//! fn handle(result: Result<(), ApiError>) {
//!     match result {
//!         Ok(()) => println!("Success!"),
//!         Err(ApiError::Missing(Required::WorkspaceId)) => println!("Pass a workspace id"),
//!         Err(ApiError::InvalidStatusCode(response)) => {
//!             println!("{} answered {}", response.endpoint, response.code)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Errors are compared by variant, never by message text
//! - Status and decode errors carry the [`Response`] envelope for diagnostics

use std::fmt;

use thiserror::Error;

use crate::api::response::Response;
use crate::api::transport::TransportError;

mod pagination;

pub use pagination::*;

/// The identifier or field that a validation error refers to.
///
/// Every resource method validates its required arguments in a fixed
/// order before any request is built. The first empty one is reported as
/// [`ApiError::Missing`] carrying one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Required {
    /// Base site URL of the Atlassian instance.
    Site,
    /// API version segment used by the Jira services (`"2"` or `"3"`).
    ApiVersion,
    /// Assets workspace id.
    WorkspaceId,
    /// Assets object id.
    ObjectId,
    /// Assets Query Language statement.
    AqlQuery,
    /// Confluence content id.
    ContentId,
    /// Confluence content type (`page`, `blogpost`, `comment`, ...).
    ContentType,
    /// Confluence content property key.
    PropertyKey,
    /// Confluence Query Language statement.
    Cql,
    /// Bitbucket workspace slug.
    Workspace,
    /// Bitbucket repository slug.
    Repository,
    /// Jira issue key or numeric id.
    IssueKeyOrId,
    /// Atlassian account id.
    AccountId,
    /// Jira attachment id.
    AttachmentId,
    /// File name of an uploaded attachment.
    FileName,
    /// Jira field id (`summary`, `customfield_10010`, ...).
    FieldId,
    /// Jira edit operator (`add`, `set`, `remove`, ...).
    EditOperator,
    /// Value used by a Jira edit operation.
    EditValue,
    /// Custom fields that should be merged into an issue payload.
    CustomFields,
    /// Update operations that should be merged into an issue payload.
    Operations,
}

impl Required {
    /// Human readable description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::ApiVersion => "api version",
            Self::WorkspaceId => "workspace id",
            Self::ObjectId => "object id",
            Self::AqlQuery => "aql query",
            Self::ContentId => "content id",
            Self::ContentType => "content type",
            Self::PropertyKey => "property key",
            Self::Cql => "cql query",
            Self::Workspace => "workspace",
            Self::Repository => "repository",
            Self::IssueKeyOrId => "issue key or id",
            Self::AccountId => "account id",
            Self::AttachmentId => "attachment id",
            Self::FileName => "file name",
            Self::FieldId => "field id",
            Self::EditOperator => "edit operator",
            Self::EditValue => "edit value",
            Self::CustomFields => "custom fields",
            Self::Operations => "update operations",
        }
    }
}

impl fmt::Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Unified error type for all Atlassian API operations.
///
/// `ApiError` separates failures by the stage that produced them, so a
/// caller can tell a missing identifier apart from a request that could not
/// be built, a network failure, a rejected status code or a malformed body.
///
/// # Variants
///
/// | Variant | Stage | Envelope |
/// |---------|-------|----------|
/// | `Missing` | validation | no |
/// | `NilPayload` | payload encoding | no |
/// | `UnsupportedPayload` | payload encoding | no |
/// | `Encode` | payload encoding | no |
/// | `UrlParse` | request construction | no |
/// | `CreateRequest` | request construction | no |
/// | `Transport` | dispatch | no |
/// | `InvalidStatusCode` | response classification | yes |
/// | `Body` | body read | yes |
/// | `Decode` | JSON decoding | yes |
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::common::{ApiError, ErrorKind, Required};
///
/// let err = ApiError::Missing(Required::ObjectId);
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.to_string(), "no object id set");
/// assert!(err.response().is_none());
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required identifier or field was empty.
    #[error("no {0} set")]
    Missing(Required),

    /// A JSON body was required but none was given.
    #[error("payload must not be nil")]
    NilPayload,

    /// The body serialized to a bare scalar instead of a JSON object or array.
    #[error("payload must be a JSON object or array, not a bare value")]
    UnsupportedPayload,

    /// The body could not be serialized to JSON.
    #[error("failed to encode the payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The endpoint could not be parsed or resolved against the site.
    #[error("failed to parse the endpoint: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The HTTP request could not be assembled (invalid header values).
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the header or value that was rejected
    #[error("failed to create the http request: {0}")]
    CreateRequest(String),

    /// The transport failed before an HTTP response was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service answered outside of `[200, 300)`.
    #[error("invalid status code {} from {} {}", .0.code, .0.method, .0.endpoint)]
    InvalidStatusCode(Box<Response>),

    /// The response body could not be read.
    #[error("failed to read the response body: {source}")]
    Body {
        /// The envelope built before the read failed.
        response: Box<Response>,
        /// The transport error raised while reading.
        #[source]
        source: TransportError,
    },

    /// The response body was not valid JSON for the requested type.
    #[error("failed to decode the response body: {source}")]
    Decode {
        /// The envelope, including the raw bytes that failed to decode.
        response: Box<Response>,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing identifiers or unusable payloads, detected before any I/O.
    Validation,
    /// The endpoint or request could not be built.
    Construction,
    /// Network, timeout or cancellation failures.
    Transport,
    /// Non-2xx status code.
    Status,
    /// Body read or JSON decode failures.
    Decode,
}

impl ApiError {
    /// Returns the [`ErrorKind`] family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Missing(_) | Self::NilPayload | Self::UnsupportedPayload => ErrorKind::Validation,
            Self::Encode(_) | Self::UrlParse(_) | Self::CreateRequest(_) => ErrorKind::Construction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::InvalidStatusCode(_) => ErrorKind::Status,
            Self::Body { .. } | Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Returns the response envelope when the error happened after an HTTP
    /// response was received.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::InvalidStatusCode(response) => Some(response),
            Self::Body { response, .. } | Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the missing identifier for validation errors.
    pub fn missing(&self) -> Option<Required> {
        match self {
            Self::Missing(required) => Some(*required),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_messages() {
        assert_eq!(ApiError::Missing(Required::WorkspaceId).to_string(), "no workspace id set");
        assert_eq!(ApiError::Missing(Required::Cql).to_string(), "no cql query set");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ApiError::NilPayload.kind(), ErrorKind::Validation);
        assert_eq!(ApiError::CreateRequest("bad header".into()).kind(), ErrorKind::Construction);
        assert_eq!(ApiError::Transport(TransportError::Cancelled).kind(), ErrorKind::Transport);
        assert_eq!(ApiError::Missing(Required::ContentId).missing(), Some(Required::ContentId));
        assert_eq!(ApiError::NilPayload.missing(), None);
    }

    #[test]
    fn test_status_error_exposes_envelope() {
        let response = Response::new(404, "https://example.atlassian.net/rest/api/2/issue/X-1", "GET");
        let err = ApiError::InvalidStatusCode(Box::new(response));

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.response().map(|r| r.code), Some(404));
        assert_eq!(
            err.to_string(),
            "invalid status code 404 from GET https://example.atlassian.net/rest/api/2/issue/X-1"
        );
    }
}
