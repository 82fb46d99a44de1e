//
//  atlassian-client
//  api/jira/attachment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira issue attachments.
//!
//! Uploads go through the form request variant of the connector so the
//! `X-Atlassian-Token: no-check` header is present.

use std::sync::Arc;

use super::models::{Attachment, AttachmentMetadata};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::payload::Multipart;
use crate::api::response::Response;
use crate::api::validate::require;

pub struct AttachmentService {
    c: Arc<dyn Connector>,
    version: String,
}

impl AttachmentService {
    /// # Errors
    ///
    /// `Missing(ApiVersion)` when `version` is empty.
    pub fn new(c: Arc<dyn Connector>, version: &str) -> Result<Self, ApiError> {
        require(&[(Required::ApiVersion, version)])?;
        Ok(Self {
            c,
            version: version.to_string(),
        })
    }

    pub async fn metadata(
        &self,
        ctx: &RequestContext,
        attachment_id: &str,
    ) -> Result<(AttachmentMetadata, Response), ApiError> {
        require(&[(Required::AttachmentId, attachment_id)])?;

        Endpoint::get(format!("rest/api/{}/attachment/{}", self.version, attachment_id))
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    pub async fn delete(&self, ctx: &RequestContext, attachment_id: &str) -> Result<Response, ApiError> {
        require(&[(Required::AttachmentId, attachment_id)])?;

        Endpoint::delete(format!("rest/api/{}/attachment/{}", self.version, attachment_id))
            .send(self.c.as_ref(), ctx)
            .await
    }

    /// Uploads `content` as `file_name` to the issue.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        issue_key_or_id: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(Vec<Attachment>, Response), ApiError> {
        require(&[(Required::IssueKeyOrId, issue_key_or_id), (Required::FileName, file_name)])?;

        Endpoint::post(format!("rest/api/{}/issue/{}/attachments", self.version, issue_key_or_id))
            .multipart(Multipart::file("file", file_name, content))
            .fetch(self.c.as_ref(), ctx)
            .await
    }
}
