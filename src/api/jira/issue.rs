//
//  atlassian-client
//  api/jira/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira issue operations on `rest/api/{version}/issue`.

use std::sync::Arc;

use serde_json::json;

use super::models::{CustomFields, IssueCreated, IssueScheme, UpdateOperations};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

/// Issue operations for one Jira REST API version.
pub struct IssueService {
    c: Arc<dyn Connector>,
    version: String,
}

impl IssueService {
    /// Creates the service for API `version` (`"2"` or `"3"`).
    ///
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

    fn issue_path(&self, issue_key_or_id: &str) -> String {
        format!("rest/api/{}/issue/{}", self.version, issue_key_or_id)
    }

    /// Loads an issue.
    ///
    /// # Parameters
    ///
    /// * `fields` - fields to return; empty returns all navigable fields
    /// * `expand` - extra entities such as `renderedFields` or `changelog`
    pub async fn get(
        &self,
        ctx: &RequestContext,
        issue_key_or_id: &str,
        fields: &[String],
        expand: &[String],
    ) -> Result<(IssueScheme, Response), ApiError> {
        require(&[(Required::IssueKeyOrId, issue_key_or_id)])?;

        let mut query = QueryParams::new();
        query.set_list("fields", fields).set_list("expand", expand);

        Endpoint::get(self.issue_path(issue_key_or_id))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Creates an issue, folding `custom_fields` into the payload.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        payload: &IssueScheme,
        custom_fields: Option<&CustomFields>,
    ) -> Result<(IssueCreated, Response), ApiError> {
        let body = payload.to_payload(custom_fields, None)?;

        Endpoint::post(format!("rest/api/{}/issue", self.version))
            .json(Some(&body))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Edits an issue. Jira answers with an empty body.
    ///
    /// `notify` controls whether watchers are e-mailed about the change.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        issue_key_or_id: &str,
        notify: bool,
        payload: &IssueScheme,
        custom_fields: Option<&CustomFields>,
        operations: Option<&UpdateOperations>,
    ) -> Result<Response, ApiError> {
        require(&[(Required::IssueKeyOrId, issue_key_or_id)])?;

        let body = payload.to_payload(custom_fields, operations)?;
        let mut query = QueryParams::new();
        query.set_bool("notifyUsers", notify);

        Endpoint::put(self.issue_path(issue_key_or_id))
            .query(query)
            .json(Some(&body))?
            .send(self.c.as_ref(), ctx)
            .await
    }

    pub async fn delete(
        &self,
        ctx: &RequestContext,
        issue_key_or_id: &str,
        delete_subtasks: bool,
    ) -> Result<Response, ApiError> {
        require(&[(Required::IssueKeyOrId, issue_key_or_id)])?;

        let mut query = QueryParams::new();
        query.set_bool("deleteSubtasks", delete_subtasks);

        Endpoint::delete(self.issue_path(issue_key_or_id))
            .query(query)
            .send(self.c.as_ref(), ctx)
            .await
    }

    /// Assigns the issue to `account_id`.
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        issue_key_or_id: &str,
        account_id: &str,
    ) -> Result<Response, ApiError> {
        require(&[(Required::IssueKeyOrId, issue_key_or_id), (Required::AccountId, account_id)])?;

        Endpoint::put(format!("{}/assignee", self.issue_path(issue_key_or_id)))
            .json(Some(&json!({ "accountId": account_id })))?
            .send(self.c.as_ref(), ctx)
            .await
    }
}
