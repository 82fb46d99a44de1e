//
//  atlassian-client
//  api/assets/object.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Assets object operations.
//!
//! # Endpoints
//!
//! | Operation | Method | Path (below `jsm/assets/workspace/{ws}/v1/`) |
//! |-----------|--------|----------------------------------------------|
//! | get | GET | `object/{id}` |
//! | update | PUT | `object/{id}` |
//! | delete | DELETE | `object/{id}` |
//! | attributes | GET | `object/{id}/attributes` |
//! | history | GET | `object/{id}/history` |
//! | references | GET | `object/{id}/referenceinfo` |
//! | relation | GET | `objectconnectedtickets/{id}/tickets` |
//! | create | POST | `object/create` |
//! | filter | POST | `object/aql` |
//! | search | POST | `object/navlist/aql` |

use std::sync::Arc;

use serde_json::json;

use super::models::{
    Object, ObjectAttribute, ObjectHistory, ObjectList, ObjectListResult, ObjectPayload,
    ObjectReferenceTypeInfo, ObjectSearchParams, ObjectTickets,
};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

/// Operations on Assets objects.
pub struct ObjectService {
    c: Arc<dyn Connector>,
}

fn base(workspace_id: &str) -> String {
    format!("jsm/assets/workspace/{}/v1", workspace_id)
}

fn object_path(workspace_id: &str, object_id: &str) -> String {
    format!("{}/object/{}", base(workspace_id), object_id)
}

impl ObjectService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    /// Loads one object.
    ///
    /// # Errors
    ///
    /// `Missing(WorkspaceId)` then `Missing(ObjectId)` before any request is
    /// built, otherwise the connector's errors.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
    ) -> Result<(Object, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::get(object_path(workspace_id, object_id))
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Replaces the attributes of an object.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
        payload: &ObjectPayload,
    ) -> Result<(Object, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::put(object_path(workspace_id, object_id))
            .json(Some(payload))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Deletes an object. The response body is not decoded.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
    ) -> Result<Response, ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::delete(object_path(workspace_id, object_id))
            .send(self.c.as_ref(), ctx)
            .await
    }

    pub async fn attributes(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
    ) -> Result<(Vec<ObjectAttribute>, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::get(format!("{}/attributes", object_path(workspace_id, object_id)))
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Change history, newest first unless `ascending` is set.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
        ascending: bool,
    ) -> Result<(Vec<ObjectHistory>, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        let mut query = QueryParams::new();
        query.set_flag("asc", ascending);

        Endpoint::get(format!("{}/history", object_path(workspace_id, object_id)))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    pub async fn references(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
    ) -> Result<(Vec<ObjectReferenceTypeInfo>, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::get(format!("{}/referenceinfo", object_path(workspace_id, object_id)))
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Jira tickets connected to the object.
    pub async fn relation(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        object_id: &str,
    ) -> Result<(ObjectTickets, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::ObjectId, object_id)])?;

        Endpoint::get(format!(
            "{}/objectconnectedtickets/{}/tickets",
            base(workspace_id),
            object_id
        ))
        .fetch(self.c.as_ref(), ctx)
        .await
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        payload: &ObjectPayload,
    ) -> Result<(Object, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id)])?;

        Endpoint::post(format!("{}/object/create", base(workspace_id)))
            .json(Some(payload))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Runs an AQL query.
    ///
    /// # Parameters
    ///
    /// * `aql` - the AQL expression, sent as `{"qlQuery": aql}`
    /// * `attributes` - whether object attributes are included
    /// * `start_at` / `max_results` - page window; zero leaves it to the server
    pub async fn filter(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        aql: &str,
        attributes: bool,
        start_at: u64,
        max_results: u64,
    ) -> Result<(ObjectListResult, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id), (Required::AqlQuery, aql)])?;

        let mut query = QueryParams::new();
        query
            .set_bool("includeAttributes", attributes)
            .set_nonzero("startAt", start_at)
            .set_nonzero("maxResults", max_results);

        Endpoint::post(format!("{}/object/aql", base(workspace_id)))
            .query(query)
            .json(Some(&json!({ "qlQuery": aql })))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Navigation list search.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        workspace_id: &str,
        payload: &ObjectSearchParams,
    ) -> Result<(ObjectList, Response), ApiError> {
        require(&[(Required::WorkspaceId, workspace_id)])?;

        Endpoint::post(format!("{}/object/navlist/aql", base(workspace_id)))
            .json(Some(payload))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }
}
