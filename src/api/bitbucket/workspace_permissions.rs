//
//  atlassian-client
//  api/bitbucket/workspace_permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace and repository permissions of a Bitbucket Cloud workspace.
//!
//! `query` is a Bitbucket filter expression such as `permission="owner"`;
//! `sort` names the field to order by (`user.display_name`). Both are
//! optional.

use std::sync::Arc;

use super::models::{Page, RepositoryPermission, WorkspaceMembership};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

pub struct WorkspacePermissionService {
    c: Arc<dyn Connector>,
}

impl WorkspacePermissionService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    /// Members of `workspace` and their workspace permission.
    pub async fn members(
        &self,
        ctx: &RequestContext,
        workspace: &str,
        query: &str,
    ) -> Result<(Page<WorkspaceMembership>, Response), ApiError> {
        require(&[(Required::Workspace, workspace)])?;

        let mut params = QueryParams::new();
        params.set_str("q", query);

        Endpoint::get(format!("2.0/workspaces/{}/permissions", workspace))
            .query(params)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Repository permissions across every repository of `workspace`.
    pub async fn repositories(
        &self,
        ctx: &RequestContext,
        workspace: &str,
        query: &str,
        sort: &str,
    ) -> Result<(Page<RepositoryPermission>, Response), ApiError> {
        require(&[(Required::Workspace, workspace)])?;

        let mut params = QueryParams::new();
        params.set_str("q", query).set_str("sort", sort);

        Endpoint::get(format!("2.0/workspaces/{}/permissions/repositories", workspace))
            .query(params)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Permissions on a single repository.
    pub async fn repository(
        &self,
        ctx: &RequestContext,
        workspace: &str,
        repository: &str,
        query: &str,
        sort: &str,
    ) -> Result<(Page<RepositoryPermission>, Response), ApiError> {
        require(&[(Required::Workspace, workspace), (Required::Repository, repository)])?;

        let mut params = QueryParams::new();
        params.set_str("q", query).set_str("sort", sort);

        Endpoint::get(format!(
            "2.0/workspaces/{}/permissions/repositories/{}",
            workspace, repository
        ))
        .query(params)
        .fetch(self.c.as_ref(), ctx)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockConnector;

    const WS: &str = "work-space-name-sample";
    const OWNER: &str = "permission=\"owner\"";

    #[tokio::test]
    async fn test_members() {
        let mock = MockConnector::responding(r#"{"values":[{"permission":"owner"}],"pagelen":10}"#);
        let service = WorkspacePermissionService::new(mock.clone());

        let (page, _) = service.members(&RequestContext::background(), WS, OWNER).await.unwrap();

        assert_eq!(page.values[0].permission, "owner");
        assert_eq!(
            mock.last().endpoint,
            "2.0/workspaces/work-space-name-sample/permissions?q=permission%3D%22owner%22"
        );
    }

    #[tokio::test]
    async fn test_repositories() {
        let mock = MockConnector::responding(r#"{"values":[]}"#);
        let service = WorkspacePermissionService::new(mock.clone());
        let ctx = RequestContext::background();

        service.repositories(&ctx, WS, OWNER, "user.display_name").await.unwrap();
        assert_eq!(
            mock.last().endpoint,
            "2.0/workspaces/work-space-name-sample/permissions/repositories?q=permission%3D%22owner%22&sort=user.display_name"
        );

        service
            .repository(&ctx, WS, "microservice-a", OWNER, "user.display_name")
            .await
            .unwrap();
        assert_eq!(
            mock.last().endpoint,
            "2.0/workspaces/work-space-name-sample/permissions/repositories/microservice-a?q=permission%3D%22owner%22&sort=user.display_name"
        );
    }

    #[tokio::test]
    async fn test_validation_order() {
        let mock = MockConnector::responding("{}");
        let service = WorkspacePermissionService::new(mock.clone());
        let ctx = RequestContext::background();

        let err = service.members(&ctx, "", OWNER).await.unwrap_err();
        assert!(matches!(err, ApiError::Missing(Required::Workspace)));

        let err = service.repository(&ctx, "", "", OWNER, "").await.unwrap_err();
        assert!(matches!(err, ApiError::Missing(Required::Workspace)));

        let err = service.repository(&ctx, WS, "", OWNER, "").await.unwrap_err();
        assert!(matches!(err, ApiError::Missing(Required::Repository)));

        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_request_creation_failure() {
        let mock = MockConnector::failing_request();
        let service = WorkspacePermissionService::new(mock.clone());

        let err = service
            .repositories(&RequestContext::background(), WS, OWNER, "")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::CreateRequest(_)));
        assert_eq!(mock.calls(), 0);
    }
}
