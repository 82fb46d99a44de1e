//
//  atlassian-client
//  api/confluence/children.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Children and descendants of Confluence content, and page copies.

use std::sync::Arc;

use super::models::{Content, ContentChildren, ContentPage, CopyOptions, Task};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

const CONTENT_PATH: &str = "wiki/rest/api/content";

pub struct ChildrenDescendantsService {
    c: Arc<dyn Connector>,
}

impl ChildrenDescendantsService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    /// Direct children of `content_id`, grouped by type.
    ///
    /// `parent_version` selects the version of the parent; zero means the
    /// latest.
    pub async fn children(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        expand: &[String],
        parent_version: u64,
    ) -> Result<(ContentChildren, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        let mut query = QueryParams::new();
        query
            .set_list("expand", expand)
            .set_nonzero("parentVersion", parent_version);

        Endpoint::get(format!("{}/{}/child", CONTENT_PATH, content_id))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Direct children of one type (`page`, `blogpost`, `comment`, ...).
    #[allow(clippy::too_many_arguments)]
    pub async fn children_by_type(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        content_type: &str,
        parent_version: u64,
        expand: &[String],
        start_at: u64,
        max_results: u64,
    ) -> Result<(ContentPage, Response), ApiError> {
        require(&[(Required::ContentId, content_id), (Required::ContentType, content_type)])?;

        let mut query = QueryParams::new();
        query
            .set_list("expand", expand)
            .set_nonzero("parentVersion", parent_version)
            .set_nonzero("start", start_at)
            .set_nonzero("limit", max_results);

        Endpoint::get(format!("{}/{}/child/{}", CONTENT_PATH, content_id, content_type))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// All descendants of `content_id`, grouped by type.
    pub async fn descendants(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        expand: &[String],
    ) -> Result<(ContentChildren, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        let mut query = QueryParams::new();
        query.set_list("expand", expand);

        Endpoint::get(format!("{}/{}/descendant", CONTENT_PATH, content_id))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Descendants of one type. `depth` is `all` or `root`; empty leaves it
    /// to the server.
    #[allow(clippy::too_many_arguments)]
    pub async fn descendants_by_type(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        content_type: &str,
        depth: &str,
        expand: &[String],
        start_at: u64,
        max_results: u64,
    ) -> Result<(ContentPage, Response), ApiError> {
        require(&[(Required::ContentId, content_id), (Required::ContentType, content_type)])?;

        let mut query = QueryParams::new();
        query
            .set_str("depth", depth)
            .set_list("expand", expand)
            .set_nonzero("start", start_at)
            .set_nonzero("limit", max_results);

        Endpoint::get(format!("{}/{}/descendant/{}", CONTENT_PATH, content_id, content_type))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Starts an asynchronous copy of the page tree below `content_id`.
    pub async fn copy_hierarchy(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        options: &CopyOptions,
    ) -> Result<(Task, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        Endpoint::post(format!("{}/{}/pagehierarchy/copy", CONTENT_PATH, content_id))
            .json(Some(options))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Copies a single page.
    pub async fn copy_page(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        expand: &[String],
        options: &CopyOptions,
    ) -> Result<(Content, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        let mut query = QueryParams::new();
        query.set_list("expand", expand);

        Endpoint::post(format!("{}/{}/copy", CONTENT_PATH, content_id))
            .query(query)
            .json(Some(options))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }
}
