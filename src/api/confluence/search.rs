//
//  atlassian-client
//  api/confluence/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CQL search over content and users.

use std::sync::Arc;

use super::models::{SearchContentOptions, SearchPage};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

pub struct SearchService {
    c: Arc<dyn Connector>,
}

impl SearchService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    /// Searches content with a CQL query.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use atlassian_client::api::{Connector, RequestContext};
    /// use atlassian_client::api::confluence::{SearchContentOptions, SearchService};
    ///
    /// # async fn run(connector: Arc<dyn Connector>) -> Result<(), atlassian_client::api::ApiError> {
    /// let search = SearchService::new(connector);
    /// let options = SearchContentOptions { limit: 20, ..Default::default() };
    /// let (page, _) = search.content(&RequestContext::background(), "type=page", &options).await?;
    /// for result in &page.results {
    ///     println!("{}", result.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn content(
        &self,
        ctx: &RequestContext,
        cql: &str,
        options: &SearchContentOptions,
    ) -> Result<(SearchPage, Response), ApiError> {
        require(&[(Required::Cql, cql)])?;

        let mut query = QueryParams::new();
        query
            .set_str("cql", cql)
            .set_str("cqlcontext", &options.context)
            .set_str("cursor", &options.cursor)
            .set_flag("next", options.next)
            .set_flag("prev", options.prev)
            .set_nonzero("limit", options.limit)
            .set_nonzero("start", options.start)
            .set_flag("includeArchivedSpaces", options.include_archived_spaces)
            .set_flag("excludeCurrentSpaces", options.exclude_current_spaces)
            .set_str("sitePermissionTypeFilter", &options.site_permission_type_filter)
            .set_str("excerpt", &options.excerpt)
            .set_list("expand", &options.expand);

        Endpoint::get("wiki/rest/api/search")
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Searches users with a CQL query.
    pub async fn users(
        &self,
        ctx: &RequestContext,
        cql: &str,
        start: u64,
        limit: u64,
        expand: &[String],
    ) -> Result<(SearchPage, Response), ApiError> {
        require(&[(Required::Cql, cql)])?;

        let mut query = QueryParams::new();
        query
            .set_str("cql", cql)
            .set_nonzero("start", start)
            .set_nonzero("limit", limit)
            .set_list("expand", expand);

        Endpoint::get("wiki/rest/api/search/user")
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }
}
