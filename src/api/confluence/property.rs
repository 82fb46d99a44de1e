//
//  atlassian-client
//  api/confluence/property.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Content properties: JSON values attached to a piece of content.

use std::sync::Arc;

use super::models::{ContentProperty, ContentPropertyPage, ContentPropertyPayload};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

pub struct ContentPropertyService {
    c: Arc<dyn Connector>,
}

fn property_path(content_id: &str) -> String {
    format!("wiki/rest/api/content/{}/property", content_id)
}

impl ContentPropertyService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    pub async fn gets(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        expand: &[String],
        start_at: u64,
        max_results: u64,
    ) -> Result<(ContentPropertyPage, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        let mut query = QueryParams::new();
        query
            .set_list("expand", expand)
            .set_nonzero("start", start_at)
            .set_nonzero("limit", max_results);

        Endpoint::get(property_path(content_id))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Stores a new property on `content_id`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use atlassian_client::api::{Connector, RequestContext};
    /// use atlassian_client::api::confluence::{ContentPropertyPayload, ContentPropertyService};
    /// use serde_json::json;
    ///
    /// # async fn run(connector: Arc<dyn Connector>) -> Result<(), atlassian_client::api::ApiError> {
    /// let properties = ContentPropertyService::new(connector);
    /// let payload = ContentPropertyPayload { key: "key".into(), value: json!("value") };
    ///
    /// match properties.create(&RequestContext::background(), "80412692", &payload).await {
    ///     Ok((property, response)) => println!("{} {}", response.code, property.key),
    ///     Err(err) => {
    ///         if let Some(response) = err.response() {
    ///             eprintln!("{} {:?}", response.code, response.api);
    ///         }
    ///         return Err(err);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        payload: &ContentPropertyPayload,
    ) -> Result<(ContentProperty, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        Endpoint::post(property_path(content_id))
            .json(Some(payload))?
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    pub async fn get(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        key: &str,
    ) -> Result<(ContentProperty, Response), ApiError> {
        require(&[(Required::ContentId, content_id), (Required::PropertyKey, key)])?;

        Endpoint::get(format!("{}/{}", property_path(content_id), key))
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    pub async fn delete(&self, ctx: &RequestContext, content_id: &str, key: &str) -> Result<Response, ApiError> {
        require(&[(Required::ContentId, content_id), (Required::PropertyKey, key)])?;

        Endpoint::delete(format!("{}/{}", property_path(content_id), key))
            .send(self.c.as_ref(), ctx)
            .await
    }
}
