//
//  atlassian-client
//  api/confluence/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Listing and loading Confluence content.

use std::sync::Arc;

use super::models::{Content, ContentPage, GetContentOptions};
use crate::api::common::{ApiError, Required};
use crate::api::connector::Connector;
use crate::api::context::RequestContext;
use crate::api::endpoint::Endpoint;
use crate::api::query::QueryParams;
use crate::api::response::Response;
use crate::api::validate::require;

pub struct ContentService {
    c: Arc<dyn Connector>,
}

impl ContentService {
    pub fn new(c: Arc<dyn Connector>) -> Self {
        Self { c }
    }

    /// Lists content matching `options`.
    ///
    /// # Parameters
    ///
    /// * `options` - filters; empty fields are not sent
    /// * `start_at` - offset of the first result
    /// * `max_results` - page size; zero leaves it to the server
    pub async fn gets(
        &self,
        ctx: &RequestContext,
        options: &GetContentOptions,
        start_at: u64,
        max_results: u64,
    ) -> Result<(ContentPage, Response), ApiError> {
        let mut query = QueryParams::new();
        query
            .set_str("type", &options.context_type)
            .set_str("spaceKey", &options.space_key)
            .set_str("title", &options.title)
            .set_str("trigger", &options.trigger)
            .set_str("orderby", &options.order_by)
            .set_list("status", &options.status)
            .set_list("expand", &options.expand)
            .set_opt("postingDay", options.posting_day.map(|day| day.format("%Y-%m-%d")))
            .set_nonzero("start", start_at)
            .set_nonzero("limit", max_results);

        Endpoint::get("wiki/rest/api/content")
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }

    /// Loads one piece of content. `version` zero means the latest.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        content_id: &str,
        expand: &[String],
        version: u64,
    ) -> Result<(Content, Response), ApiError> {
        require(&[(Required::ContentId, content_id)])?;

        let mut query = QueryParams::new();
        query.set_list("expand", expand).set_nonzero("version", version);

        Endpoint::get(format!("wiki/rest/api/content/{}", content_id))
            .query(query)
            .fetch(self.c.as_ref(), ctx)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::api::mock::MockConnector;

    #[tokio::test]
    async fn test_gets_with_filters() {
        let mock = MockConnector::responding(r#"{"results":[{"id":"1","type":"blogpost"}],"size":1}"#);
        let service = ContentService::new(mock.clone());

        let options = GetContentOptions {
            context_type: "blogpost".into(),
            space_key: "DUMMY".into(),
            status: vec!["current".into(), "draft".into()],
            posting_day: NaiveDate::from_ymd_opt(2024, 3, 9),
            ..Default::default()
        };

        let (page, _) = service
            .gets(&RequestContext::background(), &options, 0, 50)
            .await
            .unwrap();

        assert_eq!(page.results[0].kind, "blogpost");
        assert_eq!(
            mock.last().endpoint,
            "wiki/rest/api/content?limit=50&postingDay=2024-03-09&spaceKey=DUMMY&status=current%2Cdraft&type=blogpost"
        );
    }

    #[tokio::test]
    async fn test_gets_without_filters() {
        let mock = MockConnector::responding("{}");
        let service = ContentService::new(mock.clone());

        service
            .gets(&RequestContext::background(), &GetContentOptions::default(), 0, 0)
            .await
            .unwrap();

        assert_eq!(mock.last().endpoint, "wiki/rest/api/content");
    }

    #[tokio::test]
    async fn test_get() {
        let mock = MockConnector::responding(r#"{"id":"80412692","title":"Home"}"#);
        let service = ContentService::new(mock.clone());

        let (content, response) = service
            .get(&RequestContext::background(), "80412692", &["space".to_string()], 3)
            .await
            .unwrap();

        assert_eq!(content.title, "Home");
        assert_eq!(response.endpoint, "https://mock.atlassian.net/wiki/rest/api/content/80412692?expand=space&version=3");
        assert_eq!(mock.last().endpoint, "wiki/rest/api/content/80412692?expand=space&version=3");
    }

    #[tokio::test]
    async fn test_get_requires_content_id() {
        let mock = MockConnector::responding("{}");
        let service = ContentService::new(mock.clone());

        let err = service.get(&RequestContext::background(), "", &[], 0).await.unwrap_err();

        assert!(matches!(err, ApiError::Missing(Required::ContentId)));
        assert!(mock.requests().is_empty());
    }
}
