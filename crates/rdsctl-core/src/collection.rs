//! Listings of resources
//!
//! A [`ResourceCollection`] is a configured list call: which action, where the
//! items sit in the response, and how to page. Nothing is fetched until
//! [`all`](ResourceCollection::all) or [`pages`](ResourceCollection::pages)
//! is awaited.
//!
//! # Example
//!
//! ```rust,ignore
//! let running = rds
//!     .db_instances()
//!     .filter(Params::new().with("DBInstanceStatus", "Running"))
//!     .page_size(50)
//!     .limit(200)
//!     .all()
//!     .await?;
//!
//! for instance in &running {
//!     println!("{} {:?}", instance.db_instance_id(), instance.attributes().engine);
//! }
//! ```

use crate::action::Action;
use crate::client::Session;
use crate::error::{RdsError, Result};
use crate::params::Params;
use crate::resources::FromItem;
use crate::response;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

const PAGE_NUMBER: &str = "PageNumber";
const PAGE_SIZE: &str = "PageSize";

/// How a listing is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// `PageNumber`/`PageSize` until the listing is exhausted
    Paged,
    /// One call, no paging parameters
    Single,
}

/// A lazily evaluated listing of `R`
pub struct ResourceCollection<R> {
    session: Session,
    action: Action,
    items_path: &'static str,
    paging: Paging,
    filter: Params,
    page_size: u32,
    limit: Option<usize>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceCollection<R> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            action: self.action,
            items_path: self.items_path,
            paging: self.paging,
            filter: self.filter.clone(),
            page_size: self.page_size,
            limit: self.limit,
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCollection")
            .field("action", &self.action)
            .field("items_path", &self.items_path)
            .field("paging", &self.paging)
            .field("filter", &self.filter)
            .field("page_size", &self.page_size)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<R: FromItem> ResourceCollection<R> {
    pub(crate) fn new(
        session: Session,
        action: Action,
        items_path: &'static str,
        paging: Paging,
    ) -> Self {
        let page_size = session.settings().page_size;
        Self {
            session,
            action,
            items_path,
            paging,
            filter: Params::new(),
            page_size,
            limit: None,
            _resource: PhantomData,
        }
    }

    /// Add parameters sent with every list call
    #[must_use]
    pub fn filter(mut self, params: Params) -> Self {
        for (name, value) in params {
            self.filter.insert(name, value);
        }
        self
    }

    /// Items requested per call; ignored by single-call listings
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Stop after `limit` handles
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Every handle in the listing, in response order
    pub async fn all(&self) -> Result<Vec<R>> {
        Ok(self.pages().await?.into_iter().flatten().collect())
    }

    /// The first handle, if the listing is not empty
    pub async fn first(&self) -> Result<Option<R>> {
        Ok(self.clone().limit(1).all().await?.into_iter().next())
    }

    /// Handles grouped by the call that returned them
    pub async fn pages(&self) -> Result<Vec<Vec<R>>> {
        for reserved in [PAGE_NUMBER, PAGE_SIZE] {
            if self.filter.contains_key(reserved) {
                return Err(RdsError::Validation(format!(
                    "{reserved} is managed by the collection; use page_size()/limit() instead"
                )));
            }
        }
        if self.limit == Some(0) {
            return Ok(Vec::new());
        }

        match self.paging {
            Paging::Single => {
                let response = self.session.call(self.action, self.filter.clone()).await?;
                let page = self.build_page(&response, self.limit)?;
                Ok(if page.is_empty() { Vec::new() } else { vec![page] })
            }
            Paging::Paged => self.fetch_paged().await,
        }
    }

    async fn fetch_paged(&self) -> Result<Vec<Vec<R>>> {
        let mut pages = Vec::new();
        let mut kept = 0usize;
        let mut seen = 0u64;
        let mut page_number = 1u32;

        loop {
            let remaining = self.limit.map(|limit| limit.saturating_sub(kept));
            if remaining == Some(0) {
                break;
            }

            let params = self
                .filter
                .clone()
                .with(PAGE_NUMBER, page_number)
                .with(PAGE_SIZE, self.page_size);
            let response = self.session.call(self.action, params).await?;

            let raw = response::items(&response, self.items_path).len();
            seen += raw as u64;
            let page = self.build_page(&response, remaining)?;
            kept += page.len();

            debug!(
                action = %self.action,
                page = page_number,
                items = raw,
                "Fetched listing page"
            );

            if !page.is_empty() {
                pages.push(page);
            }

            // The service may cap PageSize below what was asked for, so a
            // short page only ends the listing when no total is reported.
            let done = match response::total_record_count(&response) {
                Some(total) => raw == 0 || seen >= total,
                None => raw < self.page_size as usize,
            };
            if done {
                break;
            }
            page_number += 1;
        }

        Ok(pages)
    }

    fn build_page(&self, response: &Value, remaining: Option<usize>) -> Result<Vec<R>> {
        let items = response::items(response, self.items_path);
        let take = remaining.map_or(items.len(), |r| r.min(items.len()));

        items[..take]
            .iter()
            .map(|item| {
                let id = R::item_id(item).ok_or_else(|| RdsError::MissingKey {
                        action: self.action,
                        key: format!("{}[].{}", self.items_path, R::ID_KEY),
                    })?;
                R::from_item(&self.session, id, item, self.action)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{MockApi, session};
    use crate::resources::{Region, Resource, Task};
    use serde_json::json;

    fn task_page(ids: std::ops::Range<u32>, total: Option<u32>) -> Value {
        let items: Vec<Value> = ids
            .map(|id| json!({"TaskId": id, "TaskStatus": "Running"}))
            .collect();
        let mut page = json!({"Items": {"TaskProgressInfo": items}});
        if let Some(total) = total {
            page["TotalRecordCount"] = json!(total);
        }
        page
    }

    fn tasks(api: MockApi) -> ResourceCollection<Task> {
        ResourceCollection::new(
            session(api),
            Action::DescribeTasks,
            "Items.TaskProgressInfo",
            Paging::Paged,
        )
    }

    #[tokio::test]
    async fn test_pages_until_short_page() {
        let mut api = MockApi::new();
        api.expect_invoke().times(3).returning(|_, params| {
            let page = params.get("PageNumber").and_then(Value::as_u64).unwrap() as u32;
            assert_eq!(params.get("PageSize"), Some(&json!(2)));
            Ok(match page {
                1 => task_page(0..2, None),
                2 => task_page(2..4, None),
                _ => task_page(4..5, None),
            })
        });

        let all = tasks(api).page_size(2).all().await.unwrap();
        let ids: Vec<_> = all.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_stops_at_total_record_count() {
        let mut api = MockApi::new();
        api.expect_invoke().times(2).returning(|_, params| {
            let page = params.get("PageNumber").and_then(Value::as_u64).unwrap();
            Ok(if page == 1 {
                task_page(0..2, Some(4))
            } else {
                task_page(2..4, Some(4))
            })
        });

        let pages = tasks(api).page_size(2).pages().await.unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[tokio::test]
    async fn test_capped_page_size_follows_total_record_count() {
        let mut api = MockApi::new();
        api.expect_invoke().times(3).returning(|_, params| {
            assert_eq!(params.get("PageSize"), Some(&json!(200)));
            let page = params.get("PageNumber").and_then(Value::as_u64).unwrap() as u32;
            let start = (page - 1) * 100;
            Ok(task_page(start..(start + 100).min(250), Some(250)))
        });

        let all = tasks(api).page_size(200).all().await.unwrap();
        assert_eq!(all.len(), 250);
        assert_eq!(all.last().map(|t| t.id().to_string()), Some("249".to_string()));
    }

    #[tokio::test]
    async fn test_empty_page_ends_listing_despite_total() {
        let mut api = MockApi::new();
        api.expect_invoke().times(2).returning(|_, params| {
            let page = params.get("PageNumber").and_then(Value::as_u64).unwrap();
            Ok(if page == 1 {
                task_page(0..2, Some(10))
            } else {
                task_page(0..0, Some(10))
            })
        });

        let all = tasks(api).page_size(2).all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_limit_truncates_and_stops() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .times(1)
            .returning(|_, _| Ok(task_page(0..30, Some(100))));

        let first = tasks(api).limit(3).all().await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].attributes().task_status.as_deref(), Some("Running"));
    }

    #[tokio::test]
    async fn test_zero_limit_makes_no_calls() {
        let mut api = MockApi::new();
        api.expect_invoke().never();
        assert!(tasks(api).limit(0).all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reserved_filter_rejected() {
        let mut api = MockApi::new();
        api.expect_invoke().never();
        let err = tasks(api)
            .filter(Params::new().with("PageSize", 100))
            .all()
            .await
            .unwrap_err();
        assert!(err.is_bad_request());
    }

    #[tokio::test]
    async fn test_item_without_identifier() {
        let mut api = MockApi::new();
        api.expect_invoke().returning(|_, _| {
            Ok(json!({"Items": {"TaskProgressInfo": [{"TaskStatus": "Running"}]}}))
        });

        let err = tasks(api).all().await.unwrap_err();
        assert!(matches!(err, RdsError::MissingKey { ref key, .. } if key.ends_with("TaskId")));
    }

    #[tokio::test]
    async fn test_single_call_sends_no_paging() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::DescribeRegions
                    && !params.contains_key("PageNumber")
                    && !params.contains_key("PageSize")
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({"Regions": {"RDSRegion": [
                    {"RegionId": "cn-hangzhou", "LocalName": "China (Hangzhou)"},
                    {"RegionId": "ap-southeast-1", "LocalName": "Singapore"}
                ]}}))
            });

        let regions: ResourceCollection<Region> = ResourceCollection::new(
            session(api),
            Action::DescribeRegions,
            "Regions.RDSRegion",
            Paging::Single,
        );
        let all = regions.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].attributes().local_name.as_deref(), Some("Singapore"));
    }
}
