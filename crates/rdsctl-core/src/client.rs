//! The seam between resource handles and the remote API client
//!
//! rdsctl-core does not speak any wire protocol. Whatever performs the
//! transport (signing, HTTP, endpoints) implements [`RdsApi`]; handles only
//! ever build a [`Params`] map, pick an [`Action`] and read the envelope that
//! comes back.

use crate::action::Action;
use crate::error::{ApiError, RdsError, Result};
use crate::params::Params;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default `PageSize` used by collections
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// External client performing one remote operation per call
///
/// Implementations receive the parameters exactly as the handle built them
/// and return the decoded response envelope.
#[async_trait]
pub trait RdsApi: Send + Sync {
    async fn invoke(&self, action: Action, params: Params) -> std::result::Result<Value, ApiError>;
}

#[async_trait]
impl<T: RdsApi + ?Sized> RdsApi for Arc<T> {
    async fn invoke(&self, action: Action, params: Params) -> std::result::Result<Value, ApiError> {
        (**self).invoke(action, params).await
    }
}

/// Per-session defaults applied to every call
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// `RegionId` added to calls that do not set one
    pub region_id: Option<String>,
    /// Page size collections start from
    pub page_size: u32,
    /// Extra parameters added to calls that do not set them
    pub default_params: Params,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            region_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_params: Params::new(),
        }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_default_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_params.insert(name, value);
        self
    }
}

/// Shared client handle carried by every resource
#[derive(Clone)]
pub struct Session {
    api: Arc<dyn RdsApi>,
    settings: Arc<ClientSettings>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(api: Arc<dyn RdsApi>, settings: ClientSettings) -> Self {
        Self {
            api,
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Invoke `action` with the caller's parameters plus session defaults
    pub async fn call(&self, action: Action, mut params: Params) -> Result<Value> {
        if let Some(region) = &self.settings.region_id
            && !params.contains_key("RegionId")
        {
            params.insert("RegionId", region.as_str());
        }
        params.merge_defaults(&self.settings.default_params);

        // Names only; values may carry passwords
        debug!(
            action = %action,
            params = ?params.names().collect::<Vec<_>>(),
            "Dispatching RDS call"
        );

        let response = self
            .api
            .invoke(action, params)
            .await
            .map_err(|source| {
                debug!(action = %action, code = %source.code, "RDS call failed");
                RdsError::Api { action, source }
            })?;

        trace!(action = %action, response = %response, "RDS call succeeded");
        Ok(response)
    }

    /// Invoke `action` on behalf of a handle whose identifier is `id_key = id`
    ///
    /// The identifier belongs to the handle; a caller that passes the same
    /// key is rejected rather than silently overridden.
    pub async fn call_bound(
        &self,
        action: Action,
        id_key: &str,
        id: &str,
        mut params: Params,
    ) -> Result<Value> {
        if params.contains_key(id_key) {
            return Err(RdsError::Validation(format!(
                "{id_key} is bound by the handle and cannot be passed to {action}"
            )));
        }
        params.insert(id_key, id);
        self.call(action, params).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use mockall::mock;

    mock! {
        pub Api {}

        #[async_trait]
        impl RdsApi for Api {
            async fn invoke(
                &self,
                action: Action,
                params: Params,
            ) -> std::result::Result<Value, ApiError>;
        }
    }

    pub(crate) fn session(api: MockApi) -> Session {
        Session::new(Arc::new(api), ClientSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{MockApi, session};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_call_forwards_params_unchanged() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::CheckResource
                    && params.get_str("Engine") == Some("MySQL")
                    && params.len() == 1
            })
            .times(1)
            .returning(|_, _| Ok(json!({"RequestId": "r-1"})));

        let response = session(api)
            .call(Action::CheckResource, Params::new().with("Engine", "MySQL"))
            .await
            .unwrap();
        assert_eq!(response["RequestId"], "r-1");
    }

    #[tokio::test]
    async fn test_call_applies_region_and_defaults() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|_, params| {
                params.get_str("RegionId") == Some("cn-hangzhou")
                    && params.get_str("ResourceGroupId") == Some("rg-default")
            })
            .times(1)
            .returning(|_, _| Ok(json!({})));

        let settings = ClientSettings::default()
            .with_region("cn-hangzhou")
            .with_default_param("ResourceGroupId", "rg-default");
        let session = Session::new(Arc::new(api), settings);
        session.call(Action::DescribeRegions, Params::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_caller_region_wins() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|_, params| params.get_str("RegionId") == Some("cn-shanghai"))
            .times(1)
            .returning(|_, _| Ok(json!({})));

        let session = Session::new(
            Arc::new(api),
            ClientSettings::default().with_region("cn-hangzhou"),
        );
        session
            .call(
                Action::DescribeDbInstances,
                Params::new().with("RegionId", "cn-shanghai"),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remote_failure_is_wrapped() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .returning(|_, _| Err(ApiError::new("Throttling.User", "slow down").with_status(429)));

        let err = session(api)
            .call(Action::DescribeTasks, Params::new())
            .await
            .unwrap_err();
        assert!(err.is_throttled());
        assert_eq!(err.action(), Some(Action::DescribeTasks));
    }

    #[tokio::test]
    async fn test_bound_identifier_cannot_be_overridden() {
        let mut api = MockApi::new();
        api.expect_invoke().never();

        let err = session(api)
            .call_bound(
                Action::RestartDbInstance,
                "DBInstanceId",
                "rm-1",
                Params::new().with("DBInstanceId", "rm-2"),
            )
            .await
            .unwrap_err();
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_page_size_floor() {
        assert_eq!(ClientSettings::default().with_page_size(0).page_size, 1);
        assert_eq!(ClientSettings::default().page_size, DEFAULT_PAGE_SIZE);
    }
}
