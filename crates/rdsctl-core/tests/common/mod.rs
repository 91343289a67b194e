//! Shared test client

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use rdsctl_core::{Action, ApiError, ClientSettings, Params, Rds, RdsApi};
use serde_json::Value;
use std::sync::Arc;

mock! {
    pub Api {}

    #[async_trait]
    impl RdsApi for Api {
        async fn invoke(
            &self,
            action: Action,
            params: Params,
        ) -> Result<Value, ApiError>;
    }
}

pub fn rds(api: MockApi) -> Rds {
    Rds::new(Arc::new(api))
}

pub fn rds_in(region: &str, api: MockApi) -> Rds {
    Rds::with_settings(
        Arc::new(api),
        ClientSettings::default().with_region(region),
    )
}
