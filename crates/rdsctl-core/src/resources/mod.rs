//! Resource handles
//!
//! A handle pairs an identifier with the [`Session`] that reaches the API.
//! Operations on a handle add the identifier to the caller's parameters under
//! its wire name and forward everything else unchanged. Handles with
//! descriptive attributes keep them in an `attributes` struct that starts
//! empty and is filled by `refresh` or by listing through a collection.

use crate::action::Action;
use crate::client::Session;
use crate::error::{RdsError, Result};
use crate::params::Params;
use crate::response;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Generate passthrough methods bound to the handle's identifier
macro_rules! passthrough {
    ($($(#[$meta:meta])* $name:ident => $action:ident;)+) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, params: $crate::Params) -> $crate::Result<serde_json::Value> {
                self.session
                    .call_bound(
                        $crate::Action::$action,
                        <Self as $crate::resources::Resource>::ID_KEY,
                        &self.id,
                        params,
                    )
                    .await
            }
        )+
    };
}

mod backup;
mod db_instance;
mod handles;
mod migrate_task;
mod region;
mod slow_log;
mod task;
mod zone;

pub use backup::{Backup, BackupAttributes, CrossBackup};
pub use db_instance::{DbInstance, DbInstanceAttributes};
pub use handles::{
    DbInstanceReplica, MigrateTaskForSqlServer, ReadOnlyDbInstance, Replica, TempDbInstance,
};
pub use migrate_task::{MigrateTask, MigrateTaskAttributes};
pub use region::{Region, RegionAttributes};
pub use slow_log::{SlowLog, SlowLogAttributes};
pub use task::{Task, TaskAttributes};
pub use zone::Zone;

/// Common shape of every handle
pub trait Resource {
    /// Dotted type name, e.g. `rds.db_instance`
    const TYPE_NAME: &'static str;
    /// Wire name of the identifier, e.g. `DBInstanceId`
    const ID_KEY: &'static str;

    fn id(&self) -> &str;
}

/// Handles a collection can build from a listing item
pub trait FromItem: Resource + Sized {
    /// Identifier of a listing item, `None` when the item carries none
    fn item_id(item: &Value) -> Option<String> {
        item.get(Self::ID_KEY).and_then(response::id_string)
    }

    /// Build the handle for `id`, taking attributes from `item`
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self>;
}

/// Where a handle's `refresh` finds its own item
pub(crate) struct Lookup {
    pub resource: &'static str,
    pub action: Action,
    /// Parameter carrying the identifier in the request
    pub param: &'static str,
    pub items_path: &'static str,
    /// Key carrying the identifier in each item
    pub id_key: &'static str,
}

impl Lookup {
    /// Describe `id` and decode the matching item
    pub(crate) async fn fetch<A: DeserializeOwned>(&self, session: &Session, id: &str) -> Result<A> {
        let response = session
            .call(self.action, Params::new().with(self.param, id))
            .await?;

        let item = response::find_item(&response, self.items_path, self.id_key, id).ok_or_else(
            || RdsError::NotFound {
                resource: self.resource,
                action: self.action,
                id_key: self.id_key,
                id: id.to_string(),
            },
        )?;

        decode(self.action, item)
    }
}

/// Decode an attribute struct from a response item
pub(crate) fn decode<A: DeserializeOwned>(action: Action, item: &Value) -> Result<A> {
    serde::Deserialize::deserialize(item).map_err(|source| RdsError::Decode { action, source })
}
