//! # rdsctl-core
//!
//! Typed resource handles over the managed relational database service
//! control-plane API.
//!
//! The crate never talks to the network itself. A transport implements
//! [`RdsApi`] (one remote action per call, parameters in, JSON envelope out)
//! and [`Rds`] builds everything else on top of it:
//!
//! - **Create calls** that return a handle for the new resource
//! - **Collections** that page through listing actions lazily
//! - **Handles** for instances, backups, tasks, regions, zones, migrate tasks
//!   and the rest, each binding its identifier into every operation
//! - **Refresh** for handles that carry descriptive attributes
//!
//! ## Example
//!
//! ```rust,ignore
//! use rdsctl_core::{Config, Params, Rds};
//! use std::sync::Arc;
//!
//! let profile = Config::load()?.resolve(None)?;
//! let rds = Rds::with_settings(Arc::new(MyTransport::new(&profile)), profile.settings);
//!
//! for instance in rds.db_instances().all().await? {
//!     println!("{} {:?}", instance.db_instance_id(), instance.attributes().db_instance_status);
//! }
//!
//! let task = rds.task("1024");
//! task.refresh().await?;
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! rdsctl-core/
//! ├── src/
//! │   ├── action.rs       # closed set of remote actions
//! │   ├── client.rs       # RdsApi seam, ClientSettings, Session
//! │   ├── collection.rs   # paging listings
//! │   ├── config/         # profiles, credentials
//! │   ├── error.rs        # ApiError, RdsError
//! │   ├── logging.rs      # tracing setup
//! │   ├── params.rs       # request parameters
//! │   ├── resources/      # one module per handle family
//! │   ├── response.rs     # envelope navigation
//! │   └── service.rs      # Rds root handle
//! ```

pub mod action;
mod attrs;
pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod resources;
pub mod response;
pub mod service;

pub use action::Action;
pub use client::{ClientSettings, DEFAULT_PAGE_SIZE, RdsApi, Session};
pub use collection::{Paging, ResourceCollection};
pub use config::{Config, ConfigError};
pub use error::{ApiError, RdsError, Result};
pub use params::Params;
pub use resources::{
    Backup, BackupAttributes, CrossBackup, DbInstance, DbInstanceAttributes, DbInstanceReplica,
    FromItem, MigrateTask, MigrateTaskAttributes, MigrateTaskForSqlServer, ReadOnlyDbInstance,
    Region, RegionAttributes, Replica, Resource, SlowLog, SlowLogAttributes, Task,
    TaskAttributes, TempDbInstance, Zone,
};
pub use service::Rds;
