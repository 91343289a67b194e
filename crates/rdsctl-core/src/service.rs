//! Root handle for the RDS service
//!
//! [`Rds`] is where every other handle comes from: create calls return a
//! handle for the new resource, collections list existing ones, and the
//! plain constructors wrap an identifier the caller already knows.
//!
//! # Example
//!
//! ```rust,ignore
//! use rdsctl_core::{ClientSettings, Params, Rds};
//! use std::sync::Arc;
//!
//! let rds = Rds::with_settings(Arc::new(my_client), ClientSettings::default().with_region("cn-hangzhou"));
//!
//! let mut instance = rds
//!     .create_db_instance(
//!         Params::new()
//!             .with("Engine", "MySQL")
//!             .with("EngineVersion", "8.0")
//!             .with("DBInstanceClass", "rds.mysql.s2.large")
//!             .with("DBInstanceStorage", 20)
//!             .with("DBInstanceNetType", "Intranet")
//!             .with("PayType", "Postpaid")
//!             .with("SecurityIPList", "10.0.0.0/8"),
//!     )
//!     .await?;
//!
//! instance.refresh().await?;
//! println!("{:?}", instance.attributes().db_instance_status);
//! ```

use crate::action::Action;
use crate::client::{ClientSettings, RdsApi, Session};
use crate::collection::{Paging, ResourceCollection};
use crate::error::Result;
use crate::params::Params;
use crate::resources::{
    Backup, CrossBackup, DbInstance, DbInstanceReplica, MigrateTask, MigrateTaskForSqlServer,
    ReadOnlyDbInstance, Region, Replica, Resource, SlowLog, Task, TempDbInstance, Zone,
};
use crate::response;
use std::sync::Arc;
use tracing::info;

/// Entry point to the RDS resource handles
#[derive(Debug, Clone)]
pub struct Rds {
    session: Session,
}

impl Rds {
    /// Wrap a client with default settings
    pub fn new(api: Arc<dyn RdsApi>) -> Self {
        Self::with_settings(api, ClientSettings::default())
    }

    pub fn with_settings(api: Arc<dyn RdsApi>, settings: ClientSettings) -> Self {
        Self {
            session: Session::new(api, settings),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Invoke a create action and return the identifier stored under `id_key`
    async fn create(&self, action: Action, id_key: &str, params: Params) -> Result<String> {
        let response = self.session.call(action, params).await?;
        let id = response::extract_id(action, &response, id_key)?;
        info!(action = %action, %id_key, %id, "Created resource");
        Ok(id)
    }

    // Create calls

    /// Create an instance; the handle starts without attributes
    pub async fn create_db_instance(&self, params: Params) -> Result<DbInstance> {
        let id = self
            .create(Action::CreateDbInstance, DbInstance::ID_KEY, params)
            .await?;
        Ok(DbInstance::new(self.session.clone(), id))
    }

    pub async fn create_db_instance_replica(&self, params: Params) -> Result<DbInstanceReplica> {
        let id = self
            .create(
                Action::CreateDbInstanceReplica,
                DbInstanceReplica::ID_KEY,
                params,
            )
            .await?;
        Ok(DbInstanceReplica::new(id))
    }

    pub async fn create_migrate_task(&self, params: Params) -> Result<MigrateTask> {
        let id = self
            .create(Action::CreateMigrateTask, MigrateTask::ID_KEY, params)
            .await?;
        Ok(MigrateTask::new(self.session.clone(), id))
    }

    pub async fn create_migrate_task_for_sql_server(
        &self,
        params: Params,
    ) -> Result<MigrateTaskForSqlServer> {
        let id = self
            .create(
                Action::CreateMigrateTaskForSqlServer,
                MigrateTaskForSqlServer::ID_KEY,
                params,
            )
            .await?;
        Ok(MigrateTaskForSqlServer::new(id))
    }

    /// Order a read-only instance; the handle carries the order id
    pub async fn create_read_only_db_instance(&self, params: Params) -> Result<ReadOnlyDbInstance> {
        let id = self
            .create(
                Action::CreateReadOnlyDbInstance,
                ReadOnlyDbInstance::ID_KEY,
                params,
            )
            .await?;
        Ok(ReadOnlyDbInstance::new(id))
    }

    pub async fn create_temp_db_instance(&self, params: Params) -> Result<TempDbInstance> {
        let id = self
            .create(Action::CreateTempDbInstance, TempDbInstance::ID_KEY, params)
            .await?;
        Ok(TempDbInstance::new(id))
    }

    // Collections

    pub fn backups(&self) -> ResourceCollection<Backup> {
        self.collection(Action::DescribeBackups, "Items.Backup", Paging::Paged)
    }

    pub fn db_instances(&self) -> ResourceCollection<DbInstance> {
        self.collection(Action::DescribeDbInstances, "Items.DBInstance", Paging::Paged)
    }

    pub fn migrate_tasks(&self) -> ResourceCollection<MigrateTask> {
        self.collection(Action::DescribeMigrateTasks, "Items.MigrateTask", Paging::Paged)
    }

    /// Regions come back in a single response, one entry per zone
    pub fn regions(&self) -> ResourceCollection<Region> {
        self.collection(Action::DescribeRegions, "Regions.RDSRegion", Paging::Single)
    }

    /// Slow-log statistics; entries without a `SlowLogId` are keyed by `SQLHASH`
    pub fn slow_logs(&self) -> ResourceCollection<SlowLog> {
        self.collection(Action::DescribeSlowLogs, "Items.SQLSlowLog", Paging::Paged)
    }

    pub fn tasks(&self) -> ResourceCollection<Task> {
        self.collection(
            Action::DescribeTasks,
            "Items.TaskProgressInfo",
            Paging::Paged,
        )
    }

    fn collection<R: crate::resources::FromItem>(
        &self,
        action: Action,
        items_path: &'static str,
        paging: Paging,
    ) -> ResourceCollection<R> {
        ResourceCollection::new(self.session.clone(), action, items_path, paging)
    }

    // Handles for known identifiers

    pub fn backup(&self, backup_id: impl Into<String>) -> Backup {
        Backup::new(self.session.clone(), backup_id)
    }

    pub fn cross_backup(&self, cross_backup_id: impl Into<String>) -> CrossBackup {
        CrossBackup::new(self.session.clone(), cross_backup_id)
    }

    pub fn db_instance(&self, db_instance_id: impl Into<String>) -> DbInstance {
        DbInstance::new(self.session.clone(), db_instance_id)
    }

    pub fn db_instance_replica(&self, workflow_id: impl Into<String>) -> DbInstanceReplica {
        DbInstanceReplica::new(workflow_id)
    }

    pub fn migrate_task(&self, migrate_task_id: impl Into<String>) -> MigrateTask {
        MigrateTask::new(self.session.clone(), migrate_task_id)
    }

    pub fn migrate_task_for_sql_server(
        &self,
        migrate_iask_id: impl Into<String>,
    ) -> MigrateTaskForSqlServer {
        MigrateTaskForSqlServer::new(migrate_iask_id)
    }

    pub fn read_only_db_instance(&self, order_id: impl Into<String>) -> ReadOnlyDbInstance {
        ReadOnlyDbInstance::new(order_id)
    }

    pub fn region(&self, region_id: impl Into<String>) -> Region {
        Region::new(self.session.clone(), region_id)
    }

    pub fn replica(&self, replica_id: impl Into<String>) -> Replica {
        Replica::new(self.session.clone(), replica_id)
    }

    pub fn slow_log(&self, slow_log_id: impl Into<String>) -> SlowLog {
        SlowLog::new(slow_log_id)
    }

    pub fn task(&self, task_id: impl Into<String>) -> Task {
        Task::new(self.session.clone(), task_id)
    }

    pub fn temp_db_instance(&self, temp_db_instance_id: impl Into<String>) -> TempDbInstance {
        TempDbInstance::new(temp_db_instance_id)
    }

    pub fn zone(&self, zone_id: impl Into<String>) -> Zone {
        Zone::new(self.session.clone(), zone_id)
    }
}
