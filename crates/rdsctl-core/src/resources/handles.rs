//! Handles that carry little beyond their identifier
//!
//! Most of these are what a create call hands back: an order, a workflow, a
//! temporary instance. They exist so the caller gets a typed value rather
//! than a bare string.

use super::Resource;
use crate::client::Session;

/// Workflow started by `CreateDBInstanceReplica`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbInstanceReplica {
    id: String,
}

impl Resource for DbInstanceReplica {
    const TYPE_NAME: &'static str = "rds.db_instance_replica";
    const ID_KEY: &'static str = "WorkflowId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl DbInstanceReplica {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn workflow_id(&self) -> &str {
        &self.id
    }
}

/// Migration task started by `CreateMigrateTaskForSQLServer`
///
/// The service names the identifier `MigrateIaskId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateTaskForSqlServer {
    id: String,
}

impl Resource for MigrateTaskForSqlServer {
    const TYPE_NAME: &'static str = "rds.migrate_task_for_sql_server";
    const ID_KEY: &'static str = "MigrateIaskId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl MigrateTaskForSqlServer {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn migrate_iask_id(&self) -> &str {
        &self.id
    }
}

/// Order placed by `CreateReadOnlyDBInstance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlyDbInstance {
    id: String,
}

impl Resource for ReadOnlyDbInstance {
    const TYPE_NAME: &'static str = "rds.read_only_db_instance";
    const ID_KEY: &'static str = "OrderId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ReadOnlyDbInstance {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn order_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempDbInstance {
    id: String,
}

impl Resource for TempDbInstance {
    const TYPE_NAME: &'static str = "rds.temp_db_instance";
    const ID_KEY: &'static str = "TempDBInstanceId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl TempDbInstance {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn temp_db_instance_id(&self) -> &str {
        &self.id
    }
}

/// A replication link between instances
#[derive(Debug, Clone)]
pub struct Replica {
    session: Session,
    id: String,
}

impl Resource for Replica {
    const TYPE_NAME: &'static str = "rds.replica";
    const ID_KEY: &'static str = "ReplicaId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Replica {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
        }
    }

    pub fn replica_id(&self) -> &str {
        &self.id
    }

    passthrough! {
        modify_description => ModifyReplicaDescription;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use crate::client::testing::{MockApi, session};
    use crate::params::Params;
    use serde_json::json;

    #[tokio::test]
    async fn test_replica_modify_description() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::ModifyReplicaDescription
                    && params.get_str("ReplicaId") == Some("rep-1")
                    && params.get_str("ReplicaDescription") == Some("dr link")
            })
            .times(1)
            .returning(|_, _| Ok(json!({})));

        Replica::new(session(api), "rep-1")
            .modify_description(Params::new().with("ReplicaDescription", "dr link"))
            .await
            .unwrap();
    }

    #[test]
    fn test_identifier_only_handles() {
        assert_eq!(DbInstanceReplica::new("wf-1").workflow_id(), "wf-1");
        assert_eq!(MigrateTaskForSqlServer::new("77").migrate_iask_id(), "77");
        assert_eq!(ReadOnlyDbInstance::new("2023").order_id(), "2023");
        assert_eq!(TempDbInstance::new("rm-tmp").temp_db_instance_id(), "rm-tmp");
        assert_eq!(<TempDbInstance as Resource>::ID_KEY, "TempDBInstanceId");
    }
}
