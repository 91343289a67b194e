use super::{FromItem, Resource, decode};
use crate::action::Action;
use crate::client::Session;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptive attributes of a backup-file migration task
///
/// There is no single-task describe call; these are only populated when the
/// handle comes from [`Rds::migrate_tasks`](crate::Rds::migrate_tasks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MigrateTaskAttributes {
    pub backup_mode: Option<String>,
    pub create_time: Option<String>,
    #[serde(rename = "DBName")]
    pub db_name: Option<String>,
    pub description: Option<String>,
    pub end_time: Option<String>,
    #[serde(rename = "IsDBReplaced")]
    pub is_db_replaced: Option<String>,
    pub status: Option<String>,
}

/// A task migrating backup files into an instance
#[derive(Debug, Clone)]
pub struct MigrateTask {
    session: Session,
    id: String,
    attributes: MigrateTaskAttributes,
}

impl Resource for MigrateTask {
    const TYPE_NAME: &'static str = "rds.migrate_task";
    const ID_KEY: &'static str = "MigrateTaskId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl FromItem for MigrateTask {
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            session: session.clone(),
            id,
            attributes: decode(action, item)?,
        })
    }
}

impl MigrateTask {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
            attributes: MigrateTaskAttributes::default(),
        }
    }

    pub fn migrate_task_id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &MigrateTaskAttributes {
        &self.attributes
    }

    passthrough! {
        create_online_database_task => CreateOnlineDatabaseTask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{MockApi, session};
    use crate::params::Params;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_online_database_task() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::CreateOnlineDatabaseTask
                    && params.get_str("MigrateTaskId") == Some("107081")
                    && params.get_str("DBName") == Some("orders")
            })
            .times(1)
            .returning(|_, _| Ok(json!({"RequestId": "r"})));

        let task = MigrateTask::new(session(api), "107081");
        task.create_online_database_task(
            Params::new()
                .with("DBInstanceId", "rm-bp1")
                .with("DBName", "orders"),
        )
        .await
        .unwrap();
    }

    #[test]
    fn test_attributes_from_listing_item() {
        let item = json!({
            "MigrateTaskId": "107081",
            "DBName": "orders",
            "BackupMode": "FULL",
            "IsDBReplaced": "False",
            "Status": "Success"
        });
        let task = MigrateTask::from_item(
            &session(MockApi::new()),
            "107081".to_string(),
            &item,
            Action::DescribeMigrateTasks,
        )
        .unwrap();

        assert_eq!(task.migrate_task_id(), "107081");
        assert_eq!(task.attributes().db_name.as_deref(), Some("orders"));
        assert_eq!(task.attributes().is_db_replaced.as_deref(), Some("False"));
        assert_eq!(task.attributes().end_time, None);
    }
}
