use super::{FromItem, Lookup, Resource, decode};
use crate::action::Action;
use crate::attrs;
use crate::client::Session;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TaskAttributes {
    pub creation_time: Option<String>,
    pub finished_time: Option<String>,
    #[serde(deserialize_with = "attrs::opt_string")]
    pub support_cancel: Option<String>,
    pub task_action: Option<String>,
    pub task_status: Option<String>,
}

/// A background task running against an instance
#[derive(Debug, Clone)]
pub struct Task {
    session: Session,
    id: String,
    attributes: TaskAttributes,
}

impl Resource for Task {
    const TYPE_NAME: &'static str = "rds.task";
    const ID_KEY: &'static str = "TaskId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl FromItem for Task {
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            session: session.clone(),
            id,
            attributes: decode(action, item)?,
        })
    }
}

// DescribeTasks filters by a comma separated `TaskIds`; a single id is a
// valid list.
const LOOKUP: Lookup = Lookup {
    resource: "task",
    action: Action::DescribeTasks,
    param: "TaskIds",
    items_path: "Items.TaskProgressInfo",
    id_key: "TaskId",
};

impl Task {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
            attributes: TaskAttributes::default(),
        }
    }

    pub fn task_id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &TaskAttributes {
        &self.attributes
    }

    /// Reload attributes through `DescribeTasks`
    pub async fn refresh(&mut self) -> Result<()> {
        self.attributes = LOOKUP.fetch(&self.session, &self.id).await?;
        debug!(task_id = %self.id, status = ?self.attributes.task_status, "Refreshed task");
        Ok(())
    }
}
