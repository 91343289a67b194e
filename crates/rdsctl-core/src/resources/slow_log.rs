use super::{FromItem, Resource, decode};
use crate::action::Action;
use crate::attrs;
use crate::client::Session;
use crate::error::Result;
use crate::response;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregated slow-query statistics for one statement template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SlowLogAttributes {
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub avg_execution_time: Option<i64>,
    pub create_time: Option<String>,
    #[serde(rename = "DBName")]
    pub db_name: Option<String>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub max_execution_time: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub max_lock_time: Option<i64>,
    #[serde(rename = "MySQLTotalExecutionCounts", deserialize_with = "attrs::opt_i64")]
    pub mysql_total_execution_counts: Option<i64>,
    #[serde(rename = "MySQLTotalExecutionTimes", deserialize_with = "attrs::opt_i64")]
    pub mysql_total_execution_times: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub parse_max_row_count: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub parse_total_row_counts: Option<i64>,
    pub report_time: Option<String>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub return_max_row_count: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub return_total_row_counts: Option<i64>,
    #[serde(rename = "SQLHASH")]
    pub sql_hash: Option<String>,
    #[serde(rename = "SQLIdStr")]
    pub sql_id_str: Option<String>,
    #[serde(rename = "SQLServerTotalExecutionCounts", deserialize_with = "attrs::opt_i64")]
    pub sql_server_total_execution_counts: Option<i64>,
    #[serde(rename = "SQLServerTotalExecutionTimes", deserialize_with = "attrs::opt_i64")]
    pub sql_server_total_execution_times: Option<i64>,
    #[serde(rename = "SQLText")]
    pub sql_text: Option<String>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub total_lock_times: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub total_logical_read_counts: Option<i64>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub total_physical_read_counts: Option<i64>,
}

/// A slow-log statistics entry; read-only, obtained by listing
#[derive(Debug, Clone)]
pub struct SlowLog {
    id: String,
    attributes: SlowLogAttributes,
}

impl Resource for SlowLog {
    const TYPE_NAME: &'static str = "rds.slow_log";
    const ID_KEY: &'static str = "SlowLogId";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Listing key used when an entry has no `SlowLogId`
const FALLBACK_ID_KEY: &str = "SQLHASH";

impl FromItem for SlowLog {
    /// `DescribeSlowLogs` entries usually carry only the statement hash, so
    /// `SQLHASH` stands in for a missing `SlowLogId`.
    fn item_id(item: &Value) -> Option<String> {
        [Self::ID_KEY, FALLBACK_ID_KEY]
            .iter()
            .find_map(|key| item.get(*key).and_then(response::id_string))
    }

    fn from_item(_session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            id,
            attributes: decode(action, item)?,
        })
    }
}

impl SlowLog {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: SlowLogAttributes::default(),
        }
    }

    pub fn slow_log_id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &SlowLogAttributes {
        &self.attributes
    }
}
