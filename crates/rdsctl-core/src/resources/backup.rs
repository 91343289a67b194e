use super::{FromItem, Lookup, Resource, decode};
use crate::action::Action;
use crate::attrs;
use crate::client::Session;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptive attributes of a backup set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BackupAttributes {
    #[serde(rename = "BackupDBNames")]
    pub backup_db_names: Option<String>,
    #[serde(rename = "BackupDownloadURL")]
    pub backup_download_url: Option<String>,
    pub backup_end_time: Option<String>,
    pub backup_extraction_status: Option<String>,
    #[serde(rename = "BackupIntranetDownloadURL")]
    pub backup_intranet_download_url: Option<String>,
    pub backup_location: Option<String>,
    pub backup_method: Option<String>,
    pub backup_mode: Option<String>,
    pub backup_scale: Option<String>,
    /// Bytes
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub backup_size: Option<i64>,
    pub backup_start_time: Option<String>,
    pub backup_status: Option<String>,
    pub backup_type: Option<String>,
    #[serde(rename = "DBInstanceId")]
    pub db_instance_id: Option<String>,
    #[serde(rename = "HostInstanceID", deserialize_with = "attrs::opt_string")]
    pub host_instance_id: Option<String>,
    pub meta_status: Option<String>,
    pub slave_status: Option<String>,
    pub store_status: Option<String>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub total_backup_size: Option<i64>,
}

/// A backup set of an instance
#[derive(Debug, Clone)]
pub struct Backup {
    session: Session,
    id: String,
    attributes: BackupAttributes,
}

impl Resource for Backup {
    const TYPE_NAME: &'static str = "rds.backup";
    const ID_KEY: &'static str = "BackupId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl FromItem for Backup {
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            session: session.clone(),
            id,
            attributes: decode(action, item)?,
        })
    }
}

const LOOKUP: Lookup = Lookup {
    resource: "backup",
    action: Action::DescribeBackups,
    param: "BackupId",
    items_path: "Items.Backup",
    id_key: "BackupId",
};

impl Backup {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
            attributes: BackupAttributes::default(),
        }
    }

    pub fn backup_id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &BackupAttributes {
        &self.attributes
    }

    /// Reload attributes through `DescribeBackups`
    pub async fn refresh(&mut self) -> Result<()> {
        self.attributes = LOOKUP.fetch(&self.session, &self.id).await?;
        Ok(())
    }

    passthrough! {
        /// Delete this backup set
        delete => DeleteBackup;
    }
}

/// A cross-region backup
#[derive(Debug, Clone)]
pub struct CrossBackup {
    session: Session,
    id: String,
}

impl Resource for CrossBackup {
    const TYPE_NAME: &'static str = "rds.cross_backup";
    const ID_KEY: &'static str = "CrossBackupId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CrossBackup {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
        }
    }

    pub fn cross_backup_id(&self) -> &str {
        &self.id
    }

    passthrough! {
        describe_available_recovery_time => DescribeAvailableRecoveryTime;
    }
}
