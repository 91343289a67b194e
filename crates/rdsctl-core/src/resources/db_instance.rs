use super::{FromItem, Lookup, Resource, decode};
use crate::action::Action;
use crate::attrs;
use crate::client::Session;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Descriptive attributes of a database instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DbInstanceAttributes {
    pub auto_upgrade_minor_version: Option<String>,
    pub category: Option<String>,
    pub connection_mode: Option<String>,
    pub create_time: Option<String>,
    #[serde(rename = "DBInstanceClass")]
    pub db_instance_class: Option<String>,
    #[serde(rename = "DBInstanceDescription")]
    pub db_instance_description: Option<String>,
    #[serde(rename = "DBInstanceNetType")]
    pub db_instance_net_type: Option<String>,
    #[serde(rename = "DBInstanceStatus")]
    pub db_instance_status: Option<String>,
    #[serde(rename = "DBInstanceStorageType")]
    pub db_instance_storage_type: Option<String>,
    #[serde(rename = "DBInstanceType")]
    pub db_instance_type: Option<String>,
    pub destroy_time: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub expire_time: Option<String>,
    #[serde(rename = "GuardDBInstanceId")]
    pub guard_db_instance_id: Option<String>,
    #[serde(deserialize_with = "attrs::opt_i64")]
    pub ins_id: Option<i64>,
    pub instance_network_type: Option<String>,
    pub lock_mode: Option<String>,
    pub lock_reason: Option<String>,
    pub master_instance_id: Option<String>,
    /// Multi-zone flag, under the API's own spelling
    #[serde(rename = "MutriORsignle", deserialize_with = "attrs::opt_bool")]
    pub mutri_orsignle: Option<bool>,
    pub pay_type: Option<String>,
    #[serde(rename = "ReadOnlyDBInstanceIds")]
    pub read_only_db_instance_ids: Option<Value>,
    pub region_id: Option<String>,
    pub replicate_id: Option<String>,
    pub resource_group_id: Option<String>,
    #[serde(rename = "TempDBInstanceId")]
    pub temp_db_instance_id: Option<String>,
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: Option<String>,
    pub vpc_cloud_instance_id: Option<String>,
    pub vpc_id: Option<String>,
    pub zone_id: Option<String>,
}

impl DbInstanceAttributes {
    /// Identifiers of attached read-only instances
    ///
    /// The raw attribute nests them as
    /// `{"ReadOnlyDBInstanceId": [{"DBInstanceId": "..."}]}`.
    pub fn read_only_instance_ids(&self) -> Vec<&str> {
        self.read_only_db_instance_ids
            .as_ref()
            .and_then(|v| v.get("ReadOnlyDBInstanceId"))
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| e.get("DBInstanceId").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A database instance
#[derive(Debug, Clone)]
pub struct DbInstance {
    session: Session,
    id: String,
    attributes: DbInstanceAttributes,
}

impl Resource for DbInstance {
    const TYPE_NAME: &'static str = "rds.db_instance";
    const ID_KEY: &'static str = "DBInstanceId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl FromItem for DbInstance {
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            session: session.clone(),
            id,
            attributes: decode(action, item)?,
        })
    }
}

const LOOKUP: Lookup = Lookup {
    resource: "db_instance",
    action: Action::DescribeDbInstances,
    param: "DBInstanceId",
    items_path: "Items.DBInstance",
    id_key: "DBInstanceId",
};

impl DbInstance {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
            attributes: DbInstanceAttributes::default(),
        }
    }

    pub fn db_instance_id(&self) -> &str {
        &self.id
    }

    /// Attributes as of the last refresh or listing
    pub fn attributes(&self) -> &DbInstanceAttributes {
        &self.attributes
    }

    /// Reload attributes through `DescribeDBInstances`
    ///
    /// Fails with [`RdsError::NotFound`](crate::RdsError::NotFound) when the
    /// response carries no item for this instance.
    pub async fn refresh(&mut self) -> Result<()> {
        self.attributes = LOOKUP.fetch(&self.session, &self.id).await?;
        debug!(db_instance_id = %self.id, status = ?self.attributes.db_instance_status, "Refreshed instance");
        Ok(())
    }

    passthrough! {
        add_tags_to_resource => AddTagsToResource;
        allocate_instance_private_connection => AllocateInstancePrivateConnection;
        allocate_instance_public_connection => AllocateInstancePublicConnection;
        allocate_instance_vpc_network_type => AllocateInstanceVpcNetworkType;
        allocate_read_write_splitting_connection => AllocateReadWriteSplittingConnection;
        calculate_db_instance_weight => CalculateDbInstanceWeight;
        check_account_name_available => CheckAccountNameAvailable;
        check_instance_exist => CheckInstanceExist;
        check_recovery_conditions => CheckRecoveryConditions;
        copy_database_between_instances => CopyDatabaseBetweenInstances;
        create_account => CreateAccount;
        create_database => CreateDatabase;
        create_diagnostic_report => CreateDiagnosticReport;
        /// Release the instance
        delete => DeleteDbInstance;
        delete_account => DeleteAccount;
        delete_database => DeleteDatabase;
        describe_backup_database => DescribeBackupDatabase;
        describe_backup_policy => DescribeBackupPolicy;
        describe_cloud_db_expert_service => DescribeCloudDbExpertService;
        describe_db_instance_ip_hostname => DescribeDbInstanceIpHostname;
        describe_db_instance_monitor => DescribeDbInstanceMonitor;
        describe_db_instance_proxy_configuration => DescribeDbInstanceProxyConfiguration;
        describe_db_instance_ssl => DescribeDbInstanceSsl;
        describe_instance_cross_backup_policy => DescribeInstanceCrossBackupPolicy;
        describe_proxy_function_support => DescribeProxyFunctionSupport;
        describe_resource_usage => DescribeResourceUsage;
        grant_account_privilege => GrantAccountPrivilege;
        grant_operator_permission => GrantOperatorPermission;
        import_data_for_sql_server => ImportDataForSqlServer;
        import_database_between_instances => ImportDatabaseBetweenInstances;
        migrate_security_ip_mode => MigrateSecurityIpMode;
        migrate_to_other_region => MigrateToOtherRegion;
        modify_account_description => ModifyAccountDescription;
        modify_auto_upgrade_minor_version => ModifyDbInstanceAutoUpgradeMinorVersion;
        modify_backup_policy => ModifyBackupPolicy;
        modify_collation_time_zone => ModifyCollationTimeZone;
        modify_connection_mode => ModifyDbInstanceConnectionMode;
        modify_connection_string => ModifyDbInstanceConnectionString;
        /// Change the description of a database inside the instance
        modify_db_description => ModifyDbDescription;
        modify_dtc_security_ip_hosts_for_sql_server => ModifyDtcSecurityIpHostsForSqlServer;
        /// Change the description of the instance itself
        modify_description => ModifyDbInstanceDescription;
        modify_instance_auto_renewal_attribute => ModifyInstanceAutoRenewalAttribute;
        modify_instance_cross_backup_policy => ModifyInstanceCrossBackupPolicy;
        modify_maintain_time => ModifyDbInstanceMaintainTime;
        modify_monitor => ModifyDbInstanceMonitor;
        modify_mysql_db_instance_delay => ModifyMySqlDbInstanceDelay;
        modify_network_expire_time => ModifyDbInstanceNetworkExpireTime;
        modify_network_type => ModifyDbInstanceNetworkType;
        modify_parameter => ModifyParameter;
        modify_pay_type => ModifyDbInstancePayType;
        modify_proxy_configuration => ModifyDbInstanceProxyConfiguration;
        modify_read_write_splitting_connection => ModifyReadWriteSplittingConnection;
        modify_readonly_instance_delay_replication_time => ModifyReadonlyInstanceDelayReplicationTime;
        modify_sql_collector_policy => ModifySqlCollectorPolicy;
        modify_ssl => ModifyDbInstanceSsl;
        modify_security_ips => ModifySecurityIps;
        modify_spec => ModifyDbInstanceSpec;
        modify_tde => ModifyDbInstanceTde;
        purge_db_instance_log => PurgeDbInstanceLog;
        release_instance_public_connection => ReleaseInstancePublicConnection;
        release_read_write_splitting_connection => ReleaseReadWriteSplittingConnection;
        remove_tags_from_resource => RemoveTagsFromResource;
        renew_instance => RenewInstance;
        request_service_of_cloud_db_expert => RequestServiceOfCloudDbExpert;
        reset_account => ResetAccount;
        reset_account_for_pg => ResetAccountForPg;
        reset_account_password => ResetAccountPassword;
        restart => RestartDbInstance;
        /// Restore data from a backup into this instance
        restore => RestoreDbInstance;
        restore_table => RestoreTable;
        revoke_account_privilege => RevokeAccountPrivilege;
        revoke_operator_permission => RevokeOperatorPermission;
        switch_db_instance_ha => SwitchDbInstanceHa;
        switch_db_instance_net_type => SwitchDbInstanceNetType;
        switch_db_instance_vpc => SwitchDbInstanceVpc;
        upgrade_db_instance_engine_version => UpgradeDbInstanceEngineVersion;
        upgrade_db_instance_kernel_version => UpgradeDbInstanceKernelVersion;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{MockApi, session};
    use crate::params::Params;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn instance_item() -> Value {
        json!({
            "DBInstanceId": "rm-bp1",
            "DBInstanceClass": "rds.mysql.s2.large",
            "DBInstanceStatus": "Running",
            "Engine": "MySQL",
            "EngineVersion": "8.0",
            "InsId": "1",
            "MutriORsignle": false,
            "VSwitchId": "vsw-1",
            "VpcId": "vpc-1",
            "ZoneId": "cn-hangzhou-h",
            "ReadOnlyDBInstanceIds": {
                "ReadOnlyDBInstanceId": [{"DBInstanceId": "rr-1"}, {"DBInstanceId": "rr-2"}]
            },
            "SomethingNew": "ignored"
        })
    }

    #[test]
    fn test_attributes_decode_wire_names() {
        let attrs: DbInstanceAttributes = serde_json::from_value(instance_item()).unwrap();
        assert_eq!(attrs.db_instance_class.as_deref(), Some("rds.mysql.s2.large"));
        assert_eq!(attrs.db_instance_status.as_deref(), Some("Running"));
        assert_eq!(attrs.ins_id, Some(1));
        assert_eq!(attrs.mutri_orsignle, Some(false));
        assert_eq!(attrs.vswitch_id.as_deref(), Some("vsw-1"));
        assert_eq!(attrs.read_only_instance_ids(), vec!["rr-1", "rr-2"]);
        assert_eq!(attrs.lock_mode, None);
    }

    #[tokio::test]
    async fn test_new_handle_has_no_attributes() {
        let instance = DbInstance::new(session(MockApi::new()), "rm-bp1");
        assert_eq!(instance.db_instance_id(), "rm-bp1");
        assert_eq!(instance.attributes(), &DbInstanceAttributes::default());
    }

    #[tokio::test]
    async fn test_passthrough_binds_identifier() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::ModifyDbInstanceSpec
                    && params.get_str("DBInstanceId") == Some("rm-bp1")
                    && params.get_str("DBInstanceClass") == Some("rds.mysql.c1.xlarge")
            })
            .times(1)
            .returning(|_, _| Ok(json!({"RequestId": "req-1"})));

        let instance = DbInstance::new(session(api), "rm-bp1");
        let response = instance
            .modify_spec(Params::new().with("DBInstanceClass", "rds.mysql.c1.xlarge"))
            .await
            .unwrap();
        assert_eq!(response["RequestId"], "req-1");
    }

    #[tokio::test]
    async fn test_refresh_picks_matching_item() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .withf(|action, params| {
                *action == Action::DescribeDbInstances
                    && params.get_str("DBInstanceId") == Some("rm-bp1")
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({"Items": {"DBInstance": [
                    {"DBInstanceId": "rm-other", "Engine": "PostgreSQL"},
                    instance_item()
                ]}}))
            });

        let mut instance = DbInstance::new(session(api), "rm-bp1");
        instance.refresh().await.unwrap();
        assert_eq!(instance.attributes().engine.as_deref(), Some("MySQL"));
    }

    #[tokio::test]
    async fn test_refresh_without_items_is_not_found() {
        let mut api = MockApi::new();
        api.expect_invoke()
            .returning(|_, _| Ok(json!({"Items": {"DBInstance": []}, "TotalRecordCount": 0})));

        let mut instance = DbInstance::new(session(api), "rm-gone");
        let err = instance.refresh().await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("DBInstanceId = rm-gone"));
    }
}
