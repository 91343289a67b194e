//! Remote operations exposed by the RDS control plane
//!
//! Every call a handle makes goes through exactly one [`Action`]. The variant
//! names are Rust-cased; [`Action::as_str`] yields the name the API expects
//! on the wire (`DescribeDBInstances`, `ModifyDBInstanceSSL`, ...).

use std::fmt;

macro_rules! actions {
    ($($variant:ident => $wire:literal,)+) => {
        /// A single remote RDS operation
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Action {
            $($variant,)+
        }

        impl Action {
            /// Every known operation, in declaration order
            pub const ALL: &'static [Action] = &[$(Action::$variant,)+];

            /// Wire name of the operation
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Action::$variant => $wire,)+
                }
            }

            /// Look up an operation by its wire name
            #[must_use]
            pub fn from_wire(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some(Action::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

actions! {
    // Service-level creation
    CreateDbInstance => "CreateDBInstance",
    CreateDbInstanceReplica => "CreateDBInstanceReplica",
    CreateMigrateTask => "CreateMigrateTask",
    CreateMigrateTaskForSqlServer => "CreateMigrateTaskForSQLServer",
    CreateReadOnlyDbInstance => "CreateReadOnlyDBInstance",
    CreateTempDbInstance => "CreateTempDBInstance",

    // Listings
    DescribeBackups => "DescribeBackups",
    DescribeDbInstances => "DescribeDBInstances",
    DescribeMigrateTasks => "DescribeMigrateTasks",
    DescribeRegions => "DescribeRegions",
    DescribeSlowLogs => "DescribeSlowLogs",
    DescribeTasks => "DescribeTasks",

    // Backups
    DeleteBackup => "DeleteBackup",
    DescribeAvailableRecoveryTime => "DescribeAvailableRecoveryTime",

    // Instances
    AddTagsToResource => "AddTagsToResource",
    AllocateInstancePrivateConnection => "AllocateInstancePrivateConnection",
    AllocateInstancePublicConnection => "AllocateInstancePublicConnection",
    AllocateInstanceVpcNetworkType => "AllocateInstanceVpcNetworkType",
    AllocateReadWriteSplittingConnection => "AllocateReadWriteSplittingConnection",
    CalculateDbInstanceWeight => "CalculateDBInstanceWeight",
    CheckAccountNameAvailable => "CheckAccountNameAvailable",
    CheckInstanceExist => "CheckInstanceExist",
    CheckRecoveryConditions => "CheckRecoveryConditions",
    CopyDatabaseBetweenInstances => "CopyDatabaseBetweenInstances",
    CreateAccount => "CreateAccount",
    CreateDatabase => "CreateDatabase",
    CreateDiagnosticReport => "CreateDiagnosticReport",
    DeleteDbInstance => "DeleteDBInstance",
    DeleteAccount => "DeleteAccount",
    DeleteDatabase => "DeleteDatabase",
    DescribeBackupDatabase => "DescribeBackupDatabase",
    DescribeBackupPolicy => "DescribeBackupPolicy",
    DescribeCloudDbExpertService => "DescribeCloudDBExpertService",
    DescribeDbInstanceIpHostname => "DescribeDBInstanceIpHostname",
    DescribeDbInstanceMonitor => "DescribeDBInstanceMonitor",
    DescribeDbInstanceProxyConfiguration => "DescribeDBInstanceProxyConfiguration",
    DescribeDbInstanceSsl => "DescribeDBInstanceSSL",
    DescribeInstanceCrossBackupPolicy => "DescribeInstanceCrossBackupPolicy",
    DescribeProxyFunctionSupport => "DescribeProxyFunctionSupport",
    DescribeResourceUsage => "DescribeResourceUsage",
    GrantAccountPrivilege => "GrantAccountPrivilege",
    GrantOperatorPermission => "GrantOperatorPermission",
    ImportDataForSqlServer => "ImportDataForSQLServer",
    ImportDatabaseBetweenInstances => "ImportDatabaseBetweenInstances",
    MigrateSecurityIpMode => "MigrateSecurityIPMode",
    MigrateToOtherRegion => "MigrateToOtherRegion",
    ModifyAccountDescription => "ModifyAccountDescription",
    ModifyDbInstanceAutoUpgradeMinorVersion => "ModifyDBInstanceAutoUpgradeMinorVersion",
    ModifyBackupPolicy => "ModifyBackupPolicy",
    ModifyCollationTimeZone => "ModifyCollationTimeZone",
    ModifyDbInstanceConnectionMode => "ModifyDBInstanceConnectionMode",
    ModifyDbInstanceConnectionString => "ModifyDBInstanceConnectionString",
    ModifyDbDescription => "ModifyDBDescription",
    ModifyDtcSecurityIpHostsForSqlServer => "ModifyDTCSecurityIpHostsForSQLServer",
    ModifyDbInstanceDescription => "ModifyDBInstanceDescription",
    ModifyInstanceAutoRenewalAttribute => "ModifyInstanceAutoRenewalAttribute",
    ModifyInstanceCrossBackupPolicy => "ModifyInstanceCrossBackupPolicy",
    ModifyDbInstanceMaintainTime => "ModifyDBInstanceMaintainTime",
    ModifyDbInstanceMonitor => "ModifyDBInstanceMonitor",
    ModifyMySqlDbInstanceDelay => "ModifyMySQLDBInstanceDelay",
    ModifyDbInstanceNetworkExpireTime => "ModifyDBInstanceNetworkExpireTime",
    ModifyDbInstanceNetworkType => "ModifyDBInstanceNetworkType",
    ModifyParameter => "ModifyParameter",
    ModifyDbInstancePayType => "ModifyDBInstancePayType",
    ModifyDbInstanceProxyConfiguration => "ModifyDBInstanceProxyConfiguration",
    ModifyReadWriteSplittingConnection => "ModifyReadWriteSplittingConnection",
    ModifyReadonlyInstanceDelayReplicationTime => "ModifyReadonlyInstanceDelayReplicationTime",
    ModifySqlCollectorPolicy => "ModifySQLCollectorPolicy",
    ModifyDbInstanceSsl => "ModifyDBInstanceSSL",
    ModifySecurityIps => "ModifySecurityIps",
    ModifyDbInstanceSpec => "ModifyDBInstanceSpec",
    ModifyDbInstanceTde => "ModifyDBInstanceTDE",
    PurgeDbInstanceLog => "PurgeDBInstanceLog",
    ReleaseInstancePublicConnection => "ReleaseInstancePublicConnection",
    ReleaseReadWriteSplittingConnection => "ReleaseReadWriteSplittingConnection",
    RemoveTagsFromResource => "RemoveTagsFromResource",
    RenewInstance => "RenewInstance",
    RequestServiceOfCloudDbExpert => "RequestServiceOfCloudDBExpert",
    ResetAccount => "ResetAccount",
    ResetAccountForPg => "ResetAccountForPG",
    ResetAccountPassword => "ResetAccountPassword",
    RestartDbInstance => "RestartDBInstance",
    RestoreDbInstance => "RestoreDBInstance",
    RestoreTable => "RestoreTable",
    RevokeAccountPrivilege => "RevokeAccountPrivilege",
    RevokeOperatorPermission => "RevokeOperatorPermission",
    SwitchDbInstanceHa => "SwitchDBInstanceHA",
    SwitchDbInstanceNetType => "SwitchDBInstanceNetType",
    SwitchDbInstanceVpc => "SwitchDBInstanceVpc",
    UpgradeDbInstanceEngineVersion => "UpgradeDBInstanceEngineVersion",
    UpgradeDbInstanceKernelVersion => "UpgradeDBInstanceKernelVersion",

    // Migration, replicas, zones
    CreateOnlineDatabaseTask => "CreateOnlineDatabaseTask",
    ModifyReplicaDescription => "ModifyReplicaDescription",
    CheckResource => "CheckResource",
    MigrateToOtherZone => "MigrateToOtherZone",
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
