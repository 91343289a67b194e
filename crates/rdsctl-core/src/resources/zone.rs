use super::Resource;
use crate::client::Session;

/// An availability zone
#[derive(Debug, Clone)]
pub struct Zone {
    session: Session,
    id: String,
}

impl Resource for Zone {
    const TYPE_NAME: &'static str = "rds.zone";
    const ID_KEY: &'static str = "ZoneId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Zone {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
        }
    }

    pub fn zone_id(&self) -> &str {
        &self.id
    }

    passthrough! {
        /// Check whether the zone has capacity for the requested class
        check_resource => CheckResource;
        /// Move an instance into this zone
        migrate_to_other => MigrateToOtherZone;
    }
}
