use super::{FromItem, Lookup, Resource, decode};
use crate::action::Action;
use crate::client::Session;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegionAttributes {
    pub local_name: Option<String>,
    pub region_endpoint: Option<String>,
    pub status: Option<String>,
}

/// A region offering RDS
#[derive(Debug, Clone)]
pub struct Region {
    session: Session,
    id: String,
    attributes: RegionAttributes,
}

impl Resource for Region {
    const TYPE_NAME: &'static str = "rds.region";
    const ID_KEY: &'static str = "RegionId";

    fn id(&self) -> &str {
        &self.id
    }
}

impl FromItem for Region {
    fn from_item(session: &Session, id: String, item: &Value, action: Action) -> Result<Self> {
        Ok(Self {
            session: session.clone(),
            id,
            attributes: decode(action, item)?,
        })
    }
}

// The listing nests one entry per zone under `RDSRegion`; the first entry
// for the region wins.
const LOOKUP: Lookup = Lookup {
    resource: "region",
    action: Action::DescribeRegions,
    param: "RegionId",
    items_path: "Regions.RDSRegion",
    id_key: "RegionId",
};

impl Region {
    pub(crate) fn new(session: Session, id: impl Into<String>) -> Self {
        Self {
            session,
            id: id.into(),
            attributes: RegionAttributes::default(),
        }
    }

    pub fn region_id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &RegionAttributes {
        &self.attributes
    }

    /// Reload attributes through `DescribeRegions`
    pub async fn refresh(&mut self) -> Result<()> {
        self.attributes = LOOKUP.fetch(&self.session, &self.id).await?;
        Ok(())
    }
}
