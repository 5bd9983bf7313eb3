use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use crate::icons::SocialIcon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: EntityId,
    pub platform: String,
    pub url: String,
    pub icon_name: Option<String>,
    pub order_index: i32,
}

impl SocialLink {
    pub fn icon(&self) -> SocialIcon {
        SocialIcon::resolve(&self.platform)
    }
}
