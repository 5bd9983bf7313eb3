use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntityId,
    pub role: String,
    pub company: String,
    /// Display string, e.g. "2021 - Present".
    pub period: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub order_index: i32,
}
