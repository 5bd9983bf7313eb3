// ── Skill domain types ──
//
// Categories own their skills. The store cascades category deletes.

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: EntityId,
    pub name: String,
    pub order_index: i32,
    /// Sorted by `order_index`.
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    pub category_id: EntityId,
    pub order_index: i32,
}
