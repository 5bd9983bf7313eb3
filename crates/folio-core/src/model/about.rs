// ── About section domain types ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// One paragraph of the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: EntityId,
    /// Short label for the paragraph (e.g. "intro").
    pub section: String,
    pub content: String,
    pub order_index: i32,
}

/// Headline figure shown beside the about text (e.g. "5+" / "Years Experience").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: EntityId,
    pub number: String,
    pub label: String,
    pub order_index: i32,
}
