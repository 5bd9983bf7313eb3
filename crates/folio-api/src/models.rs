// Content store wire types
//
// Response types mirror the store's JSON records. Optional fields use
// `#[serde(default)]` since older rows may predate a column. Create payloads
// omit server-assigned fields (`id`, timestamps) and skip unset optionals.

use serde::{Deserialize, Serialize};

// ── About ────────────────────────────────────────────────────────────

/// One paragraph of the about section from `GET /about/content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutResponse {
    pub id: i64,
    pub section: String,
    pub content: String,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutCreate {
    pub section: String,
    pub content: String,
    pub order_index: i32,
}

/// Headline number from `GET /about/stats` (e.g. `"5+"` / `"Years Experience"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatResponse {
    pub id: i64,
    pub number: String,
    pub label: String,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCreate {
    pub number: String,
    pub label: String,
    pub order_index: i32,
}

// ── Social links ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkResponse {
    pub id: i64,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkCreate {
    pub platform: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    pub order_index: i32,
}

// ── Experience ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceResponse {
    pub id: i64,
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceCreate {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub order_index: i32,
}

// ── Projects ─────────────────────────────────────────────────────────

/// Project record. `featured` is a string column (`"true"` / `"false"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: String,
    pub order_index: i32,
}

// ── Skills ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Category with its skills embedded, from `GET /skills/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategoryResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub order_index: Option<i32>,
    #[serde(default)]
    pub skills: Option<Vec<SkillResponse>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategoryCreate {
    pub name: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCreate {
    pub name: String,
    pub category_id: i64,
    pub order_index: i32,
}

// ── Contacts ─────────────────────────────────────────────────────────

/// Visitor message. `status` is `"new"` until moderated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCreate {
    pub name: String,
    pub email: String,
    pub message: String,
}

// ── Health ───────────────────────────────────────────────────────────

/// `GET /health` body: `{"status": "ok"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
