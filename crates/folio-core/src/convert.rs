// ── API-to-domain type conversions ──
//
// Bridges raw `folio_api` records into `folio_core::model` types. Missing
// `order_index` values take the store's column default of 0, missing tag
// lists become empty, and timestamps are parsed leniently.

use chrono::{DateTime, NaiveDateTime, Utc};

use folio_api::models::{
    AboutResponse, ContactResponse, ExperienceResponse, ProjectResponse, SkillCategoryResponse,
    SkillResponse, SocialLinkResponse, StatResponse,
};

use crate::model::{
    AboutSection, Contact, ContactStatus, EntityId, Experience, Project, Skill, SkillCategory,
    SocialLink, Stat,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a store timestamp. Accepts RFC 3339 and the naive ISO form the
/// store emits for timezone-less columns (read as UTC).
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Treat blank optional strings as absent.
fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

// ── About ──────────────────────────────────────────────────────────

impl From<AboutResponse> for AboutSection {
    fn from(r: AboutResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            section: r.section,
            content: r.content,
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

impl From<StatResponse> for Stat {
    fn from(r: StatResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            number: r.number,
            label: r.label,
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

// ── Social links ───────────────────────────────────────────────────

impl From<SocialLinkResponse> for SocialLink {
    fn from(r: SocialLinkResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            platform: r.platform,
            url: r.url,
            icon_name: non_blank(r.icon_name),
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

// ── Experience / projects ──────────────────────────────────────────

impl From<ExperienceResponse> for Experience {
    fn from(r: ExperienceResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            role: r.role,
            company: r.company,
            period: r.period,
            start_date: non_blank(r.start_date),
            end_date: non_blank(r.end_date),
            description: r.description,
            tags: r.tags.unwrap_or_default(),
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

impl From<ProjectResponse> for Project {
    fn from(r: ProjectResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            title: r.title,
            description: r.description,
            image: non_blank(r.image),
            tags: r.tags.unwrap_or_default(),
            live_url: non_blank(r.live_url),
            github_url: non_blank(r.github_url),
            featured: r
                .featured
                .as_deref()
                .is_some_and(|f| f.trim().eq_ignore_ascii_case("true")),
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

// ── Skills ─────────────────────────────────────────────────────────

impl From<SkillResponse> for Skill {
    fn from(r: SkillResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            name: r.name,
            category_id: EntityId::new(r.category_id),
            order_index: r.order_index.unwrap_or_default(),
        }
    }
}

impl From<SkillCategoryResponse> for SkillCategory {
    fn from(r: SkillCategoryResponse) -> Self {
        let mut skills: Vec<Skill> = r
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(Skill::from)
            .collect();
        skills.sort_by_key(|s| s.order_index);

        Self {
            id: EntityId::new(r.id),
            name: r.name,
            order_index: r.order_index.unwrap_or_default(),
            skills,
        }
    }
}

// ── Contacts ───────────────────────────────────────────────────────

impl From<ContactResponse> for Contact {
    fn from(r: ContactResponse) -> Self {
        Self {
            id: EntityId::new(r.id),
            name: r.name,
            email: r.email,
            message: r.message,
            status: ContactStatus::parse(r.status.as_deref()),
            created_at: parse_timestamp(r.created_at.as_deref()),
        }
    }
}
