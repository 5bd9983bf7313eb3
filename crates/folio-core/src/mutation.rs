// ── Mutation API ──
//
// Every write against the content store is a `Mutation`. The portfolio
// routes each variant to its endpoint and then refreshes the affected
// collection.

use std::fmt;

pub use folio_api::models::{
    AboutCreate, ContactCreate, ExperienceCreate, ProjectCreate, SkillCategoryCreate, SkillCreate,
    SocialLinkCreate, StatCreate,
};

use crate::model::EntityId;
use crate::section::Resource;

/// All write operations against the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    // ── Creates ──────────────────────────────────────────────────────
    CreateAbout(AboutCreate),
    CreateStat(StatCreate),
    CreateSocialLink(SocialLinkCreate),
    CreateExperience(ExperienceCreate),
    CreateProject(ProjectCreate),
    CreateSkillCategory(SkillCategoryCreate),
    CreateSkill(SkillCreate),
    /// The public write path; allowed outside admin mode.
    CreateContact(ContactCreate),

    // ── Deletes ──────────────────────────────────────────────────────
    Delete { target: DeleteTarget, id: EntityId },
}

impl Mutation {
    /// The collection to refresh once this mutation succeeds.
    pub fn resource(&self) -> Resource {
        match self {
            Self::CreateAbout(_) => Resource::About,
            Self::CreateStat(_) => Resource::Stats,
            Self::CreateSocialLink(_) => Resource::SocialLinks,
            Self::CreateExperience(_) => Resource::Experiences,
            Self::CreateProject(_) => Resource::Projects,
            Self::CreateSkillCategory(_) | Self::CreateSkill(_) => Resource::SkillCategories,
            Self::CreateContact(_) => Resource::Contacts,
            Self::Delete { target, .. } => target.resource(),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateAbout(b) => write!(f, "create paragraph '{}'", b.section),
            Self::CreateStat(b) => write!(f, "create stat '{}'", b.label),
            Self::CreateSocialLink(b) => write!(f, "create link '{}'", b.platform),
            Self::CreateExperience(b) => write!(f, "create experience '{}'", b.role),
            Self::CreateProject(b) => write!(f, "create project '{}'", b.title),
            Self::CreateSkillCategory(b) => write!(f, "create category '{}'", b.name),
            Self::CreateSkill(b) => write!(f, "create skill '{}'", b.name),
            Self::CreateContact(_) => f.write_str("send message"),
            Self::Delete { target, id } => write!(f, "delete {} {id}", target.noun()),
        }
    }
}

macro_rules! create_from {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Mutation {
                fn from(body: $payload) -> Self {
                    Self::$variant(body)
                }
            }
        )*
    };
}

create_from! {
    AboutCreate => CreateAbout,
    StatCreate => CreateStat,
    SocialLinkCreate => CreateSocialLink,
    ExperienceCreate => CreateExperience,
    ProjectCreate => CreateProject,
    SkillCategoryCreate => CreateSkillCategory,
    SkillCreate => CreateSkill,
    ContactCreate => CreateContact,
}

/// The kind of entity a delete removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteTarget {
    About,
    Stat,
    SocialLink,
    Experience,
    Project,
    /// Cascades to the category's skills on the store side.
    SkillCategory,
    Skill,
    Contact,
}

impl DeleteTarget {
    pub fn resource(self) -> Resource {
        match self {
            Self::About => Resource::About,
            Self::Stat => Resource::Stats,
            Self::SocialLink => Resource::SocialLinks,
            Self::Experience => Resource::Experiences,
            Self::Project => Resource::Projects,
            Self::SkillCategory | Self::Skill => Resource::SkillCategories,
            Self::Contact => Resource::Contacts,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Self::About => "paragraph",
            Self::Stat => "stat",
            Self::SocialLink => "link",
            Self::Experience => "experience",
            Self::Project => "project",
            Self::SkillCategory => "category",
            Self::Skill => "skill",
            Self::Contact => "message",
        }
    }

    /// Confirmation prompt shown before the delete is sent.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::About => "Delete this paragraph?",
            Self::Stat => "Delete this stat?",
            Self::SocialLink => "Delete this link?",
            Self::Experience => "Delete this experience?",
            Self::Project => "Delete this project?",
            Self::SkillCategory => "Delete this category and all its skills?",
            Self::Skill => "Delete this skill?",
            Self::Contact => "Delete this message?",
        }
    }
}
