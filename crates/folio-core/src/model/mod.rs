// ── Domain model ──
//
// Canonical portfolio entities. Each type is built from its wire record
// in `convert.rs` and is immutable once published in a snapshot.

pub mod about;
pub mod contact;
pub mod entity_id;
pub mod experience;
pub mod project;
pub mod skill;
pub mod social;

pub use about::{AboutSection, Stat};
pub use contact::{Contact, ContactStatus};
pub use entity_id::EntityId;
pub use experience::Experience;
pub use project::Project;
pub use skill::{Skill, SkillCategory};
pub use social::SocialLink;

/// Display position within a resource. Collections sort ascending on it;
/// entities without one keep the order the store returned.
pub trait Ordered {
    fn order_index(&self) -> Option<i32>;
}

macro_rules! ordered_by_index {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Ordered for $ty {
                fn order_index(&self) -> Option<i32> {
                    Some(self.order_index)
                }
            }
        )+
    };
}

ordered_by_index!(AboutSection, Stat, SocialLink, Experience, Project, SkillCategory, Skill);

impl Ordered for Contact {
    fn order_index(&self) -> Option<i32> {
        None
    }
}
