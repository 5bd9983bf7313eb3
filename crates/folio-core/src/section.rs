// ── Section view state ──
//
// Every section renders exactly one of loading / error / empty / content,
// derived from its collection's snapshot.

use std::sync::Arc;

use strum::{Display, EnumIter};

use crate::store::SyncStatus;

/// A content resource backed by one remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Resource {
    About,
    Stats,
    SocialLinks,
    Experiences,
    Projects,
    SkillCategories,
    Contacts,
}

impl Resource {
    /// Human-facing name used in notifications.
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Stats => "Stats",
            Self::SocialLinks => "Social links",
            Self::Experiences => "Experience",
            Self::Projects => "Projects",
            Self::SkillCategories => "Skills",
            Self::Contacts => "Messages",
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            Self::About => "Loading about content...",
            Self::Stats => "Loading stats...",
            Self::SocialLinks => "Loading links...",
            Self::Experiences => "Loading experience...",
            Self::Projects => "Loading projects...",
            Self::SkillCategories => "Loading skills...",
            Self::Contacts => "Loading messages...",
        }
    }

    /// Copy shown when a read succeeds with no entities.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::About => {
                "I'm a passionate software engineer with a strong foundation in both frontend \
                 and backend technologies."
            }
            Self::Stats => "No stats yet.",
            Self::SocialLinks => "No social links yet.",
            Self::Experiences => "No experience entries found.",
            Self::Projects => "No projects found.",
            Self::SkillCategories => "No skills found.",
            Self::Contacts => "No messages yet.",
        }
    }

    /// Only fetched and shown in admin mode.
    pub fn admin_only(self) -> bool {
        matches!(self, Self::Contacts)
    }
}

/// The one state a section renders.
#[derive(Debug, PartialEq, Eq)]
pub enum SectionState<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Content(&'a [Arc<T>]),
}

impl<'a, T> SectionState<'a, T> {
    pub fn derive(status: &'a SyncStatus, items: &'a [Arc<T>]) -> Self {
        match status {
            SyncStatus::Idle | SyncStatus::Loading => Self::Loading,
            SyncStatus::Failed(message) => Self::Error(message),
            SyncStatus::Ready if items.is_empty() => Self::Empty,
            SyncStatus::Ready => Self::Content(items),
        }
    }

    /// Whether a create trigger belongs in this state (admin mode only).
    pub fn offers_create(&self) -> bool {
        matches!(self, Self::Empty | Self::Content(_))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn loading_precedes_everything() {
        let items = vec![Arc::new(1)];
        assert_eq!(
            SectionState::derive(&SyncStatus::Idle, &items),
            SectionState::Loading
        );
        assert_eq!(
            SectionState::derive(&SyncStatus::Loading, &items),
            SectionState::Loading
        );
    }

    #[test]
    fn error_hides_stale_content() {
        let items = vec![Arc::new(1)];
        let failed = SyncStatus::Failed("boom".into());
        let state = SectionState::derive(&failed, &items);
        assert_eq!(state, SectionState::Error("boom"));
        assert!(!state.offers_create());
    }

    #[test]
    fn ready_splits_empty_and_content() {
        let none: Vec<Arc<u8>> = Vec::new();
        let some = vec![Arc::new(7u8)];
        let empty = SectionState::derive(&SyncStatus::Ready, &none);
        let content = SectionState::derive(&SyncStatus::Ready, &some);
        assert_eq!(empty, SectionState::Empty);
        assert!(empty.offers_create());
        assert!(matches!(content, SectionState::Content(items) if items.len() == 1));
    }

    #[test]
    fn every_resource_has_copy() {
        for resource in Resource::iter() {
            assert!(!resource.loading_message().is_empty());
            assert!(!resource.empty_message().is_empty());
        }
        assert_eq!(Resource::SkillCategories.to_string(), "skill-categories");
        assert!(Resource::Contacts.admin_only());
    }
}
