//! UI actions. Every state change in the app loop is expressed as one.

use folio_core::{
    AboutSection, Contact, CoreError, Experience, Mutation, Project, SkillCategory, SocialLink,
    Stat, SyncSnapshot,
};

use crate::screen::ScreenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

/// A toast shown in the bottom-right corner for a few seconds.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Warning,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,
    /// Re-read every collection shown on a screen.
    Refresh(ScreenId),

    // ── Data events (from folio-core streams) ─────────────────────
    AboutUpdated(SyncSnapshot<AboutSection>),
    StatsUpdated(SyncSnapshot<Stat>),
    SocialLinksUpdated(SyncSnapshot<SocialLink>),
    ExperiencesUpdated(SyncSnapshot<Experience>),
    ProjectsUpdated(SyncSnapshot<Project>),
    SkillCategoriesUpdated(SyncSnapshot<SkillCategory>),
    ContactsUpdated(SyncSnapshot<Contact>),

    // ── Content store reachability ────────────────────────────────
    Connected,
    Unreachable(String),

    // ── Mutations ─────────────────────────────────────────────────
    /// Send a create straight to the store.
    Execute(Mutation),
    /// Ask before sending (deletes).
    RequestConfirm(Mutation),
    ConfirmYes,
    ConfirmNo,
    /// Outcome of an [`Execute`](Self::Execute), routed back to the screen
    /// whose form issued it.
    MutationFinished {
        mutation: Mutation,
        result: Result<(), CoreError>,
    },

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,
}

impl Action {
    /// Delivered to every screen rather than only the active one. Several
    /// screens share a collection, and timers run in the background.
    pub fn is_broadcast(&self) -> bool {
        matches!(
            self,
            Self::AboutUpdated(_)
                | Self::StatsUpdated(_)
                | Self::SocialLinksUpdated(_)
                | Self::ExperiencesUpdated(_)
                | Self::ProjectsUpdated(_)
                | Self::SkillCategoriesUpdated(_)
                | Self::ContactsUpdated(_)
                | Self::MutationFinished { .. }
                | Self::Tick
        )
    }
}
