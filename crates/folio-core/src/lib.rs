//! Data-sync layer between `folio-api` and the terminal front end.
//!
//! - **[`RemoteCollection<T>`]**: one generic fetch/loading/error/refresh
//!   state machine, instantiated once per content resource. State is
//!   published through a `tokio::sync::watch` channel as a [`SyncSnapshot`].
//!
//! - **[`SyncStream<T>`]**: subscription handle exposing `current()` /
//!   `latest()` / `changed()` for reactive rendering.
//!
//! - **[`Portfolio`]**: facade owning the content store client and every
//!   collection. [`mount()`](Portfolio::mount) performs the initial loads,
//!   [`execute()`](Portfolio::execute) runs a [`Mutation`] and refreshes the
//!   affected collection.
//!
//! - **Section logic**: [`SectionState`] derivation, admin create forms
//!   ([`CreateForm`] + per-resource [`Draft`]s), the public [`ContactForm`],
//!   the delete [`ConfirmGate`], and social [`SocialIcon`] resolution.

pub mod config;
pub mod confirm;
pub mod contact_form;
pub mod convert;
pub mod error;
pub mod form;
pub mod icons;
pub mod model;
pub mod mutation;
pub mod portfolio;
pub mod section;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::PortfolioConfig;
pub use confirm::ConfirmGate;
pub use contact_form::{ContactForm, ContactPhase, SENT_CONFIRMATION};
pub use error::CoreError;
pub use form::{
    AboutDraft, ContactDraft, CreateForm, Draft, DraftValues, ExperienceDraft, FieldKind,
    FormError, FormField, Placement, ProjectDraft, SkillCategoryDraft, SkillDraft,
    SocialLinkDraft, StatDraft, parse_tags,
};
pub use icons::SocialIcon;
pub use mutation::{DeleteTarget, Mutation};
pub use portfolio::Portfolio;
pub use section::{Resource, SectionState};
pub use store::{RemoteCollection, SyncSnapshot, SyncStatus};
pub use stream::SyncStream;

pub use model::{
    AboutSection, Contact, ContactStatus, EntityId, Experience, Ordered, Project, Skill,
    SkillCategory, SocialLink, Stat,
};
