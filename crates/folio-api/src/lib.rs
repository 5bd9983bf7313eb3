// folio-api: Async Rust client for the portfolio content store

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod about;
mod contacts;
mod experiences;
mod projects;
mod skills;
mod social_links;

pub use client::ContentClient;
pub use error::Error;
pub use models::{
    AboutCreate, AboutResponse, ContactCreate, ContactResponse, ExperienceCreate,
    ExperienceResponse, HealthResponse, ProjectCreate, ProjectResponse, SkillCategoryCreate,
    SkillCategoryResponse, SkillCreate, SkillResponse, SocialLinkCreate, SocialLinkResponse,
    StatCreate, StatResponse,
};
pub use transport::TransportConfig;
