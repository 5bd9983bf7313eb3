// ── Contact message domain types ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// Moderation state of a visitor message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Other(String),
}

impl ContactStatus {
    /// A missing or blank status is `New`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::New,
            Some(s) if s.eq_ignore_ascii_case("new") => Self::New,
            Some(s) if s.eq_ignore_ascii_case("read") => Self::Read,
            Some(s) => Self::Other(s.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Submission date for the inbox table, `"N/A"` when unknown.
    pub fn received_label(&self) -> String {
        self.created_at
            .map_or_else(|| "N/A".into(), |ts| ts.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing() {
        assert_eq!(ContactStatus::parse(None), ContactStatus::New);
        assert_eq!(ContactStatus::parse(Some("")), ContactStatus::New);
        assert_eq!(ContactStatus::parse(Some("READ")), ContactStatus::Read);
        assert_eq!(
            ContactStatus::parse(Some("archived")),
            ContactStatus::Other("archived".into())
        );
    }

    #[test]
    fn missing_date_renders_placeholder() {
        let contact = Contact {
            id: EntityId::new(1),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
            status: ContactStatus::New,
            created_at: None,
        };
        assert_eq!(contact.received_label(), "N/A");
    }
}
