// ── Runtime configuration ──
//
// Describes which content store to talk to and whether admin affordances
// are shown. Never touches disk; `folio-config` builds one and hands it in.

use std::time::Duration;

use url::Url;

/// Configuration for a [`Portfolio`](crate::Portfolio).
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Content store root (e.g. `http://localhost:8000`).
    pub api_url: Url,
    /// Shows create/delete forms and the contact inbox. A presentation
    /// switch only; the store is responsible for rejecting writes.
    pub admin: bool,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl PortfolioConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            admin: false,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
