// ── Public contact form ──
//
// Always available, admin or not. Unlike admin create forms, a failed
// submission is shown to the visitor. A successful one shows a
// confirmation for a fixed period with the submit control disabled.

use std::time::{Duration, Instant};

use folio_api::models::ContactCreate;

use crate::error::CoreError;
use crate::form::{ContactDraft, Draft, DraftValues, FormError, Placement};

/// How long "Message Sent!" stays up after a successful submit.
pub const SENT_CONFIRMATION: Duration = Duration::from_secs(3);

const SEND_FAILED_FALLBACK: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Sending,
    Sent { until: Instant },
}

#[derive(Debug)]
pub struct ContactForm {
    draft: DraftValues,
    phase: ContactPhase,
    error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            draft: DraftValues::new(ContactDraft::FIELDS),
            phase: ContactPhase::Idle,
            error: None,
        }
    }

    pub fn draft(&self) -> &DraftValues {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftValues {
        &mut self.draft
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Inline error from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == ContactPhase::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            ContactPhase::Idle => ContactDraft::SUBMIT_LABEL,
            ContactPhase::Sending => "Sending...",
            ContactPhase::Sent { .. } => "Message Sent!",
        }
    }

    /// Validate and move to `Sending`. Clears any previous inline error.
    pub fn submit(&mut self) -> Result<ContactCreate, FormError> {
        if !self.submit_enabled() {
            return Err(FormError::Busy);
        }
        self.draft.validate()?;
        let payload = ContactDraft::build(&self.draft, Placement::default())?;
        self.phase = ContactPhase::Sending;
        self.error = None;
        Ok(payload)
    }

    /// The store accepted the message: clear inputs and hold the
    /// confirmation until `now + SENT_CONFIRMATION`.
    pub fn succeeded(&mut self, now: Instant) {
        self.draft.clear();
        self.error = None;
        self.phase = ContactPhase::Sent {
            until: now + SENT_CONFIRMATION,
        };
    }

    /// The store rejected the message: show why and re-enable submit with
    /// the input intact.
    pub fn failed(&mut self, err: &CoreError) {
        self.error = Some(err.message_or(SEND_FAILED_FALLBACK));
        self.phase = ContactPhase::Idle;
    }

    /// Expire the confirmation once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if let ContactPhase::Sent { until } = self.phase {
            if now >= until {
                self.phase = ContactPhase::Idle;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.draft_mut().set("name", "Ada");
        form.draft_mut().set("email", "ada@example.com");
        form.draft_mut().set("message", "Hi");
        form
    }

    #[test]
    fn success_shows_confirmation_then_reverts() {
        let mut form = filled();
        let payload = form.submit().unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(form.button_label(), "Sending...");
        assert!(!form.submit_enabled());

        let now = Instant::now();
        form.succeeded(now);
        assert_eq!(form.button_label(), "Message Sent!");
        assert!(!form.submit_enabled());
        assert_eq!(form.draft().get("name"), "");
        assert_eq!(form.draft().get("message"), "");

        form.tick(now + Duration::from_millis(2_999));
        assert_eq!(form.button_label(), "Message Sent!");

        form.tick(now + SENT_CONFIRMATION);
        assert_eq!(form.button_label(), "Send Message");
        assert!(form.submit_enabled());
    }

    #[test]
    fn failure_shows_message_and_reenables() {
        let mut form = filled();
        form.submit().unwrap();
        form.failed(&CoreError::Rejected {
            message: "Network error".into(),
            status: Some(503),
        });

        assert_eq!(form.error(), Some("Network error"));
        assert!(form.submit_enabled());
        assert_eq!(form.button_label(), "Send Message");
        assert_eq!(form.draft().get("message"), "Hi");
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let mut form = filled();
        form.submit().unwrap();
        form.failed(&CoreError::Internal(String::new()));
        assert_eq!(form.error(), Some(SEND_FAILED_FALLBACK));
    }

    #[test]
    fn submit_rejected_while_sending_or_sent() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit().unwrap_err(), FormError::Busy);
    }

    #[test]
    fn all_fields_required() {
        let mut form = ContactForm::new();
        form.draft_mut().set("name", "Ada");
        assert_eq!(
            form.submit().unwrap_err(),
            FormError::Missing { label: "Email" }
        );
        assert!(form.submit_enabled());
    }

    #[test]
    fn resubmitting_clears_old_error() {
        let mut form = filled();
        form.submit().unwrap();
        form.failed(&CoreError::Timeout);
        assert_eq!(form.error(), Some("Request timed out"));
        form.submit().unwrap();
        assert!(form.error().is_none());
    }
}
