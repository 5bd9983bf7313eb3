//! Contact screen: the public message form, plus the inbox in admin mode.

use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use folio_config::OwnerConfig;
use folio_core::{
    Contact, ContactForm, ContactStatus, DeleteTarget, Mutation, Resource, SectionState,
    SyncSnapshot,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
};
use throbber_widgets_tui::ThrobberState;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::form::{self, FormKey, FormView};
use crate::widgets::{section, section_block};

pub struct ContactScreen {
    owner: OwnerConfig,
    admin: bool,
    form: ContactForm,
    /// Keyboard focus is in the message form.
    editing: bool,
    inbox: SyncSnapshot<Contact>,
    selected: usize,
    throbber: ThrobberState,
}

impl ContactScreen {
    pub fn new(owner: OwnerConfig, admin: bool) -> Self {
        Self {
            owner,
            admin,
            form: ContactForm::new(),
            editing: false,
            inbox: SyncSnapshot::default(),
            selected: 0,
            throbber: ThrobberState::default(),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        match form::handle_key(self.form.draft_mut(), key) {
            FormKey::Submit => form::submitted(self.form.submit()),
            FormKey::Close => {
                self.editing = false;
                None
            }
            FormKey::Edited | FormKey::Ignored => None,
        }
    }

    fn handle_inbox_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.inbox.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('d') if matches!(self.inbox.section(), SectionState::Content(_)) => {
                let id = self.inbox.items.get(self.selected)?.id;
                Some(Action::RequestConfirm(Mutation::Delete {
                    target: DeleteTarget::Contact,
                    id,
                }))
            }
            _ => None,
        }
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Let's Work Together", theme::heading())),
            Line::from(""),
            Line::from(Span::styled(
                "Have a project in mind or just want to chat? Send a message.",
                theme::body(),
            )),
            Line::from(""),
        ];
        let channels = [
            ("Email", self.owner.email.as_deref()),
            ("LinkedIn", self.owner.linkedin.as_deref()),
        ];
        for (label, value) in channels {
            if let Some(value) = value {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:<10}"), theme::key_hint()),
                    Span::styled(value, theme::link()),
                ]));
            }
        }
        if !self.editing {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("i ", theme::key_hint_key()),
                Span::styled("write a message", theme::key_hint()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let view = FormView {
            title: "Send a Message",
            draft: self.form.draft(),
            button: self.form.button_label(),
            enabled: self.form.submit_enabled(),
            active: self.editing,
            error: self.form.error(),
        };
        let height = view.height().min(area.height);
        frame.render_widget(view, Rect { height, ..area });
    }

    fn render_inbox(&self, frame: &mut Frame, area: Rect) {
        let state = self.inbox.section();
        let hints = if matches!(state, SectionState::Content(_)) {
            Line::from(vec![
                Span::styled(" d ", theme::key_hint_key()),
                Span::styled("delete ", theme::key_hint()),
            ])
        } else {
            Line::default()
        };
        let title = format!("Messages ({})", self.inbox.len());
        let block = section_block(&title, hints, !self.editing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // No create trigger: messages only arrive through the public form.
        let Some(items) =
            section::render_state(frame, inner, Resource::Contacts, state, &self.throbber, false)
        else {
            return;
        };

        let header = Row::new(["Name", "Email", "Message", "Status", "Received"])
            .style(theme::table_header());
        let rows: Vec<Row> = items
            .iter()
            .map(|contact| {
                let status_style = match contact.status {
                    ContactStatus::New => Style::default().fg(theme::HIGHLIGHT),
                    ContactStatus::Read | ContactStatus::Other(_) => theme::key_hint(),
                };
                Row::new([
                    Cell::from(contact.name.as_str()),
                    Cell::from(contact.email.as_str()),
                    Cell::from(contact.message.as_str()),
                    Cell::from(Span::styled(contact.status.as_str(), status_style)),
                    Cell::from(contact.received_label()),
                ])
                .style(theme::body())
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(24),
                Constraint::Min(20),
                Constraint::Length(7),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .row_highlight_style(theme::selected());
        let mut table_state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, inner, &mut table_state);
    }
}

impl Component for ContactScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            return Ok(self.handle_form_key(key));
        }
        if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
            self.editing = true;
            return Ok(None);
        }
        if self.admin {
            return Ok(self.handle_inbox_key(key));
        }
        Ok(None)
    }

    fn handle_paste(&mut self, text: &str) {
        if self.editing {
            form::paste(self.form.draft_mut(), text);
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ContactsUpdated(snapshot) => {
                self.selected = self.selected.min(snapshot.len().saturating_sub(1));
                self.inbox = snapshot.clone();
            }
            Action::MutationFinished {
                mutation: Mutation::CreateContact(_),
                result,
            } => match result {
                Ok(()) => self.form.succeeded(Instant::now()),
                Err(e) => self.form.failed(e),
            },
            Action::Tick => {
                self.form.tick(Instant::now());
                if self.inbox.status.is_loading() {
                    self.throbber.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let (top, inbox) = if self.admin {
            let [top, inbox] =
                Layout::vertical([Constraint::Length(9), Constraint::Min(4)]).areas(area);
            (top, Some(inbox))
        } else {
            (area, None)
        };

        let [info, form_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);
        self.render_info(frame, info);
        self.render_form(frame, form_area);

        if let Some(inbox) = inbox {
            self.render_inbox(frame, inbox);
        }
    }

    fn captures_input(&self) -> bool {
        self.editing
    }

    fn resources(&self) -> &'static [Resource] {
        if self.admin {
            &[Resource::Contacts]
        } else {
            &[]
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use folio_core::{CoreError, EntityId, SyncStatus};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(screen: &ContactScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        terminal.backend().to_string()
    }

    fn press(screen: &mut ContactScreen, code: KeyCode) -> Option<Action> {
        screen.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    /// Focus the form, fill every field, and press Enter.
    fn submit_filled(screen: &mut ContactScreen) -> Mutation {
        press(screen, KeyCode::Char('i'));
        screen.handle_paste("Ada");
        press(screen, KeyCode::Tab);
        screen.handle_paste("ada@example.com");
        press(screen, KeyCode::Tab);
        screen.handle_paste("Hello there");
        match press(screen, KeyCode::Enter) {
            Some(Action::Execute(mutation)) => mutation,
            other => panic!("expected a send, got {other:?}"),
        }
    }

    #[test]
    fn success_shows_confirmation_and_clears_inputs() {
        let mut screen = ContactScreen::new(OwnerConfig::default(), false);
        let mutation = submit_filled(&mut screen);
        assert!(render(&screen).contains("[ Sending... ]"));

        screen
            .update(&Action::MutationFinished {
                mutation,
                result: Ok(()),
            })
            .unwrap();

        let out = render(&screen);
        assert!(out.contains("[ Message Sent! ]"));
        assert!(!out.contains("Hello there"));
        // Submit stays disabled while the confirmation is up.
        assert!(press(&mut screen, KeyCode::Enter).is_none());
    }

    #[test]
    fn failure_shows_message_inline_and_reenables_submit() {
        let mut screen = ContactScreen::new(OwnerConfig::default(), false);
        let mutation = submit_filled(&mut screen);

        screen
            .update(&Action::MutationFinished {
                mutation,
                result: Err(CoreError::Rejected {
                    message: "Network error".into(),
                    status: None,
                }),
            })
            .unwrap();

        let out = render(&screen);
        assert!(out.contains("Network error"));
        assert!(out.contains("[ Send Message ]"));
        assert!(out.contains("Hello there"));
        assert!(matches!(
            press(&mut screen, KeyCode::Enter),
            Some(Action::Execute(Mutation::CreateContact(_)))
        ));
    }

    #[test]
    fn inbox_is_admin_only() {
        let visitor = ContactScreen::new(OwnerConfig::default(), false);
        assert!(!render(&visitor).contains("Messages ("));
        assert_eq!(visitor.resources(), &[] as &[Resource]);

        let mut admin = ContactScreen::new(OwnerConfig::default(), true);
        admin
            .update(&Action::ContactsUpdated(SyncSnapshot {
                status: SyncStatus::Ready,
                items: Arc::new(vec![Arc::new(Contact {
                    id: EntityId::new(3),
                    name: "Grace".into(),
                    email: "grace@example.com".into(),
                    message: "Loved the talk".into(),
                    status: ContactStatus::New,
                    created_at: None,
                })]),
            }))
            .unwrap();

        let out = render(&admin);
        assert!(out.contains("Messages (1)"));
        assert!(out.contains("grace@example.com"));
        assert!(out.contains("N/A"));

        let Some(Action::RequestConfirm(mutation)) = press(&mut admin, KeyCode::Char('d')) else {
            panic!("expected a confirmation request");
        };
        assert_eq!(mutation.to_string(), "delete message 3");

        let stale = Arc::clone(&admin.inbox.items);
        admin
            .update(&Action::ContactsUpdated(SyncSnapshot {
                status: SyncStatus::Failed("Database unavailable".into()),
                items: stale,
            }))
            .unwrap();
        assert!(render(&admin).contains("Error: Database unavailable"));
        assert!(press(&mut admin, KeyCode::Char('d')).is_none());
    }
}
