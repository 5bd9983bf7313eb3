//! `ListPane`: per-collection state shared by the list-style screens.
//!
//! Holds the latest snapshot, the row selection, the admin create form and
//! the loading throbber, and turns key presses into actions: `j`/`k` move,
//! `n` opens the create form, `d` asks to delete the selected entity.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{
    AboutSection, CreateForm, DeleteTarget, Draft, EntityId, Experience, Mutation, Placement,
    Project, Resource, SectionState, SocialLink, Stat, SyncSnapshot,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
};
use throbber_widgets_tui::ThrobberState;

use crate::action::Action;
use crate::widgets::form::{self, FormKey, FormView};
use crate::widgets::section;

/// Entities that can be targeted by a delete.
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn entity_id(&self) -> EntityId {
                    self.id
                }
            }
        )*
    };
}

identified!(AboutSection, Stat, SocialLink, Experience, Project);

pub struct ListPane<T: Send + Sync + 'static, D: Draft> {
    resource: Resource,
    target: DeleteTarget,
    admin: bool,
    snapshot: SyncSnapshot<T>,
    selected: usize,
    form: CreateForm<D>,
    throbber: ThrobberState,
}

impl<T, D> ListPane<T, D>
where
    T: Identified + Send + Sync + 'static,
    D: Draft,
    D::Payload: Into<Mutation>,
{
    pub fn new(resource: Resource, target: DeleteTarget, admin: bool) -> Self {
        Self {
            resource,
            target,
            admin,
            snapshot: SyncSnapshot::default(),
            selected: 0,
            form: CreateForm::new(),
            throbber: ThrobberState::default(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn snapshot(&self) -> &SyncSnapshot<T> {
        &self.snapshot
    }

    pub fn set_snapshot(&mut self, snapshot: SyncSnapshot<T>) {
        self.selected = self.selected.min(snapshot.len().saturating_sub(1));
        self.snapshot = snapshot;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.snapshot.items.get(self.selected).map(|item| &**item)
    }

    pub fn throbber(&self) -> &ThrobberState {
        &self.throbber
    }

    pub fn form(&self) -> &CreateForm<D> {
        &self.form
    }

    /// Rows are on screen. Deletes only target what the user can see.
    fn shows_content(&self) -> bool {
        matches!(self.snapshot.section(), SectionState::Content(_))
    }

    /// The create form is open and owns the keyboard.
    pub fn editing(&self) -> bool {
        self.admin && self.form.is_open()
    }

    pub fn tick(&mut self) {
        if self.snapshot.status.is_loading() {
            self.throbber.calc_next();
        }
    }

    /// Outcome of this pane's create. Failures are already logged by the
    /// portfolio; the draft stays for another try.
    pub fn complete(&mut self, succeeded: bool) {
        self.form.complete(succeeded);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.editing() {
            return match form::handle_key(self.form.draft_mut(), key) {
                FormKey::Submit => self.submit(),
                FormKey::Close => {
                    self.form.close();
                    None
                }
                FormKey::Edited | FormKey::Ignored => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.snapshot.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('n') if self.admin && self.snapshot.section().offers_create() => {
                self.form.open();
                None
            }
            KeyCode::Char('d') if self.admin && self.shows_content() => {
                let id = self.selected_item()?.entity_id();
                Some(Action::RequestConfirm(Mutation::Delete {
                    target: self.target,
                    id,
                }))
            }
            _ => None,
        }
    }

    pub fn paste(&mut self, text: &str) {
        if self.editing() {
            form::paste(self.form.draft_mut(), text);
        }
    }

    fn submit(&mut self) -> Option<Action> {
        form::submitted(self.form.submit(Placement::append(self.snapshot.len())))
    }

    // ── Rendering helpers ───────────────────────────────────────────

    /// Block-title key hints; empty outside admin mode.
    pub fn hints(&self) -> Line<'static> {
        if self.admin {
            section::admin_hints(&self.snapshot.section())
        } else {
            Line::default()
        }
    }

    /// Split `area` into the list area and, when the create form is open,
    /// the form area below it.
    pub fn layout(&self, area: Rect) -> (Rect, Option<Rect>) {
        if !self.editing() {
            return (area, None);
        }
        let view = self.form_view("");
        let [list, form] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(view.height())]).areas(area);
        (list, Some(form))
    }

    pub fn render_form(&self, frame: &mut Frame, area: Rect, title: &str) {
        frame.render_widget(self.form_view(title), area);
    }

    fn form_view<'a>(&'a self, title: &'a str) -> FormView<'a> {
        FormView {
            title,
            draft: self.form.draft(),
            button: self.form.button_label(),
            enabled: !self.form.is_submitting(),
            active: true,
            error: None,
        }
    }
}
