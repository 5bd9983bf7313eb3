//! Skills screen: categories with their nested skills.
//!
//! Rows are flattened (category, then its skills) so one selection drives
//! both deletes. `n` adds a category, `s` adds a skill to the category
//! under the cursor.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{
    CreateForm, DeleteTarget, EntityId, Mutation, Placement, Resource,
    SectionState, SkillCategory, SkillCategoryDraft, SkillDraft, SyncSnapshot,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};
use throbber_widgets_tui::ThrobberState;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::form::{self, FormKey, FormView};
use crate::widgets::{section, section_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Category(usize),
    Skill(usize, usize),
}

pub struct SkillsScreen {
    admin: bool,
    snapshot: SyncSnapshot<SkillCategory>,
    rows: Vec<Row>,
    selected: usize,
    category_form: CreateForm<SkillCategoryDraft>,
    skill_form: CreateForm<SkillDraft>,
    /// Category the open skill form adds to.
    skill_parent: Option<EntityId>,
    throbber: ThrobberState,
}

impl SkillsScreen {
    pub fn new(admin: bool) -> Self {
        Self {
            admin,
            snapshot: SyncSnapshot::default(),
            rows: Vec::new(),
            selected: 0,
            category_form: CreateForm::new(),
            skill_form: CreateForm::new(),
            skill_parent: None,
            throbber: ThrobberState::default(),
        }
    }

    /// Rows are on screen. Skill creates and deletes only target visible rows.
    fn shows_content(&self) -> bool {
        matches!(self.snapshot.section(), SectionState::Content(_))
    }

    fn set_snapshot(&mut self, snapshot: SyncSnapshot<SkillCategory>) {
        self.rows = snapshot
            .items
            .iter()
            .enumerate()
            .flat_map(|(c, category)| {
                std::iter::once(Row::Category(c))
                    .chain((0..category.skills.len()).map(move |s| Row::Skill(c, s)))
            })
            .collect();
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.snapshot = snapshot;
    }

    fn category_at(&self, row: Row) -> Option<&SkillCategory> {
        let (Row::Category(c) | Row::Skill(c, _)) = row;
        self.snapshot.items.get(c).map(|category| &**category)
    }

    fn editing(&self) -> bool {
        self.admin && (self.category_form.is_open() || self.skill_form.is_open())
    }

    fn delete_selected(&self) -> Option<Action> {
        let row = *self.rows.get(self.selected)?;
        let category = self.category_at(row)?;
        let (target, id) = match row {
            Row::Category(_) => (DeleteTarget::SkillCategory, category.id),
            Row::Skill(_, s) => (DeleteTarget::Skill, category.skills.get(s)?.id),
        };
        Some(Action::RequestConfirm(Mutation::Delete { target, id }))
    }

    fn open_skill_form(&mut self) {
        let parent = self
            .rows
            .get(self.selected)
            .and_then(|row| self.category_at(*row))
            .map(|category| category.id);
        if parent.is_some() {
            self.skill_parent = parent;
            self.category_form.close();
            self.skill_form.open();
        }
    }

    fn submit_category(&mut self) -> Option<Action> {
        let placement = Placement::append(self.snapshot.len());
        form::submitted(self.category_form.submit(placement))
    }

    fn submit_skill(&mut self) -> Option<Action> {
        let parent = self.skill_parent.and_then(|id| {
            self.snapshot
                .items
                .iter()
                .find(|category| category.id == id)
        });
        let placement = match parent {
            Some(category) => Placement::append(category.skills.len()).under(category.id),
            None => Placement::default(),
        };
        form::submitted(self.skill_form.submit(placement))
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.skill_form.is_open() {
            match form::handle_key(self.skill_form.draft_mut(), key) {
                FormKey::Submit => self.submit_skill(),
                FormKey::Close => {
                    self.skill_form.close();
                    None
                }
                FormKey::Edited | FormKey::Ignored => None,
            }
        } else {
            match form::handle_key(self.category_form.draft_mut(), key) {
                FormKey::Submit => self.submit_category(),
                FormKey::Close => {
                    self.category_form.close();
                    None
                }
                FormKey::Edited | FormKey::Ignored => None,
            }
        }
    }

    fn hints(&self) -> Line<'static> {
        if !self.admin {
            return Line::default();
        }
        let state = self.snapshot.section();
        let mut hints = section::admin_hints(&state);
        if matches!(state, SectionState::Content(_)) {
            hints.push_span(Span::styled(" s ", theme::key_hint_key()));
            hints.push_span(Span::styled("add skill ", theme::key_hint()));
        }
        hints
    }

    fn form_title(&self) -> String {
        if self.skill_form.is_open() {
            let parent = self
                .skill_parent
                .and_then(|id| self.snapshot.items.iter().find(|c| c.id == id))
                .map_or("", |c| c.name.as_str());
            format!("New skill in {parent}")
        } else {
            "New category".to_owned()
        }
    }

    fn form_view<'a>(&'a self, title: &'a str) -> Option<FormView<'a>> {
        if !self.editing() {
            return None;
        }
        let (draft, button, submitting) = if self.skill_form.is_open() {
            (
                self.skill_form.draft(),
                self.skill_form.button_label(),
                self.skill_form.is_submitting(),
            )
        } else {
            (
                self.category_form.draft(),
                self.category_form.button_label(),
                self.category_form.is_submitting(),
            )
        };
        Some(FormView {
            title,
            draft,
            button,
            enabled: !submitting,
            active: true,
            error: None,
        })
    }

    fn row_item(&self, row: Row) -> Option<ListItem<'_>> {
        let category = self.category_at(row)?;
        let line = match row {
            Row::Category(_) => Line::from(vec![
                Span::styled(category.name.as_str(), theme::heading()),
                Span::styled(format!("  ({})", category.skills.len()), theme::key_hint()),
            ]),
            Row::Skill(_, s) => Line::from(vec![
                Span::styled("   • ", theme::tag()),
                Span::styled(category.skills.get(s)?.name.as_str(), theme::body()),
            ]),
        };
        Some(ListItem::new(line))
    }
}

impl Component for SkillsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing() {
            return Ok(self.handle_form_key(key));
        }
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('n') if self.admin && self.snapshot.section().offers_create() => {
                self.skill_form.close();
                self.category_form.open();
                None
            }
            KeyCode::Char('s') if self.admin && self.shows_content() => {
                self.open_skill_form();
                None
            }
            KeyCode::Char('d') if self.admin && self.shows_content() => self.delete_selected(),
            _ => None,
        };
        Ok(action)
    }

    fn handle_paste(&mut self, text: &str) {
        if !self.editing() {
            return;
        }
        if self.skill_form.is_open() {
            form::paste(self.skill_form.draft_mut(), text);
        } else {
            form::paste(self.category_form.draft_mut(), text);
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SkillCategoriesUpdated(snapshot) => self.set_snapshot(snapshot.clone()),
            Action::MutationFinished { mutation, result } => match mutation {
                Mutation::CreateSkillCategory(_) => self.category_form.complete(result.is_ok()),
                Mutation::CreateSkill(_) => {
                    self.skill_form.complete(result.is_ok());
                    if result.is_ok() {
                        self.skill_parent = None;
                    }
                }
                _ => {}
            },
            Action::Tick if self.snapshot.status.is_loading() => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = section_block("Skills & Technologies", self.hints(), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = self.form_title();
        let form = self.form_view(&title);
        let (body, form_area) = match &form {
            Some(view) => {
                let [body, form_area] =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(view.height())])
                        .areas(inner);
                (body, Some(form_area))
            }
            None => (inner, None),
        };

        if section::render_state(
            frame,
            body,
            Resource::SkillCategories,
            self.snapshot.section(),
            &self.throbber,
            self.admin,
        )
        .is_some()
        {
            let items: Vec<ListItem> = self
                .rows
                .iter()
                .filter_map(|row| self.row_item(*row))
                .collect();
            let list = List::new(items).highlight_style(theme::selected());
            let mut state = ListState::default().with_selected(Some(self.selected));
            frame.render_stateful_widget(list, body, &mut state);
        }

        if let (Some(view), Some(form_area)) = (form, form_area) {
            frame.render_widget(view, form_area);
        }
    }

    fn captures_input(&self) -> bool {
        self.editing()
    }

    fn resources(&self) -> &'static [Resource] {
        &[Resource::SkillCategories]
    }
}
