//! Experience screen: timeline list with the selected entry's details.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use folio_core::{DeleteTarget, Experience, ExperienceDraft, Mutation, Resource};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::action::Action;
use crate::component::Component;
use crate::screens::tag_line;
use crate::theme;
use crate::widgets::pane::ListPane;
use crate::widgets::{section, section_block};

pub struct ExperienceScreen {
    pane: ListPane<Experience, ExperienceDraft>,
}

impl ExperienceScreen {
    pub fn new(admin: bool) -> Self {
        Self {
            pane: ListPane::new(Resource::Experiences, DeleteTarget::Experience, admin),
        }
    }
}

fn detail(exp: &Experience) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(exp.role.as_str(), theme::heading())),
        Line::from(Span::styled(exp.company.as_str(), theme::title_style())),
        Line::from(Span::styled(exp.period.as_str(), theme::key_hint())),
    ];
    if exp.start_date.is_some() || exp.end_date.is_some() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} → {}",
                exp.start_date.as_deref().unwrap_or("?"),
                exp.end_date.as_deref().unwrap_or("present"),
            ),
            theme::key_hint(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(exp.description.as_str(), theme::body())));
    if !exp.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(tag_line(&exp.tags));
    }
    lines
}

impl Component for ExperienceScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(self.pane.handle_key(key))
    }

    fn handle_paste(&mut self, text: &str) {
        self.pane.paste(text);
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ExperiencesUpdated(snapshot) => self.pane.set_snapshot(snapshot.clone()),
            Action::MutationFinished {
                mutation: Mutation::CreateExperience(_),
                result,
            } => self.pane.complete(result.is_ok()),
            Action::Tick => self.pane.tick(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = section_block("Experience", self.pane.hints(), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (body, form_area) = self.pane.layout(inner);
        if let Some(items) = section::render_state(
            frame,
            body,
            self.pane.resource(),
            self.pane.snapshot().section(),
            self.pane.throbber(),
            self.pane.is_admin(),
        ) {
            let [list_area, detail_area] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(body);

            let rows: Vec<ListItem> = items
                .iter()
                .map(|exp| {
                    ListItem::new(vec![
                        Line::from(Span::styled(exp.role.clone(), theme::body())),
                        Line::from(Span::styled(
                            format!("{} · {}", exp.company, exp.period),
                            theme::key_hint(),
                        )),
                    ])
                })
                .collect();
            let list = List::new(rows)
                .highlight_style(theme::selected())
                .highlight_symbol("▌ ");
            let mut state = ListState::default().with_selected(Some(self.pane.selected()));
            frame.render_stateful_widget(list, list_area, &mut state);

            if let Some(exp) = self.pane.selected_item() {
                frame.render_widget(
                    Paragraph::new(detail(exp))
                        .block(
                            Block::default()
                                .borders(Borders::LEFT)
                                .border_style(theme::border_default()),
                        )
                        .wrap(Wrap { trim: true }),
                    detail_area,
                );
            }
        }

        if let Some(form_area) = form_area {
            self.pane.render_form(frame, form_area, "New experience");
        }
    }

    fn captures_input(&self) -> bool {
        self.pane.editing()
    }

    fn resources(&self) -> &'static [Resource] {
        &[Resource::Experiences]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use folio_core::{EntityId, SyncSnapshot, SyncStatus};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn selected_entry_details_include_tags() {
        let mut screen = ExperienceScreen::new(false);
        screen
            .update(&Action::ExperiencesUpdated(SyncSnapshot {
                status: SyncStatus::Ready,
                items: Arc::new(vec![Arc::new(Experience {
                    id: EntityId::new(1),
                    role: "Staff Engineer".into(),
                    company: "Acme".into(),
                    period: "2021 - Present".into(),
                    start_date: None,
                    end_date: None,
                    description: "Built things.".into(),
                    tags: vec!["rust".into(), "tokio".into()],
                    order_index: 0,
                })]),
            }))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        let out = terminal.backend().to_string();

        assert!(out.contains("Acme · 2021 - Present"));
        assert!(out.contains("Built things."));
        assert!(out.contains("#rust"));
        assert!(out.contains("#tokio"));
    }

    #[test]
    fn empty_list_shows_copy_without_create_trigger_for_visitors() {
        let mut screen = ExperienceScreen::new(false);
        screen
            .update(&Action::ExperiencesUpdated(SyncSnapshot {
                status: SyncStatus::Ready,
                items: Arc::new(vec![]),
            }))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        let out = terminal.backend().to_string();

        assert!(out.contains("No experience entries found."));
        assert!(!out.contains("add new"));
    }
}
