//! About screen: paragraphs on the left, headline stats on the right.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{AboutDraft, AboutSection, DeleteTarget, Mutation, Resource, Stat, StatDraft};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::pane::ListPane;
use crate::widgets::sub_tabs::render_sub_tabs;
use crate::widgets::{section, section_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Paragraphs,
    Stats,
}

pub struct AboutScreen {
    paragraphs: ListPane<AboutSection, AboutDraft>,
    stats: ListPane<Stat, StatDraft>,
    focus: Focus,
}

impl AboutScreen {
    pub fn new(admin: bool) -> Self {
        Self {
            paragraphs: ListPane::new(Resource::About, DeleteTarget::About, admin),
            stats: ListPane::new(Resource::Stats, DeleteTarget::Stat, admin),
            focus: Focus::Paragraphs,
        }
    }

    fn render_paragraphs(&self, frame: &mut Frame, area: Rect) {
        let pane = &self.paragraphs;
        let block = section_block("About Me", pane.hints(), self.focus == Focus::Paragraphs);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (body, form_area) = pane.layout(inner);
        if let Some(items) = section::render_state(
            frame,
            body,
            pane.resource(),
            pane.snapshot().section(),
            pane.throbber(),
            pane.is_admin(),
        ) {
            let mut lines = Vec::with_capacity(items.len() * 2);
            for (i, paragraph) in items.iter().enumerate() {
                let style = if pane.is_admin() && i == pane.selected() {
                    theme::selected()
                } else {
                    theme::body()
                };
                lines.push(Line::from(Span::styled(paragraph.content.clone(), style)));
                lines.push(Line::from(""));
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
        }

        if let Some(form_area) = form_area {
            pane.render_form(frame, form_area, "New paragraph");
        }
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let pane = &self.stats;
        let block = section_block("Stats", pane.hints(), self.focus == Focus::Stats);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (body, form_area) = pane.layout(inner);
        if let Some(items) = section::render_state(
            frame,
            body,
            pane.resource(),
            pane.snapshot().section(),
            pane.throbber(),
            pane.is_admin(),
        ) {
            let rows: Vec<ListItem> = items
                .iter()
                .map(|stat| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:>6}  ", stat.number), theme::heading()),
                        Span::styled(stat.label.clone(), theme::body()),
                    ]))
                })
                .collect();
            let list = List::new(rows).highlight_style(theme::selected());
            let mut state = ListState::default().with_selected(Some(pane.selected()));
            frame.render_stateful_widget(list, body, &mut state);
        }

        if let Some(form_area) = form_area {
            pane.render_form(frame, form_area, "New stat");
        }
    }
}

impl Component for AboutScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.captures_input() {
            match key.code {
                KeyCode::Char('h') | KeyCode::Left => {
                    self.focus = Focus::Paragraphs;
                    return Ok(None);
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.focus = Focus::Stats;
                    return Ok(None);
                }
                _ => {}
            }
        }
        Ok(match self.focus {
            Focus::Paragraphs => self.paragraphs.handle_key(key),
            Focus::Stats => self.stats.handle_key(key),
        })
    }

    fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Paragraphs => self.paragraphs.paste(text),
            Focus::Stats => self.stats.paste(text),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::AboutUpdated(snapshot) => self.paragraphs.set_snapshot(snapshot.clone()),
            Action::StatsUpdated(snapshot) => self.stats.set_snapshot(snapshot.clone()),
            Action::MutationFinished { mutation, result } => match mutation {
                Mutation::CreateAbout(_) => self.paragraphs.complete(result.is_ok()),
                Mutation::CreateStat(_) => self.stats.complete(result.is_ok()),
                _ => {}
            },
            Action::Tick => {
                self.paragraphs.tick();
                self.stats.tick();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [tabs, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
        let active = match self.focus {
            Focus::Paragraphs => 0,
            Focus::Stats => 1,
        };
        frame.render_widget(Paragraph::new(render_sub_tabs(&["About", "Stats"], active)), tabs);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(body);
        self.render_paragraphs(frame, left);
        self.render_stats(frame, right);
    }

    fn captures_input(&self) -> bool {
        self.paragraphs.editing() || self.stats.editing()
    }

    fn resources(&self) -> &'static [Resource] {
        &[Resource::About, Resource::Stats]
    }
}
