//! Projects screen: project list with the selected project's details.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use folio_core::{DeleteTarget, Mutation, Project, ProjectDraft, Resource};
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

pub struct ProjectsScreen {
    pane: ListPane<Project, ProjectDraft>,
}

impl ProjectsScreen {
    pub fn new(admin: bool) -> Self {
        Self {
            pane: ListPane::new(Resource::Projects, DeleteTarget::Project, admin),
        }
    }
}

fn link_line<'a>(label: &'a str, url: Option<&'a str>) -> Option<Line<'a>> {
    url.map(|url| {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), theme::key_hint()),
            Span::styled(url, theme::link()),
        ])
    })
}

fn detail(project: &Project) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(project.title.as_str(), theme::heading())),
        Line::from(""),
        Line::from(Span::styled(project.description.as_str(), theme::body())),
    ];
    if !project.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(tag_line(&project.tags));
    }
    let links: Vec<Line> = [
        link_line("Live", project.live_url.as_deref()),
        link_line("Code", project.github_url.as_deref()),
        link_line("Image", project.image.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !links.is_empty() {
        lines.push(Line::from(""));
        lines.extend(links);
    }
    lines
}

impl Component for ProjectsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(self.pane.handle_key(key))
    }

    fn handle_paste(&mut self, text: &str) {
        self.pane.paste(text);
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ProjectsUpdated(snapshot) => self.pane.set_snapshot(snapshot.clone()),
            Action::MutationFinished {
                mutation: Mutation::CreateProject(_),
                result,
            } => self.pane.complete(result.is_ok()),
            Action::Tick => self.pane.tick(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = section_block("Featured Projects", self.pane.hints(), true);
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
                Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                    .areas(body);

            let rows: Vec<ListItem> = items
                .iter()
                .map(|project| {
                    let mark = if project.featured { "★ " } else { "  " };
                    ListItem::new(Line::from(vec![
                        Span::styled(mark, theme::tag()),
                        Span::styled(project.title.clone(), theme::body()),
                    ]))
                })
                .collect();
            let list = List::new(rows)
                .highlight_style(theme::selected())
                .highlight_symbol("▌ ");
            let mut state = ListState::default().with_selected(Some(self.pane.selected()));
            frame.render_stateful_widget(list, list_area, &mut state);

            if let Some(project) = self.pane.selected_item() {
                frame.render_widget(
                    Paragraph::new(detail(project))
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
            self.pane.render_form(frame, form_area, "New project");
        }
    }

    fn captures_input(&self) -> bool {
        self.pane.editing()
    }

    fn resources(&self) -> &'static [Resource] {
        &[Resource::Projects]
    }
}
