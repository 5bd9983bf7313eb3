//! Hero screen: owner intro and social links.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use folio_config::OwnerConfig;
use folio_core::{DeleteTarget, Mutation, Resource, SocialLink, SocialLinkDraft};
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
use crate::widgets::{section, section_block};

pub struct HeroScreen {
    owner: OwnerConfig,
    links: ListPane<SocialLink, SocialLinkDraft>,
}

impl HeroScreen {
    pub fn new(owner: OwnerConfig, admin: bool) -> Self {
        Self {
            owner,
            links: ListPane::new(Resource::SocialLinks, DeleteTarget::SocialLink, admin),
        }
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(&self.owner.name, theme::heading())),
            Line::from(Span::styled(&self.owner.headline, theme::title_style())),
            Line::from(""),
            Line::from(Span::styled(&self.owner.summary, theme::body())),
        ];
        if let Some(cv) = &self.owner.cv {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("CV  ", theme::key_hint()),
                Span::styled(cv, theme::link()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_links(&self, frame: &mut Frame, area: Rect) {
        let block = section_block("Links", self.links.hints(), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (list_area, form_area) = self.links.layout(inner);
        let state = self.links.snapshot().section();
        if let Some(items) = section::render_state(
            frame,
            list_area,
            self.links.resource(),
            state,
            self.links.throbber(),
            self.links.is_admin(),
        ) {
            let rows: Vec<ListItem> = items
                .iter()
                .map(|link| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{}  ", link.icon().glyph()), theme::heading()),
                        Span::styled(format!("{:<12}", link.platform), theme::body()),
                        Span::styled(link.url.clone(), theme::link()),
                    ]))
                })
                .collect();
            let list = List::new(rows).highlight_style(theme::selected());
            let mut list_state = ListState::default().with_selected(Some(self.links.selected()));
            frame.render_stateful_widget(list, list_area, &mut list_state);
        }

        if let Some(form_area) = form_area {
            self.links.render_form(frame, form_area, "New link");
        }
    }
}

impl Component for HeroScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(self.links.handle_key(key))
    }

    fn handle_paste(&mut self, text: &str) {
        self.links.paste(text);
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SocialLinksUpdated(snapshot) => self.links.set_snapshot(snapshot.clone()),
            Action::MutationFinished {
                mutation: Mutation::CreateSocialLink(_),
                result,
            } => self.links.complete(result.is_ok()),
            Action::Tick => self.links.tick(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [intro, links] =
            Layout::vertical([Constraint::Length(8), Constraint::Min(4)]).areas(area);
        self.render_intro(frame, intro);
        self.render_links(frame, links);
    }

    fn captures_input(&self) -> bool {
        self.links.editing()
    }

    fn resources(&self) -> &'static [Resource] {
        &[Resource::SocialLinks]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use folio_core::{EntityId, SyncSnapshot, SyncStatus};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(screen: &HeroScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn links_render_with_resolved_glyphs() {
        let mut screen = HeroScreen::new(OwnerConfig::default(), false);
        let link = |id, platform: &str| {
            Arc::new(SocialLink {
                id: EntityId::new(id),
                platform: platform.into(),
                url: format!("https://{platform}.example"),
                icon_name: None,
                order_index: 0,
            })
        };
        screen
            .update(&Action::SocialLinksUpdated(SyncSnapshot {
                status: SyncStatus::Ready,
                items: Arc::new(vec![link(1, "LinkedIn"), link(2, "mastodon")]),
            }))
            .unwrap();

        let out = render(&screen);
        assert!(out.contains("Software Engineer & Creative Developer"));
        assert!(out.contains("\u{f0e1}  LinkedIn"));
        // Unknown platforms fall back to the GitHub glyph.
        assert!(out.contains("\u{f09b}  mastodon"));
    }

    #[test]
    fn failed_read_shows_the_error_not_the_empty_copy() {
        let mut screen = HeroScreen::new(OwnerConfig::default(), true);
        screen
            .update(&Action::SocialLinksUpdated(SyncSnapshot {
                status: SyncStatus::Failed("Network error".into()),
                items: Arc::new(vec![]),
            }))
            .unwrap();

        let out = render(&screen);
        assert!(out.contains("Error: Network error"));
        assert!(!out.contains(Resource::SocialLinks.empty_message()));
    }
}
