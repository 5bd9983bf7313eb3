//! Shared rendering for the loading / error / empty states of a section.

use std::sync::Arc;

use folio_core::{Resource, SectionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

/// Draw the non-content states of `state` into `area`.
///
/// Returns the items when there is content for the caller to draw; nothing
/// is drawn in that case.
pub fn render_state<'a, T>(
    frame: &mut Frame,
    area: Rect,
    resource: Resource,
    state: SectionState<'a, T>,
    throbber: &ThrobberState,
    admin: bool,
) -> Option<&'a [Arc<T>]> {
    match state {
        SectionState::Loading => {
            let throbber_widget = Throbber::default()
                .label(resource.loading_message())
                .style(Style::default().fg(theme::HIGHLIGHT))
                .throbber_style(Style::default().fg(theme::ACCENT));
            frame.render_stateful_widget(throbber_widget, area, &mut throbber.clone());
            None
        }
        SectionState::Error(message) => {
            frame.render_widget(
                Paragraph::new(Span::styled(format!("Error: {message}"), theme::error()))
                    .wrap(Wrap { trim: true }),
                area,
            );
            None
        }
        SectionState::Empty => {
            let mut lines = vec![Line::from(Span::styled(
                resource.empty_message(),
                theme::body(),
            ))];
            if admin {
                lines.push(Line::from(""));
                lines.push(create_hint());
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
            None
        }
        SectionState::Content(items) => Some(items),
    }
}

/// The create trigger shown in admin mode.
pub fn create_hint() -> Line<'static> {
    Line::from(vec![
        Span::styled("n ", theme::key_hint_key()),
        Span::styled("add new", theme::key_hint()),
    ])
}

/// Key hints for a section block title: create everywhere it is offered,
/// delete only when there is something to select.
pub fn admin_hints<T>(state: &SectionState<'_, T>) -> Line<'static> {
    let mut spans = Vec::new();
    if state.offers_create() {
        spans.push(Span::styled(" n ", theme::key_hint_key()));
        spans.push(Span::styled("add", theme::key_hint()));
    }
    if matches!(state, SectionState::Content(_)) {
        spans.push(Span::styled("  d ", theme::key_hint_key()));
        spans.push(Span::styled("delete ", theme::key_hint()));
    }
    Line::from(spans)
}
