//! Horizontal sub-tab bar for screens with more than one collection.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// The active tab is bracketed and bold; the rest are dim.
pub fn render_sub_tabs<'a>(labels: &[&'a str], active_index: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2 + 1);

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }
        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                theme::tab_active().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(*label, theme::tab_inactive()));
        }
    }
    spans.push(Span::styled("   h/l switch", theme::key_hint()));

    Line::from(spans)
}
