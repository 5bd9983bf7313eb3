//! Compact form widget: one line per field, a submit button, and an optional
//! inline error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::{DraftValues, FieldKind, FormError, FormField, Mutation};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::action::{Action, Notification};
use crate::theme;

const LABEL_WIDTH: usize = 14;

/// What a key press did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Submit,
    Close,
    Edited,
    Ignored,
}

/// Apply a key press to the focused field.
pub fn handle_key(draft: &mut DraftValues, key: KeyEvent) -> FormKey {
    match key.code {
        KeyCode::Enter => FormKey::Submit,
        KeyCode::Esc => FormKey::Close,
        KeyCode::Tab | KeyCode::Down => {
            draft.focus_next();
            FormKey::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            draft.focus_prev();
            FormKey::Edited
        }
        KeyCode::Backspace => {
            draft.backspace();
            FormKey::Edited
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            draft.insert_char(c);
            FormKey::Edited
        }
        _ => FormKey::Ignored,
    }
}

/// Turn a form submission into the action that sends it. Validation
/// failures surface as a warning toast; a submit already in flight is
/// ignored.
pub fn submitted<P: Into<Mutation>>(result: Result<P, FormError>) -> Option<Action> {
    match result {
        Ok(payload) => Some(Action::Execute(payload.into())),
        Err(FormError::Busy) => None,
        Err(e) => Some(Action::Notify(Notification::warning(e.to_string()))),
    }
}

/// Insert pasted text into the focused field. Line breaks become spaces.
pub fn paste(draft: &mut DraftValues, text: &str) {
    for c in text.chars() {
        draft.insert_char(if c.is_control() { ' ' } else { c });
    }
}

pub struct FormView<'a> {
    pub title: &'a str,
    pub draft: &'a DraftValues,
    pub button: &'a str,
    /// Submit control enabled.
    pub enabled: bool,
    /// Keyboard focus is in the form; shows the cursor.
    pub active: bool,
    pub error: Option<&'a str>,
}

impl FormView<'_> {
    /// Rows needed: borders, one per field, a spacer, the button, and the error.
    pub fn height(&self) -> u16 {
        let fields = u16::try_from(self.draft.fields().len()).unwrap_or(u16::MAX);
        fields.saturating_add(4 + u16::from(self.error.is_some()))
    }

    fn field_line<'b>(&self, index: usize, field: &FormField, value: &'b str) -> Line<'b> {
        let focused = self.active && index == self.draft.focused();
        let label = field.label;
        let marker = if field.required { "*" } else { " " };
        let label_style = if focused {
            Style::default().fg(theme::HIGHLIGHT)
        } else {
            theme::body()
        };

        let mut spans = vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::styled(format!("{marker} "), theme::error()),
        ];
        if value.is_empty() && !focused {
            let placeholder = match field.kind {
                FieldKind::Tags => "comma, separated",
                FieldKind::Email => "you@example.com",
                FieldKind::Text | FieldKind::LongText => "",
            };
            spans.push(Span::styled(placeholder, theme::key_hint()));
        } else {
            spans.push(Span::styled(value, Style::default().fg(theme::HIGHLIGHT)));
        }
        if focused {
            spans.push(Span::styled("\u{2588}", Style::default().fg(theme::HIGHLIGHT)));
        }
        Line::from(spans)
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.active {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let mut lines: Vec<Line> = self
            .draft
            .entries()
            .enumerate()
            .map(|(i, (field, value))| self.field_line(i, field, value))
            .collect();

        lines.push(Line::from(""));
        let button_style = if self.enabled {
            theme::heading()
        } else {
            theme::key_hint().add_modifier(Modifier::DIM)
        };
        let mut button = vec![Span::styled(format!("[ {} ]", self.button), button_style)];
        if self.active {
            button.push(Span::styled(
                "   Enter submit  Tab next  Esc close",
                theme::key_hint(),
            ));
        }
        lines.push(Line::from(button));

        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(error, theme::error())));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
