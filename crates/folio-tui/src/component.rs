//! Component trait implemented by every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use folio_core::Resource;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// Lifecycle: (`handle_key_event` | `handle_paste` | `update` | `render`)*
pub trait Component: Send {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Pasted text, only delivered while [`captures_input`](Self::captures_input).
    fn handle_paste(&mut self, _text: &str) {}

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect);

    /// True while a form on this screen owns the keyboard; global keys
    /// (other than Ctrl+C) are suspended.
    fn captures_input(&self) -> bool {
        false
    }

    /// Collections this screen displays, re-read on `r`.
    fn resources(&self) -> &'static [Resource];
}
