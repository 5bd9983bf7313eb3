//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use folio_config::OwnerConfig;
use folio_core::{ConfirmGate, Mutation, Portfolio};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::centered;

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Content store reachability as seen by the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Unreachable(String),
}

/// Top-level application state and event loop.
pub struct App {
    portfolio: Portfolio,
    active_screen: ScreenId,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    connection_status: ConnectionStatus,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
    /// Delete awaiting y/n. Blocks other input while pending.
    confirm: ConfirmGate<Mutation>,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(portfolio: Portfolio, owner: OwnerConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens = create_screens(portfolio.is_admin(), &owner)
            .into_iter()
            .collect();

        Self {
            portfolio,
            active_screen: ScreenId::default(),
            screens,
            running: true,
            connection_status: ConnectionStatus::default(),
            help_visible: false,
            action_tx,
            action_rx,
            data_cancel: CancellationToken::new(),
            confirm: ConfirmGate::new(),
            notification: None,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let portfolio = self.portfolio.clone();
        let cancel = self.data_cancel.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            crate::data_bridge::spawn_data_bridge(portfolio, tx, cancel).await;
        });

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Paste(text) => self.handle_paste(&text),
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    fn active(&self) -> Option<&dyn Component> {
        self.screens.get(&self.active_screen).map(Box::as_ref)
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');

        // Confirmation dialog captures all input
        if self.confirm.is_pending() {
            return Ok(match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        // An open form owns the keyboard
        if self.active().is_some_and(|s| s.captures_input()) {
            if ctrl_c {
                return Ok(Some(Action::Quit));
            }
            if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                return screen.handle_key_event(key);
            }
            return Ok(None);
        }

        if ctrl_c {
            return Ok(Some(Action::Quit));
        }
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                return Ok(Some(Action::Refresh(self.active_screen)));
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='6')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }
            (KeyModifiers::NONE, KeyCode::Esc) if self.notification.is_some() => {
                return Ok(Some(Action::DismissNotification));
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (_, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }
            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }
        Ok(None)
    }

    fn handle_paste(&mut self, text: &str) {
        if self.confirm.is_pending() || self.help_visible {
            return;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if screen.captures_input() {
                screen.handle_paste(text);
            }
        }
    }

    /// Process a single action: update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::Render | Action::Resize(..) => {}

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    self.active_screen = *target;
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Refresh(screen) => {
                let resources = self
                    .screens
                    .get(screen)
                    .map(|s| s.resources())
                    .unwrap_or_default();
                if resources.is_empty() {
                    return Ok(());
                }
                for &resource in resources {
                    let portfolio = self.portfolio.clone();
                    tokio::spawn(async move { portfolio.refresh(resource).await });
                }
                self.action_tx
                    .send(Action::Notify(Notification::info(format!("Refreshing {screen}"))))?;
            }

            Action::Connected => self.connection_status = ConnectionStatus::Connected,
            Action::Unreachable(reason) => {
                self.connection_status = ConnectionStatus::Unreachable(reason.clone());
            }

            Action::Execute(mutation) => self.execute(mutation.clone()),

            Action::RequestConfirm(mutation) => self.confirm.request(mutation.clone()),
            Action::ConfirmYes => {
                if let Some(mutation) = self.confirm.confirm() {
                    self.action_tx.send(Action::Execute(mutation))?;
                }
            }
            Action::ConfirmNo => {
                if let Some(mutation) = self.confirm.pending() {
                    debug!(%mutation, "declined");
                }
                self.confirm.cancel();
            }

            Action::Notify(n) => self.notification = Some((n.clone(), Instant::now())),
            Action::DismissNotification => self.notification = None,

            broadcast if broadcast.is_broadcast() => {
                if let Action::Tick = broadcast {
                    if self
                        .notification
                        .as_ref()
                        .is_some_and(|(_, shown)| shown.elapsed() > NOTIFICATION_TTL)
                    {
                        self.notification = None;
                    }
                }
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(broadcast)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            other => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Send a mutation in the background. The outcome comes back as
    /// [`Action::MutationFinished`]; admin changes also raise a toast.
    fn execute(&self, mutation: Mutation) {
        let portfolio = self.portfolio.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = portfolio.execute(mutation.clone()).await;
            if result.is_ok() {
                if let Some(message) = success_message(&mutation) {
                    let _ = tx.send(Action::Notify(Notification::success(message)));
                }
            }
            let _ = tx.send(Action::MutationFinished { mutation, result });
        });
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [content_area, tab_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(screen) = self.active() {
            screen.render(frame, content_area);
        }
        self.render_tab_bar(frame, tab_area);
        self.render_status_bar(frame, status_area);

        // Overlays, last is topmost
        if let Some((notif, _)) = &self.notification {
            render_notification(frame, area, notif);
        }
        if let Some(mutation) = self.confirm.pending() {
            render_confirm_dialog(frame, area, mutation);
        }
        if self.help_visible {
            render_help_overlay(frame, area, self.portfolio.is_admin());
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(format!(" {} {} ", id.number(), id.label()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let connection = match &self.connection_status {
            ConnectionStatus::Connecting => {
                Span::styled("◐ connecting", Style::default().fg(theme::WARNING))
            }
            ConnectionStatus::Connected => {
                Span::styled("● connected", Style::default().fg(theme::SUCCESS))
            }
            ConnectionStatus::Unreachable(reason) => Span::styled(
                format!("○ unreachable: {reason}"),
                Style::default().fg(theme::ERROR),
            ),
        };

        let mut spans = vec![Span::raw(" "), connection];
        if self.portfolio.is_admin() {
            spans.push(Span::styled("  ADMIN", theme::heading()));
        }
        spans.push(Span::styled(" │ ? help  r refresh  q quit", theme::key_hint()));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Toast text for a successful mutation. Contact submissions confirm
/// inline on the form instead.
fn success_message(mutation: &Mutation) -> Option<String> {
    match mutation {
        Mutation::CreateContact(_) => None,
        Mutation::Delete { target, .. } => Some(format!("Deleted {}", target.noun())),
        create => Some(format!("{} saved", create.resource().title())),
    }
}

fn render_confirm_dialog(frame: &mut Frame, area: Rect, mutation: &Mutation) {
    let prompt = match mutation {
        Mutation::Delete { target, .. } => target.prompt(),
        _ => "Are you sure?",
    };
    let dialog_area = centered(area, 50, 5);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::WARNING))
        .style(Style::default().bg(theme::BG_DARK));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let text = vec![
        Line::from(Span::styled(format!("  {prompt}"), theme::body())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  y ", theme::key_hint_key()),
            Span::styled("confirm    ", theme::key_hint()),
            Span::styled("n ", theme::key_hint_key()),
            Span::styled("cancel", theme::key_hint()),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}

/// Toast in the bottom-right corner, above the status bar.
fn render_notification(frame: &mut Frame, area: Rect, notif: &Notification) {
    let msg_len = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    let width = msg_len.saturating_add(6).clamp(20, 60).min(area.width);
    let height = 3u16.min(area.height);
    let x = area.width.saturating_sub(width + 1);
    let y = area.height.saturating_sub(height + 2);
    let toast_area = Rect::new(area.x + x, area.y + y, width, height);

    let (color, icon) = match notif.level {
        NotificationLevel::Success => (theme::SUCCESS, "✓"),
        NotificationLevel::Warning => (theme::WARNING, "!"),
        NotificationLevel::Info => (theme::HIGHLIGHT, "·"),
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme::BG_DARK));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(color)),
        Span::styled(&notif.message, theme::body()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn help_row(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<10}"), theme::key_hint_key()),
        Span::styled(what, theme::key_hint()),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect, admin: bool) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", theme::title_style())),
        help_row("1-6", "Jump to section"),
        help_row("Tab", "Next section"),
        help_row("j/k ↑/↓", "Move selection"),
        help_row("h/l", "Switch pane"),
        help_row("i Enter", "Write a message (Contact)"),
        help_row("r", "Refresh section"),
        help_row("q", "Quit"),
    ];
    if admin {
        lines.extend([
            Line::from(""),
            Line::from(Span::styled("  Admin", theme::title_style())),
            help_row("n", "New entry"),
            help_row("s", "New skill (Skills)"),
            help_row("d", "Delete selected"),
        ]);
    }
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("  Forms", theme::title_style())),
        help_row("Tab/↓ ↑", "Next / previous field"),
        help_row("Enter", "Submit"),
        help_row("Esc", "Close"),
        Line::from(""),
        Line::from(Span::styled("  Esc or ? to close", theme::key_hint())),
    ]);

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let help_area = centered(area, 56, height);
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));
    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);
    frame.render_widget(Paragraph::new(lines), inner);
}
