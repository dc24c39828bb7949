//! Terminal input and UI ticks, and the key map for the tracker
//!
//! Input is read on a blocking task and ticks come from a separate async
//! task; both feed one channel that the app loop drains. Key presses are
//! then translated into [`Command`] (outside forms) or [`FormKey`] (inside
//! a modal form) before `App` acts on them.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// UI tick rate (toast expiry, spinner animation)
pub const UI_TICK_RATE: Duration = Duration::from_millis(250);

/// How long the reader waits for input before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Merges terminal input and UI ticks into one stream
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    ticker: JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(UI_TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        // The reader exits on its own once the receiver is dropped
        let input_tx = tx.clone();
        tokio::task::spawn_blocking(move || read_terminal(input_tx));

        let ticker = tokio::spawn(async move {
            let mut ticks = interval(tick_rate);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if tx.send(AppEvent::Tick).await.is_err() {
                    break;
                }
            }
        });

        Self { rx, ticker }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

fn read_terminal(tx: mpsc::Sender<AppEvent>) {
    while !tx.is_closed() {
        match event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "terminal poll failed");
                break;
            }
        }

        let app_event = match event::read() {
            Ok(evt) => translate(evt),
            Err(e) => {
                tracing::warn!(error = %e, "terminal read failed");
                break;
            }
        };

        if let Some(app_event) = app_event {
            if tx.blocking_send(app_event).is_err() {
                break;
            }
        }
    }
}

fn translate(evt: CrosstermEvent) -> Option<AppEvent> {
    match evt {
        // Windows reports releases too
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// App-wide actions available whenever no form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Esc: hide the visible toast
    Dismiss,
    Help,
    NextTab,
    PreviousTab,
    /// Zero-based tab index from the digit keys
    SelectTab(usize),
    ToggleDarkMode,
    Refresh,
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Esc => Some(Command::Dismiss),
            KeyCode::Char('?') => Some(Command::Help),
            KeyCode::Tab => Some(Command::NextTab),
            KeyCode::BackTab => Some(Command::PreviousTab),
            KeyCode::Char(c @ '1'..='4') => Some(Command::SelectTab(c as usize - '1' as usize)),
            KeyCode::Char('d') => Some(Command::ToggleDarkMode),
            KeyCode::Char('r') => Some(Command::Refresh),
            _ => None,
        }
    }
}

/// Keys while a modal form has focus; everything printable is text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    /// Esc: close, keeping the typed values
    Close,
    /// Ctrl+S
    Submit,
    /// Enter: next field, or submit on the last one
    Advance,
    NextField,
    PreviousField,
    Erase,
    Type(char),
}

impl FormKey {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Some(FormKey::Submit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(FormKey::Close),
            KeyCode::Enter => Some(FormKey::Advance),
            KeyCode::Tab | KeyCode::Down => Some(FormKey::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(FormKey::PreviousField),
            KeyCode::Backspace => Some(FormKey::Erase),
            KeyCode::Char(c) => Some(FormKey::Type(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_commands() {
        assert_eq!(Command::from_key(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_key(&ctrl('c')), Some(Command::Quit));
        assert_eq!(Command::from_key(&key(KeyCode::Esc)), Some(Command::Dismiss));
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('3'))),
            Some(Command::SelectTab(2))
        );
        assert_eq!(Command::from_key(&key(KeyCode::Char('5'))), None);
        assert_eq!(Command::from_key(&key(KeyCode::Char('j'))), None);
        assert_eq!(Command::from_key(&ctrl('s')), None);
    }

    #[test]
    fn test_form_keys_treat_letters_as_text() {
        assert_eq!(FormKey::from_key(&key(KeyCode::Char('q'))), Some(FormKey::Type('q')));
        assert_eq!(FormKey::from_key(&key(KeyCode::Char('d'))), Some(FormKey::Type('d')));
        assert_eq!(FormKey::from_key(&ctrl('s')), Some(FormKey::Submit));
        assert_eq!(FormKey::from_key(&ctrl('c')), None);
        assert_eq!(FormKey::from_key(&key(KeyCode::Esc)), Some(FormKey::Close));
        assert_eq!(FormKey::from_key(&key(KeyCode::Enter)), Some(FormKey::Advance));
    }

    #[test]
    fn test_key_releases_are_dropped() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(translate(CrosstermEvent::Key(release)).is_none());
        assert!(matches!(
            translate(CrosstermEvent::Key(key(KeyCode::Char('q')))),
            Some(AppEvent::Key(_))
        ));
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
    }
}
