//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};

use crate::core::config::Config;
use crate::core::random::RandomSource;
use crate::core::store::FitnessStore;
use crate::core::toast::{ToastKind, ToastSlot};
use crate::error::{FitError, Result};
use crate::tui::event::{AppEvent, Command, EventHandler, FormKey};
use crate::tui::form::FormState;
use crate::tui::theme::{Theme, ThemeMode};
use crate::tui::ui;

/// Message type for timer task results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncMessage {
    /// Periodic simulated sensor reading is due
    HealthTick,
    /// The simulated refresh delay has elapsed
    RefreshElapsed,
}

/// Tabs in the bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Workouts,
    Schedule,
    Health,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Workouts, Tab::Schedule, Tab::Health, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Workouts => "Workouts",
            Tab::Schedule => "Schedule",
            Tab::Health => "Health",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Workouts => "🏋",
            Tab::Schedule => "📅",
            Tab::Health => "❤",
            Tab::Profile => "👤",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Open modal form, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddWorkout,
    ScheduleWorkout,
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::AddWorkout => "Add New Workout",
            Modal::ScheduleWorkout => "Schedule Workout",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Modal::AddWorkout => "Add Workout",
            Modal::ScheduleWorkout => "Schedule Workout",
        }
    }
}

/// Rows on the Profile tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSetting {
    DarkMode,
    Notifications,
    HelpSupport,
}

impl ProfileSetting {
    pub const ALL: [ProfileSetting; 3] = [
        ProfileSetting::DarkMode,
        ProfileSetting::Notifications,
        ProfileSetting::HelpSupport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileSetting::DarkMode => "Dark Mode",
            ProfileSetting::Notifications => "Notifications",
            ProfileSetting::HelpSupport => "Help & Support",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileSetting::DarkMode => "☾",
            ProfileSetting::Notifications => "🔔",
            ProfileSetting::HelpSupport => "?",
        }
    }
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }

    /// Grow to `total` items and select the last one
    pub fn select_last(&mut self, total: usize) {
        self.total = total;
        self.selected = total.saturating_sub(1);
    }
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Active tab
    pub current_tab: Tab,
    /// Workout log, schedule and health snapshot
    pub store: FitnessStore,
    /// Single toast slot
    pub toast: ToastSlot,
    /// Current appearance
    pub theme: Theme,
    /// Loaded configuration (profile details, timings)
    pub config: Config,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Tick counter for spinner animation
    pub tick_counter: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Modal forms
    // ─────────────────────────────────────────────────────────────────────────
    /// Open modal, if any
    pub active_modal: Option<Modal>,
    /// "Add Workout" field buffers
    pub workout_form: FormState,
    /// "Schedule Workout" field buffers
    pub schedule_form: FormState,

    // ─────────────────────────────────────────────────────────────────────────
    // Selections
    // ─────────────────────────────────────────────────────────────────────────
    pub workout_selection: ListState,
    pub schedule_selection: ListState,
    pub settings_selection: ListState,

    // ─────────────────────────────────────────────────────────────────────────
    // Async communication
    // ─────────────────────────────────────────────────────────────────────────
    /// Sender for async messages (cloned into tasks)
    pub async_tx: mpsc::Sender<AsyncMessage>,
    /// Receiver for async messages
    pub async_rx: mpsc::Receiver<AsyncMessage>,
    /// Periodic health tick task
    health_ticker: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: Config, rng: Box<dyn RandomSource>) -> Self {
        let (async_tx, async_rx) = mpsc::channel(32);
        let store = FitnessStore::seeded(rng);
        let workout_selection = ListState::new(store.workouts().len());
        let schedule_selection = ListState::new(store.schedule().len());

        Self {
            running: true,
            current_tab: Tab::Workouts,
            toast: ToastSlot::new(config.toast_duration()),
            theme: Theme::new(ThemeMode::from_dark(config.dark_mode)),
            store,
            config,
            show_help: false,
            tick_counter: 0,
            active_modal: None,
            workout_form: FormState::workout(),
            schedule_form: FormState::schedule(),
            workout_selection,
            schedule_selection,
            settings_selection: ListState::new(ProfileSetting::ALL.len()),
            async_tx,
            async_rx,
            health_ticker: None,
        }
    }

    /// Force dark mode regardless of the configured default
    pub fn with_dark_mode(mut self) -> Self {
        self.theme = Theme::new(ThemeMode::Dark);
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| FitError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| FitError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| FitError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| FitError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| FitError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| FitError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new();
        self.spawn_health_ticker();

        let result = self.event_loop(&mut terminal, &mut events).await;

        self.stop_health_ticker();
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            // Draw the UI
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| FitError::Terminal(e.to_string()))?;

            // Check for async messages (non-blocking)
            while let Ok(msg) = self.async_rx.try_recv() {
                self.handle_async_message(msg);
            }

            // Handle events
            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                    AppEvent::Tick => self.on_tick(Instant::now()),
                }
            }
        }
        Ok(())
    }

    /// Periodic UI housekeeping
    pub fn on_tick(&mut self, now: Instant) {
        self.tick_counter = self.tick_counter.wrapping_add(1);
        self.toast.expire(now);
    }

    /// Handle async message from timer tasks
    pub fn handle_async_message(&mut self, msg: AsyncMessage) {
        match msg {
            AsyncMessage::HealthTick => self.store.tick_health(),
            AsyncMessage::RefreshElapsed => self.complete_refresh(),
        }
    }

    /// Spawn the repeating simulated sensor tick
    pub fn spawn_health_ticker(&mut self) {
        self.stop_health_ticker();

        let period = self.config.health_tick();
        let tx = self.async_tx.clone();

        self.health_ticker = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.send(AsyncMessage::HealthTick).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_health_ticker(&mut self) {
        if let Some(task) = self.health_ticker.take() {
            task.abort();
        }
    }

    /// Start a simulated health refresh unless one is already pending.
    /// Returns whether a refresh was started.
    pub fn request_refresh(&mut self) -> bool {
        if !self.store.begin_refresh() {
            self.show_toast("Refresh already in progress", ToastKind::Warning);
            return false;
        }

        let delay = self.config.refresh_delay();
        let tx = self.async_tx.clone();

        tokio::spawn(async move {
            sleep(delay).await;
            // The app may have quit in the meantime
            let _ = tx.send(AsyncMessage::RefreshElapsed).await;
        });
        true
    }

    fn complete_refresh(&mut self) {
        if self.store.finish_refresh().is_some() {
            self.show_toast("Health data refreshed!", ToastKind::Success);
        }
    }

    /// Show a toast, replacing any visible one
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast.show(message, kind, Instant::now());
    }

    /// Validate the "Add Workout" form and log the workout
    pub fn submit_workout_form(&mut self) {
        let input = self.workout_form.to_workout_input();
        match self.store.add_workout(&input) {
            Ok(_) => {
                self.workout_selection
                    .select_last(self.store.workouts().len());
                self.active_modal = None;
                self.workout_form.clear();
                self.show_toast("Workout added successfully!", ToastKind::Success);
            }
            Err(e) => self.show_toast(e.to_string(), ToastKind::Error),
        }
    }

    /// Validate the "Schedule Workout" form and add the entry
    pub fn submit_schedule_form(&mut self) {
        let input = self.schedule_form.to_schedule_input();
        match self.store.schedule_workout(&input) {
            Ok(_) => {
                self.schedule_selection
                    .select_last(self.store.schedule().len());
                self.active_modal = None;
                self.schedule_form.clear();
                self.show_toast("Workout scheduled successfully!", ToastKind::Success);
            }
            Err(e) => self.show_toast(e.to_string(), ToastKind::Error),
        }
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.active_modal = Some(modal);
    }

    /// Close the modal; typed values are kept for next time
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Form backing the open modal
    pub fn active_form(&self) -> Option<&FormState> {
        match self.active_modal? {
            Modal::AddWorkout => Some(&self.workout_form),
            Modal::ScheduleWorkout => Some(&self.schedule_form),
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.active_modal? {
            Modal::AddWorkout => Some(&mut self.workout_form),
            Modal::ScheduleWorkout => Some(&mut self.schedule_form),
        }
    }

    fn submit_active_form(&mut self) {
        match self.active_modal {
            Some(Modal::AddWorkout) => self.submit_workout_form(),
            Some(Modal::ScheduleWorkout) => self.submit_schedule_form(),
            None => {}
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
        tracing::debug!(dark = self.theme.is_dark(), "appearance toggled");
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Modal forms capture all input
        if self.active_modal.is_some() {
            self.handle_modal_key(key);
            return;
        }

        if let Some(command) = Command::from_key(&key) {
            self.run_command(command);
            return;
        }

        // Tab-specific handlers
        match self.current_tab {
            Tab::Workouts => self.handle_workouts_key(key),
            Tab::Schedule => self.handle_schedule_key(key),
            Tab::Health => {}
            Tab::Profile => self.handle_profile_key(key),
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::Dismiss => self.toast.hide(),
            Command::Help => self.show_help = true,
            Command::NextTab => self.select_tab(self.current_tab.next()),
            Command::PreviousTab => self.select_tab(self.current_tab.previous()),
            Command::SelectTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    self.select_tab(tab);
                }
            }
            Command::ToggleDarkMode => self.toggle_dark_mode(),
            Command::Refresh => {
                self.request_refresh();
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(form_key) = FormKey::from_key(&key) else {
            return;
        };

        match form_key {
            FormKey::Close => self.close_modal(),
            FormKey::Submit => self.submit_active_form(),
            FormKey::Advance => {
                let last = self.active_form().is_some_and(FormState::is_last_field);
                if last {
                    self.submit_active_form();
                } else if let Some(form) = self.active_form_mut() {
                    form.focus_next();
                }
            }
            FormKey::NextField => {
                if let Some(form) = self.active_form_mut() {
                    form.focus_next();
                }
            }
            FormKey::PreviousField => {
                if let Some(form) = self.active_form_mut() {
                    form.focus_previous();
                }
            }
            FormKey::Erase => {
                if let Some(form) = self.active_form_mut() {
                    form.backspace();
                }
            }
            FormKey::Type(c) => {
                if let Some(form) = self.active_form_mut() {
                    form.input(c);
                }
            }
        }
    }

    fn handle_workouts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.workout_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.workout_selection.previous(),
            KeyCode::Char('n') | KeyCode::Enter => self.open_modal(Modal::AddWorkout),
            _ => {}
        }
    }

    fn handle_schedule_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.schedule_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.schedule_selection.previous(),
            KeyCode::Char('n') | KeyCode::Enter => self.open_modal(Modal::ScheduleWorkout),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.settings_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.settings_selection.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(setting) = ProfileSetting::ALL.get(self.settings_selection.selected) {
                    self.activate_setting(*setting);
                }
            }
            _ => {}
        }
    }

    fn activate_setting(&mut self, setting: ProfileSetting) {
        match setting {
            ProfileSetting::DarkMode => self.toggle_dark_mode(),
            ProfileSetting::Notifications => {
                self.show_toast("No new notifications", ToastKind::Info)
            }
            ProfileSetting::HelpSupport => self.show_help = true,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_health_ticker();
    }
}
