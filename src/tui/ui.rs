//! Main UI renderer

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState as ViewState, Paragraph};

use crate::tui::app::{App, ListState, ProfileSetting, Tab};
use crate::tui::theme::Theme;
use crate::tui::widgets::modal::render_form_modal;
use crate::tui::widgets::{centered_rect, toast, Button, ButtonVariant, StatCard};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme;

    // Paint the background for the current mode
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Tab bar
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &theme);
    render_content(frame, chunks[1], app);
    render_tab_bar(frame, chunks[2], app);
    render_hints(frame, chunks[3], app);

    if let (Some(modal), Some(form)) = (app.active_modal, app.active_form()) {
        render_form_modal(frame, modal, form, &theme);
    }

    toast::render(frame, app.toast.current(), Instant::now());

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(" Fitness Tracker", theme.header())),
        Line::from(Span::styled(
            " Keep pushing! 🔥",
            Style::default().fg(Color::White),
        )),
    ];

    let header = Paragraph::new(lines).style(Style::default().bg(Theme::ACCENT));
    frame.render_widget(header, area);
}

/// Render the active tab
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let area = area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    match app.current_tab {
        Tab::Workouts => render_workouts_tab(frame, area, app),
        Tab::Schedule => render_schedule_tab(frame, area, app),
        Tab::Health => render_health_tab(frame, area, app),
        Tab::Profile => render_profile_tab(frame, area, app),
    }
}

/// Render the workouts tab: totals, today's list and the log button
fn render_workouts_tab(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Length(1), // Section title
            Constraint::Min(0),    // List
            Constraint::Length(3), // Button
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);

    frame.render_widget(
        StatCard::new("🔥", app.store.total_calories().to_string(), "Calories", theme)
            .accent(Theme::CALORIES),
        cards[0],
    );
    frame.render_widget(
        StatCard::new("⏱", app.store.total_minutes().to_string(), "Minutes", theme)
            .accent(Theme::MINUTES),
        cards[1],
    );
    frame.render_widget(
        StatCard::new("🏋", app.store.workouts().len().to_string(), "Workouts", theme)
            .accent(Theme::WORKOUTS),
        cards[2],
    );

    frame.render_widget(
        Paragraph::new(" Today's Workouts").style(theme.title()),
        chunks[1],
    );

    let palette = theme.palette();
    let items: Vec<ListItem> = app
        .store
        .workouts()
        .iter()
        .map(|workout| {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", workout.emoji),
                        Style::default().bg(palette.emoji_backdrop),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        workout.name.clone(),
                        theme.normal().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  ✓", Style::default().fg(Theme::SUCCESS)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "      ⏱ {} min   🔥 {} cal   · {}",
                        workout.duration_minutes,
                        workout.calories,
                        workout.logged_at.format("%H:%M")
                    ),
                    theme.muted(),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.surface()),
        )
        .highlight_style(Style::default().bg(palette.border));
    frame.render_stateful_widget(list, chunks[2], &mut view_state(&app.workout_selection));

    frame.render_widget(
        Button::new("+ Log New Workout").hint("n"),
        chunks[3],
    );
}

/// Scroll state for a list; ratatui keeps the selected row in view
fn view_state(selection: &ListState) -> ViewState {
    let selected = (selection.total > 0).then_some(selection.selected);
    ViewState::default().with_selected(selected)
}

/// Render the schedule tab
fn render_schedule_tab(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let palette = theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(" Scheduled Workouts").style(theme.title()),
        chunks[0],
    );

    let items: Vec<ListItem> = app
        .store
        .schedule()
        .iter()
        .map(|entry| {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.emoji),
                        Style::default().bg(palette.emoji_backdrop),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        entry.workout_name.clone(),
                        theme.normal().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  ›", theme.muted()),
                ]),
                Line::from(Span::styled(
                    format!("      📅 {}   ⏱ {}", entry.day, entry.time),
                    theme.muted(),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.surface()),
        )
        .highlight_style(Style::default().bg(palette.border));
    frame.render_stateful_widget(list, chunks[1], &mut view_state(&app.schedule_selection));

    frame.render_widget(
        Button::new("+ Schedule Workout").hint("n"),
        chunks[2],
    );
}

/// Render the simulated health snapshot
fn render_health_tab(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let stats = app.store.stats();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(" Today's Health").style(theme.title()),
        chunks[0],
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[2]);

    frame.render_widget(
        StatCard::new("👣", stats.steps.to_string(), "Steps", theme).accent(Theme::ACCENT),
        top[0],
    );
    frame.render_widget(
        StatCard::new("📍", format!("{:.1} km", stats.distance_km), "Distance", theme)
            .accent(Theme::MINUTES),
        top[1],
    );
    frame.render_widget(
        StatCard::new("❤", format!("{} bpm", stats.heart_rate_bpm), "Heart Rate", theme)
            .accent(Theme::CALORIES),
        top[2],
    );
    frame.render_widget(
        StatCard::new("⚡", stats.active_minutes.to_string(), "Active Minutes", theme)
            .accent(Theme::WARNING),
        bottom[0],
    );
    frame.render_widget(
        StatCard::new("🔥", stats.calories_burned.to_string(), "Calories Burned", theme)
            .accent(Theme::CALORIES),
        bottom[1],
    );
    frame.render_widget(
        StatCard::new("☾", format!("{:.1} h", stats.sleep_hours), "Sleep", theme)
            .accent(Theme::WORKOUTS),
        bottom[2],
    );

    let note = if app.store.is_refreshing() {
        " Syncing with your devices..."
    } else {
        " Readings update automatically every few seconds."
    };
    frame.render_widget(Paragraph::new(note).style(theme.muted()), chunks[3]);

    frame.render_widget(
        Button::new("⟳ Refresh")
            .hint("r")
            .variant(ButtonVariant::Outline)
            .loading(app.store.is_refreshing(), app.tick_counter),
        chunks[4],
    );
}

/// Render the profile card and settings rows
fn render_profile_tab(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let palette = theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let profile = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.config.initials()),
                Style::default()
                    .bg(Theme::ACCENT)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                app.config.profile_name.as_str(),
                theme.normal().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("      {}", app.config.profile_email),
            theme.muted(),
        )),
    ])
    .style(theme.surface())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(profile, chunks[0]);

    frame.render_widget(Paragraph::new(" Settings").style(theme.title()), chunks[2]);

    let items: Vec<ListItem> = ProfileSetting::ALL
        .iter()
        .enumerate()
        .map(|(i, setting)| {
            let selected = i == app.settings_selection.selected;
            let marker = if selected {
                Span::styled(" ▶ ", theme.selected())
            } else {
                Span::raw("   ")
            };
            let trailing = match setting {
                ProfileSetting::DarkMode => {
                    if theme.is_dark() {
                        Span::styled(" ON ●", Style::default().fg(Theme::SUCCESS))
                    } else {
                        Span::styled(" ○ OFF", Style::default().fg(palette.secondary_text))
                    }
                }
                _ => Span::styled(" ›", theme.muted()),
            };
            let line = Line::from(vec![
                marker,
                Span::styled(format!("{} ", setting.icon()), Style::default().fg(palette.icon)),
                Span::styled(format!("{:<18}", setting.label()), theme.normal()),
                trailing,
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Style::default().bg(palette.border))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .style(theme.surface()),
    );
    frame.render_widget(list, chunks[3]);
}

/// Render the bottom tab bar
fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let palette = theme.palette();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let active = *tab == app.current_tab;
        let color = if active {
            Theme::ACCENT
        } else {
            palette.secondary_text
        };
        let mut style = Style::default().fg(color);
        if active {
            style = style.add_modifier(Modifier::BOLD);
        }
        let label = Paragraph::new(vec![
            Line::from(Span::styled(tab.icon(), style)),
            Line::from(Span::styled(format!("{} {}", i + 1, tab.title()), style)),
        ])
        .alignment(Alignment::Center)
        .style(theme.surface())
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border()),
        );
        frame.render_widget(label, cells[i]);
    }
}

/// Render the key hint line
fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.active_modal.is_some() {
        " [Tab] Next  [Enter] Next/Submit  [Ctrl+S] Submit  [Esc] Close"
    } else {
        match app.current_tab {
            Tab::Workouts => " [n] Log workout  [j/k] Navigate  [1-4] Tabs  [d] Dark mode  [?] Help  [q] Quit",
            Tab::Schedule => " [n] Schedule  [j/k] Navigate  [1-4] Tabs  [d] Dark mode  [?] Help  [q] Quit",
            Tab::Health => " [r] Refresh  [1-4] Tabs  [d] Dark mode  [?] Help  [q] Quit",
            Tab::Profile => " [j/k] Navigate  [Enter] Select  [1-4] Tabs  [?] Help  [q] Quit",
        }
    };
    frame.render_widget(Paragraph::new(hints).style(app.theme.muted()), area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let popup_area = centered_rect((area.width / 5 * 3).max(44), 18, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.current_tab);

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Theme::ACCENT)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::WARNING)),
        )
        .style(app.theme.surface());

    frame.render_widget(help, popup_area);
}

/// Get help content for the current tab
fn get_help_content(tab: Tab) -> (&'static str, Vec<(&'static str, &'static str)>) {
    let mut keys = match tab {
        Tab::Workouts => vec![
            ("n / Enter", "Log a new workout"),
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
        ],
        Tab::Schedule => vec![
            ("n / Enter", "Schedule a workout"),
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
        ],
        Tab::Health => vec![("r", "Refresh health data")],
        Tab::Profile => vec![
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
            ("Enter", "Toggle / open setting"),
        ],
    };

    keys.extend([
        ("1-4", "Switch tab"),
        ("Tab", "Next tab"),
        ("d", "Toggle dark mode"),
    ]);
    if tab != Tab::Health {
        keys.push(("r", "Refresh health data"));
    }
    keys.extend([
        ("Esc", "Dismiss notification"),
        ("?", "Show this help"),
        ("q", "Quit"),
    ]);

    let title = match tab {
        Tab::Workouts => "Help - Workouts",
        Tab::Schedule => "Help - Schedule",
        Tab::Health => "Help - Health",
        Tab::Profile => "Help - Profile",
    };
    (title, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::core::config::Config;
    use crate::core::models::{ScheduleInput, WorkoutInput};
    use crate::core::random::SeededRandom;
    use crate::tui::app::Modal;

    fn app() -> App {
        App::new(Config::default(), Box::new(SeededRandom::from_seed(1)))
    }

    fn screen_text(app: &App) -> String {
        screen_text_sized(app, 100, 40)
    }

    fn screen_text_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_workouts_tab_shows_totals() {
        let text = screen_text(&app());
        assert!(text.contains("Fitness Tracker"));
        assert!(text.contains("800"));
        assert!(text.contains("135"));
        assert!(text.contains("Morning Run"));
    }

    #[test]
    fn test_schedule_and_profile_tabs() {
        let mut app = app();
        app.select_tab(Tab::Schedule);
        assert!(screen_text(&app).contains("Wednesday"));

        app.select_tab(Tab::Profile);
        let text = screen_text(&app);
        assert!(text.contains("John Doe"));
        assert!(text.contains("Dark Mode"));
    }

    #[test]
    fn test_modal_and_toast_render() {
        let mut app = app();
        app.open_modal(Modal::AddWorkout);
        app.show_toast("Please fill all fields", crate::core::toast::ToastKind::Error);

        let text = screen_text(&app);
        assert!(text.contains("Add New Workout"));
        assert!(text.contains("Duration (minutes)"));
        assert!(text.contains("Please fill all fields"));
    }

    #[test]
    fn test_help_content_per_tab() {
        let (title, keys) = get_help_content(Tab::Health);
        assert_eq!(title, "Help - Health");
        assert_eq!(keys[0].0, "r");
        assert_eq!(keys.iter().filter(|(k, _)| *k == "r").count(), 1);
    }

    #[test]
    fn test_new_workout_scrolls_into_view() {
        let mut app = app();
        for i in 1..=12 {
            app.store
                .add_workout(&WorkoutInput::new(format!("Lap {i:02}"), "10", "90"))
                .unwrap();
        }
        app.workout_selection
            .select_last(app.store.workouts().len());

        let text = screen_text_sized(&app, 100, 30);
        assert!(text.contains("Lap 12"));
        assert!(!text.contains("Morning Run"));

        // Moving the selection back to the top scrolls up again
        app.workout_selection.next();
        assert_eq!(app.workout_selection.selected, 0);
        let text = screen_text_sized(&app, 100, 30);
        assert!(text.contains("Morning Run"));
        assert!(!text.contains("Lap 12"));
    }

    #[test]
    fn test_new_schedule_entry_scrolls_into_view() {
        let mut app = app();
        app.select_tab(Tab::Schedule);
        for i in 1..=10 {
            app.store
                .schedule_workout(&ScheduleInput::new(format!("Slot {i:02}"), "Friday", "05:00 PM"))
                .unwrap();
        }
        app.schedule_selection
            .select_last(app.store.schedule().len());

        let text = screen_text_sized(&app, 100, 30);
        assert!(text.contains("Slot 10"));
    }

    #[test]
    fn test_help_overlay_on_very_wide_terminal() {
        let mut app = app();
        app.show_help = true;
        let text = screen_text_sized(&app, 1200, 30);
        assert!(text.contains("Help - Workouts"));
    }
}
